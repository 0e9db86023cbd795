use async_graphql::*;
use periodize::errors::{CoreError, CoreErrorKind};

/// Structured error builder for consistent error handling
pub struct StructuredError;

impl StructuredError {
    /// Create a "not found" error
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Error {
        Error::new(format!("{} with id '{}' not found", resource, id)).extend_with(|_, e| {
            e.set("code", "NOT_FOUND");
            e.set("resource", resource);
        })
    }

    pub fn from_core_error(error: CoreError) -> Error {
        core_error_to_graphql_error(error)
    }
}

pub fn error_code(kind: CoreErrorKind) -> &'static str {
    match kind {
        CoreErrorKind::Unauthenticated => "UNAUTHENTICATED",
        CoreErrorKind::NotFound => "NOT_FOUND",
        CoreErrorKind::InvalidCredential => "INVALID_CREDENTIAL",
        CoreErrorKind::OwnershipOrExistence => "OWNERSHIP_OR_EXISTENCE",
        CoreErrorKind::Validation => "VALIDATION_FAILED",
        CoreErrorKind::Conflict => "CONFLICT",
        CoreErrorKind::Internal => "INTERNAL_ERROR",
    }
}

/// Map a core error onto a GraphQL error carrying `code` and any error fields as extensions
pub fn core_error_to_graphql_error(error: CoreError) -> Error {
    if error.kind() == CoreErrorKind::Internal {
        tracing::error!("Internal error: {}", error);
    }

    let code = error_code(error.kind());
    let fields = error.fields().cloned();
    Error::new(error.message()).extend_with(move |_, e| {
        e.set("code", code);
        if let Some(fields) = &fields {
            for (key, value) in fields {
                e.set(key.as_str(), value.as_str());
            }
        }
    })
}
