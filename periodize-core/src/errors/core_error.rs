use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

use sea_orm::{DbErr, SqlErr};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoreErrorKind {
    Unauthenticated,
    NotFound,
    InvalidCredential,
    OwnershipOrExistence,
    Validation,
    Conflict,
    Internal,
}

#[derive(Debug)]
pub struct CoreError {
    kind: CoreErrorKind,
    message: String,
    fields: Option<BTreeMap<String, String>>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl CoreError {
    pub fn new(kind: CoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: None,
            source: None,
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Unauthenticated, message)
    }

    pub fn not_found(entity: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("entity".to_string(), entity.into());

        Self::new(CoreErrorKind::NotFound, message).with_fields(fields)
    }

    pub fn invalid_credential(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::InvalidCredential, message)
    }

    /// Rejection of a nested create whose parent is missing or owned by someone else.
    /// Both cases produce the same message.
    pub fn ownership_or_existence(entity: &str, field: &str, id: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("entity".to_string(), entity.to_string());
        fields.insert("field".to_string(), field.to_string());
        fields.insert("id".to_string(), id.to_string());

        Self::new(
            CoreErrorKind::OwnershipOrExistence,
            format!(
                "The {} does not exist, or the logged in user does not own it ({}: {})",
                entity, field, id
            ),
        )
        .with_fields(fields)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Validation, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Internal, message)
    }

    pub fn with_fields(mut self, fields: BTreeMap<String, String>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> CoreErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> Option<&BTreeMap<String, String>> {
        self.fields.as_ref()
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl StdError for CoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<DbErr> for CoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                CoreError::conflict(format!("Record already exists: {}", detail)).with_source(err)
            }
            _ => CoreError::internal(format!("Database error: {}", err)).with_source(err),
        }
    }
}

impl From<anyhow::Error> for CoreError {
    fn from(err: anyhow::Error) -> Self {
        CoreError::internal(err.to_string())
    }
}
