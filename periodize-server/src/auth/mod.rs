use axum::http::{header::AUTHORIZATION, HeaderMap};
use periodize::auth::Actor;
use periodize::AppContext;

/// Extract the token from an `Authorization` header.
///
/// Accepts both `Bearer <token>` and a bare token. Blank values count as absent.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim_start();
    let token = match value.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
        _ => value,
    }
    .trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Resolve the actor for an incoming request from its headers
pub fn request_actor(app: &AppContext, headers: &HeaderMap) -> Actor {
    app.actor_for_token(bearer_token(headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn strips_bearer_prefix() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn accepts_bare_token() {
        let headers = headers_with("abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers_with("Bearerish")), Some("Bearerish"));
    }

    #[test]
    fn missing_or_blank_header_is_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with("Bearer")), None);
        assert_eq!(bearer_token(&headers_with("   ")), None);
    }
}
