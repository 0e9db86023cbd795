use bcrypt::{hash, verify};

use crate::errors::AuthResult;

/// bcrypt work factor for stored credentials
pub const PASSWORD_HASH_COST: u32 = 10;

/// Hash a password using bcrypt. Each call draws a fresh salt.
pub fn hash_password(password: &str) -> AuthResult<String> {
    Ok(hash(password, PASSWORD_HASH_COST)?)
}

/// Verify a password against a stored bcrypt hash
pub fn verify_password(password: &str, password_hash: &str) -> AuthResult<bool> {
    Ok(verify(password, password_hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_never_equals_plaintext_and_verifies() {
        let hashed = hash_password("pw").unwrap();
        assert_ne!(hashed, "pw");
        assert!(hashed.starts_with("$2"));
        assert!(verify_password("pw", &hashed).unwrap());
        assert!(!verify_password("not-pw", &hashed).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("pw", "not-a-bcrypt-hash").is_err());
    }
}
