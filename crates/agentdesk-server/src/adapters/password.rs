//! Argon2 implementation of PasswordHasher

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::Argon2;

use agentdesk::{DomainError, PasswordHasher};

/// Argon2id hasher producing PHC strings with a random salt
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::ExternalService(format!("Password hashing failed: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| DomainError::Validation(format!("Malformed password hash: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::ExternalService(format!(
                "Password verification failed: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted_phc_string() {
        let hasher = Argon2Hasher::new();
        let first = hasher.hash("admin").unwrap();
        let second = hasher.hash("admin").unwrap();

        assert!(first.starts_with("$argon2id$"));
        assert_ne!(first, second);
        assert_ne!(first, "admin");
    }

    #[test]
    fn test_verify() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("admin").unwrap();

        assert!(hasher.verify("admin", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
        assert!(hasher.verify("admin", "not-a-hash").is_err());
    }
}
