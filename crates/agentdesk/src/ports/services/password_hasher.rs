//! Password Hasher Port
//!
//! Abstract interface for one-way password hashing.

use crate::domain::errors::DomainError;

/// Service interface for hashing and verifying passwords
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password into a self-describing hash string
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plain-text password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
