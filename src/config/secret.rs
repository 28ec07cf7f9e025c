//! Secure credential handling using the secrecy crate
//!
//! Wraps the database password so it is zeroed on drop and redacted in any
//! Debug output. Access requires an explicit `expose_secret()` call at the
//! single point where the connection is configured.

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Type alias for a secret string
///
/// Zeros the memory when dropped, prevents accidental logging via Debug, and
/// requires explicit `expose_secret()` to access.
pub type SecretString = Secret<SecretValue>;

/// Helper function to create a SecretString from a String
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
