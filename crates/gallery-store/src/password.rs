//! Salted password hashes
//!
//! Stored form is `sha256$<salt hex>$<digest hex>`. Unusable hashes start
//! with `!` and never verify.

use rand::Rng;
use sha2::{Digest, Sha256};

const ALGORITHM: &str = "sha256";
const UNUSABLE_PREFIX: char = '!';

/// Salted hash of a password; the plaintext is never kept
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash `raw` with a fresh random salt
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let salt: [u8; 16] = rand::thread_rng().gen();
        let salt = hex::encode(salt);
        let digest = digest(&salt, raw);
        Self(format!("{ALGORITHM}${salt}${digest}"))
    }

    /// Hash that matches no password
    #[must_use]
    pub fn unusable() -> Self {
        let marker: [u8; 20] = rand::thread_rng().gen();
        Self(format!("{UNUSABLE_PREFIX}{}", hex::encode(marker)))
    }

    /// Whether any password can verify against this hash
    #[inline]
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.0.starts_with(UNUSABLE_PREFIX)
    }

    /// Check `raw` against the stored hash
    #[must_use]
    pub fn verify(&self, raw: &str) -> bool {
        let mut parts = self.0.splitn(3, '$');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(ALGORITHM), Some(salt), Some(expected)) => digest(salt, raw) == expected,
            _ => false,
        }
    }

    /// Encoded hash
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PasswordHash").field(&"<redacted>").finish()
    }
}

fn digest(salt: &str, raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update([0]);
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_original_password_only() {
        let hash = PasswordHash::new("correct horse");
        assert!(hash.is_usable());
        assert!(hash.verify("correct horse"));
        assert!(!hash.verify("correct horse "));
        assert!(!hash.as_str().contains("correct horse"));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        assert_ne!(PasswordHash::new("pw"), PasswordHash::new("pw"));
    }

    #[test]
    fn unusable_never_verifies() {
        let hash = PasswordHash::unusable();
        assert!(!hash.is_usable());
        assert!(!hash.verify(""));
        assert!(!hash.verify(hash.as_str()));
    }

    #[test]
    fn debug_is_redacted() {
        let hash = PasswordHash::new("pw");
        assert!(!format!("{hash:?}").contains(hash.as_str()));
    }
}
