use std::str::FromStr;

use anyhow::{Result, anyhow};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand_core::OsRng;
use sha2::{Digest, Sha256};

const PHC_ARGON2_PREFIX: &str = "$argon2";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    /// Unsalted SHA-256, hex encoded. Existing deployments store this format;
    /// identical passwords produce identical digests.
    #[default]
    Sha256,
    /// Argon2id with a random salt, stored as a PHC string.
    Argon2,
}

impl PasswordScheme {
    pub fn hash(self, password: &str) -> Result<String> {
        match self {
            Self::Sha256 => Ok(sha256_hex(password)),
            Self::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                let hash = Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map_err(|e| anyhow!("Argon2 hashing failed: {}", e))?;
                Ok(hash.to_string())
            }
        }
    }
}

impl FromStr for PasswordScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "argon2" | "argon2id" => Ok(Self::Argon2),
            other => Err(anyhow!("Unknown password scheme: {}", other)),
        }
    }
}

/// Check `password` against a stored digest of either scheme.
pub fn verify(password: &str, stored: &str) -> bool {
    if stored.starts_with(PHC_ARGON2_PREFIX) {
        return match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        };
    }
    sha256_hex(password) == stored
}

fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_matches_known_vector() {
        assert_eq!(
            PasswordScheme::Sha256.hash("abc").unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_is_deterministic() {
        let a = PasswordScheme::Sha256.hash("pw123").unwrap();
        let b = PasswordScheme::Sha256.hash("pw123").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(verify("pw123", &a));
        assert!(!verify("pw124", &a));
    }

    #[test]
    fn argon2_roundtrip() {
        let stored = PasswordScheme::Argon2.hash("pw123").unwrap();
        assert!(stored.starts_with(PHC_ARGON2_PREFIX));
        assert!(verify("pw123", &stored));
        assert!(!verify("wrong", &stored));

        // Salted: same input, different output
        let again = PasswordScheme::Argon2.hash("pw123").unwrap();
        assert_ne!(stored, again);
    }

    #[test]
    fn corrupt_phc_string_never_verifies() {
        assert!(!verify("pw123", "$argon2id$garbage"));
    }

    #[test]
    fn parse_scheme_names() {
        assert_eq!("sha256".parse::<PasswordScheme>().unwrap(), PasswordScheme::Sha256);
        assert_eq!(" Argon2 ".parse::<PasswordScheme>().unwrap(), PasswordScheme::Argon2);
        assert!("md5".parse::<PasswordScheme>().is_err());
    }
}
