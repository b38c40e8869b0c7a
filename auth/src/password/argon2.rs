use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Argon2id cost parameters.
///
/// `None` fields fall back to the `argon2` crate defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashingCost {
    pub memory_kib: Option<u32>,
    pub iterations: Option<u32>,
    pub parallelism: Option<u32>,
}

/// Salted password hashing.
///
/// Produces PHC strings (`$argon2id$v=19$...`) that embed the algorithm,
/// cost parameters and salt, so digests stay verifiable after the configured
/// cost changes.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a hasher with explicit cost parameters.
    ///
    /// # Errors
    /// * `InvalidParameters` - The combination is rejected by Argon2
    pub fn with_cost(cost: HashingCost) -> Result<Self, PasswordError> {
        let params = Params::new(
            cost.memory_kib.unwrap_or(Params::DEFAULT_M_COST),
            cost.iterations.unwrap_or(Params::DEFAULT_T_COST),
            cost.parallelism.unwrap_or(Params::DEFAULT_P_COST),
            None,
        )
        .map_err(|e| PasswordError::InvalidParameters(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Any string is accepted, including the empty string.
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored PHC digest.
    ///
    /// # Returns
    /// `true` when the password produced the digest
    ///
    /// # Errors
    /// * `VerificationFailed` - The stored digest is not a valid PHC string
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> PasswordHasher {
        PasswordHasher::with_cost(HashingCost {
            memory_kib: Some(1024),
            iterations: Some(1),
            parallelism: Some(1),
        })
        .expect("valid test parameters")
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = cheap_hasher();
        let digest = hasher.hash("securePassword").expect("Failed to hash");

        assert!(digest.starts_with("$argon2id$"));
        assert_ne!(digest, "securePassword");
        assert!(hasher.verify("securePassword", &digest).unwrap());
        assert!(!hasher.verify("notPassword", &digest).unwrap());
    }

    #[test]
    fn test_empty_password_is_hashable() {
        let hasher = cheap_hasher();
        let digest = hasher.hash("").expect("Failed to hash empty password");

        assert!(hasher.verify("", &digest).unwrap());
        assert!(!hasher.verify(" ", &digest).unwrap());
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = cheap_hasher();
        let first = hasher.hash("password123").unwrap();
        let second = hasher.hash("password123").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("password123", &first).unwrap());
        assert!(hasher.verify("password123", &second).unwrap());
    }

    #[test]
    fn test_digest_verifies_under_different_cost() {
        let digest = cheap_hasher().hash("admin").unwrap();

        assert!(PasswordHasher::new().verify("admin", &digest).unwrap());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let result = PasswordHasher::new().verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_rejects_invalid_cost() {
        let result = PasswordHasher::with_cost(HashingCost {
            memory_kib: Some(1),
            iterations: Some(0),
            parallelism: Some(1),
        });
        assert!(matches!(result, Err(PasswordError::InvalidParameters(_))));
    }
}
