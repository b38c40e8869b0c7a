//! Credential and token primitives for the user accounts service.
//!
//! - Password hashing (Argon2id, salted PHC strings)
//! - Signed, expiring access tokens (HS256 JWT) carrying a subject and a role
//! - An `Authenticator` that owns the signing key and token lifetime
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap();
//! let token = auth.issue_token(1, "admin").unwrap();
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.role, "admin");
//! assert_eq!(claims.subject::<i64>(), Some(1));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashingCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
