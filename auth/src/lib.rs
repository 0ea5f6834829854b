//! Authentication infrastructure library
//!
//! Provides the building blocks the identity service composes into its
//! login and registration use cases:
//! - Password hashing and verification (Argon2id)
//! - Stateless access token issuance and validation (HS256 JWT)
//!
//! The service defines its own ports and adapts these implementations, so
//! this crate stays free of domain types: a token carries a subject string
//! and nothing else is assumed about the caller.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.matches("my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", 24);
//! let token = tokens.issue("alice").unwrap();
//! assert_eq!(tokens.validate(&token).unwrap(), "alice");
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
