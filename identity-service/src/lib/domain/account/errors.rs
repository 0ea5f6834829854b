use thiserror::Error;

/// Error for Login validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Login must not be blank")]
    Blank,
}

/// Error for role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleParseError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Error for account directory operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    /// Storage-level uniqueness backstop; the service's existence check
    /// normally fires first.
    #[error("Account with login {0} already exists")]
    DuplicateLogin(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for authentication use cases
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown login and wrong password collapse into this variant so a
    /// caller cannot probe which accounts exist.
    #[error("Invalid login or password")]
    InvalidCredentials,

    #[error("Account with login {0} already exists")]
    DuplicateAccount(String),

    // Collaborator failures; surfaced as internal errors, never retried.
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::TokenError),

    #[error("Directory error: {0}")]
    Directory(#[from] AccountError),
}
