use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::account::errors::LoginError;
use crate::domain::account::errors::RoleParseError;

/// Account aggregate entity.
///
/// Created by registration and never mutated by this service afterwards.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub login: Login,
    pub password_hash: String,
    pub role: Option<Role>,
}

impl Account {
    /// Capability tags granted by the account's role.
    ///
    /// An account without a role grants nothing.
    pub fn capabilities(&self) -> &'static [&'static str] {
        self.role.map(Role::capabilities).unwrap_or(&[])
    }
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login value type
///
/// Any non-blank string; lookups elsewhere match it exactly and
/// case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    /// Create a validated login.
    ///
    /// # Errors
    /// * `Blank` - Login is empty or whitespace only
    pub fn new(login: impl Into<String>) -> Result<Self, LoginError> {
        let login = login.into();
        if login.trim().is_empty() {
            return Err(LoginError::Blank);
        }
        Ok(Self(login))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed role enumeration; wire form is `"USER"` / `"ADMIN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Capability tags granted by this role.
    ///
    /// A pure, total mapping over the closed variant set.
    pub fn capabilities(self) -> &'static [&'static str] {
        match self {
            Role::User => &["ROLE_USER"],
            Role::Admin => &["ROLE_ADMIN"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            other => Err(RoleParseError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account data handed to the directory for persistence.
///
/// Carries no identifier; the directory assigns one when it saves.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub login: Login,
    pub password_hash: String,
    pub role: Role,
}

/// Command to authenticate an existing account.
#[derive(Debug)]
pub struct LoginCommand {
    pub login: Login,
    pub password: String,
}

impl LoginCommand {
    pub fn new(login: Login, password: String) -> Self {
        Self { login, password }
    }
}

/// Command to register a new account.
///
/// An unspecified role defaults to [`Role::User`] at registration time.
#[derive(Debug)]
pub struct RegisterCommand {
    pub login: Login,
    pub password: String,
    pub role: Option<Role>,
}

impl RegisterCommand {
    pub fn new(login: Login, password: String, role: Option<Role>) -> Self {
        Self {
            login,
            password,
            role,
        }
    }
}

/// Result of a successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthGrant {
    pub token: String,
    pub login: Login,
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rejects_blank() {
        assert!(Login::new("alice").is_ok());
        assert_eq!(Login::new(""), Err(LoginError::Blank));
        assert_eq!(Login::new("   "), Err(LoginError::Blank));
    }

    #[test]
    fn test_role_capabilities() {
        assert_eq!(Role::User.capabilities(), &["ROLE_USER"]);
        assert_eq!(Role::Admin.capabilities(), &["ROLE_ADMIN"]);
    }

    #[test]
    fn test_account_without_role_has_no_capabilities() {
        let account = Account {
            id: AccountId::new(),
            login: Login::new("legacy").unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            role: None,
        };

        assert!(account.capabilities().is_empty());
    }

    #[test]
    fn test_role_wire_round_trip() {
        assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::Admin.as_str(), "ADMIN");
        assert!(matches!(
            "user".parse::<Role>(),
            Err(RoleParseError::Unknown(_))
        ));
    }
}
