use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::errors::AuthError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AuthGrant;
use crate::domain::account::models::Login;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::RegisterCommand;

/// Port for authentication use cases.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access token.
    ///
    /// # Returns
    /// Grant with the token, login, and role for response shaping
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown login or wrong password, deliberately
    ///   indistinguishable
    /// * `Password` / `Token` / `Directory` - Collaborator failure
    async fn login(&self, command: LoginCommand) -> Result<AuthGrant, AuthError>;

    /// Register a new account and issue its first access token.
    ///
    /// # Errors
    /// * `DuplicateAccount` - Login is already taken
    /// * `Password` / `Token` / `Directory` - Collaborator failure
    async fn register(&self, command: RegisterCommand) -> Result<AuthGrant, AuthError>;

    /// Exact-match account lookup, used to resolve a validated token
    /// subject into a live account.
    ///
    /// # Returns
    /// The account, or `None` when the login is unknown
    async fn account_by_login(&self, login: &Login) -> Result<Option<Account>, AccountError>;
}

/// Directory of account records, keyed by unique login.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Retrieve an account by login (exact, case-sensitive match).
    ///
    /// # Returns
    /// Optional account entity (`None` if not found)
    ///
    /// # Errors
    /// * `Database` - Directory backend failed
    async fn find_by_login(&self, login: &Login) -> Result<Option<Account>, AccountError>;

    /// Persist a new account, assigning its identifier.
    ///
    /// # Errors
    /// * `DuplicateLogin` - Storage-level uniqueness violation
    /// * `Database` - Directory backend failed
    async fn save(&self, account: NewAccount) -> Result<Account, AccountError>;
}
