use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;

use crate::domain::account::errors::AccountError;
use crate::domain::account::errors::AuthError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AuthGrant;
use crate::domain::account::models::Login;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::Role;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AuthServicePort;

/// Authentication orchestrator.
///
/// Composes the account directory, password hashing, and token issuance
/// into the login and registration use cases. Holds only shared read-only
/// collaborators, so one instance serves all in-flight requests.
pub struct AuthService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_service: Arc<TokenService>,
}

impl<R> AuthService<R>
where
    R: AccountRepository,
{
    /// Create a new authentication service with injected collaborators.
    pub fn new(repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_service,
        }
    }

    fn grant_for(&self, account: &Account) -> Result<AuthGrant, AuthError> {
        let token = self.token_service.issue(account.login.as_str())?;

        Ok(AuthGrant {
            token,
            login: account.login.clone(),
            role: account.role,
        })
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: AccountRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<AuthGrant, AuthError> {
        // Absent account and wrong password take the same exit.
        let account = self
            .repository
            .find_by_login(&command.login)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .matches(&command.password, &account.password_hash)?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        self.grant_for(&account)
    }

    async fn register(&self, command: RegisterCommand) -> Result<AuthGrant, AuthError> {
        // Existence check happens before any hashing or persistence; a
        // duplicate registration must do no further work.
        if self
            .repository
            .find_by_login(&command.login)
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateAccount(command.login.to_string()));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;
        let role = command.role.unwrap_or(Role::User);

        let account = self
            .repository
            .save(NewAccount {
                login: command.login,
                password_hash,
                role,
            })
            .await
            .map_err(|e| match e {
                // The directory's uniqueness backstop surfaces as the same
                // conflict as the pre-check.
                AccountError::DuplicateLogin(login) => AuthError::DuplicateAccount(login),
                other => AuthError::Directory(other),
            })?;

        tracing::info!(login = %account.login, role = ?account.role, "Account registered");

        self.grant_for(&account)
    }

    async fn account_by_login(&self, login: &Login) -> Result<Option<Account>, AccountError> {
        self.repository.find_by_login(login).await
    }
}
