use std::str::FromStr;

use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::Login;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::Role;
use crate::domain::account::ports::AccountRepository;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    login: String,
    password_hash: String,
    role: Option<String>,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, AccountError> {
        let login = Login::new(self.login)
            .map_err(|e| AccountError::Database(format!("Corrupt account row: {}", e)))?;
        let role = self
            .role
            .as_deref()
            .map(Role::from_str)
            .transpose()
            .map_err(|e| AccountError::Database(format!("Corrupt account row: {}", e)))?;

        Ok(Account {
            id: AccountId(self.id),
            login,
            password_hash: self.password_hash,
            role,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_login(&self, login: &Login) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, login, password_hash, role
            FROM accounts
            WHERE login = $1
            "#,
        )
        .bind(login.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::Database(e.to_string()))?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn save(&self, account: NewAccount) -> Result<Account, AccountError> {
        let id = AccountId::new();

        sqlx::query(
            r#"
            INSERT INTO accounts (id, login, password_hash, role)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id.0)
        .bind(account.login.as_str())
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("accounts_login_key")
                {
                    return AccountError::DuplicateLogin(account.login.to_string());
                }
            }
            AccountError::Database(e.to_string())
        })?;

        Ok(Account {
            id,
            login: account.login,
            password_hash: account.password_hash,
            role: Some(account.role),
        })
    }
}
