use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;
use axum::body::to_bytes;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::Response;
use axum::Router;
use identity_service::domain::account::errors::AccountError;
use identity_service::domain::account::models::Account;
use identity_service::domain::account::models::AccountId;
use identity_service::domain::account::models::Login;
use identity_service::domain::account::models::NewAccount;
use identity_service::domain::account::models::Role;
use identity_service::domain::account::ports::AccountRepository;
use identity_service::domain::account::service::AuthService;
use identity_service::inbound::http::router::create_router;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory account directory backing router tests.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.accounts.read().unwrap().len()
    }

    /// Drop an account, simulating deletion behind a still-live token.
    pub fn remove(&self, login: &str) {
        self.accounts.write().unwrap().remove(login);
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_login(&self, login: &Login) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.read().unwrap().get(login.as_str()).cloned())
    }

    async fn save(&self, account: NewAccount) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.write().unwrap();
        if accounts.contains_key(account.login.as_str()) {
            return Err(AccountError::DuplicateLogin(account.login.to_string()));
        }

        let account = Account {
            id: AccountId::new(),
            login: account.login,
            password_hash: account.password_hash,
            role: Some(account.role),
        };
        accounts.insert(account.login.to_string(), account.clone());
        Ok(account)
    }
}

/// Router under test plus handles for seeding and inspecting state.
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryAccountRepository>,
    pub token_service: Arc<TokenService>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_validity_hours(24)
    }

    pub fn with_validity_hours(hours: i64) -> Self {
        let repository = Arc::new(InMemoryAccountRepository::new());
        let token_service = Arc::new(TokenService::new(TEST_SECRET, hours));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&repository),
            Arc::clone(&token_service),
        ));
        let router = create_router(auth_service, Arc::clone(&token_service));

        Self {
            router,
            repository,
            token_service,
        }
    }

    /// Seed an account directly in the directory.
    pub async fn seed_account(&self, login: &str, password: &str) -> Account {
        let password_hash = PasswordHasher::new().hash(password).unwrap();
        self.repository
            .save(NewAccount {
                login: Login::new(login).unwrap(),
                password_hash,
                role: Role::User,
            })
            .await
            .unwrap()
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: &serde_json::Value,
        authorization: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, authorization: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = builder.body(Body::empty()).unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
