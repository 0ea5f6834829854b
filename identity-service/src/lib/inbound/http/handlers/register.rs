use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::AuthResponseData;
use crate::domain::account::errors::LoginError;
use crate::domain::account::models::Login;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::Role;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref grant| ApiSuccess::new(StatusCode::CREATED, grant.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    login: String,
    password: String,
    #[serde(default)]
    role: Option<Role>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid login: {0}")]
    Login(#[from] LoginError),

    #[error("Password must not be blank")]
    BlankPassword,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        let login = Login::new(self.login)?;
        if self.password.trim().is_empty() {
            return Err(ParseRegisterRequestError::BlankPassword);
        }
        Ok(RegisterCommand::new(login, self.password, self.role))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
