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
use crate::domain::account::models::LoginCommand;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    // A structurally invalid credential pair gets the same unauthorized
    // answer as a wrong one; this endpoint confirms nothing about accounts.
    let command = body
        .try_into_command()
        .map_err(|_| ApiError::Unauthorized("Invalid login or password".to_string()))?;

    state
        .auth_service
        .login(command)
        .await
        .map_err(ApiError::from)
        .map(|ref grant| ApiSuccess::new(StatusCode::OK, grant.into()))
}

/// HTTP request body for login (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    login: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseLoginRequestError {
    #[error("Invalid login: {0}")]
    Login(#[from] LoginError),

    #[error("Password must not be blank")]
    BlankPassword,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, ParseLoginRequestError> {
        let login = Login::new(self.login)?;
        if self.password.trim().is_empty() {
            return Err(ParseLoginRequestError::BlankPassword);
        }
        Ok(LoginCommand::new(login, self.password))
    }
}
