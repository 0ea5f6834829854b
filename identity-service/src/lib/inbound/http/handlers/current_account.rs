use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::Role;
use crate::inbound::http::middleware::AuthenticatedAccount;

/// Return the identity the authentication middleware established.
///
/// The middleware never rejects on its own; demanding an identity here is
/// this handler's authorization decision.
pub async fn current_account(
    identity: Option<Extension<AuthenticatedAccount>>,
) -> Result<ApiSuccess<CurrentAccountData>, ApiError> {
    let Extension(identity) =
        identity.ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        CurrentAccountData::from(&identity),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentAccountData {
    pub login: String,
    pub role: Option<Role>,
    pub capabilities: Vec<String>,
}

impl From<&AuthenticatedAccount> for CurrentAccountData {
    fn from(identity: &AuthenticatedAccount) -> Self {
        Self {
            login: identity.login.to_string(),
            role: identity.role,
            capabilities: identity
                .capabilities()
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}
