use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::account::models::Login;
use crate::domain::account::models::Role;
use crate::inbound::http::router::AppState;

/// Request-scoped identity established by the authentication middleware.
///
/// Lives in the request extensions and is dropped with the request; the
/// role is read from the directory at validation time, not from the token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub login: Login,
    pub role: Option<Role>,
}

impl AuthenticatedAccount {
    /// Capability tags derived from the role; no role grants nothing.
    pub fn capabilities(&self) -> &'static [&'static str] {
        self.role.map(Role::capabilities).unwrap_or(&[])
    }
}

/// Middleware that resolves a bearer token into an authenticated account.
///
/// Runs on every request ahead of the handlers. A missing, malformed,
/// expired, or forged credential leaves the request anonymous; rejecting
/// such a request is a downstream authorization decision, so the request
/// is always forwarded exactly once.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    // Never trust an identity planted by an earlier layer; every request
    // starts anonymous.
    req.extensions_mut().remove::<AuthenticatedAccount>();

    if let Some(identity) = resolve_identity(&state, req.headers()).await {
        req.extensions_mut().insert(identity);
    }

    next.run(req).await
}

async fn resolve_identity(state: &AppState, headers: &HeaderMap) -> Option<AuthenticatedAccount> {
    let token = bearer_token(headers)?;

    let subject = match state.token_service.validate(token) {
        Ok(subject) => subject,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            return None;
        }
    };

    // A subject whose account has since disappeared stays anonymous.
    let login = Login::new(subject).ok()?;
    match state.auth_service.account_by_login(&login).await {
        Ok(Some(account)) => Some(AuthenticatedAccount {
            login: account.login,
            role: account.role,
        }),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Account lookup failed while authenticating");
            None
        }
    }
}

/// Extract the token portion of a `Bearer <token>` authorization header.
///
/// Anything else (missing header, other scheme, blank token) is `None`,
/// in which case the token service is never consulted.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with_authorization("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_other_scheme() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_missing_prefix() {
        let headers = headers_with_authorization("abc.def.ghi");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_blank_token() {
        for value in ["Bearer ", "Bearer    "] {
            let headers = headers_with_authorization(value);
            assert_eq!(bearer_token(&headers), None, "for {value:?}");
        }
    }
}
