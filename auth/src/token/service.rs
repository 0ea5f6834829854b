use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and validates stateless access tokens.
///
/// Tokens are HS256 JWTs signed with a process-wide secret held for the
/// process lifetime; rotating the secret invalidates everything issued
/// before the rotation. Validation is a pure function of the token, the
/// secret, and the clock, so a single instance is safely shared across
/// concurrent requests without locking.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - Signing key; at least 256 bits for HS256, loaded from
    ///   configuration, never hard-coded
    /// * `validity_hours` - Fixed validity window applied at issuance
    pub fn new(secret: &[u8], validity_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity: Duration::hours(validity_hours),
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// Expiry is issuance time plus the configured validity window.
    ///
    /// # Errors
    /// * `SigningFailed` - Signing with the configured key failed; this is a
    ///   configuration-class failure, not a per-request condition
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::for_subject(subject, self.validity);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Validate a token and return its subject.
    ///
    /// The signature and expiry are verified before any claim is read; the
    /// subject never leaves this function unless both checks pass. Any
    /// malformed input degrades to an error value.
    ///
    /// # Errors
    /// * `Expired` - Expiry is at or before the current instant
    /// * `Invalid` - Empty, structurally malformed, missing a required
    ///   claim, or signed with a different key
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        self.decode(token).map(|claims| claims.sub)
    }

    fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_required_spec_claims(&["sub", "exp"]);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        // The library keeps a token alive while exp == now; here expiry at
        // the current instant already invalidates it.
        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
