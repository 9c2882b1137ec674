use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::jwks::{AuthError, JwksCache};

/// Claims carried by a Supabase access token.
///
/// `sub` is the user's UUID in `auth.users` and is the identity every owned
/// record is keyed on. Email may live at the top level or inside the
/// provider metadata depending on how the account was created.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    pub iat: Option<usize>,
    /// Issuer, normally the Supabase URL + `/auth/v1`.
    pub iss: Option<String>,
    pub email: Option<String>,
    /// Supabase role (e.g. "authenticated").
    pub role: Option<String>,
    pub user_metadata: Option<UserMetadata>,
}

/// Subset of the OAuth-provider metadata we care about.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserMetadata {
    pub email: Option<String>,
    pub email_verified: Option<bool>,
}

impl Claims {
    /// The user UUID from the `sub` claim.
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::BadClaims(format!("invalid sub: {e}")))
    }

    /// Best-effort email: prefer the top-level claim, fall back to metadata.
    pub fn user_email(&self) -> Option<String> {
        self.email
            .clone()
            .or_else(|| self.user_metadata.as_ref().and_then(|m| m.email.clone()))
    }
}

/// Validate a Supabase JWT against the cached JWKS and return its claims.
pub async fn validate_token(token: &str, jwks: &JwksCache) -> Result<Claims, AuthError> {
    jwks.validate_token(token).await.map(|td| td.claims)
}
