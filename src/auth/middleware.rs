use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::jwks::JwksCache;
use crate::auth::jwt;
use crate::error::ApiError;

/// The caller's identity, resolved from the bearer token on every request.
///
/// Identity is never cached between requests and no database row is touched
/// here — a user can authenticate before their profile row exists.
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: Option<String>,
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(ApiError::unauthorized)?;

            let token = auth_header
                .strip_prefix("Bearer ")
                .ok_or_else(ApiError::unauthorized)?;

            let jwks = req
                .app_data::<web::Data<Arc<JwksCache>>>()
                .ok_or_else(|| ApiError::Unauthorized("JWKS cache not configured".to_string()))?;

            let claims = jwt::validate_token(token, jwks.get_ref())
                .await
                .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {e}")))?;

            let id = claims
                .user_id()
                .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

            Ok(AuthenticatedUser {
                id,
                email: claims.user_email(),
            })
        })
    }
}
