use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::AuthenticatedUser;
use crate::db::profiles as profile_db;
use crate::error::{ApiError, ok, ok_message};
use crate::models::profiles::{ProfileResponse, UpdateProfile};

/// GET /api/profile — caller's own profile; `data` is null when no row
/// exists yet.
pub async fn get_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let profile = profile_db::get_profile(db.get_ref(), user.id).await?;
    Ok(ok(profile.map(ProfileResponse::from)))
}

/// PATCH /api/profile — partial update, creating the caller's row on first
/// write; completeness is recomputed in the same write. Explicit `null`
/// clears a column, an absent field leaves it alone.
pub async fn update_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpdateProfile>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    if input.is_empty() {
        return Err(ApiError::Validation(
            "No valid fields to update".to_string(),
        ));
    }

    let profile = profile_db::update_profile(db.get_ref(), user.id, input).await?;

    Ok(ok_message(
        ProfileResponse::from(profile),
        "Profile updated successfully",
    ))
}

/// GET /api/profile/check-complete — the same gate gig creation and
/// applications use, exposed for clients.
pub async fn check_complete(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let (is_complete, profile) = profile_db::check_profile_complete(db.get_ref(), user.id).await?;
    Ok(ok(serde_json::json!({
        "is_complete": is_complete,
        "profile": profile.map(ProfileResponse::from),
    })))
}
