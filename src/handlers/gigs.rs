use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::db::gigs as gig_db;
use crate::db::profiles as profile_db;
use crate::error::{ApiError, ok, ok_message};
use crate::models::gigs::{CreateGig, GigListQuery, UpdateGig};

/// GET /api/gigs — public paginated listing.
pub async fn list_gigs(
    db: web::Data<DatabaseConnection>,
    query: web::Query<GigListQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = query.page();
    let limit = query.limit();

    let (gigs, total) =
        gig_db::list_gigs(db.get_ref(), page, limit, query.status(), query.search.as_deref())
            .await?;

    Ok(ok(serde_json::json!({
        "gigs": gigs,
        "pagination": {
            "page": page,
            "limit": limit,
            "total": total,
            "total_pages": total.div_ceil(limit),
        },
    })))
}

/// GET /api/gigs/{id} — public detail view with child rows and the
/// application count, never applicant identities.
pub async fn get_gig(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let gig = gig_db::get_gig_with_details(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Gig not found".to_string()))?;
    Ok(ok(gig))
}

/// POST /api/gigs — create a gig. Requires a complete profile.
pub async fn create_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateGig>,
) -> Result<HttpResponse, ApiError> {
    let (complete, _) = profile_db::check_profile_complete(db.get_ref(), user.id).await?;
    if !complete {
        return Err(ApiError::Forbidden(
            "Complete your profile before creating a gig".to_string(),
        ));
    }

    let input = body.into_inner();
    if input.title.trim().is_empty() || input.description.trim().is_empty() {
        return Err(ApiError::Validation(
            "Title and description are required".to_string(),
        ));
    }

    tracing::info!("creating gig for user {}", user.id);
    let gig = gig_db::create_gig(db.get_ref(), input, user.id).await?;

    Ok(ok_message(gig, "Gig created successfully"))
}

/// PATCH /api/gigs/{id} — owner only.
pub async fn update_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateGig>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    verify_ownership(db.get_ref(), id, user.id, "You can only update your own gigs").await?;

    let gig = gig_db::update_gig(db.get_ref(), id, body.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Gig not found".to_string()))?;

    Ok(ok_message(gig, "Gig updated successfully"))
}

/// DELETE /api/gigs/{id} — owner only, hard delete.
pub async fn delete_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    verify_ownership(db.get_ref(), id, user.id, "You can only delete your own gigs").await?;

    gig_db::delete_gig(db.get_ref(), id).await?;

    Ok(ok_message(serde_json::Value::Null, "Gig deleted successfully"))
}

/// Re-fetch `created_by` and compare against the caller — never trusts a
/// previously-read row.
pub async fn verify_ownership(
    db: &DatabaseConnection,
    gig_id: Uuid,
    user_id: Uuid,
    forbidden_message: &str,
) -> Result<crate::models::gigs::Model, ApiError> {
    let gig = gig_db::get_gig_by_id(db, gig_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Gig not found".to_string()))?;

    if gig.created_by != user_id {
        return Err(ApiError::Forbidden(forbidden_message.to_string()));
    }

    Ok(gig)
}
