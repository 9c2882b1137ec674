use actix_web::{HttpResponse, web};
use sea_orm::{DatabaseConnection, ModelTrait};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::db::applications as application_db;
use crate::db::availability as availability_db;
use crate::error::{ApiError, ok, ok_message};
use crate::models::availability::{
    AvailabilityCheckQuery, AvailabilityListQuery, Conflict, ConflictGig, SetAvailability,
    UpdateAvailability, matching_date_rows,
};
use crate::models::gig_dates;

/// GET /api/availability — caller's calendar, optionally scoped to a gig.
pub async fn list_availability(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<AvailabilityListQuery>,
) -> Result<HttpResponse, ApiError> {
    let entries = availability_db::list_availability(db.get_ref(), user.id, query.gig_id).await?;
    Ok(ok(entries))
}

/// POST /api/availability — upsert one (user, date) entry.
pub async fn set_availability(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<SetAvailability>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    let date = input
        .availability_date
        .ok_or_else(|| ApiError::Validation("Availability date is required".to_string()))?;

    let entry = availability_db::set_availability(db.get_ref(), user.id, date, input).await?;
    Ok(ok_message(entry, "Availability set successfully"))
}

/// PATCH /api/availability/{id} — owner-scoped partial update.
pub async fn update_availability(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateAvailability>,
) -> Result<HttpResponse, ApiError> {
    let entry = availability_db::update_availability(
        db.get_ref(),
        path.into_inner(),
        user.id,
        body.into_inner(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Availability entry not found".to_string()))?;

    Ok(ok_message(entry, "Availability updated successfully"))
}

/// GET /api/availability/check?date=YYYY-MM-DD — report confirmed or
/// shortlisted engagements whose gig dates cover the given day, one
/// conflict per matching date row.
pub async fn check_conflicts(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<AvailabilityCheckQuery>,
) -> Result<HttpResponse, ApiError> {
    let date = query
        .date
        .as_deref()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::Validation("Date parameter is required".to_string()))?;

    let engagements = application_db::confirmed_or_shortlisted(db.get_ref(), user.id).await?;

    let mut conflicts = Vec::new();
    for (application, gig) in engagements {
        let Some(gig) = gig else { continue };
        let dates = gig.find_related(gig_dates::Entity).all(db.get_ref()).await?;
        for _ in matching_date_rows(&dates, date) {
            conflicts.push(Conflict {
                gig: ConflictGig {
                    id: gig.id,
                    title: gig.title.clone(),
                },
                status: application.status.clone(),
            });
        }
    }

    Ok(ok(serde_json::json!({
        "date": date,
        "hasConflicts": !conflicts.is_empty(),
        "conflicts": conflicts,
    })))
}
