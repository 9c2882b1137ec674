use sea_orm::*;
use uuid::Uuid;

use crate::models::applications::{self, ApplyRequest, Status};
use crate::models::gigs;
use crate::models::profiles;

/// The caller's existing application for a gig, if any.
pub async fn find_by_gig_and_applicant(
    db: &DatabaseConnection,
    gig_id: Uuid,
    applicant_user_id: Uuid,
) -> Result<Option<applications::Model>, DbErr> {
    applications::Entity::find()
        .filter(applications::Column::GigId.eq(gig_id))
        .filter(applications::Column::ApplicantUserId.eq(applicant_user_id))
        .one(db)
        .await
}

/// Insert a new application in `pending` state.
pub async fn insert_application(
    db: &DatabaseConnection,
    gig_id: Uuid,
    applicant_user_id: Uuid,
    input: ApplyRequest,
) -> Result<applications::Model, DbErr> {
    applications::ActiveModel {
        id: Set(Uuid::new_v4()),
        gig_id: Set(gig_id),
        applicant_user_id: Set(applicant_user_id),
        status: Set(Status::Pending),
        cover_letter: Set(input.cover_letter),
        portfolio_links: Set(input.portfolio_links),
        resume_url: Set(input.resume_url),
        portfolio_files: Set(input.portfolio_files),
        notes: Set(input.notes),
        applied_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await
}

/// Applications for a gig joined with the applicant's profile row, newest
/// first, optionally filtered by status.
pub async fn list_for_gig(
    db: &DatabaseConnection,
    gig_id: Uuid,
    status: Option<Status>,
) -> Result<Vec<(applications::Model, Option<profiles::Model>)>, DbErr> {
    let mut query = applications::Entity::find().filter(applications::Column::GigId.eq(gig_id));
    if let Some(status) = status {
        query = query.filter(applications::Column::Status.eq(status));
    }
    query
        .find_also_related(profiles::Entity)
        .order_by_desc(applications::Column::AppliedAt)
        .all(db)
        .await
}

/// The caller's applications joined with the gig row, newest first.
pub async fn list_for_applicant(
    db: &DatabaseConnection,
    applicant_user_id: Uuid,
) -> Result<Vec<(applications::Model, Option<gigs::Model>)>, DbErr> {
    applications::Entity::find()
        .filter(applications::Column::ApplicantUserId.eq(applicant_user_id))
        .find_also_related(gigs::Entity)
        .order_by_desc(applications::Column::AppliedAt)
        .all(db)
        .await
}

/// A single application with its gig, for access-checked detail views.
pub async fn get_with_gig(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<(applications::Model, Option<gigs::Model>)>, DbErr> {
    applications::Entity::find_by_id(id)
        .find_also_related(gigs::Entity)
        .one(db)
        .await
}

/// An application by ID, scoped to its gig.
pub async fn find_for_gig(
    db: &DatabaseConnection,
    gig_id: Uuid,
    application_id: Uuid,
) -> Result<Option<applications::Model>, DbErr> {
    applications::Entity::find_by_id(application_id)
        .filter(applications::Column::GigId.eq(gig_id))
        .one(db)
        .await
}

/// Update the status of an application scoped to its gig. Returns `None`
/// when no such (application, gig) pair exists.
pub async fn update_status(
    db: &DatabaseConnection,
    gig_id: Uuid,
    application_id: Uuid,
    status: Status,
) -> Result<Option<applications::Model>, DbErr> {
    let Some(application) = applications::Entity::find_by_id(application_id)
        .filter(applications::Column::GigId.eq(gig_id))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    let mut active: applications::ActiveModel = application.into();
    active.status = Set(status);
    active.update(db).await.map(Some)
}

/// Engagements that block a calendar date: confirmed or shortlisted
/// applications with their gigs.
pub async fn confirmed_or_shortlisted(
    db: &DatabaseConnection,
    applicant_user_id: Uuid,
) -> Result<Vec<(applications::Model, Option<gigs::Model>)>, DbErr> {
    applications::Entity::find()
        .filter(applications::Column::ApplicantUserId.eq(applicant_user_id))
        .filter(
            applications::Column::Status.is_in([Status::Confirmed, Status::Shortlisted]),
        )
        .find_also_related(gigs::Entity)
        .all(db)
        .await
}
