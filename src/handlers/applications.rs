use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::db::applications as application_db;
use crate::db::gigs as gig_db;
use crate::db::notifications as notification_db;
use crate::db::profiles as profile_db;
use crate::db::skills as skill_db;
use crate::error::{ApiError, map_unique, ok, ok_message};
use crate::models::applications::{
    ApplicantProfile, ApplicationListQuery, ApplicationWithApplicant, ApplicationWithGig,
    ApplyRequest, Status, TransitionPolicy, UpdateStatusRequest,
};
use crate::models::notifications::NewNotification;

/// POST /api/gigs/{id}/apply — submit an application. Requires a complete
/// profile and rejects the gig's own creator.
pub async fn apply_to_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<ApplyRequest>,
) -> Result<HttpResponse, ApiError> {
    let gig_id = path.into_inner();

    let (complete, _) = profile_db::check_profile_complete(db.get_ref(), user.id).await?;
    if !complete {
        return Err(ApiError::Forbidden(
            "Complete your profile before applying".to_string(),
        ));
    }

    let gig = gig_db::get_gig_by_id(db.get_ref(), gig_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Gig not found".to_string()))?;

    if gig.created_by == user.id {
        return Err(ApiError::Forbidden(
            "You cannot apply to your own gig".to_string(),
        ));
    }

    if application_db::find_by_gig_and_applicant(db.get_ref(), gig_id, user.id)
        .await?
        .is_some()
    {
        return Err(ApiError::Validation(
            "You have already applied to this gig".to_string(),
        ));
    }

    // The unique key also covers the race between the check above and the
    // insert.
    let application =
        application_db::insert_application(db.get_ref(), gig_id, user.id, body.into_inner())
            .await
            .map_err(|e| map_unique(e, "You have already applied to this gig"))?;

    notify(
        db.get_ref(),
        NewNotification {
            user_id: gig.created_by,
            kind: "application_received".to_string(),
            title: "New Application Received".to_string(),
            message: format!("Someone applied to your gig: {}", gig.title),
            related_gig_id: Some(gig.id),
            related_application_id: Some(application.id),
        },
    )
    .await;

    Ok(ok_message(application, "Application submitted successfully"))
}

/// GET /api/gigs/{id}/applications — gig owner reviews applicants, each
/// joined with their profile and skill list.
pub async fn list_for_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    query: web::Query<ApplicationListQuery>,
) -> Result<HttpResponse, ApiError> {
    let gig_id = path.into_inner();
    super::gigs::verify_ownership(
        db.get_ref(),
        gig_id,
        user.id,
        "You can only view applications to your own gigs",
    )
    .await?;

    let status = match query.status.as_deref() {
        Some(value) => Some(
            Status::parse(value)
                .ok_or_else(|| ApiError::Validation("Invalid status value".to_string()))?,
        ),
        None => None,
    };

    let rows = application_db::list_for_gig(db.get_ref(), gig_id, status).await?;

    let mut applications = Vec::with_capacity(rows.len());
    for (application, profile) in rows {
        let applicant = match profile {
            Some(profile) => {
                let skills = skill_db::list_skill_names(db.get_ref(), profile.user_id).await?;
                Some(ApplicantProfile::from_profile(&profile, skills))
            }
            None => None,
        };
        applications.push(ApplicationWithApplicant {
            application,
            applicant,
        });
    }

    Ok(ok(applications))
}

/// PATCH /api/gigs/{id}/applications/{app_id}/status — gig owner moves an
/// application through the pipeline; the applicant gets a notification for
/// every state except pending.
pub async fn update_status(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    policy: web::Data<TransitionPolicy>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    let (gig_id, application_id) = path.into_inner();
    let gig = super::gigs::verify_ownership(
        db.get_ref(),
        gig_id,
        user.id,
        "You can only update applications to your own gigs",
    )
    .await?;

    let status = Status::parse(&body.status)
        .ok_or_else(|| ApiError::Validation("Invalid status value".to_string()))?;

    let current = application_db::find_for_gig(db.get_ref(), gig_id, application_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Application not found".to_string()))?;

    if !policy.allows(&current.status, &status) {
        return Err(ApiError::Validation("Invalid status transition".to_string()));
    }

    let application = application_db::update_status(db.get_ref(), gig_id, application_id, status)
        .await?
        .ok_or_else(|| ApiError::NotFound("Application not found".to_string()))?;

    if let Some(message) = status_message(&application.status, &gig.title) {
        notify(
            db.get_ref(),
            NewNotification {
                user_id: application.applicant_user_id,
                kind: "status_changed".to_string(),
                title: "Application Status Updated".to_string(),
                message,
                related_gig_id: Some(gig.id),
                related_application_id: Some(application.id),
            },
        )
        .await;
    }

    Ok(ok_message(
        application,
        "Application status updated successfully",
    ))
}

/// GET /api/applications/my-applications — caller's applications with the
/// full gig (children, no count).
pub async fn my_applications(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let rows = application_db::list_for_applicant(db.get_ref(), user.id).await?;

    let mut applications = Vec::with_capacity(rows.len());
    for (application, gig) in rows {
        let gig = match gig {
            Some(gig) => Some(gig_db::with_details(db.get_ref(), gig, false).await?),
            None => None,
        };
        applications.push(ApplicationWithGig { application, gig });
    }

    Ok(ok(applications))
}

/// GET /api/applications/{id} — visible to the applicant and to the gig
/// owner, nobody else.
pub async fn get_application(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let (application, gig) = application_db::get_with_gig(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Application not found".to_string()))?;

    let is_applicant = application.applicant_user_id == user.id;
    let is_owner = gig.as_ref().is_some_and(|g| g.created_by == user.id);
    if !is_applicant && !is_owner {
        return Err(ApiError::Forbidden(
            "You do not have access to this application".to_string(),
        ));
    }

    let gig = match gig {
        Some(gig) => Some(gig_db::with_details(db.get_ref(), gig, false).await?),
        None => None,
    };

    Ok(ok(ApplicationWithGig { application, gig }))
}

fn status_message(status: &Status, gig_title: &str) -> Option<String> {
    match status {
        Status::Pending => None,
        Status::Shortlisted => Some(format!("You've been shortlisted for: {gig_title}")),
        Status::Confirmed => Some(format!("Congratulations! You've been confirmed for: {gig_title}")),
        Status::Released => Some(format!(
            "Your application status for \"{gig_title}\" has been updated to released"
        )),
    }
}

/// Best-effort insert: a notification failure is logged and never fails the
/// operation that triggered it.
pub async fn notify(db: &DatabaseConnection, notification: NewNotification) {
    if let Err(e) = notification_db::create(db, notification).await {
        tracing::warn!("failed to create notification: {e}");
    }
}
