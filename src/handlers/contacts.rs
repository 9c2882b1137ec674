use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::db::contacts as contact_db;
use crate::error::{ApiError, map_unique, ok, ok_message};
use crate::models::contacts::{ContactWithUser, CreateContact};
use crate::models::profiles::PublicProfile;

/// POST /api/contacts — gig owner assigns a department contact.
pub async fn add_contact(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateContact>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    let (Some(gig_id), Some(contact_user_id), Some(department), Some(role)) = (
        input.gig_id,
        input.contact_user_id,
        input.department.filter(|s| !s.trim().is_empty()),
        input.role.filter(|s| !s.trim().is_empty()),
    ) else {
        return Err(ApiError::Validation(
            "Gig ID, contact user ID, department, and role are required".to_string(),
        ));
    };

    super::gigs::verify_ownership(
        db.get_ref(),
        gig_id,
        user.id,
        "You can only add contacts to your own gigs",
    )
    .await?;

    let contact = contact_db::insert_contact(
        db.get_ref(),
        gig_id,
        contact_user_id,
        department,
        role,
        input.company,
        input.phone,
        input.email,
    )
    .await
    .map_err(|e| map_unique(e, "Contact already exists for this department"))?;

    Ok(ok_message(contact, "Contact added successfully"))
}

/// GET /api/contacts/gig/{gig_id} — owner-only roster, each contact joined
/// with the public profile.
pub async fn list_for_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let gig_id = path.into_inner();
    super::gigs::verify_ownership(
        db.get_ref(),
        gig_id,
        user.id,
        "You can only view contacts for your own gigs",
    )
    .await?;

    let contacts: Vec<ContactWithUser> = contact_db::list_for_gig(db.get_ref(), gig_id)
        .await?
        .into_iter()
        .map(|(contact, profile)| ContactWithUser {
            contact,
            user: profile.as_ref().map(PublicProfile::from),
        })
        .collect();

    Ok(ok(contacts))
}

/// DELETE /api/contacts/{id} — ownership is checked against the contact's
/// gig, not the contact row itself.
pub async fn remove_contact(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let contact = contact_db::get_contact_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;

    super::gigs::verify_ownership(
        db.get_ref(),
        contact.gig_id,
        user.id,
        "You can only remove contacts from your own gigs",
    )
    .await?;

    contact_db::delete_contact(db.get_ref(), id).await?;

    Ok(ok_message(
        serde_json::Value::Null,
        "Contact removed successfully",
    ))
}
