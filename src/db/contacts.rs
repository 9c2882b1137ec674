use sea_orm::*;
use uuid::Uuid;

use crate::models::contacts;
use crate::models::profiles;

/// Contacts for a gig joined with the contact's public profile, ordered by
/// department.
pub async fn list_for_gig(
    db: &DatabaseConnection,
    gig_id: Uuid,
) -> Result<Vec<(contacts::Model, Option<profiles::Model>)>, DbErr> {
    contacts::Entity::find()
        .filter(contacts::Column::GigId.eq(gig_id))
        .find_also_related(profiles::Entity)
        .order_by_asc(contacts::Column::Department)
        .all(db)
        .await
}

/// Insert a contact; the (gig_id, department) unique key rejects a second
/// contact for the same department.
pub async fn insert_contact(
    db: &DatabaseConnection,
    gig_id: Uuid,
    contact_user_id: Uuid,
    department: String,
    role: String,
    company: Option<String>,
    phone: Option<String>,
    email: Option<String>,
) -> Result<contacts::Model, DbErr> {
    contacts::ActiveModel {
        id: Set(Uuid::new_v4()),
        gig_id: Set(gig_id),
        user_id: Set(contact_user_id),
        department: Set(department),
        role: Set(role),
        company: Set(company),
        phone: Set(phone),
        email: Set(email),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await
}

/// Fetch a contact row by ID.
pub async fn get_contact_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<contacts::Model>, DbErr> {
    contacts::Entity::find_by_id(id).one(db).await
}

/// Delete a contact by ID.
pub async fn delete_contact(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    contacts::Entity::delete_by_id(id).exec(db).await
}
