use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use uuid::Uuid;

use crate::models::availability::{self, SetAvailability, UpdateAvailability};

/// A user's availability entries, optionally narrowed to one gig, ordered
/// by date.
pub async fn list_availability(
    db: &DatabaseConnection,
    user_id: Uuid,
    gig_id: Option<Uuid>,
) -> Result<Vec<availability::Model>, DbErr> {
    let mut query =
        availability::Entity::find().filter(availability::Column::UserId.eq(user_id));
    if let Some(gig_id) = gig_id {
        query = query.filter(availability::Column::GigId.eq(gig_id));
    }
    query
        .order_by_asc(availability::Column::AvailabilityDate)
        .all(db)
        .await
}

/// Upsert on the (user_id, availability_date) unique key.
pub async fn set_availability(
    db: &DatabaseConnection,
    user_id: Uuid,
    date: chrono::NaiveDate,
    input: SetAvailability,
) -> Result<availability::Model, DbErr> {
    let record = availability::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        availability_date: Set(date),
        is_available: Set(input.is_available.unwrap_or(true)),
        gig_id: Set(input.gig_id),
        notes: Set(input.notes),
        created_at: Set(chrono::Utc::now()),
    };

    availability::Entity::insert(record)
        .on_conflict(
            OnConflict::columns([
                availability::Column::UserId,
                availability::Column::AvailabilityDate,
            ])
            .update_columns([
                availability::Column::IsAvailable,
                availability::Column::GigId,
                availability::Column::Notes,
            ])
            .to_owned(),
        )
        .exec_with_returning(db)
        .await
}

/// Update an entry scoped to its owner. Returns `None` when the row is
/// missing or belongs to someone else.
pub async fn update_availability(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: Uuid,
    input: UpdateAvailability,
) -> Result<Option<availability::Model>, DbErr> {
    let Some(entry) = availability::Entity::find_by_id(id)
        .filter(availability::Column::UserId.eq(user_id))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    let mut active: availability::ActiveModel = entry.into();
    if let Some(is_available) = input.is_available {
        active.is_available = Set(is_available);
    }
    if let Some(notes) = input.notes {
        active.notes = Set(notes);
    }
    active.update(db).await.map(Some)
}
