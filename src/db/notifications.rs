use sea_orm::*;
use uuid::Uuid;

use crate::models::notifications::{self, NewNotification};

/// Insert a notification row. Callers treat this as best-effort: a failure
/// is logged and never propagated to the primary operation.
pub async fn create(
    db: &DatabaseConnection,
    input: NewNotification,
) -> Result<notifications::Model, DbErr> {
    notifications::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(input.user_id),
        kind: Set(input.kind),
        title: Set(input.title),
        message: Set(input.message),
        related_gig_id: Set(input.related_gig_id),
        related_application_id: Set(input.related_application_id),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await
}

/// A user's notifications, newest first.
pub async fn list_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    unread_only: bool,
    limit: u64,
) -> Result<Vec<notifications::Model>, DbErr> {
    let mut query =
        notifications::Entity::find().filter(notifications::Column::UserId.eq(user_id));
    if unread_only {
        query = query.filter(notifications::Column::IsRead.eq(false));
    }
    query
        .order_by_desc(notifications::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
}

/// Mark one notification read, scoped to its owner. Returns `None` when the
/// row is missing or belongs to someone else.
pub async fn mark_read(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<notifications::Model>, DbErr> {
    let Some(notification) = notifications::Entity::find_by_id(id)
        .filter(notifications::Column::UserId.eq(user_id))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    let mut active: notifications::ActiveModel = notification.into();
    active.is_read = Set(true);
    active.update(db).await.map(Some)
}

/// Mark every unread notification for the user as read.
pub async fn mark_all_read(db: &DatabaseConnection, user_id: Uuid) -> Result<(), DbErr> {
    notifications::Entity::update_many()
        .col_expr(notifications::Column::IsRead, sea_query::Expr::value(true))
        .filter(notifications::Column::UserId.eq(user_id))
        .filter(notifications::Column::IsRead.eq(false))
        .exec(db)
        .await?;
    Ok(())
}
