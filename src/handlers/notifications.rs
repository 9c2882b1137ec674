use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::db::notifications as notification_db;
use crate::error::{ApiError, ok, ok_message};
use crate::models::notifications::NotificationListQuery;

/// GET /api/notifications — caller's notifications, newest first.
pub async fn list_notifications(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<NotificationListQuery>,
) -> Result<HttpResponse, ApiError> {
    let notifications = notification_db::list_for_user(
        db.get_ref(),
        user.id,
        query.unread_only(),
        query.limit(),
    )
    .await?;
    Ok(ok(notifications))
}

/// PATCH /api/notifications/{id}/read
pub async fn mark_read(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let notification = notification_db::mark_read(db.get_ref(), path.into_inner(), user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notification not found".to_string()))?;
    Ok(ok_message(notification, "Notification marked as read"))
}

/// PATCH /api/notifications/mark-all-read
pub async fn mark_all_read(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    notification_db::mark_all_read(db.get_ref(), user.id).await?;
    Ok(ok_message(
        serde_json::Value::Null,
        "All notifications marked as read",
    ))
}
