use sea_orm::*;
use uuid::Uuid;

use crate::models::skills;

/// Fetch a user's skills, newest first.
pub async fn list_skills(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<skills::Model>, DbErr> {
    skills::Entity::find()
        .filter(skills::Column::UserId.eq(user_id))
        .order_by_desc(skills::Column::CreatedAt)
        .all(db)
        .await
}

/// Skill names only, for joining into applicant views.
pub async fn list_skill_names(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<String>, DbErr> {
    Ok(list_skills(db, user_id)
        .await?
        .into_iter()
        .map(|s| s.skill_name)
        .collect())
}

/// Insert a skill; the (user_id, skill_name) unique key rejects duplicates.
pub async fn insert_skill(
    db: &DatabaseConnection,
    user_id: Uuid,
    skill_name: String,
) -> Result<skills::Model, DbErr> {
    skills::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        skill_name: Set(skill_name),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await
}

/// Delete a skill scoped to its owner.
pub async fn delete_skill(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: Uuid,
) -> Result<DeleteResult, DbErr> {
    skills::Entity::delete_many()
        .filter(skills::Column::Id.eq(id))
        .filter(skills::Column::UserId.eq(user_id))
        .exec(db)
        .await
}
