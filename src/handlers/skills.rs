use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::db::skills as skill_db;
use crate::error::{ApiError, map_unique, ok, ok_message};
use crate::models::skills::CreateSkill;

/// GET /api/skills — caller's skills, newest first.
pub async fn list_skills(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let skills = skill_db::list_skills(db.get_ref(), user.id).await?;
    Ok(ok(skills))
}

/// POST /api/skills — add a skill. Duplicates per user are rejected.
pub async fn add_skill(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateSkill>,
) -> Result<HttpResponse, ApiError> {
    let name = body
        .into_inner()
        .skill_name
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("Skill name is required".to_string()))?;

    let skill = skill_db::insert_skill(db.get_ref(), user.id, name)
        .await
        .map_err(|e| map_unique(e, "You have already added this skill"))?;

    Ok(ok_message(skill, "Skill added successfully"))
}

/// DELETE /api/skills/{id} — remove a skill; the owner scope means a
/// foreign ID reads as not found.
pub async fn remove_skill(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let result = skill_db::delete_skill(db.get_ref(), path.into_inner(), user.id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Skill not found".to_string()));
    }
    Ok(ok_message(
        serde_json::Value::Null,
        "Skill removed successfully",
    ))
}
