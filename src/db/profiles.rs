use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use uuid::Uuid;

use crate::models::profiles::{self, UpdateProfile, reconcile_completeness};
use crate::storage::FileCategory;

/// Fetch a single profile by user id.
pub async fn get_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<profiles::Model>, DbErr> {
    profiles::Entity::find_by_id(user_id).one(db).await
}

/// Completeness gate used before gig creation and before applying.
///
/// Recomputes the derived flag from the row and, when the stored value
/// disagrees, persists the correction best-effort — a failed self-heal is
/// logged and does not block the caller. The returned row always carries
/// the recomputed flag.
pub async fn check_profile_complete(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<(bool, Option<profiles::Model>), DbErr> {
    let Some(mut profile) = profiles::Entity::find_by_id(user_id).one(db).await? else {
        return Ok((false, None));
    };

    if reconcile_completeness(&mut profile) {
        let mut active: profiles::ActiveModel = profile.clone().into();
        active.is_profile_complete = Set(profile.is_profile_complete);
        if let Err(e) = active.update(db).await {
            tracing::warn!("failed to self-heal is_profile_complete for {user_id}: {e}");
        }
    }

    Ok((profile.is_profile_complete, Some(profile)))
}

/// Apply a partial update, creating the row when the user has none yet.
/// Completeness is recomputed in the same write; the upsert on the primary
/// key covers a concurrent first write for the same user.
pub async fn update_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: UpdateProfile,
) -> Result<profiles::Model, DbErr> {
    let existing = profiles::Entity::find_by_id(user_id).one(db).await?;
    let merged = profiles::apply_update(existing, user_id, &input);

    let record = profiles::ActiveModel {
        user_id: Set(merged.user_id),
        first_name: Set(merged.first_name),
        surname: Set(merged.surname),
        alias_first_name: Set(merged.alias_first_name),
        alias_surname: Set(merged.alias_surname),
        phone: Set(merged.phone),
        bio: Set(merged.bio),
        profile_photo_url: Set(merged.profile_photo_url),
        banner_url: Set(merged.banner_url),
        country: Set(merged.country),
        city: Set(merged.city),
        is_profile_complete: Set(merged.is_profile_complete),
        created_at: Set(merged.created_at),
        updated_at: Set(merged.updated_at),
    };

    profiles::Entity::insert(record)
        .on_conflict(
            OnConflict::column(profiles::Column::UserId)
                .update_columns([
                    profiles::Column::FirstName,
                    profiles::Column::Surname,
                    profiles::Column::AliasFirstName,
                    profiles::Column::AliasSurname,
                    profiles::Column::Phone,
                    profiles::Column::Bio,
                    profiles::Column::ProfilePhotoUrl,
                    profiles::Column::BannerUrl,
                    profiles::Column::Country,
                    profiles::Column::City,
                    profiles::Column::IsProfileComplete,
                    profiles::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(db)
        .await
}

/// Persist a freshly uploaded public media URL (photo or banner) into the
/// profile row. The completeness flag is re-derived by the gate on its next
/// read.
pub async fn set_media_url(
    db: &DatabaseConnection,
    user_id: Uuid,
    category: FileCategory,
    url: &str,
) -> Result<(), DbErr> {
    let column = match category {
        FileCategory::ProfilePhoto => profiles::Column::ProfilePhotoUrl,
        FileCategory::ProfileBanner => profiles::Column::BannerUrl,
        _ => return Ok(()),
    };

    profiles::Entity::update_many()
        .col_expr(column, sea_query::Expr::value(url))
        .filter(profiles::Column::UserId.eq(user_id))
        .exec(db)
        .await?;

    Ok(())
}
