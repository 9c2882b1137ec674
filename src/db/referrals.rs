use sea_orm::*;
use uuid::Uuid;

use crate::models::referrals;

/// Referrals where the user is either side, newest first.
pub async fn list_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<referrals::Model>, DbErr> {
    referrals::Entity::find()
        .filter(
            Condition::any()
                .add(referrals::Column::ReferredUserId.eq(user_id))
                .add(referrals::Column::ReferrerUserId.eq(user_id)),
        )
        .order_by_desc(referrals::Column::CreatedAt)
        .all(db)
        .await
}

/// Insert a referral in `pending` state; the (gig, referred, referrer)
/// unique key rejects duplicates.
pub async fn insert_referral(
    db: &DatabaseConnection,
    gig_id: Uuid,
    referred_user_id: Uuid,
    referrer_user_id: Uuid,
) -> Result<referrals::Model, DbErr> {
    referrals::ActiveModel {
        id: Set(Uuid::new_v4()),
        gig_id: Set(gig_id),
        referred_user_id: Set(referred_user_id),
        referrer_user_id: Set(referrer_user_id),
        status: Set("pending".to_string()),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await
}
