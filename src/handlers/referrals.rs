use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::AuthenticatedUser;
use crate::db::gigs as gig_db;
use crate::db::profiles as profile_db;
use crate::db::referrals as referral_db;
use crate::error::{ApiError, map_unique, ok, ok_message};
use crate::models::gigs::GigSummary;
use crate::models::notifications::NewNotification;
use crate::models::profiles::PublicProfile;
use crate::models::referrals::{CreateReferral, ReferralWithDetails};

/// GET /api/referrals — referrals where the caller is either side, each
/// joined with the gig summary and both public profiles.
pub async fn list_referrals(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let rows = referral_db::list_for_user(db.get_ref(), user.id).await?;

    let mut referrals = Vec::with_capacity(rows.len());
    for referral in rows {
        let gig = gig_db::get_gig_by_id(db.get_ref(), referral.gig_id)
            .await?
            .as_ref()
            .map(GigSummary::from);
        let referred_user = profile_db::get_profile(db.get_ref(), referral.referred_user_id)
            .await?
            .as_ref()
            .map(PublicProfile::from);
        let referrer = profile_db::get_profile(db.get_ref(), referral.referrer_user_id)
            .await?
            .as_ref()
            .map(PublicProfile::from);
        referrals.push(ReferralWithDetails {
            referral,
            gig,
            referred_user,
            referrer,
        });
    }

    Ok(ok(referrals))
}

/// POST /api/referrals — refer another user to a gig. Notifies both the
/// referred user and the gig owner, best-effort.
pub async fn create_referral(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateReferral>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    let (Some(gig_id), Some(referred_user_id)) = (input.gig_id, input.referred_user_id) else {
        return Err(ApiError::Validation(
            "Gig ID and referred user ID are required".to_string(),
        ));
    };

    if referred_user_id == user.id {
        return Err(ApiError::Validation("You cannot refer yourself".to_string()));
    }

    let gig = gig_db::get_gig_by_id(db.get_ref(), gig_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Gig not found".to_string()))?;

    let referral = referral_db::insert_referral(db.get_ref(), gig_id, referred_user_id, user.id)
        .await
        .map_err(|e| map_unique(e, "You have already referred this user to this gig"))?;

    super::applications::notify(
        db.get_ref(),
        NewNotification {
            user_id: referred_user_id,
            kind: "referral_received".to_string(),
            title: "New Referral".to_string(),
            message: format!("You've been referred to a gig: {}", gig.title),
            related_gig_id: Some(gig.id),
            related_application_id: None,
        },
    )
    .await;
    super::applications::notify(
        db.get_ref(),
        NewNotification {
            user_id: gig.created_by,
            kind: "referral_received".to_string(),
            title: "Referral for Your Gig".to_string(),
            message: format!("Someone referred a candidate for: {}", gig.title),
            related_gig_id: Some(gig.id),
            related_application_id: None,
        },
    )
    .await;

    Ok(ok_message(referral, "Referral created successfully"))
}
