use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `referrals` table. Unique per
/// (gig, referred user, referrer); self-referrals are rejected upstream.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "referrals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub gig_id: Uuid,
    pub referred_user_id: Uuid,
    pub referrer_user_id: Uuid,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gigs::Entity",
        from = "Column::GigId",
        to = "super::gigs::Column::Id"
    )]
    Gig,
}

impl Related<super::gigs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gig.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReferral {
    pub gig_id: Option<Uuid>,
    pub referred_user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferralWithDetails {
    #[serde(flatten)]
    pub referral: Model,
    pub gig: Option<super::gigs::GigSummary>,
    pub referred_user: Option<super::profiles::PublicProfile>,
    pub referrer: Option<super::profiles::PublicProfile>,
}
