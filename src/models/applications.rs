use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Application status stored as a lowercase string in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "shortlisted")]
    Shortlisted,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "released")]
    Released,
}

impl Status {
    /// Parse a client-supplied status, rejecting anything outside the
    /// four-value set.
    pub fn parse(value: &str) -> Option<Status> {
        match value {
            "pending" => Some(Status::Pending),
            "shortlisted" => Some(Status::Shortlisted),
            "confirmed" => Some(Status::Confirmed),
            "released" => Some(Status::Released),
            _ => None,
        }
    }
}

/// Which status transitions the gig owner may request.
///
/// The product has so far accepted any of the four values regardless of the
/// current state, so the default policy is permissive. Keeping the decision
/// behind this object means a stricter table can be swapped in at startup
/// without touching the handlers.
#[derive(Debug, Clone, Copy)]
pub struct TransitionPolicy {
    forward_only: bool,
}

impl TransitionPolicy {
    pub fn permissive() -> Self {
        Self {
            forward_only: false,
        }
    }

    /// pending → shortlisted → confirmed, plus release from anywhere.
    pub fn forward_only() -> Self {
        Self { forward_only: true }
    }

    pub fn allows(&self, from: &Status, to: &Status) -> bool {
        if !self.forward_only {
            return true;
        }
        matches!(
            (from, to),
            (Status::Pending, Status::Shortlisted)
                | (Status::Shortlisted, Status::Confirmed)
                | (_, Status::Released)
        )
    }
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

/// SeaORM entity for the `applications` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub gig_id: Uuid,
    pub applicant_user_id: Uuid,
    pub status: Status,
    #[sea_orm(column_type = "Text", nullable)]
    pub cover_letter: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub portfolio_links: Option<Json>,
    pub resume_url: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub portfolio_files: Option<Json>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub applied_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gigs::Entity",
        from = "Column::GigId",
        to = "super::gigs::Column::Id"
    )]
    Gig,
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::ApplicantUserId",
        to = "super::profiles::Column::UserId"
    )]
    Applicant,
}

impl Related<super::gigs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gig.def()
    }
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applicant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// POST /api/gigs/{id}/apply body; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplyRequest {
    pub cover_letter: Option<String>,
    pub portfolio_links: Option<Json>,
    pub resume_url: Option<String>,
    pub portfolio_files: Option<Json>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationListQuery {
    pub status: Option<String>,
}

/// Applicant view joined into the owner-facing application list: public
/// profile fields with the legal-name aliases, the phone number the owner
/// needs to reach the candidate, and the skill list.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantProfile {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub legal_first_name: Option<String>,
    pub legal_surname: Option<String>,
    pub alias_first_name: Option<String>,
    pub alias_surname: Option<String>,
    pub profile_photo_url: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
}

impl ApplicantProfile {
    pub fn from_profile(profile: &super::profiles::Model, skills: Vec<String>) -> Self {
        Self {
            user_id: profile.user_id,
            first_name: profile.first_name.clone(),
            surname: profile.surname.clone(),
            legal_first_name: profile.first_name.clone(),
            legal_surname: profile.surname.clone(),
            alias_first_name: profile.alias_first_name.clone(),
            alias_surname: profile.alias_surname.clone(),
            profile_photo_url: profile.profile_photo_url.clone(),
            phone: profile.phone.clone(),
            skills,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationWithApplicant {
    #[serde(flatten)]
    pub application: Model,
    pub applicant: Option<ApplicantProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationWithGig {
    #[serde(flatten)]
    pub application: Model,
    pub gig: Option<super::gigs::GigWithDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_values_outside_the_set() {
        assert_eq!(Status::parse("confirmed"), Some(Status::Confirmed));
        assert_eq!(Status::parse("rejected"), None);
        assert_eq!(Status::parse("Pending"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn permissive_policy_allows_any_transition() {
        let policy = TransitionPolicy::default();
        assert!(policy.allows(&Status::Released, &Status::Pending));
        assert!(policy.allows(&Status::Confirmed, &Status::Shortlisted));
        assert!(policy.allows(&Status::Pending, &Status::Pending));
    }

    #[test]
    fn forward_only_policy_blocks_regressions() {
        let policy = TransitionPolicy::forward_only();
        assert!(policy.allows(&Status::Pending, &Status::Shortlisted));
        assert!(policy.allows(&Status::Shortlisted, &Status::Confirmed));
        assert!(policy.allows(&Status::Confirmed, &Status::Released));
        assert!(policy.allows(&Status::Pending, &Status::Released));
        assert!(!policy.allows(&Status::Released, &Status::Pending));
        assert!(!policy.allows(&Status::Pending, &Status::Confirmed));
    }
}
