use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `gigs` table.
///
/// `status` is stored as a free string (default "active") — the original
/// product never pinned the value set down, and listings filter on it
/// verbatim.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gigs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub qualifying_criteria: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub amount: Option<f64>,
    pub currency: String,
    pub status: String,
    pub created_by: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gig_dates::Entity")]
    GigDates,
    #[sea_orm(has_many = "super::gig_locations::Entity")]
    GigLocations,
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::gig_dates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GigDates.def()
    }
}

impl Related<super::gig_locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GigLocations.def()
    }
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct GigDateInput {
    pub month: String,
    pub days: String,
}

/// Locations arrive either as bare strings or `{"location_name": ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LocationInput {
    Name(String),
    Object { location_name: String },
}

impl LocationInput {
    pub fn into_name(self) -> String {
        match self {
            LocationInput::Name(name) => name,
            LocationInput::Object { location_name } => location_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGig {
    pub title: String,
    pub description: String,
    pub qualifying_criteria: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub dates: Option<Vec<GigDateInput>>,
    pub locations: Option<Vec<LocationInput>>,
}

/// PATCH body: provided scalars overwrite; provided `dates`/`locations`
/// arrays fully replace the child rows. The nullable columns are
/// double-optional so an explicit `null` clears them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGig {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub qualifying_criteria: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub amount: Option<Option<f64>>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub dates: Option<Vec<GigDateInput>>,
    pub locations: Option<Vec<LocationInput>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GigListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl GigListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("active")
    }
}

/// A gig with its child rows and, where the view calls for it, the
/// application count. Applicant identities are never included here.
#[derive(Debug, Clone, Serialize)]
pub struct GigWithDetails {
    #[serde(flatten)]
    pub gig: Model,
    pub gig_dates: Vec<super::gig_dates::Model>,
    pub gig_locations: Vec<super::gig_locations::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications_count: Option<u64>,
}

/// Compact gig view joined into referrals and conflict reports.
#[derive(Debug, Clone, Serialize)]
pub struct GigSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
}

impl From<&Model> for GigSummary {
    fn from(m: &Model) -> Self {
        Self {
            id: m.id,
            title: m.title.clone(),
            description: m.description.clone(),
            status: m.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults() {
        let q = GigListQuery {
            page: None,
            limit: None,
            status: None,
            search: None,
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 10);
        assert_eq!(q.status(), "active");
    }

    #[test]
    fn list_query_clamps_out_of_range_values() {
        let q = GigListQuery {
            page: Some(0),
            limit: Some(5000),
            status: Some("closed".to_string()),
            search: None,
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 100);
        assert_eq!(q.status(), "closed");
    }

    #[test]
    fn patch_distinguishes_null_from_absent_for_nullable_columns() {
        let input: UpdateGig = serde_json::from_str(r#"{"qualifying_criteria": null}"#).unwrap();
        assert_eq!(input.qualifying_criteria, Some(None));
        assert!(input.amount.is_none());

        let input: UpdateGig = serde_json::from_str(r#"{"amount": 1500.0}"#).unwrap();
        assert_eq!(input.amount, Some(Some(1500.0)));
    }

    #[test]
    fn location_input_accepts_both_shapes() {
        let bare: LocationInput = serde_json::from_str("\"Dubai Studio City\"").unwrap();
        assert_eq!(bare.into_name(), "Dubai Studio City");

        let object: LocationInput =
            serde_json::from_str(r#"{"location_name": "Abu Dhabi"}"#).unwrap();
        assert_eq!(object.into_name(), "Abu Dhabi");
    }
}
