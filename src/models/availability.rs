use chrono::Datelike;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `crew_availability` table. One row per
/// (user, calendar date); POST upserts on that key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "crew_availability")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub availability_date: Date,
    pub is_available: bool,
    pub gig_id: Option<Uuid>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct SetAvailability {
    pub availability_date: Option<Date>,
    pub is_available: Option<bool>,
    pub gig_id: Option<Uuid>,
    pub notes: Option<String>,
}

/// PATCH body; `notes` is double-optional so an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAvailability {
    pub is_available: Option<bool>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityListQuery {
    pub gig_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityCheckQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConflictGig {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Conflict {
    pub gig: ConflictGig,
    pub status: super::applications::Status,
}

/// Whether a stored `days` token string covers the requested date.
///
/// Matches either the full date as a literal substring (rows that store ISO
/// dates) or the day-of-month as one of the comma-separated tokens. Range
/// tokens like "16-25" are kept literal and never expanded, and the month
/// column is not consulted.
pub fn days_conflict(days: &str, check_date: &str) -> bool {
    if days.contains(check_date) {
        return true;
    }
    match chrono::NaiveDate::parse_from_str(check_date, "%Y-%m-%d") {
        Ok(date) => {
            let day = date.day().to_string();
            days.split(',').any(|token| token.trim() == day)
        }
        Err(_) => false,
    }
}

/// Every date row of a gig whose `days` tokens cover the requested date.
/// A gig with several matching rows yields one conflict per row.
pub fn matching_date_rows<'a>(
    dates: &'a [super::gig_dates::Model],
    check_date: &str,
) -> Vec<&'a super::gig_dates::Model> {
    dates
        .iter()
        .filter(|d| days_conflict(&d.days, check_date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_day_token_in_list() {
        assert!(days_conflict("12,15,16-25", "2025-09-15"));
        assert!(days_conflict("12, 15, 28", "2025-09-15"));
        assert!(days_conflict("15", "2025-09-15"));
    }

    #[test]
    fn range_tokens_are_not_expanded() {
        // 18 falls inside "16-25" but the token is literal.
        assert!(!days_conflict("12,16-25", "2025-09-18"));
    }

    #[test]
    fn matches_full_date_substring() {
        assert!(days_conflict("2025-09-15,2025-09-16", "2025-09-15"));
    }

    #[test]
    fn no_match_means_no_conflict() {
        assert!(!days_conflict("1,2,3", "2025-09-15"));
        assert!(!days_conflict("", "2025-09-15"));
    }

    #[test]
    fn unparsable_date_only_matches_as_substring() {
        assert!(!days_conflict("12,15", "next tuesday"));
        assert!(days_conflict("booked next tuesday", "next tuesday"));
    }

    #[test]
    fn every_matching_date_row_is_reported() {
        let gig_id = Uuid::new_v4();
        let row = |month: &str, days: &str| super::super::gig_dates::Model {
            id: Uuid::new_v4(),
            gig_id,
            month: month.to_string(),
            days: days.to_string(),
        };

        let dates = vec![
            row("September", "12,15"),
            row("October", "15,20"),
            row("November", "1,2"),
        ];

        let matches = matching_date_rows(&dates, "2025-09-15");
        assert_eq!(matches.len(), 2);
        assert!(matching_date_rows(&dates, "2025-09-03").is_empty());
    }
}
