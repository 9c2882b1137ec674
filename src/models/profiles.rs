use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `user_profiles` table.
///
/// One row per authenticated user, keyed on the Supabase auth UUID. The
/// legal name lives in `first_name`/`surname`; the API dual-exposes those
/// columns under `legal_first_name`/`legal_surname` for compatibility.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub alias_first_name: Option<String>,
    pub alias_surname: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub banner_url: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub is_profile_complete: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Completeness is a pure function of legal name, phone and profile photo.
pub fn is_complete(profile: &Model) -> bool {
    present(&profile.first_name)
        && present(&profile.surname)
        && present(&profile.phone)
        && present(&profile.profile_photo_url)
}

/// Recompute the completeness flag in place so the row handed back always
/// matches the derived value. Returns true when the stored flag was stale.
pub fn reconcile_completeness(profile: &mut Model) -> bool {
    let complete = is_complete(profile);
    let changed = complete != profile.is_profile_complete;
    profile.is_profile_complete = complete;
    changed
}

// ── DTOs ──

/// PATCH /api/profile body. Accepts both the API aliases
/// (`legal_first_name`/`legal_surname`) and the raw column names; when both
/// are supplied the raw column name wins. Every field is double-optional:
/// absent leaves the column alone, explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    #[serde(default, deserialize_with = "super::double_option")]
    pub legal_first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub legal_surname: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub surname: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub alias_first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub alias_surname: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub profile_photo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub banner_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub city: Option<Option<String>>,
}

impl UpdateProfile {
    pub fn first_name(&self) -> Option<&Option<String>> {
        self.first_name.as_ref().or(self.legal_first_name.as_ref())
    }

    pub fn surname(&self) -> Option<&Option<String>> {
        self.surname.as_ref().or(self.legal_surname.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.first_name().is_none()
            && self.surname().is_none()
            && self.alias_first_name.is_none()
            && self.alias_surname.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
            && self.profile_photo_url.is_none()
            && self.banner_url.is_none()
            && self.country.is_none()
            && self.city.is_none()
    }
}

/// Merge a partial update into the existing row, or build a fresh row keyed
/// on the caller when none exists yet. Completeness and `updated_at` are
/// recomputed either way.
pub fn apply_update(existing: Option<Model>, user_id: Uuid, input: &UpdateProfile) -> Model {
    let now = chrono::Utc::now();
    let mut merged = existing.unwrap_or(Model {
        user_id,
        first_name: None,
        surname: None,
        alias_first_name: None,
        alias_surname: None,
        phone: None,
        bio: None,
        profile_photo_url: None,
        banner_url: None,
        country: None,
        city: None,
        is_profile_complete: false,
        created_at: now,
        updated_at: None,
    });

    if let Some(v) = input.first_name() {
        merged.first_name = v.clone();
    }
    if let Some(v) = input.surname() {
        merged.surname = v.clone();
    }
    if let Some(v) = &input.alias_first_name {
        merged.alias_first_name = v.clone();
    }
    if let Some(v) = &input.alias_surname {
        merged.alias_surname = v.clone();
    }
    if let Some(v) = &input.phone {
        merged.phone = v.clone();
    }
    if let Some(v) = &input.bio {
        merged.bio = v.clone();
    }
    if let Some(v) = &input.profile_photo_url {
        merged.profile_photo_url = v.clone();
    }
    if let Some(v) = &input.banner_url {
        merged.banner_url = v.clone();
    }
    if let Some(v) = &input.country {
        merged.country = v.clone();
    }
    if let Some(v) = &input.city {
        merged.city = v.clone();
    }

    merged.is_profile_complete = is_complete(&merged);
    merged.updated_at = Some(now);
    merged
}

/// Full profile representation with the legal-name aliases applied at the
/// serialization boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub legal_first_name: Option<String>,
    pub legal_surname: Option<String>,
    pub alias_first_name: Option<String>,
    pub alias_surname: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub banner_url: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub is_profile_complete: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for ProfileResponse {
    fn from(m: Model) -> Self {
        Self {
            user_id: m.user_id,
            legal_first_name: m.first_name.clone(),
            legal_surname: m.surname.clone(),
            first_name: m.first_name,
            surname: m.surname,
            alias_first_name: m.alias_first_name,
            alias_surname: m.alias_surname,
            phone: m.phone,
            bio: m.bio,
            profile_photo_url: m.profile_photo_url,
            banner_url: m.banner_url,
            country: m.country,
            city: m.city,
            is_profile_complete: m.is_profile_complete,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Public subset of a profile joined into applications, referrals and
/// contact lists. Never exposes phone-level data unless the view needs it.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfile {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub legal_first_name: Option<String>,
    pub legal_surname: Option<String>,
    pub profile_photo_url: Option<String>,
}

impl From<&Model> for PublicProfile {
    fn from(m: &Model) -> Self {
        Self {
            first_name: m.first_name.clone(),
            surname: m.surname.clone(),
            legal_first_name: m.first_name.clone(),
            legal_surname: m.surname.clone(),
            profile_photo_url: m.profile_photo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile(
        first_name: Option<&str>,
        surname: Option<&str>,
        phone: Option<&str>,
        photo: Option<&str>,
    ) -> Model {
        Model {
            user_id: Uuid::new_v4(),
            first_name: first_name.map(String::from),
            surname: surname.map(String::from),
            alias_first_name: None,
            alias_surname: None,
            phone: phone.map(String::from),
            bio: None,
            profile_photo_url: photo.map(String::from),
            banner_url: None,
            country: None,
            city: None,
            is_profile_complete: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn complete_requires_all_four_fields() {
        let p = profile(
            Some("Alice"),
            Some("Smith"),
            Some("+971501234567"),
            Some("https://cdn.example.com/p.jpg"),
        );
        assert!(is_complete(&p));

        assert!(!is_complete(&profile(
            None,
            Some("Smith"),
            Some("x"),
            Some("y")
        )));
        assert!(!is_complete(&profile(
            Some("Alice"),
            Some("Smith"),
            None,
            Some("y")
        )));
        assert!(!is_complete(&profile(
            Some("Alice"),
            Some("Smith"),
            Some("x"),
            None
        )));
    }

    #[test]
    fn empty_strings_do_not_count_as_present() {
        let p = profile(Some(""), Some("Smith"), Some("x"), Some("y"));
        assert!(!is_complete(&p));
    }

    #[test]
    fn reconcile_corrects_a_stale_flag_in_the_returned_row() {
        let mut p = profile(
            Some("Alice"),
            Some("Smith"),
            Some("+971501234567"),
            Some("https://cdn.example.com/p.jpg"),
        );
        p.is_profile_complete = false;

        assert!(reconcile_completeness(&mut p));
        assert!(p.is_profile_complete);

        // Already in agreement: nothing to persist.
        assert!(!reconcile_completeness(&mut p));
        assert!(p.is_profile_complete);
    }

    #[test]
    fn response_dual_exposes_legal_names() {
        let p = profile(Some("Alice"), Some("Smith"), None, None);
        let r = ProfileResponse::from(p);
        assert_eq!(r.first_name.as_deref(), Some("Alice"));
        assert_eq!(r.legal_first_name.as_deref(), Some("Alice"));
        assert_eq!(r.surname.as_deref(), Some("Smith"));
        assert_eq!(r.legal_surname.as_deref(), Some("Smith"));
    }

    #[test]
    fn update_prefers_raw_column_name_over_alias() {
        let input = UpdateProfile {
            legal_first_name: Some(Some("FromAlias".to_string())),
            first_name: Some(Some("FromColumn".to_string())),
            ..Default::default()
        };
        assert_eq!(
            input.first_name().unwrap().as_deref().unwrap(),
            "FromColumn"
        );

        let alias_only = UpdateProfile {
            legal_surname: Some(Some("OnlyAlias".to_string())),
            ..Default::default()
        };
        assert_eq!(alias_only.surname().unwrap().as_deref().unwrap(), "OnlyAlias");
    }

    #[test]
    fn patch_distinguishes_null_from_absent() {
        let input: UpdateProfile = serde_json::from_str(r#"{"bio": null}"#).unwrap();
        assert_eq!(input.bio, Some(None));
        assert!(input.phone.is_none());
        assert!(!input.is_empty());

        let mut existing = profile(Some("Alice"), Some("Smith"), None, None);
        existing.bio = Some("old bio".to_string());
        let merged = apply_update(Some(existing), Uuid::new_v4(), &input);
        assert_eq!(merged.bio, None);
        assert_eq!(merged.first_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn update_creates_a_row_when_none_exists() {
        let user_id = Uuid::new_v4();
        let input = UpdateProfile {
            first_name: Some(Some("Alice".to_string())),
            surname: Some(Some("Smith".to_string())),
            phone: Some(Some("+971501234567".to_string())),
            profile_photo_url: Some(Some("https://cdn.example.com/p.jpg".to_string())),
            ..Default::default()
        };

        let merged = apply_update(None, user_id, &input);
        assert_eq!(merged.user_id, user_id);
        assert_eq!(merged.first_name.as_deref(), Some("Alice"));
        assert!(merged.is_profile_complete);
        assert!(merged.updated_at.is_some());
    }

    #[test]
    fn update_merges_into_an_existing_row() {
        let existing = profile(
            Some("Alice"),
            Some("Smith"),
            Some("+971501234567"),
            Some("https://cdn.example.com/p.jpg"),
        );
        let user_id = existing.user_id;
        let input = UpdateProfile {
            city: Some(Some("Dubai".to_string())),
            ..Default::default()
        };

        let merged = apply_update(Some(existing), user_id, &input);
        assert_eq!(merged.user_id, user_id);
        assert_eq!(merged.city.as_deref(), Some("Dubai"));
        assert_eq!(merged.first_name.as_deref(), Some("Alice"));
        assert!(merged.is_profile_complete);
    }
}
