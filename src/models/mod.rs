pub mod applications;
pub mod availability;
pub mod contacts;
pub mod gig_dates;
pub mod gig_locations;
pub mod gigs;
pub mod notifications;
pub mod profiles;
pub mod referrals;
pub mod skills;

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent PATCH field from an explicit `null`: absent
/// deserializes to `None`, `null` to `Some(None)`, a value to
/// `Some(Some(v))`. Pair with `#[serde(default, deserialize_with = ...)]`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
