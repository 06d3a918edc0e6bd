use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Primary emotion recorded with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "emotion", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Calm,
    Happy,
    Anxious,
    Sad,
    Angry,
}

/// Contextual source of stress for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "trigger_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Home,
    School,
    Work,
    Social,
}

/// One daily journal record. `date` carries no time component and is the
/// canonical `YYYY-MM-DD` value used for all comparisons; `created_at` is set
/// once by the store and never changes. The four quadrant lists are ordered
/// and may repeat — the catalogue is a UI affordance, not a server constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i32,
    pub user_id: i32,
    pub date: NaiveDate,
    pub emotion: Emotion,
    pub anxiety_level: i32,
    pub trigger: Trigger,
    pub description: String,
    pub mind: Vec<String>,
    pub body: Vec<String>,
    pub emotions: Vec<String>,
    pub behaviors: Vec<String>,
    pub strategies_used: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// POST /api/entries body. Field presence and types are enforced by serde;
/// range constraints by `validator`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub user_id: i32,

    #[serde(deserialize_with = "coerce_date")]
    pub date: NaiveDate,

    pub emotion: Emotion,

    #[validate(range(min = 1, max = 10, message = "anxietyLevel must be between 1 and 10"))]
    pub anxiety_level: i32,

    pub trigger: Trigger,

    pub description: String,

    pub mind: Vec<String>,
    pub body: Vec<String>,
    pub emotions: Vec<String>,
    pub behaviors: Vec<String>,

    #[serde(default)]
    pub strategies_used: Option<String>,
}

/// PUT /api/entries/{id} body — partial update. Fields left out of the JSON
/// are not validated and not touched by the store.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    pub user_id: Option<i32>,

    #[serde(default, deserialize_with = "coerce_date_opt")]
    pub date: Option<NaiveDate>,

    pub emotion: Option<Emotion>,

    #[validate(range(min = 1, max = 10, message = "anxietyLevel must be between 1 and 10"))]
    pub anxiety_level: Option<i32>,

    pub trigger: Option<Trigger>,

    pub description: Option<String>,

    pub mind: Option<Vec<String>>,
    pub body: Option<Vec<String>>,
    pub emotions: Option<Vec<String>>,
    pub behaviors: Option<Vec<String>>,

    pub strategies_used: Option<String>,
}

/// Parse a client-supplied date in its canonical `YYYY-MM-DD` form, or coerce
/// an RFC 3339 datetime down to its date component. Anything else is rejected
/// so timezone drift cannot smuggle in an off-by-one day.
pub fn parse_coercible_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = s.parse::<NaiveDate>() {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

fn coerce_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_coercible_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("date is not a valid calendar date: {raw}")))
}

fn coerce_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_coercible_date(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("date is not a valid calendar date: {s}"))),
    }
}
