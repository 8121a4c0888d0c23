//! Issue Model

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Issue identifier.
///
/// The backend hands out opaque string ids, but numeric ids are accepted too
/// and kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IssueId(String);

impl IssueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IssueId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for IssueId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for IssueId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for IssueId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

/// Reported civic issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(alias = "_id")]
    pub id: IssueId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Free-form category, see [`super::KNOWN_CATEGORIES`]
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// `None` when missing or not a location object
    #[serde(default, deserialize_with = "lenient_option")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub progress: Option<Progress>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_option")]
    pub video_url: Option<String>,
    /// Reporter reference, either an id or a populated user object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<serde_json::Value>,
}

impl Issue {
    /// Minimal issue with no location, progress or metadata.
    pub fn new(id: impl Into<IssueId>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            location: None,
            progress: None,
            created_at: None,
            video_url: None,
            created_by: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(Location::new(latitude, longitude));
        self
    }

    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// Coordinates usable for map rendering, if any.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.location.as_ref().and_then(Location::valid_coordinates)
    }
}

/// Geographic position of an issue
///
/// Coordinates are decoded leniently: numbers and numeric strings are kept,
/// anything else (null, garbage, objects) becomes `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub longitude: Option<f64>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Returns `(latitude, longitude)` when both are present, finite and in range.
    pub fn valid_coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude?;
        let lng = self.longitude?;
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some((lat, lng))
    }
}

fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Resolution progress, three ordered stages
///
/// Stages are expected to complete monotonically
/// (`resolved` ⇒ `in_progress` ⇒ `reported`); this is not enforced here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reported: ProgressStage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub in_progress: ProgressStage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resolved: ProgressStage,
}

impl Progress {
    pub fn new(reported: bool, in_progress: bool, resolved: bool) -> Self {
        Self {
            reported: ProgressStage::from(reported),
            in_progress: ProgressStage::from(in_progress),
            resolved: ProgressStage::from(resolved),
        }
    }

    /// Reported, nothing else yet.
    pub fn reported() -> Self {
        Self::new(true, false, false)
    }

    /// Reported and being worked on.
    pub fn in_progress() -> Self {
        Self::new(true, true, false)
    }

    /// All stages completed.
    pub fn resolved() -> Self {
        Self::new(true, true, true)
    }
}

/// One progress stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

impl From<bool> for ProgressStage {
    fn from(completed: bool) -> Self {
        Self { completed }
    }
}

/// Keeps a value only when it decodes as `T`; a wrong JSON type becomes `None`.
fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
