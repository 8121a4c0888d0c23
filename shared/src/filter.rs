//! Filter selection
//!
//! The dashboard's two filter dimensions. On the wire (and in form state) an
//! empty string means "no constraint"; in Rust that is `None`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status constraint chosen in the status dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    Pending,
    InProgress,
    Resolved,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Pending => "pending",
            StatusFilter::InProgress => "inProgress",
            StatusFilter::Resolved => "resolved",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status filter: {0:?}")]
pub struct UnknownStatusFilter(pub String);

impl FromStr for StatusFilter {
    type Err = UnknownStatusFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(StatusFilter::Pending),
            "inProgress" => Ok(StatusFilter::InProgress),
            "resolved" => Ok(StatusFilter::Resolved),
            other => Err(UnknownStatusFilter(other.to_string())),
        }
    }
}

/// Current filter choice, `None` on a dimension means unconstrained
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSelection", into = "RawSelection")]
pub struct FilterSelection {
    pub status: Option<StatusFilter>,
    pub category: Option<String>,
}

impl FilterSelection {
    /// Selection with no constraints.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    /// True when neither dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.category.is_none()
    }
}

#[derive(Serialize, Deserialize)]
struct RawSelection {
    #[serde(default)]
    status: String,
    #[serde(default)]
    category: String,
}

impl TryFrom<RawSelection> for FilterSelection {
    type Error = UnknownStatusFilter;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        let status = match raw.status.as_str() {
            "" => None,
            s => Some(s.parse()?),
        };
        let category = (!raw.category.is_empty()).then_some(raw.category);
        Ok(Self { status, category })
    }
}

impl From<FilterSelection> for RawSelection {
    fn from(selection: FilterSelection) -> Self {
        Self {
            status: selection
                .status
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            category: selection.category.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strings_mean_unconstrained() {
        let selection: FilterSelection =
            serde_json::from_str(r#"{"status": "", "category": ""}"#).unwrap();
        assert!(selection.is_empty());
        assert_eq!(
            serde_json::to_value(&selection).unwrap(),
            serde_json::json!({"status": "", "category": ""})
        );
    }

    #[test]
    fn test_wire_status_values() {
        let selection: FilterSelection =
            serde_json::from_str(r#"{"status": "inProgress", "category": "Water"}"#).unwrap();
        assert_eq!(selection.status, Some(StatusFilter::InProgress));
        assert_eq!(selection.category.as_deref(), Some("Water"));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_str::<FilterSelection>(r#"{"status": "closed"}"#);
        assert!(result.is_err());
        assert_eq!(
            "closed".parse::<StatusFilter>(),
            Err(UnknownStatusFilter("closed".into()))
        );
    }

    #[test]
    fn test_with_category_empty_clears() {
        let selection = FilterSelection::all().with_category("Water").with_category("");
        assert_eq!(selection.category, None);
    }
}
