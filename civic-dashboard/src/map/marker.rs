//! Marker construction

use std::fmt;
use std::sync::Arc;

use shared::{DerivedStatus, Issue, IssueId};

use super::palette::category_color;
use super::LatLng;
use crate::status::issue_status;
use crate::table::reported_on;

/// Visual properties of a circle marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub fill_color: &'static str,
    pub outline_color: &'static str,
    pub radius: f32,
    pub weight: f32,
    pub fill_opacity: f32,
}

impl MarkerStyle {
    pub fn for_category(category: &str, selected: bool) -> Self {
        let fill_color = category_color(category);
        if selected {
            Self {
                fill_color,
                outline_color: "#111827",
                radius: 12.0,
                weight: 4.0,
                fill_opacity: 1.0,
            }
        } else {
            Self {
                fill_color,
                outline_color: "#ffffff",
                radius: 8.0,
                weight: 2.0,
                fill_opacity: 0.8,
            }
        }
    }
}

/// Popup summary attached to a marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub category: String,
    pub status: DerivedStatus,
    pub reported_on: String,
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "Reported: {}", self.reported_on)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub issue_id: IssueId,
    pub position: LatLng,
    pub style: MarkerStyle,
    pub selected: bool,
    pub popup: Popup,
}

impl Marker {
    /// `None` when the issue has no usable coordinates.
    pub fn for_issue(issue: &Issue, selected: bool) -> Option<Self> {
        let (lat, lng) = issue.coordinates()?;
        Some(Self {
            issue_id: issue.id.clone(),
            position: LatLng::new(lat, lng),
            style: MarkerStyle::for_category(&issue.category, selected),
            selected,
            popup: Popup {
                title: issue.title.clone(),
                category: issue.category.clone(),
                status: issue_status(issue),
                reported_on: reported_on(issue),
            },
        })
    }
}

/// One marker per locatable issue; others are skipped with a warning.
pub fn build_markers(displayed: &[Arc<Issue>], selected: Option<&IssueId>) -> Vec<Marker> {
    displayed
        .iter()
        .filter_map(|issue| {
            let is_selected = selected == Some(&issue.id);
            let marker = Marker::for_issue(issue, is_selected);
            if marker.is_none() {
                tracing::warn!(id = %issue.id, location = ?issue.location, "Skipping marker: no valid location");
            }
            marker
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::Progress;

    #[test]
    fn test_markers_skip_invalid_locations() {
        let displayed = vec![
            Arc::new(Issue::new("1", "a", "Water").with_location(12.0, 77.0)),
            Arc::new(Issue::new("2", "b", "Water")),
            Arc::new(Issue::new("3", "c", "Water").with_location(200.0, 77.0)),
        ];
        let markers = build_markers(&displayed, None);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].issue_id.as_str(), "1");
    }

    #[test]
    fn test_selected_marker_is_emphasised() {
        let displayed = vec![
            Arc::new(Issue::new("1", "a", "Street").with_location(1.0, 1.0)),
            Arc::new(Issue::new("2", "b", "Street").with_location(2.0, 2.0)),
        ];
        let selected = IssueId::from("2");
        let markers = build_markers(&displayed, Some(&selected));
        assert!(!markers[0].selected);
        assert!(markers[1].selected);
        assert!(markers[1].style.radius > markers[0].style.radius);
        assert_eq!(markers[0].style.fill_color, markers[1].style.fill_color);
    }

    #[test]
    fn test_popup_summary() {
        let issue = Issue::new("1", "Overflowing drain", "Sanitation")
            .with_location(1.0, 2.0)
            .with_progress(Progress::in_progress())
            .with_created_at(chrono::Utc.with_ymd_and_hms(2024, 6, 2, 9, 30, 0).unwrap());
        let marker = Marker::for_issue(&issue, false).unwrap();
        assert_eq!(
            marker.popup.to_string(),
            "Overflowing drain\nCategory: Sanitation\nStatus: In Progress\nReported: 2024-06-02"
        );
    }

    #[test]
    fn test_popup_without_progress_uses_canonical_status() {
        let issue = Issue::new("1", "x", "Water").with_location(1.0, 2.0);
        let marker = Marker::for_issue(&issue, false).unwrap();
        assert_eq!(marker.popup.status, DerivedStatus::Pending);
        assert_eq!(marker.popup.reported_on, "Unknown date");
    }
}
