//! Table rows and sidebar list entries

use std::fmt;
use std::sync::Arc;

use shared::{DerivedStatus, Issue, IssueId};

use crate::media::validate_video_url;
use crate::status::issue_status;

/// Shown when an issue has no creation timestamp
pub const UNKNOWN_DATE: &str = "Unknown date";

const EXCERPT_CHARS: usize = 120;

/// Reported date as `YYYY-MM-DD`.
pub fn reported_on(issue: &Issue) -> String {
    issue
        .created_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// One row of the issues table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: IssueId,
    pub title: String,
    pub category: String,
    pub status: DerivedStatus,
    pub reported_on: String,
    pub has_location: bool,
    pub selected: bool,
}

impl TableRow {
    pub fn from_issue(issue: &Issue, selected: bool) -> Self {
        Self {
            id: issue.id.clone(),
            title: issue.title.clone(),
            category: issue.category.clone(),
            status: issue_status(issue),
            reported_on: reported_on(issue),
            has_location: issue.coordinates().is_some(),
            selected,
        }
    }
}

/// One entry of the sidebar detail list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: IssueId,
    pub title: String,
    pub category: String,
    pub status: DerivedStatus,
    pub excerpt: String,
    /// Only set for well-formed http(s) links
    pub video_url: Option<String>,
}

impl ListEntry {
    pub fn from_issue(issue: &Issue) -> Self {
        let video_url = issue.video_url.as_deref().and_then(|raw| {
            validate_video_url(raw)
                .map_err(|e| tracing::debug!(id = %issue.id, "Dropping video link: {}", e))
                .ok()
                .map(String::from)
        });
        Self {
            id: issue.id.clone(),
            title: issue.title.clone(),
            category: issue.category.clone(),
            status: issue_status(issue),
            excerpt: excerpt(&issue.description, EXCERPT_CHARS),
            video_url,
        }
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

pub fn table_rows(displayed: &[Arc<Issue>], selected: Option<&IssueId>) -> Vec<TableRow> {
    displayed
        .iter()
        .map(|issue| TableRow::from_issue(issue, selected == Some(&issue.id)))
        .collect()
}

pub fn list_entries(displayed: &[Arc<Issue>]) -> Vec<ListEntry> {
    displayed.iter().map(|issue| ListEntry::from_issue(issue)).collect()
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

/// Plain-text table, selected row marked with `>`.
#[derive(Debug, Clone, Copy)]
pub struct TableText<'a>(pub &'a [TableRow]);

impl fmt::Display for TableText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {:<12} {:<32} {:<12} {:<12} {:<12} {}",
            "ID", "TITLE", "CATEGORY", "STATUS", "REPORTED", "MAP"
        )?;
        if self.0.is_empty() {
            return writeln!(f, "  (no issues)");
        }
        for row in self.0 {
            writeln!(
                f,
                "{} {:<12} {:<32} {:<12} {:<12} {:<12} {}",
                if row.selected { '>' } else { ' ' },
                clip(row.id.as_str(), 12),
                clip(&row.title, 32),
                clip(&row.category, 12),
                row.status,
                row.reported_on,
                if row.has_location { "yes" } else { "-" },
            )?;
        }
        Ok(())
    }
}

pub fn render_text(rows: &[TableRow]) -> String {
    TableText(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Progress;

    #[test]
    fn test_rows_mark_selection() {
        let displayed = vec![
            Arc::new(Issue::new("1", "a", "Water").with_progress(Progress::resolved())),
            Arc::new(Issue::new("2", "b", "Street").with_location(1.0, 1.0)),
        ];
        let selected = IssueId::from("2");
        let rows = table_rows(&displayed, Some(&selected));
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
        assert_eq!(rows[0].status, DerivedStatus::Resolved);
        assert!(!rows[0].has_location);
        assert!(rows[1].has_location);
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let long = "ü".repeat(200);
        let entry = ListEntry::from_issue(&Issue::new("1", "t", "Water").with_description(long));
        assert_eq!(entry.excerpt.chars().count(), EXCERPT_CHARS + 1);
        assert!(entry.excerpt.ends_with('…'));
    }

    #[test]
    fn test_invalid_video_link_dropped() {
        let ok = Issue::new("1", "t", "Water").with_video_url("https://cdn.example.com/a.mp4");
        let bad = Issue::new("2", "t", "Water").with_video_url("javascript:alert(1)");
        assert_eq!(
            ListEntry::from_issue(&ok).video_url.as_deref(),
            Some("https://cdn.example.com/a.mp4")
        );
        assert_eq!(ListEntry::from_issue(&bad).video_url, None);
    }

    #[test]
    fn test_render_text() {
        let rows = table_rows(&[Arc::new(Issue::new("7", "Pothole", "Street"))], None);
        let text = render_text(&rows);
        assert!(text.contains("Pothole"));
        assert!(text.contains("Pending"));
        assert!(text.contains(UNKNOWN_DATE));
        assert!(render_text(&[]).contains("(no issues)"));
    }

    #[test]
    fn test_selected_row_is_marked() {
        let displayed = vec![Arc::new(Issue::new("7", "Pothole", "Street"))];
        let rows = table_rows(&displayed, Some(&IssueId::from("7")));
        let text = TableText(&rows).to_string();
        let line = text.lines().nth(1).unwrap();
        assert!(line.starts_with("> 7"));
    }
}
