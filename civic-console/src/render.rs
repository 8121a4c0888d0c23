//! Terminal rendering of the two dashboard views

use std::fmt;

use civic_dashboard::table::{ListEntry, TableText};
use civic_dashboard::{IssuesDashboard, MarkerLayer};

/// Table view plus the detail card of the selected issue.
pub struct TableView<'a>(pub &'a IssuesDashboard);

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashboard = self.0;
        write!(f, "{}", TableText(&dashboard.table_rows()))?;
        match dashboard.selected() {
            Some(issue) => write!(f, "\n{}", DetailCard(&ListEntry::from_issue(issue))),
            None => Ok(()),
        }
    }
}

struct DetailCard<'a>(&'a ListEntry);

impl fmt::Display for DetailCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        writeln!(f, "{} [{}] {}", entry.title, entry.category, entry.status)?;
        if !entry.excerpt.is_empty() {
            writeln!(f, "  {}", entry.excerpt)?;
        }
        match &entry.video_url {
            Some(url) => writeln!(f, "  Video: {url}"),
            None => writeln!(f, "  No video"),
        }
    }
}

/// Camera position and drawn markers.
pub struct MapView<'a>(pub &'a MarkerLayer);

impl fmt::Display for MapView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let surface = self.0;
        if let Some(tiles) = &surface.tile_layer {
            writeln!(f, "Tiles: {}", tiles.attribution)?;
        }
        match (surface.fitted, surface.center, surface.zoom) {
            (Some(bounds), _, _) => writeln!(
                f,
                "Viewport: fit ({:.4}, {:.4}) - ({:.4}, {:.4})",
                bounds.south_west.lat,
                bounds.south_west.lng,
                bounds.north_east.lat,
                bounds.north_east.lng
            )?,
            (None, Some(center), Some(zoom)) => {
                writeln!(f, "Viewport: ({:.4}, {:.4}) zoom {zoom}", center.lat, center.lng)?
            }
            _ => {}
        }
        if surface.markers.is_empty() {
            writeln!(f, "(no markers)")?;
        }
        for marker in &surface.markers {
            writeln!(
                f,
                "{} {} at ({:.4}, {:.4}) {}",
                if marker.selected { '*' } else { 'o' },
                marker.issue_id,
                marker.position.lat,
                marker.position.lng,
                marker.style.fill_color,
            )?;
            for line in marker.popup.to_string().lines() {
                writeln!(f, "    {line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_dashboard::{MapAdapter, SelectOrigin};
    use shared::{Issue, Progress};

    fn dashboard() -> IssuesDashboard {
        let mut dashboard = IssuesDashboard::default();
        dashboard.load(vec![
            Issue::new("a1", "Leaking hydrant", "Water")
                .with_description("Water running down Main St since Monday")
                .with_location(12.97, 77.59)
                .with_progress(Progress::reported())
                .with_video_url("https://cdn.city.gov/a1.mp4"),
            Issue::new("b2", "Broken lamp", "Electricity").with_progress(Progress::resolved()),
        ]);
        dashboard
    }

    #[test]
    fn test_table_view_shows_detail_for_selection() {
        let mut dashboard = dashboard();
        let plain = TableView(&dashboard).to_string();
        assert!(plain.contains("Leaking hydrant"));
        assert!(plain.contains("Broken lamp"));
        assert!(!plain.contains("Video:"));

        dashboard.select_by_id(&"a1".into(), SelectOrigin::TableRow).unwrap();
        let focused = TableView(&dashboard).to_string();
        assert!(!focused.contains("Broken lamp"));
        assert!(focused.contains("Video: https://cdn.city.gov/a1.mp4"));
        assert!(focused.contains("Water running down Main St"));
    }

    #[test]
    fn test_map_view_lists_located_markers() {
        let dashboard = dashboard();
        let adapter = MapAdapter::default();
        let mut surface = MarkerLayer::new();
        adapter.mount(&mut surface);
        adapter.render(&mut surface, &dashboard);

        let text = MapView(&surface).to_string();
        assert!(text.contains("o a1 at (12.9700, 77.5900)"));
        assert!(text.contains("Status: Pending"));
        assert!(!text.contains("b2"));
    }
}
