//! Property tests for the dashboard state machine.

use std::sync::Arc;

use civic_dashboard::filter::matches;
use civic_dashboard::{
    classify, ClickOutcome, IssuesDashboard, MapAdapter, MarkerLayer, SelectOrigin,
};
use proptest::prelude::*;
use shared::{DerivedStatus, FilterSelection, Issue, Progress, StatusFilter};

const CATEGORIES: [&str; 4] = ["Street", "Water", "Electricity", "Garbage"];

fn progress_strategy() -> impl Strategy<Value = Option<Progress>> {
    prop::option::of((any::<bool>(), any::<bool>(), any::<bool>()))
        .prop_map(|flags| flags.map(|(r, i, s)| Progress::new(r, i, s)))
}

fn issues_strategy() -> impl Strategy<Value = Vec<Issue>> {
    prop::collection::vec(
        (
            0..CATEGORIES.len(),
            progress_strategy(),
            prop::option::of((-80.0f64..80.0, -170.0f64..170.0)),
        ),
        0..24,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(n, (category, progress, location))| {
                let mut issue = Issue::new(n.to_string(), format!("issue {n}"), CATEGORIES[category]);
                if let Some(progress) = progress {
                    issue = issue.with_progress(progress);
                }
                if let Some((lat, lng)) = location {
                    issue = issue.with_location(lat, lng);
                }
                issue
            })
            .collect()
    })
}

fn selection_strategy() -> impl Strategy<Value = FilterSelection> {
    (
        prop::option::of(prop::sample::select(vec![
            StatusFilter::Pending,
            StatusFilter::InProgress,
            StatusFilter::Resolved,
        ])),
        prop::option::of(prop::sample::select(CATEGORIES.to_vec())),
    )
        .prop_map(|(status, category)| FilterSelection {
            status,
            category: category.map(str::to_string),
        })
}

fn ids(issues: &[Arc<Issue>]) -> Vec<String> {
    issues.iter().map(|i| i.id.to_string()).collect()
}

fn loaded(issues: Vec<Issue>) -> IssuesDashboard {
    let mut dashboard = IssuesDashboard::default();
    dashboard.load(issues);
    dashboard
}

fn assert_displayed_invariant(dashboard: &IssuesDashboard) {
    match dashboard.selected() {
        Some(selected) => {
            assert_eq!(dashboard.displayed().len(), 1);
            assert!(Arc::ptr_eq(&dashboard.displayed()[0], selected));
        }
        None => assert_eq!(ids(dashboard.displayed()), ids(dashboard.filtered())),
    }
}

/// One user action against the dashboard.
#[derive(Debug, Clone)]
enum Action {
    Filter(FilterSelection),
    Clear,
    Select(usize, SelectOrigin),
    Deselect,
    Toggle,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        selection_strategy().prop_map(Action::Filter),
        Just(Action::Clear),
        (
            0usize..24,
            prop::sample::select(vec![
                SelectOrigin::TableRow,
                SelectOrigin::SidebarList,
                SelectOrigin::MapMarker,
            ])
        )
            .prop_map(|(n, origin)| Action::Select(n, origin)),
        Just(Action::Deselect),
        Just(Action::Toggle),
    ]
}

proptest! {
    #[test]
    fn filtered_is_ordered_subset_matching_both_predicates(
        issues in issues_strategy(),
        selection in selection_strategy(),
    ) {
        let mut dashboard = loaded(issues);
        dashboard.apply_filters(selection.clone());

        let all = ids(dashboard.all_issues());
        let mut cursor = all.iter();
        for issue in dashboard.filtered() {
            prop_assert!(matches(issue, &selection));
            let id = issue.id.to_string();
            prop_assert!(cursor.any(|candidate| *candidate == id), "order not preserved");
        }
        let expected = dashboard
            .all_issues()
            .iter()
            .filter(|issue| matches(issue, &selection))
            .count();
        prop_assert_eq!(dashboard.filtered().len(), expected);
    }

    #[test]
    fn clearing_filters_restores_snapshot(
        issues in issues_strategy(),
        selection in selection_strategy(),
        pick in 0usize..24,
    ) {
        let mut dashboard = loaded(issues);
        dashboard.apply_filters(selection);
        if let Some(issue) = dashboard.filtered().get(pick).cloned() {
            dashboard.select_by_id(&issue.id, SelectOrigin::TableRow).unwrap();
        }
        dashboard.clear_filters();

        prop_assert!(dashboard.selected().is_none());
        prop_assert!(dashboard.filter_selection().is_empty());
        prop_assert_eq!(ids(dashboard.filtered()), ids(dashboard.all_issues()));
    }

    #[test]
    fn displayed_follows_selection_in_every_reachable_state(
        issues in issues_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..16),
    ) {
        let mut dashboard = loaded(issues);
        assert_displayed_invariant(&dashboard);
        for action in actions {
            match action {
                Action::Filter(selection) => {
                    dashboard.apply_filters(selection);
                }
                Action::Clear => {
                    dashboard.clear_filters();
                }
                Action::Select(n, origin) => {
                    if let Some(issue) = dashboard.filtered().get(n).cloned() {
                        dashboard.select_by_id(&issue.id, origin).unwrap();
                    }
                }
                Action::Deselect => {
                    dashboard.deselect();
                }
                Action::Toggle => {
                    dashboard.toggle_view();
                }
            }
            assert_displayed_invariant(&dashboard);
        }
    }

    #[test]
    fn every_origin_converges_to_the_same_selection(
        issues in issues_strategy(),
        pick in 0usize..24,
    ) {
        let dashboard = loaded(issues);
        let Some(target) = dashboard.filtered().get(pick).cloned() else {
            return Ok(());
        };

        let mut states = Vec::new();
        for origin in [SelectOrigin::TableRow, SelectOrigin::SidebarList, SelectOrigin::MapMarker] {
            let mut copy = dashboard.clone();
            let command = copy.select_by_id(&target.id, origin).unwrap();
            states.push((copy.selected().map(|i| i.id.to_string()), ids(copy.displayed()), command));
        }
        prop_assert_eq!(&states[0], &states[1]);
        prop_assert_eq!(&states[1], &states[2]);

        // selecting twice changes nothing
        let mut twice = dashboard.clone();
        twice.select_by_id(&target.id, SelectOrigin::TableRow).unwrap();
        twice.select_by_id(&target.id, SelectOrigin::MapMarker).unwrap();
        prop_assert_eq!(ids(twice.displayed()), vec![target.id.to_string()]);
    }

    #[test]
    fn canvas_click_restores_filtered_set(
        issues in issues_strategy(),
        selection in selection_strategy(),
        pick in 0usize..24,
    ) {
        let adapter = MapAdapter::default();
        let mut surface = MarkerLayer::new();
        let mut dashboard = loaded(issues);
        dashboard.apply_filters(selection);
        let before = ids(dashboard.filtered());

        // no selection: nothing happens
        let outcome = adapter.handle_click(&mut surface, &mut dashboard, None);
        prop_assert_eq!(outcome, ClickOutcome::Propagate);
        prop_assert_eq!(surface.clears, 0);

        if let Some(issue) = dashboard.filtered().get(pick).cloned() {
            dashboard.select_by_id(&issue.id, SelectOrigin::MapMarker).unwrap();
            let outcome = adapter.handle_click(&mut surface, &mut dashboard, None);
            prop_assert_eq!(outcome, ClickOutcome::Consumed);
            prop_assert!(dashboard.selected().is_none());
            prop_assert_eq!(ids(dashboard.displayed()), before);
        }
    }

    #[test]
    fn classification_is_total(progress in progress_strategy()) {
        let status = classify(progress.as_ref());
        prop_assert!(DerivedStatus::ALL.contains(&status));
    }
}

#[test]
fn pending_filter_drops_selected_resolved_issue() {
    let mut dashboard = loaded(vec![
        Issue::new("1", "Leak", "Water").with_progress(Progress::new(true, false, false)),
        Issue::new("2", "Pothole", "Street").with_progress(Progress::new(false, false, true)),
    ]);

    dashboard
        .select_by_id(&"2".into(), SelectOrigin::TableRow)
        .unwrap();
    assert_eq!(ids(dashboard.displayed()), vec!["2"]);

    dashboard.apply_filters(FilterSelection {
        status: Some(StatusFilter::Pending),
        category: None,
    });
    assert!(dashboard.selected().is_none());
    assert_eq!(ids(dashboard.filtered()), vec!["1"]);
    assert_eq!(ids(dashboard.displayed()), vec!["1"]);
}
