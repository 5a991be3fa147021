//! State-machine tests for TimelineView

use chrono::DateTime;
use ratatui::layout::Rect;

use crate::model::{CommitSummary, LineRow};
use crate::ui::scale::{LinearScale, SqrtScale};

use super::{ChartGeom, Region, TimelineView};

fn commit(id: &str, datetime: &str, files: &[(&str, &str)]) -> CommitSummary {
    let lines = files
        .iter()
        .map(|(file, tag)| LineRow {
            commit: id.to_string(),
            file: (*file).to_string(),
            file_type: (*tag).to_string(),
            datetime: DateTime::parse_from_rfc3339(datetime).ok(),
            ..LineRow::default()
        })
        .collect();
    CommitSummary::new(id.to_string(), None, lines)
}

fn view_with_sample() -> TimelineView {
    let mut view = TimelineView::new();
    view.set_commits(vec![
        commit("ccc", "2024-05-03T18:00:00+00:00", &[("x.js", "js")]),
        commit("aaa", "2024-05-01T09:00:00+00:00", &[("x.js", "js"), ("y.css", "css")]),
        commit("bbb", "2024-05-02T12:00:00+00:00", &[("y.css", "css")]),
    ]);
    view
}

/// Geometry covering a 40x20 plot, wide enough that all commits land on
/// distinct cells.
fn fake_geom(view: &TimelineView) -> ChartGeom {
    let plot = Rect::new(10, 5, 40, 20);
    let min = view.commits().first().map(|c| c.timestamp_ms()).unwrap_or(0);
    let max = view.commits().last().map(|c| c.timestamp_ms()).unwrap_or(0);
    ChartGeom {
        plot,
        x: LinearScale::new((min as f64, max as f64), (10.0, 49.0)),
        y: LinearScale::new((0.0, 24.0), (24.0, 5.0)),
        r: SqrtScale::new((1.0, 2.0), (0.8, 3.0)),
    }
}

#[test]
fn commits_are_sorted_ascending_by_timestamp() {
    let view = view_with_sample();
    let ids: Vec<&str> = view.commits().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["aaa", "bbb", "ccc"]);
}

#[test]
fn starts_at_full_history() {
    let view = view_with_sample();
    assert_eq!(view.progress(), 100.0);
    assert_eq!(view.active_commits().len(), 3);
}

#[test]
fn progress_zero_keeps_only_the_earliest() {
    let mut view = view_with_sample();
    view.set_progress(0.0);
    assert_eq!(view.active_commits().len(), 1);
    assert_eq!(view.active_commits()[0].id, "aaa");
}

#[test]
fn active_set_grows_monotonically_with_progress() {
    let mut view = view_with_sample();
    let mut previous = 0;
    for step in 0..=10 {
        view.set_progress(f64::from(step) * 10.0);
        let len = view.active_commits().len();
        assert!(len >= previous);
        previous = len;
    }
    assert_eq!(previous, 3);
}

#[test]
fn enter_step_moves_the_window_to_that_commit() {
    let mut view = view_with_sample();
    view.enter_step(1);
    assert_eq!(view.step_index, 1);
    assert_eq!(view.active_commits().len(), 2);
    assert_eq!(view.active_commits().last().map(|c| c.id.as_str()), Some("bbb"));
}

#[test]
fn region_selects_commits_under_it() {
    let mut view = view_with_sample();
    view.geom = Some(fake_geom(&view));

    // Cover the whole plot: everything active is selected.
    view.set_region(Some(Region::from_corners((10, 5), (49, 24))));
    assert_eq!(view.summary().commit_count, 3);

    let total: f64 = view.summary().breakdown.iter().map(|t| t.proportion).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn clearing_the_region_empties_the_summary() {
    let mut view = view_with_sample();
    view.geom = Some(fake_geom(&view));
    view.set_region(Some(Region::from_corners((10, 5), (49, 24))));
    assert!(view.summary().commit_count > 0);

    view.set_region(None);
    assert_eq!(view.summary().commit_count, 0);
    assert!(view.summary().breakdown.is_empty());
}

#[test]
fn narrowing_the_window_clears_the_region() {
    let mut view = view_with_sample();
    view.geom = Some(fake_geom(&view));
    view.set_region(Some(Region::from_corners((10, 5), (49, 24))));
    assert!(view.region.is_some());

    // Shrinking the active prefix rescales the x-domain.
    view.set_progress(0.0);
    assert!(view.region.is_none());
    assert_eq!(view.summary().commit_count, 0);
}

#[test]
fn same_prefix_keeps_the_region() {
    let mut view = view_with_sample();
    view.geom = Some(fake_geom(&view));
    view.enter_step(1);
    view.set_region(Some(Region::from_corners((10, 5), (49, 24))));

    // bbb sits near 47% progress; 60% still cuts between bbb and ccc,
    // so the active prefix is unchanged.
    view.set_progress(60.0);
    assert!(view.region.is_some());
}

#[test]
fn selection_recomputes_against_the_new_active_set() {
    let mut view = view_with_sample();
    view.geom = Some(fake_geom(&view));
    view.enter_step(1);
    view.set_region(Some(Region::from_corners((10, 5), (49, 24))));
    // Only the two active commits can be selected.
    assert_eq!(view.summary().commit_count, 2);
}

#[test]
fn hit_test_prefers_the_smallest_circle() {
    let mut view = TimelineView::new();
    // Two commits at the same instant, on an exact cell row (hour 0):
    // same plotted cell, different radii.
    view.set_commits(vec![
        commit("big", "2024-05-01T00:00:00+00:00", &[("a.js", "js"), ("b.js", "js"), ("c.js", "js")]),
        commit("small", "2024-05-01T00:00:00+00:00", &[("a.js", "js")]),
    ]);
    view.geom = Some(fake_geom(&view));

    let geom = view.geom.unwrap();
    let (col, row) = geom.position(&view.commits()[0]).unwrap();
    let hit = view.hit_test(col.round() as u16, row.round() as u16);
    let id = hit.map(|i| view.active_commits()[i].id.clone());
    assert_eq!(id.as_deref(), Some("small"));
}
