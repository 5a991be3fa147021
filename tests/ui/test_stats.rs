//! Buffer tests for Stats View

use ratatui::{Terminal, backend::TestBackend};

use folio::config::ColorScheme;
use folio::data::LogStats;
use folio::model::ProfileStats;
use folio::ui::theme::Palette;
use folio::ui::views::StatsView;

use crate::common::{sample_rows, screen};

fn palette() -> Palette {
    Palette::for_scheme(ColorScheme::Auto)
}

fn draw(view: &StatsView) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), &palette()))
        .unwrap();
    terminal
}

#[test]
fn log_metrics_render_with_values() {
    let view = StatsView {
        stats: Some(LogStats::compute(&sample_rows())),
        ..StatsView::default()
    };

    let terminal = draw(&view);
    let text = screen(&terminal);

    assert!(text.contains("Total LOC"), "got:\n{text}");
    assert!(text.contains("Total commits"), "got:\n{text}");
    assert!(text.contains("Busiest period"), "got:\n{text}");
}

#[test]
fn profile_counters_render_when_loaded() {
    let view = StatsView {
        username: Some("mam084".to_string()),
        profile: Some(ProfileStats {
            followers: 12,
            following: 3,
            public_repos: 7,
            public_gists: 1,
        }),
        ..StatsView::default()
    };

    let terminal = draw(&view);
    let text = screen(&terminal);
    assert!(text.contains("GitHub · mam084"), "got:\n{text}");
    assert!(text.contains("Followers"), "got:\n{text}");
    assert!(text.contains("12"), "got:\n{text}");
}

#[test]
fn profile_error_is_inline_and_does_not_hide_log_stats() {
    let view = StatsView {
        stats: Some(LogStats::compute(&sample_rows())),
        username: Some("mam084".to_string()),
        profile_error: Some("profile request failed with status 404".to_string()),
        ..StatsView::default()
    };

    let terminal = draw(&view);
    let text = screen(&terminal);
    assert!(text.contains("Couldn't fetch profile"), "got:\n{text}");
    assert!(text.contains("Total LOC"), "got:\n{text}");
}

#[test]
fn missing_username_shows_a_hint() {
    let view = StatsView::default();
    let terminal = draw(&view);
    let text = screen(&terminal);
    assert!(text.contains("No username configured"), "got:\n{text}");
}
