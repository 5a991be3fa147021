//! Buffer tests for Timeline View

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use folio::config::ColorScheme;
use folio::ui::theme::Palette;
use folio::ui::views::{Region, TimelineView};

use crate::common::{sample_commits, screen};

fn palette() -> Palette {
    Palette::for_scheme(ColorScheme::Auto)
}

fn draw(view: &mut TimelineView) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), &palette()))
        .unwrap();
    terminal
}

#[test]
fn renders_slider_chart_and_story() {
    let mut view = TimelineView::new();
    view.set_commits(sample_commits());

    let terminal = draw(&mut view);
    let text = screen(&terminal);

    assert!(text.contains("Time travel"), "missing slider:\n{text}");
    assert!(
        text.contains("Commits by time of day (3)"),
        "missing chart title:\n{text}"
    );
    assert!(text.contains("Story (3/3)"), "missing story panel:\n{text}");
    assert!(text.contains("100%"), "missing progress label:\n{text}");
}

#[test]
fn empty_view_shows_the_no_data_state() {
    let mut view = TimelineView::new();
    let terminal = draw(&mut view);
    let text = screen(&terminal);
    assert!(text.contains("No commit data loaded."), "got:\n{text}");
}

#[test]
fn load_error_is_shown_inline() {
    let mut view = TimelineView::new();
    view.load_error = Some("failed to read loc.csv".to_string());
    let terminal = draw(&mut view);
    let text = screen(&terminal);
    assert!(text.contains("Couldn't load the commit log."), "got:\n{text}");
    assert!(text.contains("failed to read loc.csv"), "got:\n{text}");
}

#[test]
fn hour_axis_is_inverted_with_midnight_at_the_bottom() {
    let mut view = TimelineView::new();
    view.set_commits(sample_commits());
    let terminal = draw(&mut view);
    let text = screen(&terminal);

    let top_label = text.find("18:00").expect("18:00 label");
    let bottom_label = text.find("06:00").expect("06:00 label");
    assert!(
        top_label < bottom_label,
        "later hours should sit above earlier ones:\n{text}"
    );
}

#[test]
fn selection_after_render_reports_its_summary() {
    let mut view = TimelineView::new();
    view.set_commits(sample_commits());

    // First render computes the chart geometry.
    let _ = draw(&mut view);

    // A region covering the whole screen covers the whole plot.
    view.set_region(Some(Region::from_corners((0, 0), (99, 29))));
    assert_eq!(view.summary().commit_count, 3);

    let terminal = draw(&mut view);
    let text = screen(&terminal);
    assert!(text.contains("3 commits selected"), "got:\n{text}");
}

#[test]
fn narrowing_after_selection_clears_it() {
    let mut view = TimelineView::new();
    view.set_commits(sample_commits());
    let _ = draw(&mut view);

    view.set_region(Some(Region::from_corners((0, 0), (99, 29))));
    assert_eq!(view.summary().commit_count, 3);

    view.set_progress(0.0);
    assert!(view.region.is_none());
    assert_eq!(view.summary().commit_count, 0);
}

#[test]
fn clicking_the_slider_scrubs_the_window() {
    let mut view = TimelineView::new();
    view.set_commits(sample_commits());
    let _ = draw(&mut view);

    // The slider occupies the top bordered row; click its left edge.
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 1,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    let _ = view.handle_mouse(click);

    assert_eq!(view.progress(), 0.0);
    assert_eq!(view.active_commits().len(), 1);
}

#[test]
fn window_keys_walk_progress_and_story() {
    use crossterm::event::{KeyCode, KeyEvent};

    let mut view = TimelineView::new();
    view.set_commits(sample_commits());
    let _ = draw(&mut view);

    let _ = view.handle_key(KeyEvent::from(KeyCode::Home));
    assert_eq!(view.progress(), 0.0);
    assert_eq!(view.active_commits().len(), 1);

    let _ = view.handle_key(KeyEvent::from(KeyCode::End));
    assert_eq!(view.progress(), 100.0);
    assert_eq!(view.active_commits().len(), 3);

    // Walking the story up moves the window back with the cursor.
    let _ = view.handle_key(KeyEvent::from(KeyCode::Char('g')));
    assert_eq!(view.step_index, 0);
    assert_eq!(view.active_commits().len(), 1);
}
