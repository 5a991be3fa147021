//! Buffer tests for Projects View

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::TestBackend};

use folio::config::ColorScheme;
use folio::ui::theme::Palette;
use folio::ui::views::{ProjectsInputMode, ProjectsView};

use crate::common::{sample_projects, screen};

fn palette() -> Palette {
    Palette::for_scheme(ColorScheme::Auto)
}

fn draw(view: &mut ProjectsView) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), &palette()))
        .unwrap();
    terminal
}

#[test]
fn cards_render_newest_first_with_missing_years_last() {
    let mut view = ProjectsView::new();
    view.set_projects(sample_projects());

    let terminal = draw(&mut view);
    let text = screen(&terminal);

    let p1 = text.find("P1").expect("P1 rendered");
    let p2 = text.find("P2").expect("P2 rendered");
    let p3 = text.find("P3").expect("P3 rendered");
    assert!(p2 < p1 && p1 < p3, "expected P2, P1, P3 order:\n{text}");
}

#[test]
fn rendering_is_idempotent() {
    let mut view = ProjectsView::new();
    view.set_projects(sample_projects());

    let first = screen(&draw(&mut view));
    let second = screen(&draw(&mut view));
    assert_eq!(first, second);
}

#[test]
fn zero_matches_show_the_placeholder_and_an_empty_pie() {
    let mut view = ProjectsView::new();
    view.set_projects(sample_projects());
    view.set_query("no such project");

    assert!(view.year_buckets().is_empty());

    let terminal = draw(&mut view);
    let text = screen(&terminal);
    assert!(text.contains("No projects to show yet."), "got:\n{text}");
    assert!(!text.contains("2023"), "legend should be empty:\n{text}");
    assert!(!text.contains("2024"), "legend should be empty:\n{text}");
}

#[test]
fn legend_lists_buckets_from_the_text_filtered_set() {
    let mut view = ProjectsView::new();
    view.set_projects(sample_projects());

    let terminal = draw(&mut view);
    let text = screen(&terminal);
    assert!(text.contains("2023"), "got:\n{text}");
    assert!(text.contains("2024"), "got:\n{text}");

    // Filtering to P1 drops the 2024 wedge but keeps the pie.
    view.set_query("First");
    let terminal = draw(&mut view);
    let text = screen(&terminal);
    assert!(text.contains("2023"), "got:\n{text}");
    assert!(!text.contains("2024"), "got:\n{text}");
}

#[test]
fn year_toggle_filters_cards_but_not_the_legend() {
    let mut view = ProjectsView::new();
    view.set_projects(sample_projects());
    view.toggle_year(1); // 2024

    let terminal = draw(&mut view);
    let text = screen(&terminal);

    assert!(text.contains("P2"), "2024 project stays:\n{text}");
    assert!(!text.contains("P1"), "2023 project filtered out:\n{text}");
    // Both wedges stay clickable.
    assert!(text.contains("2023"), "legend keeps 2023:\n{text}");
    assert!(text.contains("[Year: 2024]"), "title shows filter:\n{text}");
}

#[test]
fn typing_in_search_mode_filters_live() {
    let mut view = ProjectsView::new();
    view.set_projects(sample_projects());

    let _ = view.handle_key(KeyEvent::from(KeyCode::Char('/')));
    assert_eq!(view.input_mode, ProjectsInputMode::SearchInput);

    for c in "p1".chars() {
        let _ = view.handle_key(KeyEvent::from(KeyCode::Char(c)));
    }
    assert_eq!(view.visible().len(), 1);

    let terminal = draw(&mut view);
    let text = screen(&terminal);
    assert!(text.contains("Search: p1"), "input bar visible:\n{text}");
    assert!(text.contains("P1"), "match rendered:\n{text}");
    assert!(!text.contains("P2"), "non-match hidden:\n{text}");
}

#[test]
fn escape_cancels_the_search_and_restores_everything() {
    let mut view = ProjectsView::new();
    view.set_projects(sample_projects());

    let _ = view.handle_key(KeyEvent::from(KeyCode::Char('/')));
    let _ = view.handle_key(KeyEvent::from(KeyCode::Char('z')));
    assert_eq!(view.visible().len(), 0);

    let _ = view.handle_key(KeyEvent::from(KeyCode::Esc));
    assert_eq!(view.input_mode, ProjectsInputMode::Normal);
    assert_eq!(view.visible().len(), 3);
}

#[test]
fn load_error_is_shown_inline() {
    let mut view = ProjectsView::new();
    view.load_error = Some("invalid project data".to_string());
    let terminal = draw(&mut view);
    let text = screen(&terminal);
    assert!(text.contains("Couldn't load projects."), "got:\n{text}");
}
