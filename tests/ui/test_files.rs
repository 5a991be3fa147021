//! Buffer tests for Files View

use ratatui::{Terminal, backend::TestBackend};

use folio::config::ColorScheme;
use folio::model::CommitSummary;
use folio::ui::theme::Palette;
use folio::ui::views::{FilesView, file_blocks};

use crate::common::{sample_commits, screen};

fn palette() -> Palette {
    Palette::for_scheme(ColorScheme::Auto)
}

fn draw(view: &mut FilesView, active: &[CommitSummary]) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), active, &palette()))
        .unwrap();
    terminal
}

#[test]
fn blocks_render_largest_file_first() {
    let commits = sample_commits();
    let blocks = file_blocks(&commits);
    assert_eq!(blocks[0].path, "src/index.js");
    assert_eq!(blocks[0].lines, 2);

    let mut view = FilesView::new();
    let terminal = draw(&mut view, &commits);
    let text = screen(&terminal);

    assert!(text.contains("Files touched (4)"), "got:\n{text}");
    let idx = text.find("src/index.js").expect("biggest file shown");
    let css = text.find("style.css").expect("css file shown");
    assert!(idx < css, "descending by line count:\n{text}");
}

#[test]
fn block_set_follows_the_active_subset() {
    let commits = sample_commits();
    // Only the first commit active: two files.
    let blocks = file_blocks(&commits[..1]);
    assert_eq!(blocks.len(), 2);

    let mut view = FilesView::new();
    let terminal = draw(&mut view, &commits[..1]);
    let text = screen(&terminal);
    assert!(text.contains("Files touched (2)"), "got:\n{text}");
    assert!(!text.contains("index.html"), "inactive files hidden:\n{text}");
}

#[test]
fn empty_active_set_shows_the_placeholder() {
    let mut view = FilesView::new();
    let terminal = draw(&mut view, &[]);
    let text = screen(&terminal);
    assert!(
        text.contains("No commits in the current window."),
        "got:\n{text}"
    );
}
