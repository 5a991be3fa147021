//! Files View - per-file breakdown of the active commits
//!
//! One block per distinct file touched by the commits inside the time
//! window, sized by line count and colored by inferred file type.

mod render;

use crossterm::event::KeyEvent;

use crate::keys;
use crate::model::CommitSummary;

/// One file's share of the active commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    pub path: String,
    pub type_tag: String,
    pub lines: usize,
}

/// Flatten the active commits' rows and group them by file path,
/// descending by line count (ties broken by path for a stable order).
pub fn file_blocks(active: &[CommitSummary]) -> Vec<FileBlock> {
    let mut order: Vec<String> = Vec::new();
    let mut lines_by_file: std::collections::HashMap<String, (String, usize)> =
        std::collections::HashMap::new();

    for commit in active {
        for row in commit.lines() {
            let entry = lines_by_file
                .entry(row.file.clone())
                .or_insert_with(|| {
                    order.push(row.file.clone());
                    (row.inferred_type().to_string(), 0)
                });
            entry.1 += 1;
        }
    }

    let mut blocks: Vec<FileBlock> = order
        .into_iter()
        .filter_map(|path| {
            lines_by_file.remove(&path).map(|(type_tag, lines)| FileBlock {
                path,
                type_tag,
                lines,
            })
        })
        .collect();
    blocks.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.path.cmp(&b.path)));
    blocks
}

/// Files View state
#[derive(Debug, Default)]
pub struct FilesView {
    /// Scroll offset for display
    pub scroll_offset: usize,
}

impl FilesView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent, block_count: usize) {
        match key.code {
            code if keys::is_move_down(code) => {
                if self.scroll_offset + 1 < block_count {
                    self.scroll_offset += 1;
                }
            }
            code if keys::is_move_up(code) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            keys::GO_TOP => self.scroll_offset = 0,
            keys::GO_BOTTOM => {
                self.scroll_offset = block_count.saturating_sub(1);
            }
            _ => {}
        }
    }
}
