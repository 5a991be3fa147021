//! Error and notification message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for overlay display.
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Build a notification line for title bar display.
///
/// A notification longer than `max_width` is truncated with an ellipsis;
/// when there is no room at all, an empty line comes back.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    };

    let fixed = 3 + label.len() + 1; // " | " + label + " "
    let message_chars = notification.message.chars().count();
    let message = match max_width {
        Some(max) if fixed + message_chars + 1 > max => {
            let available = max.saturating_sub(fixed + 2);
            if available == 0 {
                return Line::from(vec![]);
            }
            let truncated: String = notification.message.chars().take(available).collect();
            format!("{truncated}… ")
        }
        _ => format!("{} ", notification.message),
    };

    if message.trim().is_empty() || message == "… " {
        return Line::from(vec![]);
    }

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{label} "),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(message, Style::default().fg(color)),
    ])
}
