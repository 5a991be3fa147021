//! Side effects: opening links and persisting the theme preference

use std::process::{Command, Stdio};

use crate::model::Notification;
use crate::ui::theme::Palette;

use super::state::App;

/// Suspend the TUI so a child process owns the terminal, restoring the
/// alternate screen and raw mode when the guard drops.
///
/// The link opener usually hands off to a GUI browser, but `$BROWSER`
/// setups can resolve to a terminal browser with inherited stdio.
fn suspend_terminal() -> impl Drop {
    use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
    use crossterm::execute;
    use crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    };
    use std::io::stdout;

    let _ = disable_raw_mode();
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);

    scopeguard::guard((), |_| {
        let _ = enable_raw_mode();
        let _ = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture);
    })
}

/// Platform launcher for URLs.
fn opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

impl App {
    // ── Notification helpers ──────────────────────────────────────────

    pub(crate) fn notify_success(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::success(msg));
    }

    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::info(msg));
    }

    pub(crate) fn notify_warning(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::warning(msg));
    }

    // ── Link opening ──────────────────────────────────────────────────

    /// Open a demo/repo/commit link in a new browsing context.
    pub(crate) fn open_link(&mut self, url: &str) {
        let command = opener();
        let _guard = suspend_terminal();
        let result = Command::new(command)
            .arg(url)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match result {
            Ok(status) if status.success() => {
                tracing::info!(%url, "opened link");
                self.notify_info(format!("Opened {url}"));
            }
            Ok(status) => {
                self.error_message = Some(format!("{command} exited with {status}"));
            }
            Err(err) => {
                self.error_message = Some(format!("Couldn't open link: {err}"));
            }
        }
    }

    // ── Theme ─────────────────────────────────────────────────────────

    /// Cycle the color scheme, apply it, and persist the preference.
    pub(crate) fn cycle_theme(&mut self) {
        let scheme = self.config.color_scheme.cycle();
        self.config.color_scheme = scheme;
        self.palette = Palette::for_scheme(scheme);

        match self.config.save() {
            Ok(()) => self.notify_success(format!("Theme: {}", scheme.label())),
            Err(err) => {
                tracing::warn!(%err, "config save failed");
                self.notify_warning(format!("Theme: {} (not saved: {err})", scheme.label()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::{App, Options};

    #[test]
    fn cycle_theme_applies_the_new_palette() {
        let mut app = App::new(&Options::default());
        let before = app.config.color_scheme;
        app.cycle_theme();
        assert_ne!(app.config.color_scheme, before);
        assert!(app.notification.is_some());
    }
}
