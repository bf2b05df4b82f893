//! Spinner shown under the live table while a check runs.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner for the check currently running.
pub struct CheckSpinner {
    bar: ProgressBar,
}

impl CheckSpinner {
    /// Start a spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Current message.
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Stop the spinner and erase its line.
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for CheckSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// Spinner text for a check.
pub fn check_message(subject: &str, condition: &str) -> String {
    format!("Checking {} {}...", subject, condition)
}
