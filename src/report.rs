//! Operator-facing output.
//!
//! Every component receives a `&dyn Reporter` instead of printing on its own,
//! so a run can be observed (and asserted on in tests) without capturing
//! stdout. [`ConsoleReporter`] is the terminal implementation:
//!
//! ```text
//! [o] Importing playlist to Spotify...
//! [✓] Playlist import completed.
//! [!] Spotify error: 404 Not Found
//! ```

use std::sync::Mutex;

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

use crate::types::TrackEntry;

pub trait Reporter: Send + Sync {
    /// General information and status updates.
    fn info(&self, message: &str);

    /// Positive feedback after a step completed.
    fn success(&self, message: &str);

    /// Recoverable problems the operator should notice.
    fn warning(&self, message: &str);

    /// Failures, recovered or fatal.
    fn error(&self, message: &str);

    /// Starts a progress indication over `total` steps.
    fn start_progress(&self, _total: u64, _message: &str) {}

    /// Marks one step as done; `label` names the step.
    fn advance(&self, _label: &str) {}

    fn finish_progress(&self) {}
}

/// Prints the extracted playlist, one `{title} {separator} {artist}` per line.
pub fn playlist_details(reporter: &dyn Reporter, entries: &[TrackEntry], separator: &str) {
    reporter.info("Playlist Details:");
    for entry in entries {
        reporter.info(&format!("{} {} {}", entry.title, separator, entry.artist));
    }
}

/// Prints the entries that could not be matched, in accumulation order.
pub fn not_found(reporter: &dyn Reporter, not_found: &[String]) {
    if not_found.is_empty() {
        return;
    }

    reporter.warning("The following songs could not be found on Spotify:");
    for song in not_found {
        reporter.info(song);
    }
}

/// Colored terminal output with an `indicatif` bar during the import.
#[derive(Default)]
pub struct ConsoleReporter {
    progress: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn print(&self, tag: ColoredString, message: &str) {
        let line = format!("[{}] {}", tag, message);
        match self.progress.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(pb) => pb.println(line),
                None => println!("{}", line),
            },
            Err(_) => println!("{}", line),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        self.print("o".blue().bold(), message);
    }

    fn success(&self, message: &str) {
        self.print("✓".green().bold(), message);
    }

    fn warning(&self, message: &str) {
        self.print("!".yellow().bold(), message);
    }

    fn error(&self, message: &str) {
        self.print("!".red().bold(), message);
    }

    fn start_progress(&self, total: u64, message: &str) {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::with_template("{msg} {wide_bar:.green} {pos}/{len} [{elapsed_precise}]")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.set_message(message.to_string());

        if let Ok(mut guard) = self.progress.lock() {
            if let Some(previous) = guard.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn advance(&self, _label: &str) {
        if let Ok(guard) = self.progress.lock() {
            if let Some(pb) = guard.as_ref() {
                pb.inc(1);
            }
        }
    }

    fn finish_progress(&self) {
        if let Ok(mut guard) = self.progress.lock() {
            if let Some(pb) = guard.take() {
                pb.finish();
            }
        }
    }
}
