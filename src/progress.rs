use std::path::Path;

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Status output on stderr, with one spinner per generator
///
/// Spinners are only drawn on an interactive terminal; the summary lines are
/// always printed.
pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
        }
    }

    pub fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        let spinner_style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(SPINNER_FRAMES);
        pb.set_style(spinner_style);
        pb.set_message(message.to_string());
        if self.term.is_term() {
            pb.enable_steady_tick(TICK_INTERVAL);
        }
        pb
    }

    pub fn start_loading(&self, manifest: &Path) {
        eprintln!(
            "{} Loading manifest {}...",
            style("🔍").cyan(),
            style(manifest.display()).dim()
        );
    }

    pub fn start_generating(&self, kind: &str, count: usize) {
        eprintln!(
            "{} Generating {} {} {}...",
            style("📊").cyan(),
            style(count).yellow().bold(),
            kind,
            pluralize("graph", count)
        );
    }

    /// Spinner shown while the graph for `file_name` is built
    pub fn start_generator(&self, file_name: &str) -> ProgressBar {
        self.create_spinner(&format!("Building {file_name}..."))
    }

    pub fn finish_generator(&self, pb: &ProgressBar, file_name: &str, nodes: usize, edges: usize) {
        pb.finish_with_message(format!(
            "{} {} ({} {}, {} {})",
            style("✓").green(),
            file_name,
            nodes,
            pluralize("node", nodes),
            edges,
            pluralize("edge", edges)
        ));
    }

    pub fn fail_generator(&self, pb: &ProgressBar, file_name: &str) {
        pb.abandon_with_message(format!("{} {}", style("✗").red(), file_name));
    }

    pub fn finish_writing(&self, count: usize, destination: Option<&Path>) {
        let _ = self.term.clear_line();
        match destination {
            Some(dir) => eprintln!(
                "{} Wrote {} {} to {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("graph", count),
                style(dir.display()).bold()
            ),
            None => eprintln!(
                "{} Rendered {} {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("graph", count)
            ),
        }
    }
}
