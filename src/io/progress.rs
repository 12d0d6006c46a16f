//! Progress display for attempts and decided cells

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Attempts: {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Two-line display: attempts so far and cells decided in the current attempt
pub struct GenerationProgress {
    multi_progress: MultiProgress,
    attempt_bar: ProgressBar,
    cell_bar: ProgressBar,
}

impl GenerationProgress {
    /// Create the display for up to `max_attempts` attempts
    pub fn new(max_attempts: usize) -> Self {
        let multi_progress = MultiProgress::new();
        let attempt_bar = multi_progress.add(ProgressBar::new(max_attempts as u64));
        attempt_bar.set_style(ATTEMPT_STYLE.clone());
        let cell_bar = multi_progress.add(ProgressBar::new(0));
        cell_bar.set_style(CELL_STYLE.clone());

        Self {
            multi_progress,
            attempt_bar,
            cell_bar,
        }
    }

    /// Reset the cell bar for a new attempt
    pub fn start_attempt(&self, attempt: usize, cell_count: usize) {
        self.attempt_bar.set_position(attempt as u64);
        self.cell_bar.set_length(cell_count as u64);
        self.cell_bar.set_position(0);
        self.cell_bar.set_message(format!("attempt {}", attempt + 1));
    }

    /// Report decided cells of the current attempt
    pub fn update_cells(&self, decided: usize) {
        self.cell_bar.set_position(decided as u64);
    }

    /// Note a contradiction in the current attempt
    pub fn fail_attempt(&self) {
        self.attempt_bar.inc(1);
        self.attempt_bar.set_message("restarting after contradiction");
    }

    /// Mark the run finished and clear the display
    pub fn finish(&self, message: &'static str) {
        self.cell_bar.finish_and_clear();
        self.attempt_bar.finish_with_message(message);
        let _ = self.multi_progress.clear();
    }
}
