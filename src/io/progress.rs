//! Batch progress display for multi-pattern generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Patterns: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many patterns of a batch have been written
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress bar; call [`Self::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show a bar sized for `pattern_count` patterns
    pub fn initialize(&mut self, pattern_count: usize) {
        let bar = ProgressBar::new(pattern_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
    }

    /// Label the bar with the pattern currently being generated
    pub fn start_pattern(&self, size: usize, seed: u64) {
        self.bar.set_message(format!("{size}x{size} seed {seed}"));
    }

    /// Count one finished or skipped pattern
    pub fn complete_pattern(&self) {
        self.bar.inc(1);
    }

    /// Number of patterns counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar
    pub fn finish(&self) {
        self.bar.finish_with_message("All patterns written");
    }
}
