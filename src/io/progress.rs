//! Progress display while replaying placement scripts

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks accepted and rejected placements during a replay
pub struct PlacementProgress {
    bar: ProgressBar,
    placed: usize,
    rejected: usize,
}

impl PlacementProgress {
    /// Create a visible progress bar over `total` placements
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self::with_bar(bar)
    }

    /// Create a tracker that counts without drawing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    const fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            placed: 0,
            rejected: 0,
        }
    }

    /// Record the outcome of one placement
    pub fn record(&mut self, accepted: bool) {
        if accepted {
            self.placed += 1;
        } else {
            self.rejected += 1;
        }
        self.bar.set_message(self.summary());
        self.bar.inc(1);
    }

    /// Number of placements that succeeded
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// Number of placements that were rejected
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// Human-readable tally
    pub fn summary(&self) -> String {
        format!("{} placed, {} rejected", self.placed, self.rejected)
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
