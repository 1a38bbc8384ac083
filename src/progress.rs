//! 照合の進捗表示（indicatif）

use indicatif::{ProgressBar, ProgressStyle};

pub struct MatchProgress {
    bar: ProgressBar,
}

impl MatchProgress {
    /// `quiet` なら何も表示しない
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(0)
        };
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message("照合中...");
        Self { bar }
    }

    pub fn update(&self, completed: usize, total: usize) {
        if self.bar.length() != Some(total as u64) {
            self.bar.set_length(total as u64);
        }
        self.bar.set_position(completed as u64);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("照合完了");
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
