//! Stage-by-stage progress display for a single run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::pipeline::stage::{Stage, StageObserver};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advanced once per completed pipeline stage
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a bar sized to the number of pipeline stages
    pub fn new() -> Self {
        let bar = ProgressBar::new(Stage::ALL.len() as u64);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Label the bar with the file being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_prefix(display_name);
        self.bar.set_position(0);
    }

    /// Stages completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl StageObserver for ProgressManager {
    fn stage_started(&mut self, stage: Stage) {
        self.bar.set_message(stage.label());
    }

    fn stage_finished(&mut self, _stage: Stage) {
        self.bar.inc(1);
    }
}
