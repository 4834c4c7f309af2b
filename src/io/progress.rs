//! Optional progress bars for long-running grid loops

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} [{{elapsed_precise}}]"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for one phase of work (carving, frame capture, encoding)
///
/// Library entry points default to a hidden reporter; the command-line front
/// end passes an enabled one unless `--quiet` is given, and each phase then
/// opens its own bar through [`ProgressReporter::phase`].
#[derive(Debug, Clone, Default)]
pub struct ProgressReporter {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// A reporter that never draws
    pub const fn hidden() -> Self {
        Self {
            enabled: false,
            bar: None,
        }
    }

    /// A reporter with no bar of its own whose phases are drawn
    pub const fn enabled() -> Self {
        Self {
            enabled: true,
            bar: None,
        }
    }

    /// A drawn bar of `total` steps labelled with `message`
    pub fn visible(total: usize, message: &'static str) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message(message);
        Self {
            enabled: true,
            bar: Some(bar),
        }
    }

    /// Start a new phase that inherits whether this reporter draws
    pub fn phase(&self, total: usize, message: &'static str) -> Self {
        if self.is_enabled() {
            Self::visible(total, message)
        } else {
            Self::hidden()
        }
    }

    /// Whether phases opened from this reporter are drawn
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Advance by `delta` steps
    pub fn inc(&self, delta: usize) {
        if let Some(ref bar) = self.bar {
            bar.inc(delta as u64);
        }
    }

    /// Mark the phase complete and clear the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
