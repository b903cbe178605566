use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{prefix:.bold} {bar:40.cyan/blue} {pos}/{len} {msg}";

/// Progress of one pipeline stage; every method is a no-op when disabled.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Bar labelled `stage` over `total` items.
    #[must_use]
    pub fn stage(stage: &str, total: u64, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total).with_prefix(stage.to_string());
        bar.set_style(ProgressStyle::with_template(TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_bar()));
        Self { bar: Some(bar) }
    }

    /// Show the item currently being worked on.
    pub fn current(&self, item: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(item.to_string());
        }
    }

    pub fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn done(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Leave the bar on screen with `reason` next to it.
    pub fn fail(&self, reason: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(reason.to_string());
        }
    }
}
