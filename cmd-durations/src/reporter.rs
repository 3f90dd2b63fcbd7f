//! The `long_cmd_duration` prompt field.

use crate::config::ReporterConfig;
use crate::duration::secs_to_readable;
use crate::field::PromptField;
use crate::focus::FocusProbe;
use crate::history::HistoryStore;
use crate::notify::Notifier;
use tracing::debug;

/// Name of the prompt field this crate registers.
pub const FIELD_NAME: &str = "long_cmd_duration";

/// Reports the elapsed time of the most recent command once it exceeds the
/// configured threshold, and triggers a desktop notification when the
/// terminal is not focused.
pub struct DurationReporter {
    config: ReporterConfig,
    focus: Box<dyn FocusProbe>,
    notifier: Notifier,
}

impl DurationReporter {
    pub fn new(config: ReporterConfig, focus: Box<dyn FocusProbe>, notifier: Notifier) -> Self {
        Self {
            config,
            focus,
            notifier,
        }
    }
}

impl PromptField for DurationReporter {
    fn name(&self) -> &str {
        FIELD_NAME
    }

    fn render(&self, history: &dyn HistoryStore) -> Option<String> {
        // No history yet means no value at all, not a zero duration.
        let record = history.last_command()?;

        let elapsed = record.elapsed_secs();
        if elapsed <= self.config.long_duration as f64 {
            debug!("command took {elapsed}s, under the {}s threshold", self.config.long_duration);
            return None;
        }

        let readable = secs_to_readable(elapsed);
        if self.config.trigger_notification {
            self.notifier
                .notify(&self.config, self.focus.as_ref(), &record, &readable);
        }
        Some(readable)
    }
}
