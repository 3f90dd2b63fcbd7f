//! Show long running command durations in the prompt, with an optional
//! desktop notification when a slow command finishes while the terminal
//! window is not focused.
//!
//! The host shell owns the command history and the prompt renderer; this
//! crate reads the most recent history entry, formats the elapsed time and
//! registers a `long_cmd_duration` prompt field the host can render.

use tracing::debug;

pub mod config;
pub mod duration;
pub mod field;
pub mod focus;
pub mod history;
pub mod notify;
pub mod reporter;

pub use config::ReporterConfig;
pub use field::{PromptField, PromptFieldRegistry};
pub use history::{CommandRecord, HistoryStore};
pub use notify::{Notifier, PromptFormatter};
pub use reporter::DurationReporter;

/// Register the `long_cmd_duration` prompt field with default wiring.
///
/// Configuration is read from the environment once, the focus probe is
/// selected once for the host platform, and the configured application name
/// is passed to the notification service verbatim. Hosts with a prompt
/// template language should use [`init_with_formatter`] instead.
pub fn init(registry: &mut PromptFieldRegistry) {
    init_with_formatter(registry, Box::new(|name: &str| name.to_string()));
}

/// Register the `long_cmd_duration` prompt field, expanding the configured
/// notification application name through the host's prompt formatter.
pub fn init_with_formatter(registry: &mut PromptFieldRegistry, formatter: PromptFormatter) {
    let config = ReporterConfig::from_env();
    debug!("registering {} prompt field: {:?}", reporter::FIELD_NAME, config);

    let probe = focus::probe_for_host(&config);
    let notifier = Notifier::desktop(formatter);
    registry.register(Box::new(DurationReporter::new(config, probe, notifier)));
}
