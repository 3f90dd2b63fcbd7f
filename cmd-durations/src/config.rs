//! Reporter configuration, resolved once from the environment.

use std::collections::HashMap;
use std::env;
use tracing::warn;

/// Commands running longer than this many seconds are reported (seconds).
pub const DEFAULT_LONG_DURATION: u64 = 5;
/// Application name used for notifications when nothing else is configured.
pub const DEFAULT_APP_NAME: &str = "cmd-durations";

const LONG_DURATION_VAR: &str = "XONTRIB_CD_LONG_DURATION";
const TRIGGER_NOTIFICATION_VAR: &str = "XONTRIB_CD_TRIGGER_NOTIFICATION";
const APP_NAME_VAR: &str = "XONTRIB_CD_NOTIFICATION_APP_NAME";
const TERM_PROGRAM_MAP_VAR: &str = "XONTRIB_CD_TERM_PROGRAM_MAP";

/// Immutable configuration captured at initialization. Later environment
/// changes are not picked up.
#[derive(Debug, Clone, PartialEq)]
pub struct ReporterConfig {
    /// Threshold in seconds; only strictly longer commands are reported.
    pub long_duration: u64,
    /// Whether to send a desktop notification for qualifying commands.
    pub trigger_notification: bool,
    /// Application name shown on notifications, before prompt formatting.
    pub notification_app_name: String,
    /// Lowercased `$TERM_PROGRAM` value to application display name.
    pub term_program_map: HashMap<String, String>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            long_duration: DEFAULT_LONG_DURATION,
            trigger_notification: true,
            notification_app_name: DEFAULT_APP_NAME.to_string(),
            term_program_map: default_term_program_map(),
        }
    }
}

impl ReporterConfig {
    /// Resolve the configuration from the process environment.
    ///
    /// Malformed values are reported as warnings and fall back to their
    /// defaults; configuration never fails.
    pub fn from_env() -> Self {
        let long_duration = match env::var(LONG_DURATION_VAR) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => secs,
                Err(err) => {
                    warn!("invalid ${LONG_DURATION_VAR} value {raw:?}: {err}");
                    DEFAULT_LONG_DURATION
                }
            },
            Err(_) => DEFAULT_LONG_DURATION,
        };

        let trigger_notification = match env::var(TRIGGER_NOTIFICATION_VAR) {
            Ok(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warn!("invalid ${TRIGGER_NOTIFICATION_VAR} value {raw:?}, expected a boolean");
                true
            }),
            Err(_) => true,
        };

        let notification_app_name = env::var(APP_NAME_VAR)
            .or_else(|_| env::var("TITLE"))
            .unwrap_or_else(|_| DEFAULT_APP_NAME.to_string());

        let term_program_map = match env::var(TERM_PROGRAM_MAP_VAR) {
            Ok(raw) => merge_term_program_map(&raw),
            Err(_) => default_term_program_map(),
        };

        Self {
            long_duration,
            trigger_notification,
            notification_app_name,
            term_program_map,
        }
    }

    /// Look up the display name for a `$TERM_PROGRAM` value. Keys are
    /// matched case-insensitively.
    pub fn app_name_for_term_program(&self, term_program: &str) -> Option<&str> {
        self.term_program_map
            .get(&term_program.to_lowercase())
            .map(|name| name.as_str())
    }
}

/// Built-in `$TERM_PROGRAM` to application name mapping. The application
/// name registered with the OS rarely matches the identifier the terminal
/// exports, so common terminals get an explicit entry.
pub fn default_term_program_map() -> HashMap<String, String> {
    [
        ("iterm.app", "iTerm2"),
        ("apple_terminal", "Terminal"),
        ("vscode", "Code"),
        ("pycharm", "PyCharm"),
        ("kate", "Kate"),
    ]
    .iter()
    .map(|(key, val)| (key.to_string(), val.to_string()))
    .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse the user mapping as a JSON object and merge it over the defaults,
/// lowercasing keys. A malformed value keeps the defaults.
fn merge_term_program_map(raw: &str) -> HashMap<String, String> {
    let mut map = default_term_program_map();
    match serde_json::from_str::<HashMap<String, String>>(raw) {
        Ok(user_map) => {
            for (key, val) in user_map {
                map.insert(key.to_lowercase(), val);
            }
        }
        Err(err) => {
            warn!("invalid ${TERM_PROGRAM_MAP_VAR} value, expected a JSON object: {err}");
        }
    }
    map
}
