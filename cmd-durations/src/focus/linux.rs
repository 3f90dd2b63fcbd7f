//! X11 focus probe.

use super::FocusProbe;
use super::tools::{ActiveWindowQuery, Xdotool};
use tracing::warn;

/// The terminal emulator exports `$WINDOWID` at shell startup; the shell
/// window is focused iff it matches the currently active window id.
pub struct LinuxFocusProbe {
    window_id: Option<String>,
    query: Box<dyn ActiveWindowQuery>,
}

impl LinuxFocusProbe {
    pub fn new(window_id: Option<String>, query: Box<dyn ActiveWindowQuery>) -> Self {
        Self {
            window_id: window_id.filter(|id| !id.is_empty()),
            query,
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var("WINDOWID").ok(), Box::new(Xdotool))
    }
}

impl FocusProbe for LinuxFocusProbe {
    fn is_focused(&self) -> bool {
        let Some(window_id) = &self.window_id else {
            warn!(
                "$WINDOWID is unset, it should be set by the terminal application on shell \
                 startup; not able to find the active window"
            );
            return false;
        };

        match self.query.active_window_id() {
            Ok(active_id) => active_id == *window_id,
            Err(err) => {
                warn!("active window query failed: {err:#}");
                false
            }
        }
    }
}
