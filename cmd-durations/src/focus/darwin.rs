//! Darwin focus probe.

use super::FocusProbe;
use super::tools::{AppInfoQuery, LsAppInfo};
use crate::config::ReporterConfig;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Marker `lsappinfo info` prints for the frontmost application.
const IN_FRONT_MARKER: &str = "(in front)";

// $TERM_PROGRAM is invariant for the lifetime of a session, so resolved
// names are memoized per input.
static APP_NAME_CACHE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Resolves the terminal application name through `$__CFBundleIdentifier`
/// or `$TERM_PROGRAM`, then asks `lsappinfo` whether that application is
/// frontmost.
pub struct DarwinFocusProbe {
    bundle_id: Option<String>,
    term_program: Option<String>,
    term_program_map: HashMap<String, String>,
    query: Box<dyn AppInfoQuery>,
}

impl DarwinFocusProbe {
    pub fn new(
        bundle_id: Option<String>,
        term_program: Option<String>,
        term_program_map: HashMap<String, String>,
        query: Box<dyn AppInfoQuery>,
    ) -> Self {
        Self {
            bundle_id: bundle_id.filter(|id| !id.is_empty()),
            term_program: term_program.filter(|term| !term.is_empty()),
            term_program_map,
            query,
        }
    }

    pub fn from_env(config: &ReporterConfig) -> Self {
        Self::new(
            std::env::var("__CFBundleIdentifier").ok(),
            std::env::var("TERM_PROGRAM").ok(),
            config.term_program_map.clone(),
            Box::new(LsAppInfo),
        )
    }

    /// Map a `$TERM_PROGRAM` value to the application name, falling back to
    /// the raw value when no mapping exists.
    fn term_program_app_name(&self, term_program: &str) -> String {
        let key = term_program.to_lowercase();
        if let Some(name) = APP_NAME_CACHE.lock().get(&key) {
            return name.clone();
        }

        let name = self
            .term_program_map
            .get(&key)
            .cloned()
            .unwrap_or_else(|| term_program.to_string());
        APP_NAME_CACHE.lock().insert(key, name.clone());
        name
    }

    fn resolve_app_name(&self) -> Option<String> {
        if let Some(bundle_id) = &self.bundle_id {
            match self.query.app_name_for_bundle(bundle_id) {
                Ok(name) => return Some(name),
                Err(err) => {
                    warn!("failed to resolve application for bundle id {bundle_id}: {err:#}");
                }
            }
        }

        self.term_program
            .as_deref()
            .map(|term| self.term_program_app_name(term))
    }
}

impl FocusProbe for DarwinFocusProbe {
    fn is_focused(&self) -> bool {
        let Some(app_name) = self.resolve_app_name() else {
            warn!(
                term_program = ?self.term_program,
                term_program_map = ?self.term_program_map,
                "application not found by $__CFBundleIdentifier or $TERM_PROGRAM"
            );
            return false;
        };
        debug!("checking foreground state of {app_name}");

        match self.query.app_info(&app_name) {
            Ok(info) => {
                if info.trim().is_empty() {
                    warn!("application {app_name} not found in lsappinfo");
                }
                info.contains(IN_FRONT_MARKER)
            }
            Err(err) => {
                warn!("foreground state query for {app_name} failed: {err:#}");
                false
            }
        }
    }
}
