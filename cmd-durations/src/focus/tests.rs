//! Tests for focus probing with test doubles for the external tools.

use super::tools::{ActiveWindowQuery, AppInfoQuery};
use super::*;
use crate::config::ReporterConfig;
use anyhow::{Context as _, Result, bail};
use std::collections::HashMap;

fn init() {
    let _ = tracing_subscriber::fmt::try_init();
}

struct FixedWindow(&'static str);

impl ActiveWindowQuery for FixedWindow {
    fn active_window_id(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

struct FailingWindowQuery;

impl ActiveWindowQuery for FailingWindowQuery {
    fn active_window_id(&self) -> Result<String> {
        bail!("xdotool is not installed")
    }
}

#[derive(Default)]
struct FakeAppInfo {
    bundles: HashMap<String, String>,
    infos: HashMap<String, String>,
}

impl FakeAppInfo {
    fn with_bundle(mut self, bundle_id: &str, app_name: &str) -> Self {
        self.bundles
            .insert(bundle_id.to_string(), app_name.to_string());
        self
    }

    fn with_info(mut self, app_name: &str, info: &str) -> Self {
        self.infos.insert(app_name.to_string(), info.to_string());
        self
    }
}

impl AppInfoQuery for FakeAppInfo {
    fn app_name_for_bundle(&self, bundle_id: &str) -> Result<String> {
        self.bundles
            .get(bundle_id)
            .cloned()
            .with_context(|| format!("unknown bundle {bundle_id}"))
    }

    fn app_info(&self, app_name: &str) -> Result<String> {
        self.infos
            .get(app_name)
            .cloned()
            .with_context(|| format!("unknown application {app_name}"))
    }
}

#[test]
fn test_unfocused_probe() {
    init();
    assert!(!UnfocusedProbe.is_focused());
}

#[test]
fn test_probe_for_host_constructs() {
    init();
    // Construction only captures environment state, no external tool runs.
    let _probe = probe_for_host(&ReporterConfig::default());
    let _ = host_os();
}

#[test]
fn test_unsupported_os_never_focused() {
    init();
    let probe = probe_for_os(Os::Other, &ReporterConfig::default());
    assert!(!probe.is_focused());
}

#[test]
fn test_linux_no_window_id() {
    init();
    let probe = LinuxFocusProbe::new(None, Box::new(FixedWindow("123")));
    assert!(!probe.is_focused());

    let probe = LinuxFocusProbe::new(Some(String::new()), Box::new(FixedWindow("123")));
    assert!(!probe.is_focused());
}

#[test]
fn test_linux_matching_window() {
    init();
    let probe = LinuxFocusProbe::new(Some("123".to_string()), Box::new(FixedWindow("123")));
    assert!(probe.is_focused());
}

#[test]
fn test_linux_other_window_active() {
    init();
    let probe = LinuxFocusProbe::new(Some("123".to_string()), Box::new(FixedWindow("456")));
    assert!(!probe.is_focused());
}

#[test]
fn test_linux_query_failure_collapses_to_unfocused() {
    init();
    let probe = LinuxFocusProbe::new(Some("123".to_string()), Box::new(FailingWindowQuery));
    assert!(!probe.is_focused());
}

#[test]
fn test_darwin_bundle_id_in_front() {
    init();
    let query = FakeAppInfo::default()
        .with_bundle("com.googlecode.iterm2", "iTerm2")
        .with_info("iTerm2", r#""iTerm2" ASN:0x0-0x1e01e0: (in front)"#);
    let probe = DarwinFocusProbe::new(
        Some("com.googlecode.iterm2".to_string()),
        None,
        default_map(),
        Box::new(query),
    );
    assert!(probe.is_focused());
}

#[test]
fn test_darwin_bundle_id_not_in_front() {
    init();
    let query = FakeAppInfo::default()
        .with_bundle("com.googlecode.iterm2", "iTerm2")
        .with_info("iTerm2", r#""iTerm2" ASN:0x0-0x1e01e0:"#);
    let probe = DarwinFocusProbe::new(
        Some("com.googlecode.iterm2".to_string()),
        None,
        default_map(),
        Box::new(query),
    );
    assert!(!probe.is_focused());
}

#[test]
fn test_darwin_term_program_mapping() {
    init();
    // Bundle lookup fails, the mapped $TERM_PROGRAM name is used instead.
    let query = FakeAppInfo::default()
        .with_info("Sample Terminal", "Sample Terminal (in front)");
    let mut map = default_map();
    map.insert(
        "sample_term.app".to_string(),
        "Sample Terminal".to_string(),
    );
    let probe = DarwinFocusProbe::new(
        Some("com.example.unknown".to_string()),
        Some("Sample_Term.app".to_string()),
        map,
        Box::new(query),
    );
    assert!(probe.is_focused());
}

#[test]
fn test_darwin_unmapped_term_program_falls_back_to_itself() {
    init();
    let query = FakeAppInfo::default().with_info("PlainTermTest", "PlainTermTest (in front)");
    let probe = DarwinFocusProbe::new(
        None,
        Some("PlainTermTest".to_string()),
        default_map(),
        Box::new(query),
    );
    assert!(probe.is_focused());
}

#[test]
fn test_darwin_nothing_resolves() {
    init();
    let probe = DarwinFocusProbe::new(None, None, default_map(), Box::new(FakeAppInfo::default()));
    assert!(!probe.is_focused());
}

#[test]
fn test_darwin_app_info_failure_collapses_to_unfocused() {
    init();
    let query = FakeAppInfo::default().with_bundle("com.example.term", "Example Term");
    let probe = DarwinFocusProbe::new(
        Some("com.example.term".to_string()),
        None,
        default_map(),
        Box::new(query),
    );
    assert!(!probe.is_focused());
}

fn default_map() -> HashMap<String, String> {
    crate::config::default_term_program_map()
}
