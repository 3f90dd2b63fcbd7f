//! Window-focus probing.
//!
//! One probe implementation per supported platform, selected once at
//! startup. A probe never fails: anything that prevents a definite answer
//! is logged and collapsed to "not focused", which lets the notification
//! path proceed.

use crate::config::ReporterConfig;
use cfg_if::cfg_if;
use once_cell::sync::Lazy;

pub mod darwin;
pub mod linux;
pub mod tools;

#[cfg(test)]
mod tests;

pub use darwin::DarwinFocusProbe;
pub use linux::LinuxFocusProbe;

/// Host operating system identity, as far as focus probing cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Darwin,
    Other,
}

static HOST_OS: Lazy<Os> = Lazy::new(detect_os);

cfg_if! {
    if #[cfg(target_os = "linux")] {
        fn detect_os() -> Os {
            Os::Linux
        }
    } else if #[cfg(target_os = "macos")] {
        fn detect_os() -> Os {
            Os::Darwin
        }
    } else {
        fn detect_os() -> Os {
            Os::Other
        }
    }
}

/// The host OS identity, computed once per process.
pub fn host_os() -> Os {
    *HOST_OS
}

pub trait FocusProbe {
    /// Whether the terminal window currently has input focus.
    fn is_focused(&self) -> bool;
}

/// Probe for platforms without a focus strategy; never reports focus.
#[derive(Debug, Default)]
pub struct UnfocusedProbe;

impl FocusProbe for UnfocusedProbe {
    fn is_focused(&self) -> bool {
        false
    }
}

/// Build the probe for `os`, capturing probe inputs from the process
/// environment.
pub fn probe_for_os(os: Os, config: &ReporterConfig) -> Box<dyn FocusProbe> {
    match os {
        Os::Linux => Box::new(LinuxFocusProbe::from_env()),
        Os::Darwin => Box::new(DarwinFocusProbe::from_env(config)),
        Os::Other => Box::new(UnfocusedProbe),
    }
}

/// Build the probe for the host platform.
pub fn probe_for_host(config: &ReporterConfig) -> Box<dyn FocusProbe> {
    probe_for_os(host_os(), config)
}
