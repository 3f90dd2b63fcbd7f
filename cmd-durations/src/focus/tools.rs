//! External query tools behind narrow capability traits, so probes can be
//! exercised with test doubles.

use anyhow::{Context as _, Result, bail};
use std::process::Command;

/// Query the identifier of the currently active window.
pub trait ActiveWindowQuery {
    fn active_window_id(&self) -> Result<String>;
}

/// `xdotool getactivewindow` on X11.
#[derive(Debug, Default)]
pub struct Xdotool;

impl ActiveWindowQuery for Xdotool {
    fn active_window_id(&self) -> Result<String> {
        let output = Command::new("xdotool")
            .arg("getactivewindow")
            .output()
            .context("failed to run xdotool, make sure it is installed")?;
        if !output.status.success() {
            bail!("xdotool exited with {}", output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Query application metadata and foreground state.
pub trait AppInfoQuery {
    /// Resolve a bundle identifier to the application display name.
    fn app_name_for_bundle(&self, bundle_id: &str) -> Result<String>;

    /// Raw info for the named application, including its foreground state.
    fn app_info(&self, app_name: &str) -> Result<String>;
}

/// `lsappinfo` on Darwin.
#[derive(Debug, Default)]
pub struct LsAppInfo;

impl AppInfoQuery for LsAppInfo {
    fn app_name_for_bundle(&self, bundle_id: &str) -> Result<String> {
        let output = Command::new("lsappinfo")
            .arg("find")
            .arg(format!("bundleID={bundle_id}"))
            .output()
            .context("failed to run lsappinfo")?;
        if !output.status.success() {
            bail!("lsappinfo exited with {}", output.status);
        }

        // `lsappinfo find` prints an ASN token like
        // `ASN:0x0-0x1e01e0-"iTerm2":`; the display name is the first
        // quoted field.
        let out = String::from_utf8_lossy(&output.stdout);
        out.split('"')
            .nth(1)
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .with_context(|| format!("no application name in lsappinfo output {:?}", out.trim()))
    }

    fn app_info(&self, app_name: &str) -> Result<String> {
        let output = Command::new("lsappinfo")
            .args(["info", "-app", app_name])
            .output()
            .context("failed to run lsappinfo")?;
        if !output.status.success() {
            bail!("lsappinfo exited with {}", output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
