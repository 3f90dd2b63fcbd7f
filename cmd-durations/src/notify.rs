//! Desktop notification dispatch for qualifying commands.

use crate::config::ReporterConfig;
use crate::focus::FocusProbe;
use crate::history::CommandRecord;
use anyhow::{Context as _, Result};
use notify_rust::Notification;
use tracing::{debug, warn};

/// Host hook that expands prompt template placeholders in the configured
/// application name.
pub type PromptFormatter = Box<dyn Fn(&str) -> String>;

/// A fully resolved notification, ready to hand to the platform service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub app_name: String,
    pub title: String,
    pub message: String,
}

/// Delivery of a notification to the platform service.
pub trait NotificationSink {
    fn send(&self, request: &NotificationRequest) -> Result<()>;
}

/// Desktop notifications through the OS notification service.
#[derive(Debug, Default)]
pub struct DesktopSink;

impl NotificationSink for DesktopSink {
    fn send(&self, request: &NotificationRequest) -> Result<()> {
        Notification::new()
            .appname(&request.app_name)
            .summary(&request.title)
            .body(&request.message)
            .show()
            .map(|_| ())
            .context("failed to send desktop notification")
    }
}

/// Builds and sends the completion notification for a slow command.
pub struct Notifier {
    sink: Box<dyn NotificationSink>,
    formatter: PromptFormatter,
}

impl Notifier {
    pub fn new(sink: Box<dyn NotificationSink>, formatter: PromptFormatter) -> Self {
        Self { sink, formatter }
    }

    /// Notifier wired to the desktop notification service.
    pub fn desktop(formatter: PromptFormatter) -> Self {
        Self::new(Box::new(DesktopSink), formatter)
    }

    /// Send the completion notification for `record`, unless the terminal
    /// gained focus since the threshold decision was made. The focus state
    /// is re-checked here so a window switch between decision and send does
    /// not produce a stray notification.
    pub fn notify(
        &self,
        config: &ReporterConfig,
        focus: &dyn FocusProbe,
        record: &CommandRecord,
        readable: &str,
    ) {
        if focus.is_focused() {
            debug!("terminal window is focused, suppressing notification");
            return;
        }

        let verdict = if record.failed() { "Failed" } else { "Done" };
        let request = NotificationRequest {
            app_name: (self.formatter)(&config.notification_app_name),
            title: record.input.clone(),
            message: format!("{verdict} in {readable}"),
        };

        debug!("sending notification: {request:?}");
        if let Err(err) = self.sink.send(&request) {
            warn!("{err:#}");
        }
    }
}
