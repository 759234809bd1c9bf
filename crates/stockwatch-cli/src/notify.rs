//! Desktop alerts for items that came back in stock.
//!
//! The OS notification itself is delegated to the platform helper binary
//! (`terminal-notifier` on macOS, `notify-send` elsewhere on unix). No
//! delivery acknowledgement is expected.

use std::process::ExitStatus;

use stockwatch_scraper::StockFact;
use thiserror::Error;
use tokio::process::Command;

pub(crate) const IN_STOCK_TITLE: &str = "GO GO GO CLICK ME BUY NOW!!!";
pub(crate) const SELF_TEST_TITLE: &str = "stockwatch notification test";
pub(crate) const SELF_TEST_MESSAGE: &str = "If you can see this, notifications are working.";

const APP_NAME: &str = "stockwatch";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alert {
    pub title: String,
    pub message: String,
    /// URL opened when the notification is clicked.
    pub open_target: Option<String>,
}

impl Alert {
    /// Alert for an available item found while polling `target_url`.
    pub(crate) fn in_stock(fact: &StockFact, target_url: &str) -> Self {
        Self {
            title: IN_STOCK_TITLE.to_owned(),
            message: fact.product.clone(),
            open_target: Some(fact.open_target(target_url).to_owned()),
        }
    }

    pub(crate) fn self_test() -> Self {
        Self {
            title: SELF_TEST_TITLE.to_owned(),
            message: SELF_TEST_MESSAGE.to_owned(),
            open_target: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum NotifyError {
    #[error("desktop notifications are not supported on {0}")]
    Unsupported(&'static str),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: &'static str,
        status: ExitStatus,
        stderr: String,
    },
}

pub(crate) trait Notifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError>;
}

/// Sends alerts through the platform notification helper.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        let (program, mut command) = desktop_command(alert, std::env::consts::OS)?;
        let output = command
            .output()
            .await
            .map_err(|source| NotifyError::Spawn { program, source })?;

        if !output.status.success() {
            return Err(NotifyError::Failed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        Ok(())
    }
}

/// Build the helper invocation for `os` (a `std::env::consts::OS` value).
fn desktop_command(alert: &Alert, os: &'static str) -> Result<(&'static str, Command), NotifyError> {
    match os {
        "macos" => {
            let program = "terminal-notifier";
            let mut command = Command::new(program);
            command
                .arg("-title")
                .arg(&alert.title)
                .arg("-message")
                .arg(&alert.message)
                .arg("-group")
                .arg(APP_NAME);
            if let Some(target) = &alert.open_target {
                command.arg("-open").arg(target);
            }
            Ok((program, command))
        }
        "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => {
            // notify-send has no click action; the link goes in the body.
            let program = "notify-send";
            let body = match &alert.open_target {
                Some(target) => format!("{}\n{target}", alert.message),
                None => alert.message.clone(),
            };
            let mut command = Command::new(program);
            command
                .arg("--app-name")
                .arg(APP_NAME)
                .arg(&alert.title)
                .arg(body);
            Ok((program, command))
        }
        other => Err(NotifyError::Unsupported(other)),
    }
}

/// Fire the fixed self-test alert. No page is fetched.
pub(crate) async fn send_test_notification<N: Notifier>(notifier: &N) -> Result<(), NotifyError> {
    tracing::info!("Sending test notification");
    notifier.notify(&Alert::self_test()).await?;
    tracing::info!("Test notification sent");
    Ok(())
}
