mod check;
mod logging;
mod notify;
mod poll;
#[cfg(test)]
mod test_support;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use stockwatch_core::{AppConfig, Target};
use stockwatch_scraper::{ExtractorRegistry, HtmlClient};

use crate::check::Checker;
use crate::notify::{DesktopNotifier, Notifier};

/// Exit status after ctrl-c / SIGTERM, following the shell convention
/// for SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

const SELF_TEST_ARG: &str = "push";

#[derive(Debug, Parser)]
#[command(name = "stockwatch")]
#[command(about = "Poll retailer pages and raise a desktop alert when an item is in stock")]
struct Cli {
    /// `push` sends a test notification; any other value is a single URL to
    /// check once. Without it, every configured target is polled forever.
    target: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Poll,
    SelfTest,
    CheckOnce(String),
}

impl Cli {
    fn mode(self) -> Mode {
        match self.target {
            None => Mode::Poll,
            Some(arg) if arg == SELF_TEST_ARG => Mode::SelfTest,
            Some(url) => Mode::CheckOnce(url),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = stockwatch_core::load_app_config()?;
    let log_guard = logging::init_logging(&config)?;
    tracing::debug!(?config, "loaded configuration");

    match cli.mode() {
        Mode::SelfTest => {
            notify::send_test_notification(&DesktopNotifier).await?;
        }
        Mode::CheckOnce(url) => {
            let checker = build_checker(&config, DesktopNotifier)?;
            tracing::info!("Checking passed-in url");
            checker.check(&url).await;
            tracing::info!("Done checking url");
        }
        Mode::Poll => {
            let targets = load_targets(&config)?;
            let checker = build_checker(&config, DesktopNotifier)?;
            warn_unroutable(checker.registry(), &targets);

            let interval = Duration::from_secs(config.poll_interval_secs);
            tokio::select! {
                () = poll::poll_forever(&checker, &targets, interval) => {},
                () = shutdown_signal() => {
                    tracing::info!("received interrupt, stopping");
                    drop(log_guard);
                    std::process::exit(INTERRUPTED_EXIT_CODE);
                }
            }
        }
    }

    drop(log_guard);
    Ok(())
}

fn build_checker<N: Notifier>(config: &AppConfig, notifier: N) -> anyhow::Result<Checker<N>> {
    let client = HtmlClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build HTTP client")?;
    Ok(Checker::new(
        client,
        ExtractorRegistry::with_default_retailers(),
        notifier,
    ))
}

fn load_targets(config: &AppConfig) -> anyhow::Result<Vec<Target>> {
    let targets = match &config.targets_path {
        Some(path) => stockwatch_core::load_targets(path)?,
        None => stockwatch_core::default_targets(),
    };
    tracing::info!(count = targets.len(), "loaded targets");
    Ok(targets)
}

/// Targets no retailer handles are skipped every iteration; say so once.
fn warn_unroutable(registry: &ExtractorRegistry, targets: &[Target]) {
    for target in targets {
        if registry.resolve(&target.url).is_none() {
            tracing::warn!(
                url = %target.url,
                label = target.label.as_deref().unwrap_or(""),
                "no retailer registered for target; it will be skipped"
            );
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
