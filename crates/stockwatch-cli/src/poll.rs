//! The poll loop: check every target concurrently, sleep, repeat.

use std::time::Duration;

use chrono::Local;
use futures::future::join_all;
use stockwatch_core::Target;

use crate::check::{CheckOutcome, Checker};
use crate::notify::Notifier;

/// Tally of one poll iteration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct IterationSummary {
    pub targets: usize,
    pub available: usize,
    pub notified: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl IterationSummary {
    fn from_outcomes(outcomes: &[CheckOutcome]) -> Self {
        let mut summary = Self {
            targets: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            summary.available += outcome.available_count();
            if let CheckOutcome::Checked { notified, .. } = outcome {
                summary.notified += notified;
            }
            if outcome.is_failure() {
                summary.failed += 1;
            }
            if matches!(outcome, CheckOutcome::Unroutable) {
                summary.skipped += 1;
            }
        }
        summary
    }
}

/// Check every target once. All checks start together on this task and the
/// iteration ends when every one has settled.
pub(crate) async fn run_iteration<N: Notifier>(
    checker: &Checker<N>,
    targets: &[Target],
) -> IterationSummary {
    tracing::info!("Starting iteration: {}", Local::now().to_rfc3339());

    let outcomes = join_all(targets.iter().map(|t| checker.check(&t.url))).await;
    let summary = IterationSummary::from_outcomes(&outcomes);

    tracing::info!(
        targets = summary.targets,
        available = summary.available,
        notified = summary.notified,
        failed = summary.failed,
        skipped = summary.skipped,
        "Ending iteration: {}",
        Local::now().to_rfc3339()
    );
    summary
}

/// Poll forever with a fixed sleep between iterations. Returns only if the
/// future is dropped (process interrupt).
pub(crate) async fn poll_forever<N: Notifier>(
    checker: &Checker<N>,
    targets: &[Target],
    interval: Duration,
) {
    loop {
        run_iteration(checker, targets).await;
        tracing::info!(
            "Waiting {} seconds before trying again...",
            interval.as_secs()
        );
        tracing::info!("Press ctrl+c to quit.");
        tokio::time::sleep(interval).await;
    }
}
