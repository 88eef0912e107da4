use chrono::Utc;
use nf_core::{Error, NewsFetcher, Outcome, Result, RunReport};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, Level};

use crate::config::RunnerConfig;
use crate::logging::{init_logging, quiet_panics, StatusLog};

/// Runs one fetch to completion and reports how it ended.
///
/// A run is start line, guarded fetch, outcome line, in that order. Whatever
/// goes wrong inside the fetch (an `Err` or a panic) is turned into
/// [`Outcome::Failure`]; nothing escapes [`TaskRunner::run`] and nothing is
/// retried.
pub struct TaskRunner {
    fetcher: Arc<dyn NewsFetcher>,
    log: Arc<dyn StatusLog>,
    config: RunnerConfig,
}

impl TaskRunner {
    pub fn new(fetcher: Arc<dyn NewsFetcher>, log: Arc<dyn StatusLog>) -> Self {
        Self {
            fetcher,
            log,
            config: RunnerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn run(&self) -> RunReport {
        let started_at = Utc::now();
        self.log.info(&self.config.start_message);

        let outcome = match self.guarded_fetch().await {
            Ok(()) => {
                self.log.info(&self.config.success_message);
                Outcome::Success
            }
            Err(e) => {
                let description = e.to_string();
                self.log.error(&self.config.failure_line(&description));
                Outcome::Failure(description)
            }
        };

        let report = RunReport {
            outcome,
            started_at,
            finished_at: Utc::now(),
        };
        debug!(
            fetcher = self.fetcher.name(),
            elapsed_ms = report.elapsed().num_milliseconds(),
            "run finished"
        );
        report
    }

    async fn guarded_fetch(&self) -> Result<()> {
        let fetcher = self.fetcher.clone();
        match tokio::spawn(async move { fetcher.fetch().await }).await {
            Ok(result) => result,
            Err(e) => Err(Error::External(e.into())),
        }
    }
}

pub async fn run_task(
    fetcher: Arc<dyn NewsFetcher>,
    log: Arc<dyn StatusLog>,
    config: RunnerConfig,
) -> RunReport {
    TaskRunner::new(fetcher, log).with_config(config).run().await
}

/// Entry point for a scheduled process: sets up logging, runs `fetcher` once
/// and returns the exit status the scheduler should see.
pub async fn run_scheduled(fetcher: Arc<dyn NewsFetcher>, config: RunnerConfig) -> ExitCode {
    let logger = init_logging(config.level().unwrap_or(Level::INFO));
    quiet_panics();

    let report = run_task(fetcher, Arc::new(logger), config).await;
    ExitCode::from(report.exit_code())
}
