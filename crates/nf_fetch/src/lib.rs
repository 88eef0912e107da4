pub mod config;
pub mod fetchers;
pub mod logging;
pub mod runner;
#[cfg(test)]
pub(crate) mod test_utils;

pub use config::RunnerConfig;
pub use fetchers::NoopFetcher;
pub use logging::{init_logging, quiet_panics, Logger, StatusLog};
pub use runner::{run_scheduled, run_task, TaskRunner};
