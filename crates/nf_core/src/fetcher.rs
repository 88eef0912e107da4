use async_trait::async_trait;
use std::fmt;
use crate::Result;

/// The unit of work a scheduled run performs.
///
/// Data acquisition lives behind this trait and nowhere else. No source,
/// request shape or schema is assumed; an implementation that returns `Ok`
/// marks the run successful and any `Err` fails it.
#[async_trait]
pub trait NewsFetcher: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<()>;
}
