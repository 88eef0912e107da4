use async_trait::async_trait;
use nf_core::{NewsFetcher, Result};

/// Fetcher shipped with the binary. It has no source to talk to yet, so every
/// run succeeds without doing any work.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFetcher;

impl NoopFetcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NewsFetcher for NoopFetcher {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch(&self) -> Result<()> {
        Ok(())
    }
}
