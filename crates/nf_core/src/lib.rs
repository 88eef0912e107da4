pub mod error;
pub mod fetcher;
pub mod types;

pub use error::Error;
pub use fetcher::NewsFetcher;
pub use types::{Outcome, RunReport, RunState};

pub type Result<T> = std::result::Result<T, Error>;
