use async_trait::async_trait;
use nf_core::{Error, NewsFetcher, Result};
use std::sync::Mutex;

use crate::logging::StatusLog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Info(String),
    Error(String),
}

/// Keeps every status line so tests can check order and counts.
#[derive(Debug, Default)]
pub struct RecordingLog {
    lines: Mutex<Vec<Line>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().unwrap().clone()
    }

    pub fn count(&self, line: &Line) -> usize {
        self.lines().iter().filter(|l| *l == line).count()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Error(m) => Some(m),
                Line::Info(_) => None,
            })
            .collect()
    }
}

impl StatusLog for RecordingLog {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(Line::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(Line::Error(message.to_string()));
    }
}

#[derive(Debug)]
pub struct FailingFetcher {
    pub message: String,
}

impl FailingFetcher {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl NewsFetcher for FailingFetcher {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self) -> Result<()> {
        Err(Error::Fetch(self.message.clone()))
    }
}

#[derive(Debug)]
pub struct PanickingFetcher;

#[async_trait]
impl NewsFetcher for PanickingFetcher {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn fetch(&self) -> Result<()> {
        panic!("feed parser blew up");
    }
}
