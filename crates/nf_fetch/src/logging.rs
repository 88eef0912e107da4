use std::io::IsTerminal;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

static INIT: Once = Once::new();

/// Sink for the status lines a run emits.
pub trait StatusLog: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes status lines as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Self
    }
}

impl StatusLog for Logger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Installs the process-wide subscriber. WARN and ERROR events are written to
/// stderr, everything else to stdout. Colours are only used when both streams
/// are terminals. Safe to call more than once.
pub fn init_logging(level: Level) -> Logger {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            let writer = std::io::stderr
                .with_max_level(Level::WARN)
                .or_else(std::io::stdout);
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .with_ansi(use_ansi())
                .with_writer(writer)
                .try_init();
        });
    }
    Logger::new()
}

fn use_ansi() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}

/// Replaces the default panic report with a debug event. A panicking fetch
/// still fails the run and is reported through the failure line.
pub fn quiet_panics() {
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!("fetch panicked: {}", info);
    }));
}
