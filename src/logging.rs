#![cfg(feature = "std")]
//! Stderr logger for the terminal front end, so log lines stay out of the
//! board and prompts printed on stdout.

use std::env;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, `off`).
pub const LOG_ENV: &str = "NAVAL_DUEL_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("naval_duel")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record.target().trim_start_matches("naval_duel::");
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{:<5} {}] {}",
            record.level(),
            module,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, ignoring case and surrounding whitespace.
/// Missing or unknown names give `Info`.
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level from [`LOG_ENV`] and return that
/// level. Once a logger is installed, later calls leave it in place.
pub fn init_logging() -> LevelFilter {
    let level = parse_log_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}
