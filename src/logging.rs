use log::{Level, LevelFilter, Metadata, Record};
use std::sync::OnceLock;
use std::time::Instant;

/// Environment variable holding the initial log level
pub const LOG_LEVEL_ENV: &str = "PANEL_COLOR_LOG";

static START_TIME: OnceLock<Instant> = OnceLock::new();

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Console logger printing colored, timestamped lines to stderr
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = START_TIME.get_or_init(Instant::now).elapsed();
        let timestamp = format_elapsed(elapsed.as_secs(), elapsed.subsec_millis());

        let (color, level_char) = match record.level() {
            Level::Error => (ansi::BRIGHT_RED, 'E'),
            Level::Warn => (ansi::BRIGHT_YELLOW, 'W'),
            Level::Info => (ansi::BRIGHT_GREEN, 'I'),
            Level::Debug => (ansi::BRIGHT_BLUE, 'D'),
            Level::Trace => (ansi::GRAY, 'T'),
        };

        eprintln!(
            "{}{} [{}] {:>12} | {}{}",
            color,
            timestamp,
            level_char,
            short_module(record.module_path()),
            record.args(),
            ansi::RESET
        );
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. The level comes from `PANEL_COLOR_LOG`,
/// defaulting to `info`.
pub fn init_logger() -> Result<(), log::SetLoggerError> {
    let _ = START_TIME.set(Instant::now());
    log::set_logger(&LOGGER)?;

    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(LevelFilter::Info);
    log::set_max_level(level);

    Ok(())
}

/// Parse and set log level from a string; returns true if applied
pub fn set_max_level_from_str(level: &str) -> bool {
    match parse_level(level) {
        Some(filter) => {
            log::set_max_level(filter);
            true
        }
        None => false,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    let filter = match level.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => return None,
    };
    Some(filter)
}

fn format_elapsed(seconds: u64, millis: u32) -> String {
    if seconds < 60 {
        format!("{:>3}.{:03}s", seconds, millis)
    } else if seconds < 3600 {
        format!("{:>2}m{:02}s", seconds / 60, seconds % 60)
    } else {
        format!("{:>2}h{:02}m", seconds / 3600, (seconds % 3600) / 60)
    }
}

fn short_module(module_path: Option<&str>) -> &str {
    let module = module_path
        .and_then(|path| path.rsplit("::").next())
        .unwrap_or("unknown");
    match module.char_indices().nth(12) {
        Some((end, _)) => &module[..end],
        None => module,
    }
}
