use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger structure
#[derive(Debug)]
struct FlappyLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl FlappyLogger {
    fn new(level: LevelFilter, debug_filter: Option<String>) -> Self {
        let debug_filters = debug_filter.map(|filter_str| {
            filter_str
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<HashSet<String>>()
        });
        FlappyLogger {
            level,
            debug_filters,
        }
    }
}

// Pull "Pipe N" out of a message so recycle/crash lines are easy to scan
fn pipe_context(message: &str) -> Option<u32> {
    let idx = message.find("Pipe ")?;
    let digits: String = message[idx + 5..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<u32>().ok()
}

impl log::Log for FlappyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug topics are opt-in once a filter is given
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.iter().any(|f| metadata.target().starts_with(f.as_str()));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let message = record.args().to_string();
        let context = match pipe_context(&message) {
            Some(pipe) => format!("[P{}] ", pipe),
            None => String::new(),
        };

        let output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            target = record.target(),
        );

        // Nowhere left to report a broken stdout
        let mut stdout = io::stdout();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<FlappyLogger> = OnceLock::new();

/// Install the logger. `debug_filter` is a comma-separated list of topics
/// (`loop`, `bird`, `pipes`); when given, only those topics log at debug/trace.
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| FlappyLogger::new(level, debug_filter));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Map the `--log-level` flag onto a filter, falling back to `Info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_loop {
    ($($arg:tt)*) => {
        log::debug!(target: "loop", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_bird {
    ($($arg:tt)*) => {
        log::debug!(target: "bird", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_pipes {
    ($($arg:tt)*) => {
        log::debug!(target: "pipes", "{}", format_args!($($arg)*))
    }
}
