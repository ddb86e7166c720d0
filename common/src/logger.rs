use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide logger. Writes to stderr so the board rendered on stdout stays readable.
pub struct Logger {
    prefix: Option<String>,
    enabled: AtomicBool,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self {
            prefix,
            enabled: AtomicBool::new(true),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        if !self.enabled.load(Ordering::Relaxed) {
            return;
        }
        eprintln!("{}", self.format_line(file, line, message));
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = short_file_name(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }
}

fn short_file_name(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn set_enabled(enabled: bool) {
    if let Some(logger) = LOGGER.get() {
        logger.enabled.store(enabled, Ordering::Relaxed);
    }
}

/// Messages logged before `init_logger` are dropped.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
