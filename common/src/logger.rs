use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Where log lines go. The game owns stdout, so stdout is not an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Disabled,
    Stderr,
    File(PathBuf),
}

enum SinkWriter {
    Disabled,
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    writer: SinkWriter,
}

impl Logger {
    fn new(prefix: Option<String>, sink: LogSink) -> std::io::Result<Self> {
        let writer = match sink {
            LogSink::Disabled => SinkWriter::Disabled,
            LogSink::Stderr => SinkWriter::Stderr,
            LogSink::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                SinkWriter::File(Mutex::new(file))
            }
        };
        Ok(Self { prefix, writer })
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}] {}", timestamp, prefix, message)
        } else {
            format!("[{}] {}", timestamp, message)
        }
    }

    pub fn log(&self, message: &str) {
        match &self.writer {
            SinkWriter::Disabled => {}
            SinkWriter::Stderr => eprintln!("{}", self.format_line(message)),
            SinkWriter::File(file) => {
                if let Ok(mut file) = file.lock() {
                    // A failed log write must never take the game down.
                    let _ = writeln!(file, "{}", self.format_line(message));
                }
            }
        }
    }
}

/// Installs the process-wide logger. Later calls are ignored.
pub fn init_logger(prefix: Option<String>, sink: LogSink) -> std::io::Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = Logger::new(prefix, sink)?;
    let _ = LOGGER.set(logger);
    Ok(())
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
