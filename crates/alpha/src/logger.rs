use crate::error::Result;

use std::fs::File;
use std::io::{LineWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Dual-sink logger writing every record to stdout and a log file
///
/// The reference workflow keeps a text copy of everything it prints, so the
/// summary lines of a run survive next to its figures. This does the same
/// through the `log` facade: one logger installed at startup, every record
/// duplicated to both sinks, the file flushed line by line so a crash loses
/// nothing.
///
/// Info records are written bare to match the console output of the
/// analysis; other levels are prefixed with the level name.
///
/// ```rust, no_run
/// # use gtools_alpha::TeeLogger;
/// # use log::LevelFilter;
/// TeeLogger::init("usphere-alpha.log", LevelFilter::Info).unwrap();
/// log::info!("1000 events loaded");
/// ```
#[derive(Debug)]
pub struct TeeLogger {
    level: LevelFilter,
    file: Mutex<LineWriter<File>>,
}

impl TeeLogger {
    /// Create the log file and install the logger for the whole process
    ///
    /// Fails if the file cannot be created or if a logger is already
    /// installed. The logger lives for the rest of the process, as the
    /// `log` facade requires.
    pub fn init<P: AsRef<Path>>(path: P, level: LevelFilter) -> Result<()> {
        let file = File::create(path)?;
        let logger = Box::new(Self {
            level,
            file: Mutex::new(LineWriter::new(file)),
        });
        log::set_logger(Box::leak(logger))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for TeeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = match record.level() {
            Level::Info => record.args().to_string(),
            level => format!("{}: {}", level.to_string().to_lowercase(), record.args()),
        };

        println!("{line}");
        // a failing log-file write must not panic inside the log facade
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}
