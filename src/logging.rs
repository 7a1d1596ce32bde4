// src/logging.rs
//! File-backed `log` sink. Lines look like `[00:00:01.250][INFO] message`,
//! timestamped relative to `init`.
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::{IoContext, Result};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub fn format_line(elapsed_ms: u128, level: log::Level, msg: &str) -> String {
    format!("[{}][{level}] {msg}\n", fmt_elapsed(elapsed_ms))
}

struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) { return; }
        let line = format_line(start().elapsed().as_millis(), record.level(), &record.args().to_string());
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Append log lines at `level` and above to `path`.
/// A second call is a no-op; the first logger stays installed.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path).at(path)?;
    start();

    let logger = FileLogger { level, file: Mutex::new(file) };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
    Ok(())
}
