// src/log.rs
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

static LOG_FILE: &str = "fpl_tally.log";
static SINK: OnceLock<Mutex<Option<File>>> = OnceLock::new();
static START: OnceLock<Instant> = OnceLock::new();

fn sink() -> &'static Mutex<Option<File>> {
    SINK.get_or_init(|| {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)
            .ok();
        Mutex::new(file)
    })
}

/// Internal logging function
pub fn write_log(level: &str, msg: &str) {
    let elapsed = START.get_or_init(Instant::now).elapsed();
    let line = format!("[{:9.3}s][{level}] {msg}\n", elapsed.as_secs_f64());

    if let Ok(mut guard) = sink().lock() {
        if let Some(file) = guard.as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
