//! Logger setup. Every line goes to stderr as
//! `YYYY/MM/DD HH:MM:SS [LEVEL] message`, leaving stdout for the report.

use chrono::{DateTime, Local, TimeZone};
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::io::Write;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

pub fn format_line<Tz: TimeZone>(timestamp: &DateTime<Tz>, level: Level, message: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{} [{}] {}",
        timestamp.format(TIMESTAMP_FORMAT),
        level_label(level),
        message
    )
}

/// Install the global logger. `debug` raises this crate's level to DEBUG;
/// `RUST_LOG`, if set, is applied on top.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("mm_channel_count", level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(&Local::now(), record.level(), &record.args().to_string())
            )
        });

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A logger may already be installed (tests); keep the existing one.
    let _ = builder.try_init();
}
