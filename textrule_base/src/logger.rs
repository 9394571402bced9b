// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::prelude::{DateTime, Utc};
use log::{warn, Level, Log, Metadata, Record};
use std::collections::BTreeMap;
use std::sync::{LazyLock, RwLock};

static LOGGER: Logger = Logger;

/// Module path prefix (with `/` separators) => maximum level.
/// The empty prefix holds the root level.
static PATHS: LazyLock<RwLock<BTreeMap<String, Level>>> =
    LazyLock::new(|| RwLock::new(BTreeMap::from([(String::new(), Level::Info)])));

/// Process logger printing one line per record to stdout.
pub struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let Ok(paths) = PATHS.read() else {
            return false;
        };

        let target = metadata.target().replace("::", "/");
        // the longest matching prefix sorts last
        paths
            .iter()
            .rev()
            .find(|(path, _)| matches_path(&target, path))
            .map(|(_, level)| metadata.level() <= *level)
            .unwrap_or(false)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now: DateTime<Utc> = Utc::now();
        let file = match record.file() {
            Some(file) => file.split_once("src/").map_or(file, |(_, file)| file),
            None => "(unknown)",
        };
        let crate_name = record
            .target()
            .split_once(':')
            .map_or(record.target(), |(name, _)| name);

        println!(
            "{} ({:>5}) [{}] -- {}/{}:{} {}",
            now.format("%Y-%m-%d %H:%M:%S.%3f"),
            thread_id::get() % 100000,
            record.level(),
            crate_name,
            file,
            record.line().unwrap_or(0),
            record.args(),
        );
    }

    fn flush(&self) {}
}

impl Logger {
    /// Initialize the logger.
    ///
    /// # Arguments
    ///
    /// * `levels` - Comma separated levels, e.g. `INFO,textrule/classifier=DEBUG`.
    ///   A bare level sets the root level. A level can be TRACE, DEBUG, INFO, WARN or ERROR.
    pub fn init(levels: &str) {
        let (paths, invalid) = parse_levels(levels);
        let max_level = paths.values().copied().max().unwrap_or(Level::Info);

        if let Ok(mut current) = PATHS.write() {
            *current = paths;
        }

        log::set_logger(&LOGGER).ok();
        log::set_max_level(max_level.to_level_filter());

        for level in invalid {
            warn!("Invalid log level: {}, defaulting to INFO", level);
        }
    }
}

/// A path covers the target itself and its submodules, so `textrule`
/// doesn't cover `textrule_base`.
fn matches_path(target: &str, path: &str) -> bool {
    match target.strip_prefix(path) {
        Some(rest) => path.is_empty() || rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Parses a level string into a path table. Unknown levels become INFO and
/// are returned separately to be reported once the logger is installed.
fn parse_levels(levels: &str) -> (BTreeMap<String, Level>, Vec<String>) {
    let mut paths = BTreeMap::from([(String::new(), Level::Info)]);
    let mut invalid = vec![];

    for item in levels.split(',').filter(|item| !item.trim().is_empty()) {
        let (path, level) = match item.split_once('=') {
            Some((path, level)) => (path.trim(), level.trim()),
            None => ("", item.trim()),
        };

        let level = match level.to_uppercase().as_str() {
            "TRACE" => Level::Trace,
            "DEBUG" => Level::Debug,
            "INFO" => Level::Info,
            "WARN" => Level::Warn,
            "ERROR" => Level::Error,
            _ => {
                invalid.push(level.to_string());
                Level::Info
            }
        };

        paths.insert(path.to_string(), level);
    }

    (paths, invalid)
}
