#![cfg(feature = "std")]

//! Stderr logger configured from `SEABATTLE_LOG`.
//!
//! The variable holds comma-separated directives: a bare level sets the
//! default, `path=level` overrides it for a module path and everything below
//! it, e.g. `warn,seabattle::core::board=debug`.

use std::env;
use std::sync::OnceLock;
use std::vec::Vec;

use log::{LevelFilter, Log, Metadata, Record};

const ENV_VAR: &str = "SEABATTLE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    default: LevelFilter,
    /// Longest prefix first, so the most specific directive wins.
    modules: Vec<(String, LevelFilter)>,
}

impl Filter {
    fn parse(spec: &str) -> Self {
        let mut filter = Filter {
            default: LevelFilter::Info,
            modules: Vec::new(),
        };
        for directive in spec.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((path, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        filter.modules.push((path.trim().to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = directive.parse() {
                        filter.default = level;
                    }
                }
            }
        }
        filter.modules.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        filter
    }

    fn level_for(&self, target: &str) -> LevelFilter {
        self.modules
            .iter()
            .find(|(path, _)| {
                target == path.as_str()
                    || target
                        .strip_prefix(path.as_str())
                        .is_some_and(|rest| rest.starts_with("::"))
            })
            .map_or(self.default, |&(_, level)| level)
    }

    fn max_level(&self) -> LevelFilter {
        self.modules
            .iter()
            .map(|&(_, level)| level)
            .fold(self.default, Ord::max)
    }
}

struct StderrLogger {
    filter: Filter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger. Without `SEABATTLE_LOG` everything at `info`
/// and above is shown. Calling it twice keeps the first configuration.
pub fn init_logging() {
    let spec = env::var(ENV_VAR).unwrap_or_default();
    let logger = LOGGER.get_or_init(|| StderrLogger {
        filter: Filter::parse(&spec),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.filter.max_level());
    }
}
