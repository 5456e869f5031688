//! Effective settings for one invocation.
//!
//! Merges command-line flags over the config file and turns the result into
//! the engine's inputs. Clock readings are passed in so the result is
//! reproducible in tests.

use crate::cat::Source;
use crate::cli::Cli;
use crate::config::Config;
use crate::rainbow::ColorConfig;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub freq_h: f64,
    pub freq_v: f64,
    pub force_color: bool,
    pub random: bool,
    pub use_locale: bool,
    pub files: Vec<PathBuf>,
}

impl Options {
    /// Command-line flags override config values; switches can only be
    /// turned on from either side.
    pub fn resolve(cli: Cli, config: &Config) -> Self {
        Self {
            freq_h: cli.horizontal.unwrap_or(config.horizontal_frequency),
            freq_v: cli.vertical.unwrap_or(config.vertical_frequency),
            force_color: cli.force || config.force_color,
            random: cli.random || config.random,
            use_locale: cli.locale || config.use_locale,
            files: cli.files,
        }
    }

    /// Color when forced or when writing to a terminal.
    pub fn color_enabled(&self, stdout_is_tty: bool) -> bool {
        self.force_color || stdout_is_tty
    }

    /// Gradient parameters, with the phase taken from `now`.
    pub fn color_config(&self, now: DateTime<Utc>) -> ColorConfig {
        let config = ColorConfig::new(self.freq_h, self.freq_v).with_clock_phase(now.timestamp());
        if self.random {
            let seed = (now.timestamp() as u64) ^ u64::from(now.timestamp_subsec_nanos());
            config.with_random_offset(seed)
        } else {
            config
        }
    }

    pub fn sources(&self) -> Vec<Source> {
        Source::from_args(&self.files)
    }
}
