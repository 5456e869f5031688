//! Command handlers for the lolcat binary.

pub mod cat;
pub mod info;

use std::io;

use lolcat::cat::report;
use lolcat::{Cli, Config, Options};

/// Merge parsed flags over the config file, warning about a bad config.
#[cfg(not(tarpaulin_include))]
pub fn load_options(cli: Cli) -> Options {
    let config = Config::load().unwrap_or_else(|e| {
        report(&mut io::stderr(), &e);
        Config::default()
    });
    Options::resolve(cli, &config)
}
