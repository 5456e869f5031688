//! Help, version and argument-error output.
//!
//! These messages go through the rainbow too when their stream is a terminal,
//! using the same gradient settings as the main output.

use anyhow::Result;
use chrono::Utc;
use std::io::{self, Write};

use lolcat::cli::{usage, version_line};
use lolcat::{Cli, ColorConfig, Colorizer, LolcatError, Options};

fn paint(text: &str, config: Option<ColorConfig>) -> String {
    match config {
        Some(config) => Colorizer::new(config).colorize_str(text),
        None => text.to_string(),
    }
}

fn print_painted(text: &str, options: &Options) -> Result<()> {
    let config = options
        .color_enabled(atty::is(atty::Stream::Stdout))
        .then(|| options.color_config(Utc::now()));
    let mut stdout = io::stdout().lock();
    stdout.write_all(paint(text, config).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Print the full help text.
#[cfg(not(tarpaulin_include))]
pub fn handle_help(options: &Options) -> Result<()> {
    print_painted(&Cli::help_text(), options)
}

/// Print the version line.
#[cfg(not(tarpaulin_include))]
pub fn handle_version(options: &Options) -> Result<()> {
    print_painted(&version_line(), options)
}

/// Report a malformed command line on stderr, followed by the usage line.
///
/// No flags were parsed, so the default gradient is used.
#[cfg(not(tarpaulin_include))]
pub fn handle_argument_error(err: &LolcatError) {
    let config = atty::is(atty::Stream::Stderr)
        .then(|| ColorConfig::default().with_clock_phase(Utc::now().timestamp()));
    let message = format!("lolcat: {}\n{}", err, usage());
    // Nothing else to do if stderr is gone
    let _ = io::stderr().write_all(paint(&message, config).as_bytes());
}
