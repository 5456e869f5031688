//! The main concatenation command.

use anyhow::{Context, Result};
use chrono::Utc;
use std::io::{self, BufWriter};
use tracing::debug;

use lolcat::cat::report;
use lolcat::locale::resolve_encoding;
use lolcat::{Cat, Colorizer, Encoding, Mode, Options};

/// Concatenate the requested sources to stdout.
///
/// Per-source failures are reported and skipped. A closed stdout (e.g. piping
/// into `head`) ends the run successfully.
#[cfg(not(tarpaulin_include))]
pub fn handle_cat(options: &Options) -> Result<()> {
    let mut stderr = io::stderr();

    let encoding = resolve_encoding(options.use_locale).unwrap_or_else(|e| {
        report(&mut stderr, &e);
        Encoding::Utf8
    });

    let stdout_is_tty = atty::is(atty::Stream::Stdout);
    let mode = if options.color_enabled(stdout_is_tty) {
        Mode::Rainbow(Colorizer::new(options.color_config(Utc::now())))
    } else {
        Mode::Plain
    };
    debug!(?mode, ?encoding, "starting");

    let out = BufWriter::new(io::stdout().lock());
    let mut cat = Cat::new(mode, encoding, out);

    match cat.run(&options.sources(), &mut stderr) {
        Ok(summary) => {
            debug!(?summary, "done");
            Ok(())
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("stdout closed early");
            Ok(())
        }
        Err(e) => Err(e).context("failed to write to standard output"),
    }
}
