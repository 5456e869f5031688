//! Command-line interface definition.
//!
//! `-h` and `-v` are the rainbow frequencies, so clap's built-in `-h`/`-V`
//! flags are disabled and `--help`/`--version` are plain long flags handled by
//! the binary (which may colorize their output).

use crate::error::LolcatError;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const USAGE_LINE: &str =
    "lolcat [-h horizontal_speed] [-v vertical_speed] [-f] [-l] [-r] [--] [FILES...]";

const ABOUT: &str = "Concatenate FILE(s), or standard input, to standard output.
With no FILE, or when FILE is -, read standard input.";

const EXTRA_HELP: &str = "\
Examples:
  lolcat f - g      Output f's contents, then stdin, then g's contents.
  lolcat            Copy standard input to standard output.
  fortune | lolcat  Display a rainbow cookie.

Defaults for every option can be set in $LOLCAT_CONFIG
or <config dir>/lolcat/config.toml.";

#[derive(Debug, Parser)]
#[command(
    name = "lolcat",
    about = ABOUT,
    override_usage = USAGE_LINE,
    after_help = EXTRA_HELP,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Horizontal rainbow frequency [default: 0.23]
    #[arg(short = 'h', value_name = "horizontal_speed", allow_negative_numbers = true)]
    pub horizontal: Option<f64>,

    /// Vertical rainbow frequency [default: 0.1]
    #[arg(short = 'v', value_name = "vertical_speed", allow_negative_numbers = true)]
    pub vertical: Option<f64>,

    /// Force color even when stdout is not a tty
    #[arg(short = 'f')]
    pub force: bool,

    /// Use locale instead of UTF-8
    #[arg(short = 'l')]
    pub locale: bool,

    /// Random colors
    #[arg(short = 'r')]
    pub random: bool,

    /// Print version and exit
    #[arg(long)]
    pub version: bool,

    /// Show this message
    #[arg(long)]
    pub help: bool,

    /// Files to concatenate, `-` for standard input
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Parse arguments, mapping every clap failure to an argument error.
    ///
    /// # Errors
    ///
    /// Returns [`LolcatError::Argument`] for unknown flags or malformed values.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, LolcatError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| LolcatError::Argument(first_line(&e.to_string())))
    }

    /// Full help text: options plus examples.
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}

/// One-line usage shown after argument errors.
pub fn usage() -> String {
    format!("Usage: {}\n", USAGE_LINE)
}

/// The version line printed by `--version`.
pub fn version_line() -> String {
    let version = env!("CARGO_PKG_VERSION");
    #[cfg(not(feature = "release"))]
    {
        let sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
        let short = sha.get(..7).unwrap_or(sha);
        format!(
            "lolcat {} ({} {})\n",
            version,
            short,
            env!("LOLCAT_BUILD_DATE")
        )
    }
    #[cfg(feature = "release")]
    {
        format!("lolcat {}\n", version)
    }
}

fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
