//! lolcat - concatenate files to standard output in rainbow colors.
//!
//! The library holds the colorization engine and the plumbing around it; the
//! `lolcat` binary wires them to the process's arguments and streams.
//!
//! - [`rainbow`] - escape detection and the colorizing transducer
//! - [`text`] - byte/char decoding and encoding
//! - [`cat`] - sequential multi-source copy in rainbow or plain mode
//! - [`cli`], [`config`], [`options`] - arguments, config file, merged settings
//! - [`locale`] - encoding selection
//! - [`error`] - error types
//! - [`logging`] - `tracing` subscriber setup

pub mod cat;
pub mod cli;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod options;
pub mod rainbow;
pub mod text;

pub use cat::{Cat, Mode, Source, Summary};
pub use cli::Cli;
pub use config::Config;
pub use error::{LolcatError, TransferError};
pub use options::Options;
pub use rainbow::{ColorConfig, ColorState, Colorizer, EscapeState};
pub use text::Encoding;
