//! Writing input sources to the output, colorized or verbatim.
//!
//! [`Cat`] implements the single "write stream A to stream B" contract in two
//! modes: [`Mode::Rainbow`] runs every character through the shared
//! [`Colorizer`], [`Mode::Plain`] copies bytes untouched. Sources are handled
//! strictly in order; a source that fails to open or read is reported and
//! skipped, while a failing output ends the run.

use crate::error::{LolcatError, TransferError};
use crate::rainbow::Colorizer;
use crate::text::{CharWriter, Chars, Encoding};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Argument naming standard input.
pub const STDIN_ARG: &str = "-";

/// One input to concatenate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Interpret a positional argument; `-` is standard input.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == STDIN_ARG {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Sources for a list of positional arguments. No arguments means stdin.
    pub fn from_args(args: &[PathBuf]) -> Vec<Self> {
        if args.is_empty() {
            vec![Self::Stdin]
        } else {
            args.iter().map(|arg| Self::from_arg(arg)).collect()
        }
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => STDIN_ARG.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    fn open(&self) -> Result<Box<dyn BufRead>, LolcatError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => File::open(path)
                .map(|file| Box::new(BufReader::new(file)) as Box<dyn BufRead>)
                .map_err(|source| LolcatError::SourceOpen {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// How input reaches the output.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Byte-for-byte copy, no escape codes, no state.
    Plain,
    /// Rainbow colorization with state shared across sources.
    Rainbow(Colorizer),
}

/// Outcome of a run over several sources.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Sources fully written
    pub completed: usize,
    /// Sources skipped or cut short by an error
    pub failed: usize,
}

/// Concatenates sources onto one output.
pub struct Cat<W: Write> {
    mode: Mode,
    encoding: Encoding,
    out: CharWriter<W>,
}

impl<W: Write> Cat<W> {
    pub fn new(mode: Mode, encoding: Encoding, out: W) -> Self {
        Self {
            mode,
            encoding,
            out: CharWriter::new(out, encoding),
        }
    }

    /// Write one input stream to the output.
    pub fn transfer<R: BufRead>(&mut self, reader: R) -> Result<(), TransferError> {
        match &mut self.mode {
            Mode::Plain => copy_bytes(reader, self.out.get_mut()),
            Mode::Rainbow(colorizer) => {
                colorizer.colorize(Chars::new(reader, self.encoding), &mut self.out)
            }
        }
    }

    /// Write every source in order, reporting per-source failures to `diag`.
    ///
    /// # Errors
    ///
    /// Returns [`LolcatError::Output`] when the output cannot be written.
    pub fn run<E: Write>(
        &mut self,
        sources: &[Source],
        diag: &mut E,
    ) -> Result<Summary, LolcatError> {
        let mut summary = Summary::default();

        for source in sources {
            debug!(source = %source.name(), "processing source");

            let reader = match source.open() {
                Ok(reader) => reader,
                Err(e) => {
                    report(diag, &e);
                    summary.failed += 1;
                    continue;
                }
            };

            match self.transfer(reader) {
                Ok(()) => summary.completed += 1,
                Err(TransferError::Read(source_err)) => {
                    report(
                        diag,
                        &LolcatError::Stream {
                            name: source.name(),
                            source: source_err,
                        },
                    );
                    summary.failed += 1;
                }
                Err(TransferError::Write(e)) => return Err(LolcatError::Output(e)),
            }
        }

        self.out.flush().map_err(LolcatError::Output)?;
        debug!(?summary, "all sources processed");
        Ok(summary)
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

/// Print a `lolcat: ...` diagnostic line and log it.
pub fn report<E: Write + ?Sized>(diag: &mut E, err: &LolcatError) {
    warn!(error = %err, "recoverable failure");
    // Nowhere left to report a failing diagnostics stream
    let _ = writeln!(diag, "lolcat: {}", err);
}

fn copy_bytes<R: BufRead, W: Write>(mut reader: R, out: &mut W) -> Result<(), TransferError> {
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(TransferError::Read(e)),
        };
        if buf.is_empty() {
            return Ok(());
        }
        out.write_all(buf).map_err(TransferError::Write)?;
        let len = buf.len();
        reader.consume(len);
    }
}
