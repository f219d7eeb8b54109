//! The format dispatcher and the raw line reader.
//!
//! A [`Prompt`] owns one input stream and one output sink. Every call prints
//! its message, then drives the scanner once per requested value. Input
//! problems come back as data ([`ScanOutcome`], [`LineStatus`]); only caller
//! mistakes and I/O failures are errors.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::{debug, instrument};

use crate::constants::{CHAR_TOKEN_CAPACITY, NUMERIC_TOKEN_CAPACITY};
use crate::destination::{Destination, check_destinations};
use crate::error::PromptResult;
use crate::format::FormatString;
use crate::scanner::{self, Delimiters, ScanOptions, ScanReport, ScanResult, Token};

/// Result of a formatted scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// This many specifiers were converted and stored, in order. Fewer than
    /// requested means input for the next one was empty.
    Converted(usize),
    /// The stream ended before every specifier was satisfied.
    EndOfStream,
}

impl ScanOutcome {
    /// The success count, or `None` at end-of-stream.
    pub fn count(self) -> Option<usize> {
        match self {
            Self::Converted(count) => Some(count),
            Self::EndOfStream => None,
        }
    }

    pub fn is_end_of_stream(self) -> bool {
        self == Self::EndOfStream
    }
}

/// Result of a raw line read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    Success,
    /// Empty line, or a zero-capacity buffer.
    Failure,
    EndOfStream,
}

/// What one specifier did to the call.
enum Step {
    Stored(ScanReport),
    Failed(Option<ScanReport>),
    EndOfStream,
}

/// A prompting session over one reader and one writer.
///
/// Input is consumed a line at a time: when a call gives up in the middle of
/// a line, the rest of that line is discarded so it cannot answer the next
/// prompt.
#[derive(Debug)]
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    /// A session on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn show(&mut self, message: &str) -> io::Result<()> {
        self.writer.write_all(message.as_bytes())?;
        self.writer.flush()
    }

    /// Prints `message`, then reads one value per specifier of `format` into
    /// the matching slot of `destinations`.
    ///
    /// Specifiers are processed in order and all values come from one input
    /// line; once that line has ended, remaining specifiers see empty input.
    /// The call stops early at the first empty numeric or character value
    /// (returning the count so far) or at end-of-stream. A slot is only
    /// written when its value was converted.
    ///
    /// # Errors
    ///
    /// [`crate::ConfigError`] when `format` is invalid or `destinations` does
    /// not match it (nothing is printed or read), or an I/O error from either
    /// stream.
    #[instrument(level = "trace", skip(self, destinations))]
    pub fn scan(
        &mut self,
        message: &str,
        format: &str,
        destinations: &mut [Destination<'_>],
    ) -> PromptResult<ScanOutcome> {
        let format = FormatString::parse(format)?;
        check_destinations(&format, destinations)?;
        self.show(message)?;

        let total = format.len();
        let mut converted = 0;
        let mut line_open = false;
        let mut line_ended = false;

        for (index, destination) in destinations.iter_mut().enumerate() {
            let specifier = destination.specifier();
            let mut options = ScanOptions::FORMATTED | ScanOptions::STOP_AT_SPACE;
            if index + 1 < total {
                options |= ScanOptions::MULTIPLE_SPECIFIERS;
            }
            if specifier.is_numeric() {
                options |= ScanOptions::NUMERICS_ONLY;
            }

            match self.convert_one(destination, options, line_ended)? {
                Step::Stored(report) => {
                    converted += 1;
                    line_open = report.line_open();
                    line_ended = !line_open;
                }
                Step::Failed(report) => {
                    debug!(%specifier, index, converted, "no input for specifier, stopping");
                    if report.map_or(line_open, |r| r.line_open()) {
                        self.abandon_line()?;
                    }
                    return Ok(ScanOutcome::Converted(converted));
                }
                Step::EndOfStream => {
                    debug!(%specifier, index, "end of stream");
                    return Ok(ScanOutcome::EndOfStream);
                }
            }
        }

        Ok(ScanOutcome::Converted(converted))
    }

    fn convert_one(
        &mut self,
        destination: &mut Destination<'_>,
        options: ScanOptions,
        line_ended: bool,
    ) -> io::Result<Step> {
        let (capacity, empty_is_success) = match destination {
            Destination::Str(_, 0) => return Ok(Step::Failed(None)),
            Destination::Str(_, capacity) => (*capacity, true),
            Destination::Char(_) => (CHAR_TOKEN_CAPACITY, false),
            _ => (NUMERIC_TOKEN_CAPACITY, false),
        };

        let mut token = Token::with_capacity(capacity);
        let report = if line_ended {
            ScanReport::closed_line()
        } else {
            scanner::scan(&mut self.reader, &mut token, options, &Delimiters::NONE)?
        };
        match report.result() {
            ScanResult::EndOfStream => Ok(Step::EndOfStream),
            ScanResult::Failure if !empty_is_success => Ok(Step::Failed(Some(report))),
            result => {
                if let ScanResult::NonNumericEarlyStop(len) = result {
                    debug!(len, "non-numeric input after value, ignored");
                }
                destination.store(&token);
                Ok(Step::Stored(report))
            }
        }
    }

    fn abandon_line(&mut self) -> io::Result<()> {
        let drained = scanner::drain_line(&mut self.reader)?;
        debug!(drained, "discarded rest of abandoned line");
        Ok(())
    }

    /// Prints `message` and reads one line into `buf`, without the line
    /// terminator and truncated to `capacity - 1` bytes.
    ///
    /// # Errors
    ///
    /// Only I/O errors from either stream.
    pub fn read_line(
        &mut self,
        message: &str,
        buf: &mut Vec<u8>,
        capacity: usize,
    ) -> PromptResult<LineStatus> {
        self.read_line_until(message, buf, capacity, Delimiters::NONE)
    }

    /// Like [`Prompt::read_line`], but stops keeping text at the first byte
    /// selected by `delimiters`. The rest of the line is still consumed.
    ///
    /// A zero `capacity` or an already exhausted stream returns without
    /// reading anything and leaves `buf` untouched, as does an empty line.
    /// A final line cut short by end-of-stream is still a success; the next
    /// call reports [`LineStatus::EndOfStream`].
    ///
    /// # Errors
    ///
    /// Only I/O errors from either stream.
    #[instrument(level = "trace", skip(self, buf))]
    pub fn read_line_until(
        &mut self,
        message: &str,
        buf: &mut Vec<u8>,
        capacity: usize,
        delimiters: Delimiters<'_>,
    ) -> PromptResult<LineStatus> {
        self.show(message)?;
        if capacity == 0 {
            return Ok(LineStatus::Failure);
        }
        if scanner::peek_byte(&mut self.reader)?.is_none() {
            return Ok(LineStatus::EndOfStream);
        }

        let mut token = Token::with_capacity(capacity);
        let report = scanner::scan(&mut self.reader, &mut token, ScanOptions::empty(), &delimiters)?;
        if token.is_empty() {
            return Ok(if report.end_of_stream() {
                LineStatus::EndOfStream
            } else {
                LineStatus::Failure
            });
        }

        Destination::Str(buf, capacity).store(&token);
        Ok(LineStatus::Success)
    }
}

/// Prompts on standard input/output. See [`Prompt::scan`].
///
/// # Errors
///
/// See [`Prompt::scan`].
pub fn prompt(
    message: &str,
    format: &str,
    destinations: &mut [Destination<'_>],
) -> PromptResult<ScanOutcome> {
    Prompt::stdio().scan(message, format, destinations)
}

/// Reads a line from standard input. See [`Prompt::read_line`].
///
/// # Errors
///
/// See [`Prompt::read_line`].
pub fn prompt_getline(message: &str, buf: &mut Vec<u8>, capacity: usize) -> PromptResult<LineStatus> {
    Prompt::stdio().read_line(message, buf, capacity)
}

/// Reads a line from standard input up to a delimiter. See
/// [`Prompt::read_line_until`].
///
/// # Errors
///
/// See [`Prompt::read_line_until`].
pub fn prompt_getline_delim(
    message: &str,
    buf: &mut Vec<u8>,
    capacity: usize,
    delimiters: Delimiters<'_>,
) -> PromptResult<LineStatus> {
    Prompt::stdio().read_line_until(message, buf, capacity, delimiters)
}
