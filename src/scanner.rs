//! Byte-at-a-time scanner that turns a live input stream into one bounded
//! token.
//!
//! # Stop rules
//!
//! A scan has two separate ends:
//!
//! - **Termination** ends the read loop. It happens on newline (consumed),
//!   end-of-stream, or a space while more specifiers follow in the same call
//!   (left in the stream so the next scan's leading skip absorbs it).
//! - **Cutoff** ends accumulation only. Once the token is full, a delimiter
//!   matches, a space arrives under [`ScanOptions::STOP_AT_SPACE`], or a
//!   non-numeric byte arrives under [`ScanOptions::NUMERICS_ONLY`], the rest
//!   of the line is still read but discarded.
//!
//! Because the loop always runs to a terminator, a scan never leaves unread
//! bytes of the current line behind, except for the multi-specifier space
//! case which [`drain_line`] covers when a call is abandoned.

use std::borrow::Cow;
use std::io::{self, BufRead};

use bitflags::bitflags;
use tracing::trace;

use crate::constants::TOKEN_INITIAL_CAPACITY;

bitflags! {
    /// Scanner behavior for one call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ScanOptions: u8 {
        /// A formatted-argument scan rather than a raw line read. Enables the
        /// leading space skip.
        const FORMATTED = 1 << 0;
        /// More specifiers follow: a space terminates the scan and stays in
        /// the stream.
        const MULTIPLE_SPECIFIERS = 1 << 1;
        /// A space ends accumulation.
        const STOP_AT_SPACE = 1 << 2;
        /// Any byte outside `[0-9.-]` ends accumulation.
        const NUMERICS_ONLY = 1 << 3;
    }
}

/// Which side of the delimiter set ends accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Stop at the first byte that is in the set.
    #[default]
    StopOnMatch,
    /// Stop at the first byte that is not in the set.
    StopOnMismatch,
}

/// A custom delimiter set with its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delimiters<'a> {
    set: &'a [u8],
    polarity: Polarity,
}

impl<'a> Delimiters<'a> {
    /// No custom delimiters; only the option-driven rules apply.
    pub const NONE: Delimiters<'static> = Delimiters {
        set: &[],
        polarity: Polarity::StopOnMatch,
    };

    pub fn new(set: &'a [u8], polarity: Polarity) -> Self {
        Self { set, polarity }
    }

    /// Accumulation ends at any byte of `set`.
    pub fn stop_on(set: &'a [u8]) -> Self {
        Self::new(set, Polarity::StopOnMatch)
    }

    /// Accumulation ends at any byte outside `set`.
    pub fn stop_outside(set: &'a [u8]) -> Self {
        Self::new(set, Polarity::StopOnMismatch)
    }

    #[inline]
    fn stops_at(&self, byte: u8) -> bool {
        self.set.contains(&byte) == (self.polarity == Polarity::StopOnMatch)
    }
}

/// Bounded byte buffer filled by one scan.
///
/// A token of capacity `max_len` holds at most `max_len - 1` bytes; the last
/// slot is reserved for the terminator of the C-string this buffer stands in
/// for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    bytes: Vec<u8>,
    max_len: usize,
}

impl Token {
    pub fn with_capacity(max_len: usize) -> Self {
        let hint = max_len.saturating_sub(1).min(TOKEN_INITIAL_CAPACITY);
        Self {
            bytes: Vec::with_capacity(hint),
            max_len,
        }
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.bytes.len() + 1 >= self.max_len
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Token contents as text. Bytes that are not valid UTF-8 are replaced.
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// What ended the read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// A newline, consumed.
    Newline,
    /// The stream ran dry.
    EndOfStream,
    /// A space in multi-specifier mode, left unconsumed.
    Space,
}

/// Why accumulation ended before the terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutoff {
    Capacity,
    Delimiter,
    Space,
    NonNumeric,
}

/// The raw outcome of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub len: usize,
    pub terminator: Terminator,
    pub cutoff: Option<Cutoff>,
}

/// How a scan reads from the dispatcher's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanResult {
    Success(usize),
    /// Nothing was accumulated.
    Failure,
    /// Accumulation stopped at a non-numeric byte after `len` bytes.
    NonNumericEarlyStop(usize),
    EndOfStream,
}

impl ScanReport {
    /// The report of a scan that found its line already ended: no bytes,
    /// terminated as if by the newline.
    pub fn closed_line() -> Self {
        Self {
            len: 0,
            terminator: Terminator::Newline,
            cutoff: None,
        }
    }

    pub fn end_of_stream(&self) -> bool {
        self.terminator == Terminator::EndOfStream
    }

    /// Whether the current input line is still open after this scan.
    pub fn line_open(&self) -> bool {
        self.terminator == Terminator::Space
    }

    pub fn result(&self) -> ScanResult {
        match (self.terminator, self.cutoff) {
            (Terminator::EndOfStream, _) => ScanResult::EndOfStream,
            _ if self.len == 0 => ScanResult::Failure,
            (_, Some(Cutoff::NonNumeric)) => ScanResult::NonNumericEarlyStop(self.len),
            _ => ScanResult::Success(self.len),
        }
    }
}

#[inline]
fn is_numeric_byte(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'.' || byte == b'-'
}

/// Looks at the next byte without consuming it. `None` is end-of-stream.
pub(crate) fn peek_byte<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => return Ok(buf.first().copied()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

fn cutoff_for(
    byte: u8,
    token: &Token,
    options: ScanOptions,
    delimiters: &Delimiters<'_>,
) -> Option<Cutoff> {
    // Delimiter precedes the space/numeric rules; all four only end
    // accumulation, so the order is not observable in the token.
    if token.is_full() {
        Some(Cutoff::Capacity)
    } else if delimiters.stops_at(byte) {
        Some(Cutoff::Delimiter)
    } else if byte == b' ' && options.contains(ScanOptions::STOP_AT_SPACE) {
        Some(Cutoff::Space)
    } else if options.contains(ScanOptions::NUMERICS_ONLY) && !is_numeric_byte(byte) {
        Some(Cutoff::NonNumeric)
    } else {
        None
    }
}

/// Scans one token from `reader` into `token`.
///
/// The token is cleared first. Blocks until a terminator or end-of-stream
/// arrives; `Interrupted` reads are retried, other I/O errors propagate.
pub fn scan<R: BufRead + ?Sized>(
    reader: &mut R,
    token: &mut Token,
    options: ScanOptions,
    delimiters: &Delimiters<'_>,
) -> io::Result<ScanReport> {
    token.clear();

    let mut next = peek_byte(reader)?;
    if options.contains(ScanOptions::FORMATTED) {
        while next == Some(b' ') {
            reader.consume(1);
            next = peek_byte(reader)?;
        }
    }

    let mut cutoff = None;
    let terminator = loop {
        let Some(byte) = next else {
            break Terminator::EndOfStream;
        };
        if byte == b'\n' {
            reader.consume(1);
            break Terminator::Newline;
        }
        if byte == b' ' && options.contains(ScanOptions::MULTIPLE_SPECIFIERS) {
            break Terminator::Space;
        }

        reader.consume(1);
        if cutoff.is_none() {
            cutoff = cutoff_for(byte, token, options, delimiters);
            if cutoff.is_none() {
                token.bytes.push(byte);
            }
        }
        next = peek_byte(reader)?;
    };

    let report = ScanReport {
        len: token.len(),
        terminator,
        cutoff,
    };
    trace!(?options, ?report, "scanned token");
    Ok(report)
}

/// Discards input up to and including the next newline, or to end-of-stream.
///
/// Returns the number of bytes discarded.
pub fn drain_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<usize> {
    let drained = reader.skip_until(b'\n')?;
    trace!(drained, "drained rest of line");
    Ok(drained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FORMATTED_LAST: ScanOptions = ScanOptions::FORMATTED.union(ScanOptions::STOP_AT_SPACE);

    fn scan_str(
        input: &mut &[u8],
        max_len: usize,
        options: ScanOptions,
        delimiters: Delimiters<'_>,
    ) -> (String, ScanReport) {
        let mut token = Token::with_capacity(max_len);
        let report = scan(input, &mut token, options, &delimiters).unwrap();
        (token.to_str_lossy().into_owned(), report)
    }

    #[test]
    fn test_formatted_scan_skips_leading_spaces() {
        let mut input: &[u8] = b"   42\nrest";
        let (token, report) = scan_str(&mut input, 16, FORMATTED_LAST, Delimiters::NONE);
        assert_eq!(token, "42");
        assert_eq!(report.terminator, Terminator::Newline);
        assert_eq!(input, b"rest");
    }

    #[test]
    fn test_blank_line_is_an_empty_token() {
        let mut input: &[u8] = b"  \n42\n";
        let (token, report) = scan_str(&mut input, 16, FORMATTED_LAST, Delimiters::NONE);
        assert_eq!(token, "");
        assert_eq!(report.result(), ScanResult::Failure);
        assert_eq!(input, b"42\n");
    }

    #[test]
    fn test_raw_scan_keeps_leading_spaces_and_stops_on_empty_line() {
        let mut input: &[u8] = b"  hi there\n";
        let (token, _) = scan_str(&mut input, 32, ScanOptions::empty(), Delimiters::NONE);
        assert_eq!(token, "  hi there");

        let mut input: &[u8] = b"\nnext";
        let (token, report) = scan_str(&mut input, 32, ScanOptions::empty(), Delimiters::NONE);
        assert_eq!(token, "");
        assert_eq!(report.result(), ScanResult::Failure);
        assert_eq!(input, b"next");
    }

    #[test]
    fn test_multiple_specifiers_leave_the_space_pending() {
        let options = FORMATTED_LAST | ScanOptions::MULTIPLE_SPECIFIERS;
        let mut input: &[u8] = b"5 3.25\n";
        let (token, report) = scan_str(&mut input, 16, options, Delimiters::NONE);
        assert_eq!(token, "5");
        assert_eq!(report.terminator, Terminator::Space);
        assert!(report.line_open());
        assert_eq!(input, b" 3.25\n");

        let (token, report) = scan_str(&mut input, 16, FORMATTED_LAST, Delimiters::NONE);
        assert_eq!(token, "3.25");
        assert_eq!(report.terminator, Terminator::Newline);
        assert!(input.is_empty());
    }

    #[test]
    fn test_stop_at_space_discards_the_rest_of_the_line() {
        let mut input: &[u8] = b"first second third\nnext";
        let (token, report) = scan_str(&mut input, 32, FORMATTED_LAST, Delimiters::NONE);
        assert_eq!(token, "first");
        assert_eq!(report.cutoff, Some(Cutoff::Space));
        assert_eq!(input, b"next");
    }

    #[test]
    fn test_numerics_only_stops_accumulating_at_letters() {
        let options = FORMATTED_LAST | ScanOptions::NUMERICS_ONLY;
        let mut input: &[u8] = b"-12a34\nnext";
        let (token, report) = scan_str(&mut input, 32, options, Delimiters::NONE);
        assert_eq!(token, "-12");
        assert_eq!(report.result(), ScanResult::NonNumericEarlyStop(3));
        assert_eq!(input, b"next");

        let mut input: &[u8] = b"abc\n";
        let (token, report) = scan_str(&mut input, 32, options, Delimiters::NONE);
        assert_eq!(token, "");
        assert_eq!(report.result(), ScanResult::Failure);
    }

    #[test]
    fn test_full_token_is_truncated_not_rejected() {
        let mut input: &[u8] = b"abcdefg\nX";
        let (token, report) = scan_str(&mut input, 4, FORMATTED_LAST, Delimiters::NONE);
        assert_eq!(token, "abc");
        assert_eq!(report.cutoff, Some(Cutoff::Capacity));
        assert_eq!(report.result(), ScanResult::Success(3));
        assert_eq!(input, b"X");
    }

    #[test]
    fn test_exactly_full_token_has_no_cutoff() {
        let mut input: &[u8] = b"abc\n";
        let (token, report) = scan_str(&mut input, 4, FORMATTED_LAST, Delimiters::NONE);
        assert_eq!(token, "abc");
        assert_eq!(report.cutoff, None);
    }

    #[test]
    fn test_delimiter_polarity() {
        let mut input: &[u8] = b"Jurassic Park\n";
        let (token, report) =
            scan_str(&mut input, 64, ScanOptions::empty(), Delimiters::stop_on(b"s"));
        assert_eq!(token, "Jura");
        assert_eq!(report.cutoff, Some(Cutoff::Delimiter));
        assert!(input.is_empty());

        let mut input: &[u8] = b"aabbaXaa\n";
        let (token, _) =
            scan_str(&mut input, 64, ScanOptions::empty(), Delimiters::stop_outside(b"ab"));
        assert_eq!(token, "aabba");
    }

    #[test]
    fn test_end_of_stream_first_is_reported_immediately() {
        let mut input: &[u8] = b"";
        let (token, report) = scan_str(&mut input, 16, FORMATTED_LAST, Delimiters::NONE);
        assert_eq!(token, "");
        assert!(report.end_of_stream());
        assert_eq!(report.result(), ScanResult::EndOfStream);
    }

    #[test]
    fn test_end_of_stream_after_data_keeps_the_token() {
        let mut input: &[u8] = b"42";
        let (token, report) = scan_str(&mut input, 16, FORMATTED_LAST, Delimiters::NONE);
        assert_eq!(token, "42");
        assert!(report.end_of_stream());
    }

    #[test]
    fn test_token_is_cleared_between_scans() {
        let mut token = Token::with_capacity(16);
        let mut input: &[u8] = b"first\nsecond\n";
        scan(&mut input, &mut token, FORMATTED_LAST, &Delimiters::NONE).unwrap();
        scan(&mut input, &mut token, FORMATTED_LAST, &Delimiters::NONE).unwrap();
        assert_eq!(token.as_bytes(), b"second");
    }

    #[test]
    fn test_drain_line() {
        let mut input: &[u8] = b" leftover 7\nnext\n";
        assert_eq!(drain_line(&mut input).unwrap(), 12);
        assert_eq!(input, b"next\n");

        let mut input: &[u8] = b"no newline";
        assert_eq!(drain_line(&mut input).unwrap(), 10);
        assert!(input.is_empty());
    }
}
