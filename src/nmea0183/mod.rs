//! # NMEA 0183 Sentence Framer
//!
//! This module provides the envelope handling for NMEA 0183 sentences.
//! It handles the standard format: `$TTSSS,D1,D2,...,Dn*CC\r\n`
//!
//! - `$` or `!` selects the conventional or encapsulated framing
//! - `TTSSS` is the prefix: talker id and sentence type
//! - `D1..Dn` are the data fields, separated by `,`
//! - `CC` is the checksum: two hex digits, the XOR of every byte between the
//!   start marker and the `*`
//!
//! The framer validates the envelope and checksum, splits the fields and
//! hands the resulting [`RawSentence`] to a [`Registry`] for decoding.

use nom::{
    Parser as _,
    bytes::complete::{take, take_until},
    character::complete::{char, hex_digit1, one_of},
    error::ErrorKind,
};

use crate::{
    Decoded, Error, FramingError, Registry, Result,
    nmea_content::Sentence,
    parsing::{IResult, consumed},
    sentence::{CHECKSUM_SEPARATOR, FIELD_SEPARATOR, Framing, RawSentence},
};

/// Defines how the parser should handle CRLF line endings.
///
/// NMEA 0183 sentences end with a carriage return and line feed (`\r\n`) on
/// the wire, but line-oriented readers usually strip them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    /// A trailing `\r\n` is stripped if present.
    #[default]
    Optional,

    /// CRLF line ending is required and must be present.
    ///
    /// Use this mode when parsing raw serial port data.
    Required,

    /// CRLF line ending is forbidden and must not be present.
    ///
    /// Use this mode when parsing sentences from APIs, databases, or other
    /// sources where line endings have been removed.
    Forbidden,
}

/// Creates a configurable NMEA 0183 [`Parser`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::{LineEndingMode, ParserBuilder};
///
/// let parser = ParserBuilder::new()
///     .line_ending_mode(LineEndingMode::Required)
///     .build();
///
/// assert!(parser.parse("$GPHDT,274.07,T*03\r\n").is_ok());
/// assert!(parser.parse("$GPHDT,274.07,T*03").is_err()); // (missing CRLF)
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct ParserBuilder {
    line_ending_mode: LineEndingMode,
    registry: Option<Registry>,
}

impl ParserBuilder {
    /// Creates a new parser builder with default settings.
    ///
    /// The default settings are:
    /// - Line ending mode: [`LineEndingMode::Optional`]
    /// - Registry: [`Registry::builtin`]
    pub fn new() -> Self {
        ParserBuilder {
            line_ending_mode: LineEndingMode::Optional,
            registry: None,
        }
    }

    /// Sets the line ending mode for the parser.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Sets the registry the parser decodes with.
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(self) -> Parser {
        Parser {
            line_ending_mode: self.line_ending_mode,
            registry: self
                .registry
                .unwrap_or_else(|| Registry::builtin().clone()),
        }
    }
}

/// Frames, validates and decodes NMEA 0183 sentences.
///
/// A parser holds no per-sentence state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Parser {
    line_ending_mode: LineEndingMode,
    registry: Registry,
}

impl Default for Parser {
    fn default() -> Self {
        ParserBuilder::new().build()
    }
}

impl Parser {
    /// Creates a new [`ParserBuilder`].
    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    pub fn line_ending_mode(&self) -> LineEndingMode {
        self.line_ending_mode
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Validates the envelope and checksum of `raw` and splits its fields.
    ///
    /// The checksum is compared case-insensitively and stored as uppercase.
    ///
    /// # Errors
    ///
    /// [`Error::Framing`] if the envelope is malformed and
    /// [`Error::ChecksumMismatch`] if the checksum is wrong.
    pub fn frame(&self, raw: &str) -> Result<RawSentence> {
        frame(raw, self.line_ending_mode).inspect_err(|error| {
            tracing::debug!(%error, input = raw, "sentence rejected");
        })
    }

    /// Frames and decodes `raw` into a typed sentence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_decode::{Parser, nmea_content::Sentence};
    ///
    /// let parser = Parser::default();
    /// let sentence = parser.parse("$GPHDT,274.07,T*03")?;
    ///
    /// let Sentence::HDT(hdt) = sentence else { panic!("expected HDT") };
    /// assert_eq!(hdt.heading, Some(274.07));
    /// # Ok::<(), nmea0183_decode::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Any error of [`frame`](Self::frame) or [`Registry::decode`].
    pub fn parse(&self, raw: &str) -> Result<Sentence> {
        self.registry.decode(self.frame(raw)?)
    }

    /// Frames and decodes `raw`, keeping the partial record if a field fails.
    ///
    /// # Errors
    ///
    /// Any error of [`frame`](Self::frame) or [`Registry::decode_partial`].
    pub fn parse_partial(&self, raw: &str) -> Result<Decoded<Sentence>> {
        self.registry.decode_partial(self.frame(raw)?)
    }
}

fn frame(raw: &str, line_ending_mode: LineEndingMode) -> Result<RawSentence> {
    if !raw.is_ascii() {
        return Err(FramingError::NonAscii.into());
    }

    let line = crlf(raw, line_ending_mode)?;

    let marker: IResult<char> = one_of("$!").parse(line);
    let Ok((body, marker)) = marker else {
        return Err(FramingError::MissingStartMarker.into());
    };
    let framing = Framing::from_marker(marker).ok_or(FramingError::MissingStartMarker)?;

    let data: IResult<&str> = take_until("*").parse(body);
    let Ok((tail, data)) = data else {
        return Err(FramingError::MissingChecksumSeparator.into());
    };
    let declared = declared_checksum(tail)?;

    let computed = format_checksum(checksum(data));
    if computed != declared {
        return Err(Error::ChecksumMismatch { computed, declared });
    }

    let mut fields = data.split(FIELD_SEPARATOR).map(str::to_string);
    let prefix = fields.next().unwrap_or_default();

    Ok(RawSentence::new(
        framing,
        &prefix,
        fields.collect(),
        declared,
        line.to_string(),
    ))
}

/// Parses `*CC` into two uppercase hex digits.
fn declared_checksum(i: &str) -> Result<String, FramingError> {
    let separator: IResult<char> = char(CHECKSUM_SEPARATOR).parse(i);
    let (digits, _) = separator.map_err(|_| FramingError::MissingChecksumSeparator)?;

    let cc: IResult<&str> = consumed(take(2u8), ErrorKind::Count)
        .and_then(consumed(hex_digit1, ErrorKind::IsA))
        .parse(digits);

    match cc {
        Ok((_, cc)) => Ok(cc.to_ascii_uppercase()),
        Err(_) => Err(FramingError::MalformedChecksum(digits.to_string())),
    }
}

/// Strips the line ending of `i` according to `mode`.
///
/// A CRLF anywhere but at the very end is always rejected.
fn crlf(i: &str, mode: LineEndingMode) -> Result<&str, FramingError> {
    let found: IResult<&str> = take_until("\r\n").parse(i);

    match (mode, found) {
        (LineEndingMode::Forbidden, Ok(_)) => Err(FramingError::LineEnding),
        (_, Ok((ending, line))) if ending == "\r\n" => Ok(line),
        (_, Ok(_)) => Err(FramingError::LineEnding),
        (LineEndingMode::Required, Err(_)) => Err(FramingError::LineEnding),
        (_, Err(_)) => Ok(i),
    }
}

/// Calculates the NMEA 0183 checksum of the given sentence body.
///
/// The checksum is the XOR of every byte between the start marker and the
/// `*` separator, excluding both.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::{checksum, format_checksum};
///
/// let cc = checksum("GPRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W");
/// assert_eq!(format_checksum(cc), "70");
/// ```
pub fn checksum(data: &str) -> u8 {
    data.bytes()
        .fold(0u8, |accumulated_xor, byte| accumulated_xor ^ byte)
}

/// Formats a checksum as two uppercase hex digits.
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

#[cfg(test)]
mod tests {
    mod checksum;
    mod crlf;
    mod framing;
}
