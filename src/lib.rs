//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences with the format:
//! `$TTSSS,D1,D2,...,Dn*CC\r\n`
//!
//! Decoding happens in three stages:
//! - framing: the start marker (`$` or `!`), the checksum and the optional
//!   line ending are validated and the fields are split
//! - dispatch: the `(framing, type code)` pair selects a decoder from a
//!   [`Registry`]
//! - field decoding: the decoder reads typed values through a
//!   [`FieldParser`], which keeps going after a bad field and reports the
//!   first one
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decode::nmea_content::{Sentence, Status};
//!
//! let sentence = nmea0183_decode::parse(
//!     "$GPRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*70",
//! )?;
//!
//! assert_eq!(sentence.talker_id(), "GP");
//! match sentence {
//!     Sentence::RMC(rmc) => {
//!         assert_eq!(rmc.status, Status::Valid);
//!         assert_eq!(rmc.speed, Some(173.8));
//!     }
//!     _ => unreachable!(),
//! }
//! # Ok::<(), nmea0183_decode::Error>(())
//! ```
//!
//! A [`Parser`] built with [`ParserBuilder`] changes the line ending handling
//! or decodes with a custom [`Registry`]; [`Decode`] can be derived for new
//! sentence types.

pub mod error;
mod decode;
mod field_parser;
mod nmea0183;
pub mod nmea_content;
mod parse;
pub mod parsing;
mod registry;
mod sentence;

use std::sync::LazyLock;

pub use decode::{Decode, Decoded};
pub use error::{Error, FramingError, Result};
pub use field_parser::FieldParser;
pub use nmea0183::{LineEndingMode, Parser, ParserBuilder, checksum, format_checksum};
pub use nmea0183_decode_derive::Decode;
pub use parse::FieldValue;
pub use registry::{DecodeFn, Registry, RegistryBuilder, decode_as};
pub use sentence::{Framing, RawSentence, split_prefix};

use nmea_content::Sentence;

static DEFAULT_PARSER: LazyLock<Parser> = LazyLock::new(Parser::default);

/// Frames and decodes `raw` with the built-in registry.
///
/// A trailing `\r\n` is accepted but not required.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(raw: &str) -> Result<Sentence> {
    DEFAULT_PARSER.parse(raw)
}

/// Frames and decodes `raw`, keeping the partial record if a field fails.
///
/// ```rust
/// let decoded = nmea0183_decode::parse_partial(
///     "$GPRMC,220516,A,5133.82,N,00042.24,W,abc,xyz,130694,004.2,W*6E",
/// )?;
///
/// assert!(decoded.error.is_some());
/// assert_eq!(decoded.value.sentence_type(), "RMC");
/// # Ok::<(), nmea0183_decode::Error>(())
/// ```
///
/// # Errors
///
/// See [`Parser::parse_partial`].
pub fn parse_partial(raw: &str) -> Result<Decoded<Sentence>> {
    DEFAULT_PARSER.parse_partial(raw)
}

/// Frames `raw` without decoding its fields.
///
/// # Errors
///
/// See [`Parser::frame`].
pub fn parse_sentence(raw: &str) -> Result<RawSentence> {
    DEFAULT_PARSER.frame(raw)
}

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
