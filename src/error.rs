//! # Error Types
//!
//! This module defines the error types used throughout the NMEA decoding library.
//!
//! Every failure is reported for a single sentence and returned to the caller
//! of [`parse`](crate::parse) or [`Registry::decode`](crate::Registry::decode);
//! nothing here is ever fatal to the process.

use thiserror::Error;

/// Holds the result of decoding functions.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents all possible errors that can occur while decoding an NMEA sentence.
///
/// This enum covers the envelope (framing, checksum), the dispatch stage
/// (unsupported sentence types) and the per-field stage (type mismatches,
/// invalid fields, unexpected layouts).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sentence envelope was malformed.
    ///
    /// The line is unrecoverable and should be discarded.
    #[error("nmea: {0}")]
    Framing(#[from] FramingError),

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the checksum calculated from the sentence body and
    /// the checksum declared after the `*` separator, each as two uppercase
    /// hex digits.
    #[error("nmea: sentence checksum mismatch [{computed} != {declared}]")]
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        computed: String,
        /// The checksum found in the sentence
        declared: String,
    },

    /// A decoder was invoked for a sentence of another type.
    ///
    /// This indicates a registry bug; it does not happen with a correctly
    /// built registry.
    #[error("nmea: {prefix} invalid type: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Talker and type of the offending sentence
        prefix: String,
        /// The type code the decoder handles
        expected: String,
        /// The type code of the sentence
        actual: String,
    },

    /// A field in the NMEA sentence was missing or invalid.
    ///
    /// This error occurs when a specific field does not conform to the
    /// expected format, type, or value range. `value` is `None` when the
    /// sentence has no field at `index` at all.
    #[error("nmea: {prefix} invalid {name} (field {index}): {}", describe(.value))]
    InvalidField {
        /// Talker and type of the offending sentence
        prefix: String,
        /// Human readable name of the field
        name: String,
        /// Zero-based index of the field within the data fields
        index: usize,
        /// Offending text
        value: Option<String>,
    },

    /// The sentence did not have the layout the decoder expects.
    #[error("nmea: {prefix} unexpected field count: expected {expected}, found {actual}")]
    UnexpectedFieldCount {
        /// Talker and type of the offending sentence
        prefix: String,
        /// Description of the accepted field counts
        expected: &'static str,
        /// Number of data fields found
        actual: usize,
    },

    /// The sentence type is not recognized by the registry.
    ///
    /// This variant is used when a well-framed sentence with a valid checksum
    /// is encountered, but no decoder is registered for its type. The full
    /// talker and type prefix is provided for reference.
    #[error("nmea: sentence prefix '{0}' not supported")]
    UnsupportedSentence(String),
}

/// The ways a sentence envelope can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FramingError {
    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA sentences must be ASCII-only for proper parsing and checksum calculation.
    #[error("sentence contains non-ASCII characters")]
    NonAscii,

    /// The sentence does not start with `$` or `!`.
    #[error("sentence does not start with a '$' or '!'")]
    MissingStartMarker,

    /// The sentence does not contain a `*` checksum separator.
    #[error("sentence does not contain checksum separator")]
    MissingChecksumSeparator,

    /// The text after `*` is not exactly two hex digits.
    #[error("malformed checksum {0:?}")]
    MalformedChecksum(String),

    /// The line ending did not match the configured [`LineEndingMode`](crate::LineEndingMode).
    #[error("unexpected line ending")]
    LineEnding,
}

fn describe(value: &Option<String>) -> String {
    match value {
        Some(value) => format!("{value:?}"),
        None => "missing".to_string(),
    }
}

impl Error {
    /// Returns `true` when the error concerns the envelope rather than the content,
    /// meaning the line should be discarded without further inspection.
    pub fn is_envelope(&self) -> bool {
        matches!(self, Error::Framing(_) | Error::ChecksumMismatch { .. })
    }
}
