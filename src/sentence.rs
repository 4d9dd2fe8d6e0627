//! # Raw Sentences
//!
//! The framing result shared by every decoder: talker, type, data fields,
//! checksum and the original text.

use std::fmt;

use serde::Serialize;

/// Start marker of conventional sentences.
pub const SENTENCE_START: char = '$';

/// Start marker of encapsulated (binary payload) sentences.
pub const SENTENCE_START_ENCAPSULATED: char = '!';

/// Delimiter between fields.
pub const FIELD_SEPARATOR: char = ',';

/// Delimiter before the checksum.
pub const CHECKSUM_SEPARATOR: char = '*';

/// The framing convention of a sentence, selected by its start marker.
///
/// Conventional and encapsulated sentences live in separate type-code
/// namespaces: the same code is never shared between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Framing {
    /// `$` - fields carry directly meaningful values
    Conventional,
    /// `!` - fields carry an opaque sub-protocol payload (e.g. AIS)
    Encapsulated,
}

impl Framing {
    /// Returns the framing that uses `marker` as its start character.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            SENTENCE_START => Some(Framing::Conventional),
            SENTENCE_START_ENCAPSULATED => Some(Framing::Encapsulated),
            _ => None,
        }
    }

    /// Returns the start character of this framing.
    pub fn marker(self) -> char {
        match self {
            Framing::Conventional => SENTENCE_START,
            Framing::Encapsulated => SENTENCE_START_ENCAPSULATED,
        }
    }
}

/// A framed and checksum-validated sentence, not yet decoded.
///
/// Built once per input line by the framer and immutable thereafter. The
/// data fields never include the prefix field (it is split into talker and
/// type) nor the checksum.
///
/// Serializes to the keys `talker`, `type`, `fields`, `checksum` and `raw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawSentence {
    #[serde(skip)]
    framing: Framing,
    talker: String,
    #[serde(rename = "type")]
    sentence_type: String,
    fields: Vec<String>,
    checksum: String,
    raw: String,
}

impl RawSentence {
    pub(crate) fn new(
        framing: Framing,
        prefix: &str,
        fields: Vec<String>,
        checksum: String,
        raw: String,
    ) -> Self {
        let (talker, sentence_type) = split_prefix(prefix);

        RawSentence {
            framing,
            talker: talker.to_string(),
            sentence_type: sentence_type.to_string(),
            fields,
            checksum,
            raw,
        }
    }

    /// The framing convention, from the start marker.
    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// The talker id (e.g. `GP`), `P` for proprietary sentences.
    pub fn talker_id(&self) -> &str {
        &self.talker
    }

    /// The sentence type code (e.g. `RMC`).
    pub fn sentence_type(&self) -> &str {
        &self.sentence_type
    }

    /// Talker id and type code concatenated, identical to the wire prefix field.
    pub fn prefix(&self) -> String {
        format!("{}{}", self.talker, self.sentence_type)
    }

    /// The data fields in wire order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The checksum as two uppercase hex digits.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// The original text the sentence was framed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for RawSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Splits the prefix field into talker id and sentence type.
///
/// - A prefix starting with `P` is proprietary: the talker is `"P"` and the
///   type is the remainder, whatever its length.
/// - A prefix shorter than two characters is all talker, with an empty type.
/// - Otherwise the first two characters are the talker.
///
/// This never fails; a degenerate prefix surfaces later as an unsupported
/// sentence when its type is looked up.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::split_prefix;
///
/// assert_eq!(split_prefix("GPRMC"), ("GP", "RMC"));
/// assert_eq!(split_prefix("PGRME"), ("P", "GRME"));
/// assert_eq!(split_prefix("G"), ("G", ""));
/// ```
pub fn split_prefix(prefix: &str) -> (&str, &str) {
    if let Some(rest) = prefix.strip_prefix('P') {
        return ("P", rest);
    }

    // a two character prefix is a talker with an empty type, like a shorter one
    match prefix.char_indices().nth(2) {
        Some((split, _)) => prefix.split_at(split),
        None => (prefix, ""),
    }
}
