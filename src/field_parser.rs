//! # Field Parser
//!
//! The per-sentence accumulator every decoder reads its fields through.
//!
//! A [`FieldParser`] wraps one [`RawSentence`] and offers typed getters by
//! field index. The first failure is recorded and every later one is ignored;
//! getters keep returning default values so that a decoder can read all of
//! its fields in one straight pass and check [`FieldParser::finish`] once at
//! the end.
//!
//! ```rust
//! use nmea0183_decode::{FieldParser, Parser};
//!
//! let sentence = Parser::default().frame("$GPHDT,274.07,T*03")?;
//! let mut p = FieldParser::new(&sentence);
//! p.assert_type("HDT");
//! let heading: Option<f32> = p.with_unit(0, 'T', "heading");
//! let missing = p.float(4, "missing");
//!
//! assert_eq!(heading, Some(274.07));
//! assert_eq!(missing, 0.0);
//! assert!(p.finish().is_some());
//! # Ok::<(), nmea0183_decode::Error>(())
//! ```

use nom::{Parser, combinator::all_consuming};

use crate::{Error, FieldValue, RawSentence, nmea_content::parse::degrees_minutes};

/// Sequential typed access to the fields of a sentence, with first-error-wins
/// error accumulation.
#[derive(Debug)]
pub struct FieldParser<'a> {
    sentence: &'a RawSentence,
    error: Option<Error>,
}

impl<'a> FieldParser<'a> {
    /// Creates a parser over the data fields of `sentence`.
    pub fn new(sentence: &'a RawSentence) -> Self {
        FieldParser {
            sentence,
            error: None,
        }
    }

    /// The sentence being read.
    pub fn sentence(&self) -> &'a RawSentence {
        self.sentence
    }

    /// Number of data fields.
    pub fn len(&self) -> usize {
        self.sentence.fields().len()
    }

    /// Returns `true` if the sentence has no data fields.
    pub fn is_empty(&self) -> bool {
        self.sentence.fields().is_empty()
    }

    /// Raw text of the field at `index`, `None` if out of range.
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.sentence.fields().get(index).map(String::as_str)
    }

    /// Records [`Error::TypeMismatch`] unless the sentence type is `expected`.
    pub fn assert_type(&mut self, expected: &str) {
        if self.sentence.sentence_type() != expected {
            self.record(Error::TypeMismatch {
                prefix: self.sentence.prefix(),
                expected: expected.to_string(),
                actual: self.sentence.sentence_type().to_string(),
            });
        }
    }

    /// Records `error` if no error has been recorded yet.
    pub fn record(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Records [`Error::InvalidField`] for the field at `index`.
    pub fn invalid(&mut self, index: usize, name: &str) {
        if self.error.is_some() {
            return;
        }

        let error = Error::InvalidField {
            prefix: self.sentence.prefix(),
            name: name.to_string(),
            index,
            value: self.field(index).map(str::to_string),
        };
        tracing::trace!(%error, "field rejected");
        self.error = Some(error);
    }

    /// Reads the field at `index` as `T`.
    ///
    /// Empty fields follow [`FieldValue::empty`]. If the field is missing or
    /// invalid the error is recorded and `T::default()` is returned.
    pub fn get<T: FieldValue + Default>(&mut self, index: usize, name: &str) -> T {
        match self.field(index).map(T::from_field) {
            Some(Some(value)) => value,
            _ => {
                self.invalid(index, name);
                T::default()
            }
        }
    }

    /// Reads an optional trailing field.
    ///
    /// Like [`get`](Self::get), but a sentence that ends before `index` yields
    /// `T::default()` without an error. Later protocol revisions append fields
    /// (FAA mode, navigational status, signal id) that older talkers omit.
    pub fn trailing<T: FieldValue + Default>(&mut self, index: usize, name: &str) -> T {
        if index >= self.len() {
            return T::default();
        }

        self.get(index, name)
    }

    pub fn string(&mut self, index: usize, name: &str) -> String {
        self.get(index, name)
    }

    pub fn int(&mut self, index: usize, name: &str) -> i64 {
        self.get(index, name)
    }

    pub fn float(&mut self, index: usize, name: &str) -> f64 {
        self.get(index, name)
    }

    /// `hhmmss.ss`, `None` if empty.
    pub fn time(&mut self, index: usize, name: &str) -> Option<time::Time> {
        self.get(index, name)
    }

    /// `ddmmyy`, `None` if empty.
    pub fn date(&mut self, index: usize, name: &str) -> Option<time::Date> {
        self.get(index, name)
    }

    /// A value followed by its unit at `index + 1`.
    ///
    /// Returns `None` if the value is empty. A non-empty unit other than
    /// `unit`, or a value without a unit, is invalid.
    pub fn with_unit<T: FieldValue>(&mut self, index: usize, unit: char, name: &str) -> Option<T> {
        let value: Option<T> = self.get(index, name);

        match self.field(index + 1) {
            Some("") if value.is_none() => None,
            Some(found) if found.len() == 1 && found.starts_with(unit) => value,
            _ => {
                self.invalid(index + 1, name);
                None
            }
        }
    }

    /// `ddmm.mm` at `index` and `N`/`S` at `index + 1`, in signed decimal degrees.
    pub fn latitude(&mut self, index: usize, name: &str) -> Option<f64> {
        self.coordinate(index, name, ('N', 'S'), 90.0)
    }

    /// `dddmm.mm` at `index` and `E`/`W` at `index + 1`, in signed decimal degrees.
    pub fn longitude(&mut self, index: usize, name: &str) -> Option<f64> {
        self.coordinate(index, name, ('E', 'W'), 180.0)
    }

    /// Magnetic variation at `index` and `E`/`W` at `index + 1`, west negative.
    pub fn magnetic_variation(&mut self, index: usize, name: &str) -> Option<f32> {
        let value: Option<f32> = self.get(index, name);

        let sign = match self.field(index + 1) {
            Some("") if value.is_none() => return None,
            Some("E") => 1.0,
            Some("W") => -1.0,
            _ => {
                self.invalid(index + 1, name);
                return None;
            }
        };

        value.map(|value| sign * value)
    }

    fn coordinate(
        &mut self,
        index: usize,
        name: &str,
        (positive, negative): (char, char),
        max: f64,
    ) -> Option<f64> {
        let (Some(value), Some(hemisphere)) = (self.field(index), self.field(index + 1)) else {
            self.invalid(index, name);
            return None;
        };

        if value.is_empty() && hemisphere.is_empty() {
            return None;
        }

        let degrees = match all_consuming(degrees_minutes).parse(value) {
            Ok((_, degrees)) if degrees <= max => degrees,
            _ => {
                self.invalid(index, name);
                return None;
            }
        };

        let mut hemispheres = hemisphere.chars();
        match (hemispheres.next(), hemispheres.next()) {
            (Some(c), None) if c == positive => Some(degrees),
            (Some(c), None) if c == negative => Some(-degrees),
            _ => {
                self.invalid(index + 1, name);
                None
            }
        }
    }

    /// The first recorded error, if any.
    pub fn err(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Consumes the parser, returning the first recorded error.
    pub fn finish(self) -> Option<Error> {
        self.error
    }
}
