use crate::{Error, RawSentence, Result};

/// A typed NMEA sentence that can be decoded from a [`RawSentence`].
///
/// Usually derived:
///
/// ```rust
/// use nmea0183_decode::{Decode, Parser, RawSentence};
///
/// #[derive(Debug, Decode)]
/// #[nmea(sentence_type = "HDT")]
/// struct Heading {
///     #[nmea(raw)]
///     raw: RawSentence,
///     #[nmea(field = 0, unit = 'T')]
///     degrees: Option<f32>,
/// }
///
/// let sentence = Parser::default().frame("$GPHDT,274.07,T*03")?;
/// let heading = Heading::decode(sentence).into_result()?;
/// assert_eq!(heading.degrees, Some(274.07));
/// # Ok::<(), nmea0183_decode::Error>(())
/// ```
pub trait Decode: Sized {
    /// The type code this decoder handles, without talker id.
    const SENTENCE_TYPE: &'static str;

    /// Decodes all fields of `sentence`.
    ///
    /// Never fails outright: the record is always built, with default values
    /// for fields that could not be read, and the first error is returned
    /// alongside it.
    fn decode(sentence: RawSentence) -> Decoded<Self>;

    /// The sentence the record was decoded from.
    fn raw(&self) -> &RawSentence;
}

/// A decoded record together with the first error met while decoding it.
///
/// The record is complete but may hold default values when `error` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub error: Option<Error>,
}

impl<T> Decoded<T> {
    pub fn new(value: T, error: Option<Error>) -> Self {
        Decoded { value, error }
    }

    /// Returns `true` if every field was read successfully.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Discards the partial record if any field failed.
    pub fn into_result(self) -> Result<T> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            error: self.error,
        }
    }
}
