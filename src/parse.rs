use nom::{
    Parser,
    error::{ErrorKind, make_error},
};

use crate::parsing::{IResult, consumed};

/// Trait for parsing values from a single NMEA 0183 data field.
///
/// The `FieldValue` trait is the typed-getter seam of the
/// [`FieldParser`](crate::FieldParser): every field of a decoded sentence is
/// read through it. Implementations are provided for integers, floats,
/// `String`, `Option<T>` and the time and enum types of
/// [`nmea_content`](crate::nmea_content); you can implement it for your own
/// types to use them with [`FieldParser::get`](crate::FieldParser::get) or
/// `#[derive(Decode)]`.
///
/// Empty fields are handled by [`empty`](FieldValue::empty) rather than
/// [`parse`](FieldValue::parse):
///
/// | type              | empty field        |
/// |-------------------|--------------------|
/// | integers, floats  | zero               |
/// | `String`          | `""`               |
/// | `Option<T>`       | `None`             |
/// | everything else   | invalid            |
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::FieldValue;
///
/// assert_eq!(u8::from_field("42"), Some(42));
/// assert_eq!(u8::from_field(""), Some(0));
/// assert_eq!(u8::from_field("4x"), None);
/// assert_eq!(Option::<f32>::from_field(""), Some(None));
/// assert_eq!(f64::from_field("NaN"), None);
/// ```
///
/// # Implementing for Custom Types
///
/// ```rust
/// use nmea0183_decode::{FieldValue, parsing::IResult};
/// use nom::{Parser, bytes::complete::tag, combinator::value};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Valid;
///
/// impl FieldValue for Valid {
///     fn parse(i: &str) -> IResult<'_, Self> {
///         value(Valid, tag("OK")).parse(i)
///     }
/// }
///
/// assert_eq!(Valid::from_field("OK"), Some(Valid));
/// assert_eq!(Valid::from_field(""), None);
/// ```
pub trait FieldValue: Sized {
    /// Parses a non-empty field.
    ///
    /// The parser does not need to consume the whole field:
    /// [`from_field`](FieldValue::from_field) rejects any leftover input.
    fn parse(i: &str) -> IResult<'_, Self>;

    /// Returns the value of an empty field, or `None` if an empty field is invalid.
    fn empty() -> Option<Self> {
        None
    }

    /// Parses a complete field, applying the empty-field rule.
    ///
    /// Returns `None` if the field is invalid.
    fn from_field(field: &str) -> Option<Self> {
        if field.is_empty() {
            return Self::empty();
        }

        consumed(Self::parse, ErrorKind::Eof)
            .parse(field)
            .ok()
            .map(|(_, value)| value)
    }
}

macro_rules! impl_integer_type {
    ($($t:ident),*) => ($(
        impl FieldValue for $t {
            fn parse(i: &str) -> IResult<'_, Self> {
                nom::character::complete::$t(i)
            }

            fn empty() -> Option<Self> {
                Some(0)
            }
        }
    )*)
}

impl_integer_type!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! impl_float_type {
    ($($t:ty, $p:ident),*) => ($(
        impl FieldValue for $t {
            fn parse(i: &str) -> IResult<'_, Self> {
                let result: IResult<'_, $t> = nom::number::complete::$p(i);
                let (rest, value) = result?;

                // "NaN" and "inf" are accepted by the float parser but never valid
                if !value.is_finite() {
                    return Err(nom::Err::Error(make_error(i, ErrorKind::Float)));
                }

                Ok((rest, value))
            }

            fn empty() -> Option<Self> {
                Some(0.0)
            }
        }
    )*)
}

impl_float_type!(f32, float, f64, double);

impl FieldValue for String {
    fn parse(i: &str) -> IResult<'_, Self> {
        Ok(("", i.to_string()))
    }

    fn empty() -> Option<Self> {
        Some(String::new())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn parse(i: &str) -> IResult<'_, Self> {
        T::parse.map(Some).parse(i)
    }

    fn empty() -> Option<Self> {
        Some(None)
    }
}
