//! # Parsing Utilities
//!
//! This module provides the small nom combinators shared by the framer and the
//! field value parsers: ensuring complete consumption of a field and parsing
//! fixed-width sub-fields such as the `hh` of `hhmmss.ss`.

use nom::{
    Err, Input, Parser, ToUsize,
    bytes::complete::take,
    combinator::{rest_len, verify},
    error::{ErrorKind, ParseError},
    sequence::terminated,
};

/// Holds the result of parsing a single field (or part of one).
///
/// Field-level parsers always work on `&str` with nom's default error type;
/// failures are converted to [`Error::InvalidField`](crate::Error::InvalidField)
/// by the [`FieldParser`](crate::FieldParser), so nom errors never escape the crate.
pub type IResult<'a, O> = nom::IResult<&'a str, O>;

/// Ensures that the parser consumes all input.
///
/// Runs `f` and then fails with `e` if anything is left over.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::parsing::{IResult, consumed};
/// use nom::{Parser, bytes::complete::take, error::ErrorKind};
///
/// // Parse all 3 bytes
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// // This would fail because not all input is consumed
/// let result: IResult<_> = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    terminated(
        f,
        verify(rest_len, |len| len == &0).or(move |i| Err(Err::Error(E::from_error_kind(i, e)))),
    )
}

/// Takes exactly `count` characters and runs `f` over all of them.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::parsing::{IResult, with_take};
/// use nom::{Parser, character::complete::u8};
///
/// let result: IResult<_> = with_take(2u8, u8).parse("220516");
/// assert_eq!(result, Ok(("0516", 22)));
///
/// // the two characters must parse completely
/// let result: IResult<_> = with_take(2u8, u8).parse("2A0516");
/// assert!(result.is_err());
/// ```
pub fn with_take<'a, O, F, C>(
    count: C,
    f: F,
) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    C: ToUsize,
{
    take(count).and_then(consumed(f, ErrorKind::Digit))
}

#[cfg(test)]
mod tests {
    use nom::{Parser, bytes::complete::take, character::complete::u16, error::ErrorKind};

    use super::*;

    #[test]
    fn test_consumed() {
        let result: IResult<_> = consumed(u16, ErrorKind::Eof).parse("512");
        assert_eq!(result, Ok(("", 512)));

        let result: IResult<_> = consumed(u16, ErrorKind::Eof).parse("512x");
        match result {
            Err(Err::Error(error)) => assert_eq!(error.code, ErrorKind::Eof),
            other => panic!("unexpected result {other:?}"),
        }

        let result: IResult<_> = consumed(take(0u8), ErrorKind::Eof).parse("");
        assert!(result.is_ok());
    }

    #[test]
    fn test_with_take() {
        let result: IResult<_> = (with_take(2u8, u16), with_take(3u8, u16)).parse("05123x");
        assert_eq!(result, Ok(("x", (5, 123))));

        let result: IResult<_> = with_take(3u8, u16).parse("05");
        assert!(result.is_err());
    }
}
