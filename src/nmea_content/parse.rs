use nom::{
    Parser,
    character::complete::{digit1, u8, u16},
    combinator::verify,
    error::{ErrorKind, make_error},
    number::complete::double,
};

use crate::{
    FieldValue,
    parsing::{IResult, with_take},
};

/// Parses a `d..dmm.mmm` coordinate into decimal degrees.
///
/// The degrees are everything before the last two digits of the integer part;
/// the minutes must be below 60. Latitudes carry two degree digits and
/// longitudes three, but leading zeros are optional.
pub fn degrees_minutes(i: &str) -> IResult<'_, f64> {
    let digits: IResult<'_, &str> = digit1(i);
    let (_, integer) = digits?;
    if integer.len() < 3 {
        return Err(nom::Err::Error(make_error(i, ErrorKind::Digit)));
    }

    let (i, degrees) = with_take(integer.len() - 2, u16).parse(i)?;
    let minutes: IResult<'_, f64> =
        verify(double, |minutes: &f64| (0.0..60.0).contains(minutes)).parse(i);
    let (i, minutes) = minutes?;

    Ok((i, degrees as f64 + minutes / 60.0))
}

impl FieldValue for time::Time {
    /// Parses `hhmmss` with optional fractional seconds.
    fn parse(i: &str) -> IResult<'_, Self> {
        let (i, (hour, minute)) = (with_take(2u8, u8), with_take(2u8, u8)).parse(i)?;
        let digits: IResult<'_, &str> = digit1(i);
        if digits?.1.len() != 2 {
            return Err(nom::Err::Error(make_error(i, ErrorKind::Digit)));
        }
        let second: IResult<'_, f64> = verify(double, |second: &f64| *second >= 0.0).parse(i);
        let (i, second) = second?;

        // rounding may carry into the next second
        let nanoseconds = ((second.fract() * 1e9).round() as u32).min(999_999_999);
        let time = time::Time::from_hms_nano(hour, minute, second.trunc() as u8, nanoseconds)
            .or(Err(nom::Err::Error(make_error(i, ErrorKind::Verify))))?;

        Ok((i, time))
    }
}

impl FieldValue for time::Date {
    /// Parses `ddmmyy`; years 83 to 99 are in the 1900s, the rest in the 2000s.
    fn parse(i: &str) -> IResult<'_, Self> {
        let (i, (day, month, year)) =
            (with_take(2u8, u8), with_take(2u8, u8), with_take(2u8, u16)).parse(i)?;

        let month = month
            .try_into()
            .or(Err(nom::Err::Error(make_error(i, ErrorKind::Verify))))?;

        let year = match year {
            83..=99 => year + 1900,
            _ => year + 2000,
        };

        let date = time::Date::from_calendar_date(year as i32, month, day)
            .or(Err(nom::Err::Error(make_error(i, ErrorKind::Verify))))?;

        Ok((i, date))
    }
}
