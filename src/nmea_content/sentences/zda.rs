use serde::Serialize;

use crate::{self as nmea0183_decode, Decode, RawSentence};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// The calendar fields are kept as read; [`date`](ZDA::date) and
/// [`utc_offset`](ZDA::utc_offset) validate them.
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "ZDA")]
pub struct ZDA {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Time in UTC
    #[nmea(field = 0)]
    pub time: Option<time::Time>,
    /// Day of month, 01 to 31
    #[nmea(field = 1)]
    pub day: i64,
    /// Month, 01 to 12
    #[nmea(field = 2)]
    pub month: i64,
    /// Four digit year
    #[nmea(field = 3)]
    pub year: i64,
    /// Local zone offset from UTC, hours
    #[nmea(field = 4, name = "offset (hours)")]
    pub offset_hours: i64,
    /// Local zone offset from UTC, minutes, same sign as the hours
    #[nmea(field = 5, name = "offset (minutes)")]
    pub offset_minutes: i64,
}

impl ZDA {
    /// The UTC date, `None` if the calendar fields do not form a valid date.
    pub fn date(&self) -> Option<time::Date> {
        let month = time::Month::try_from(u8::try_from(self.month).ok()?).ok()?;

        time::Date::from_calendar_date(
            i32::try_from(self.year).ok()?,
            month,
            u8::try_from(self.day).ok()?,
        )
        .ok()
    }

    /// The local zone offset, `None` if out of range.
    pub fn utc_offset(&self) -> Option<time::UtcOffset> {
        let hours = i8::try_from(self.offset_hours).ok()?;
        let mut minutes = i8::try_from(self.offset_minutes).ok()?;
        if hours < 0 {
            minutes = minutes.checked_neg()?;
        }

        time::UtcOffset::from_hms(hours, minutes, 0).ok()
    }
}

impl From<ZDA> for Option<time::OffsetDateTime> {
    /// The UTC instant expressed in the local zone.
    fn from(value: ZDA) -> Self {
        let offset = value.utc_offset()?;
        let local = time::PrimitiveDateTime::new(value.date()?, value.time?)
            .checked_add(time::Duration::seconds(offset.whole_seconds().into()))?;

        Some(local.assume_offset(offset))
    }
}
