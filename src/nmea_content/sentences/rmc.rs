use serde::Serialize;

use crate::{
    self as nmea0183_decode, Decode, FieldParser, RawSentence,
    nmea_content::{FaaMode, NavStatus, Status},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// NMEA 4.1:
/// ```text
///         1         2 3       4 5        6  7   8   9    10 111213
///         |         | |       | |        |  |   |   |    |  | | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m,s*hh<CR><LF>
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "RMC")]
pub struct RMC {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Fix time in UTC
    #[nmea(field = 0)]
    pub time: Option<time::Time>,
    /// Status Mode Indicator
    #[nmea(field = 1)]
    pub status: Status,
    /// Latitude in degrees, south negative
    #[nmea(field = 2, with = FieldParser::latitude)]
    pub latitude: Option<f64>,
    /// Longitude in degrees, west negative
    #[nmea(field = 4, with = FieldParser::longitude)]
    pub longitude: Option<f64>,
    /// Speed over ground in knots
    #[nmea(field = 6)]
    pub speed: Option<f32>,
    /// Course over ground in degrees, true
    #[nmea(field = 7)]
    pub course: Option<f32>,
    /// Fix date in UTC
    #[nmea(field = 8)]
    pub date: Option<time::Date>,
    /// Magnetic variation in degrees, west negative
    #[nmea(field = 9, with = FieldParser::magnetic_variation, name = "magnetic variation")]
    pub magnetic_variation: Option<f32>,
    /// FAA Mode Indicator
    #[nmea(field = 11, trailing, name = "FAA mode")]
    pub faa_mode: Option<FaaMode>,
    /// Navigation status
    #[nmea(field = 12, trailing, name = "navigation status")]
    pub nav_status: Option<NavStatus>,
}

impl RMC {
    /// Fix date and time, if both are present.
    pub fn date_time(&self) -> Option<time::PrimitiveDateTime> {
        Some(time::PrimitiveDateTime::new(self.date?, self.time?))
    }
}
