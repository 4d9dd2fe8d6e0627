use serde::Serialize;

use crate::{self as nmea0183_decode, Decode, RawSentence, nmea_content::FaaMode};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "VTG")]
pub struct VTG {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Course over ground in degrees, true
    #[nmea(field = 0, unit = 'T', name = "true track")]
    pub true_track: Option<f32>,
    /// Course over ground in degrees, magnetic
    #[nmea(field = 2, unit = 'M', name = "magnetic track")]
    pub magnetic_track: Option<f32>,
    /// Speed over ground in knots
    #[nmea(field = 4, unit = 'N', name = "speed (knots)")]
    pub speed_knots: Option<f32>,
    /// Speed over ground in kilometers per hour
    #[nmea(field = 6, unit = 'K', name = "speed (km/h)")]
    pub speed_kph: Option<f32>,
    /// FAA Mode Indicator
    #[nmea(field = 8, trailing, name = "FAA mode")]
    pub faa_mode: Option<FaaMode>,
}
