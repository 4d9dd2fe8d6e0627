use serde::Serialize;

use crate::{self as nmea0183_decode, Decode, RawSentence};

/// HDT - Heading - True
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdt_heading_true>
///
/// ```text
///         1   2
///         |   |
///  $--HDT,x.x,T*hh<CR><LF>
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "HDT")]
pub struct HDT {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Heading in degrees, true
    #[nmea(field = 0, unit = 'T')]
    pub heading: Option<f32>,
}
