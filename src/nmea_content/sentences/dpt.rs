use serde::Serialize;

use crate::{self as nmea0183_decode, Decode, RawSentence};

/// DPT - Depth of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dpt_depth_of_water>
///
/// ```text
///         1   2   3
///         |   |   |
///  $--DPT,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Field 3 was added in NMEA 3.0 and is often missing.
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "DPT")]
pub struct DPT {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Water depth relative to transducer, in meters
    #[nmea(field = 0)]
    pub depth: Option<f32>,
    /// Offset from transducer in meters, positive to the waterline, negative
    /// to the keel
    #[nmea(field = 1)]
    pub offset: Option<f32>,
    /// Maximum range scale in use, in meters
    #[nmea(field = 2, trailing)]
    pub range_scale: Option<f32>,
}

impl DPT {
    /// Depth below the waterline (positive offset) or the keel (negative offset).
    pub fn water_depth(&self) -> Option<f32> {
        Some(self.depth? + self.offset.unwrap_or_default())
    }
}
