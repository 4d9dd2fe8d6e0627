use serde::Serialize;

use crate::{
    self as nmea0183_decode, Decode, FieldParser, RawSentence,
    nmea_content::{FixMode, SelectionMode, SystemId},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17  18
///         | | |                         |  |   |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x,h*hh<CR><LF>
/// ```
///
/// Field 18 was added in NMEA 4.11.
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "GSA")]
pub struct GSA {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    #[nmea(field = 0, name = "selection mode")]
    pub selection_mode: Option<SelectionMode>,
    #[nmea(field = 1, name = "fix mode")]
    pub fix_mode: Option<FixMode>,
    /// PRNs of the satellites used for the fix, empty slots skipped
    #[nmea(field = 2, with = prns, name = "fix satellite")]
    pub fix_satellites: heapless::Vec<u8, 12>,
    /// Position dilution of precision
    #[nmea(field = 14)]
    pub pdop: Option<f32>,
    /// Horizontal dilution of precision
    #[nmea(field = 15)]
    pub hdop: Option<f32>,
    /// Vertical dilution of precision
    #[nmea(field = 16)]
    pub vdop: Option<f32>,
    #[nmea(field = 17, trailing, name = "system id")]
    pub system_id: Option<SystemId>,
}

/// Reads the twelve PRN slots starting at `index`.
fn prns(p: &mut FieldParser<'_>, index: usize, name: &str) -> heapless::Vec<u8, 12> {
    (index..index + 12)
        .filter_map(|i| p.get::<Option<u8>>(i, name))
        .collect()
}
