use serde::Serialize;

use crate::{
    self as nmea0183_decode, Decode, FieldParser, RawSentence,
    nmea_content::{FaaMode, Status},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
///
/// Field 6 was added in NMEA 2.0 and field 7 in NMEA 2.3.
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "GLL")]
pub struct GLL {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Latitude in degrees, south negative
    #[nmea(field = 0, with = FieldParser::latitude)]
    pub latitude: Option<f64>,
    /// Longitude in degrees, west negative
    #[nmea(field = 2, with = FieldParser::longitude)]
    pub longitude: Option<f64>,
    /// Fix time in UTC
    #[nmea(field = 4)]
    pub time: Option<time::Time>,
    #[nmea(field = 5, trailing)]
    pub status: Option<Status>,
    /// FAA Mode Indicator
    #[nmea(field = 6, trailing, name = "FAA mode")]
    pub faa_mode: Option<FaaMode>,
}

#[cfg(test)]
mod tests {
    use time::macros::time;

    use super::*;
    use crate::parse_sentence;

    #[test]
    fn test_gll() {
        let sentence = parse_sentence("$GPGLL,4916.45,N,12311.12,W,225444,A,D*59").unwrap();
        let gll = GLL::decode(sentence).into_result().unwrap();

        assert!((gll.latitude.unwrap() - 49.274_166_666).abs() < 1e-6);
        assert!((gll.longitude.unwrap() + 123.185_333_333).abs() < 1e-6);
        assert_eq!(gll.time, Some(time!(22:54:44)));
        assert_eq!(gll.status, Some(Status::Valid));
        assert_eq!(gll.faa_mode, Some(FaaMode::Differential));
    }

    #[test]
    fn test_gll_legacy() {
        let sentence = parse_sentence("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap();
        let gll = GLL::decode(sentence).into_result().unwrap();
        assert_eq!(gll.status, Some(Status::Valid));
        assert_eq!(gll.faa_mode, None);

        let sentence = parse_sentence("$GPGLL,4916.45,N,12311.12,W,225444*5C").unwrap();
        let gll = GLL::decode(sentence).into_result().unwrap();
        assert_eq!(gll.status, None);
    }
}
