use serde::Serialize;

use crate::{
    self as nmea0183_decode, Decode, FieldParser, RawSentence, nmea_content::Quality,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                       11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "GGA")]
pub struct GGA {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Fix time in UTC
    #[nmea(field = 0)]
    pub time: Option<time::Time>,
    /// Latitude in degrees, south negative
    #[nmea(field = 1, with = FieldParser::latitude)]
    pub latitude: Option<f64>,
    /// Longitude in degrees, west negative
    #[nmea(field = 3, with = FieldParser::longitude)]
    pub longitude: Option<f64>,
    /// Quality of the GPS fix
    #[nmea(field = 5, name = "fix quality")]
    pub fix_quality: Option<Quality>,
    /// Number of satellites in use
    #[nmea(field = 6, name = "satellite count")]
    pub satellite_count: Option<u8>,
    /// Horizontal dilution of precision
    #[nmea(field = 7)]
    pub hdop: Option<f32>,
    /// Altitude above mean sea level, in meters
    #[nmea(field = 8, unit = 'M')]
    pub altitude: Option<f32>,
    /// Height of the geoid above the WGS84 ellipsoid, in meters
    #[nmea(field = 10, unit = 'M', name = "geoidal separation")]
    pub geoidal_separation: Option<f32>,
    /// Seconds since the last DGPS update
    #[nmea(field = 12, name = "DGPS age")]
    pub dgps_age: Option<f32>,
    /// DGPS reference station id
    #[nmea(field = 13, name = "DGPS station")]
    pub dgps_station: Option<u16>,
}

#[cfg(test)]
mod tests {
    use time::macros::time;

    use super::*;
    use crate::{Error, parse_sentence};

    #[test]
    fn test_gga() {
        let sentence =
            parse_sentence("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")
                .unwrap();
        let gga = GGA::decode(sentence).into_result().unwrap();

        assert_eq!(gga.time, Some(time!(12:35:19)));
        assert!((gga.latitude.unwrap() - 48.1173).abs() < 1e-6);
        assert!((gga.longitude.unwrap() - 11.516_666_666).abs() < 1e-6);
        assert_eq!(gga.fix_quality, Some(Quality::GPSFix));
        assert_eq!(gga.satellite_count, Some(8));
        assert_eq!(gga.hdop, Some(0.9));
        assert_eq!(gga.altitude, Some(545.4));
        assert_eq!(gga.geoidal_separation, Some(46.9));
        assert_eq!(gga.dgps_age, None);
        assert_eq!(gga.dgps_station, None);
    }

    #[test]
    fn test_gga_no_fix() {
        let sentence = parse_sentence("$GPGGA,,,,,,0,00,99.99,,,,,,*48").unwrap();
        let gga = GGA::decode(sentence).into_result().unwrap();

        assert_eq!(gga.time, None);
        assert_eq!(gga.latitude, None);
        assert_eq!(gga.fix_quality, Some(Quality::NoFix));
        assert_eq!(gga.satellite_count, Some(0));
    }

    #[test]
    fn test_gga_short() {
        let sentence = parse_sentence("$GPGGA,123519,4807.038,N*27").unwrap();
        let decoded = GGA::decode(sentence);

        assert_eq!(decoded.value.time, Some(time!(12:35:19)));
        assert!(matches!(
            decoded.error,
            Some(Error::InvalidField { index: 3, value: None, .. })
        ));
    }
}
