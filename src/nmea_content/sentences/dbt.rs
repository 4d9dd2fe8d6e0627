use serde::Serialize;

use crate::{self as nmea0183_decode, Decode, RawSentence};

/// DBT - Depth Below Transducer
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbt_depth_below_transducer>
///
/// ```text
///         1   2 3   4 5   6
///         |   | |   | |   |
///  $--DBT,x.x,f,x.x,M,x.x,F*hh<CR><LF>
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "DBT")]
pub struct DBT {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Water depth in feet
    #[nmea(field = 0, unit = 'f')]
    pub depth_feet: Option<f32>,
    /// Water depth in meters
    #[nmea(field = 2, unit = 'M')]
    pub depth_meters: Option<f32>,
    /// Water depth in fathoms
    #[nmea(field = 4, unit = 'F')]
    pub depth_fathoms: Option<f32>,
}

impl DBT {
    /// Depth in meters, converted from feet or fathoms when meters are absent.
    pub fn depth(&self) -> Option<f32> {
        self.depth_meters
            .or(self.depth_feet.map(|feet| feet * 0.3048))
            .or(self.depth_fathoms.map(|fathoms| fathoms * 1.8288))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, parse_sentence};

    #[test]
    fn test_dbt() {
        let sentence = parse_sentence("$IIDBT,032.93,f,010.04,M,005.42,F*2C").unwrap();
        let dbt = DBT::decode(sentence).into_result().unwrap();

        assert_eq!(dbt.depth_feet, Some(32.93));
        assert_eq!(dbt.depth_meters, Some(10.04));
        assert_eq!(dbt.depth_fathoms, Some(5.42));
        assert_eq!(dbt.depth(), Some(10.04));
    }

    #[test]
    fn test_dbt_partial() {
        let sentence = parse_sentence("$SDDBT,,f,,M,,F*28").unwrap();
        let dbt = DBT::decode(sentence).into_result().unwrap();
        assert_eq!(dbt.depth(), None);

        let sentence = parse_sentence("$SDDBT,10.0,f,,M,,F*37").unwrap();
        let dbt = DBT::decode(sentence).into_result().unwrap();
        assert!((dbt.depth().unwrap() - 3.048).abs() < 1e-4);
    }

    #[test]
    fn test_dbt_wrong_unit() {
        let sentence = parse_sentence("$IIDBT,032.93,M,010.04,M,005.42,F*07").unwrap();
        let decoded = DBT::decode(sentence);

        assert_eq!(decoded.value.depth_feet, None);
        assert_eq!(decoded.value.depth_meters, Some(10.04));
        assert!(matches!(
            decoded.error,
            Some(Error::InvalidField { index: 1, .. })
        ));
    }
}
