use serde::Serialize;

use crate::{self as nmea0183_decode, Decode, RawSentence};

/// PGRME - Garmin Estimated Error
///
/// ```text
///         1   2 3   4 5   6
///         |   | |   | |   |
///  $PGRME,x.x,M,x.x,M,x.x,M*hh<CR><LF>
/// ```
///
/// Proprietary: the talker id is `P` and the type code is `GRME`.
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "GRME")]
pub struct PGRME {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Estimated horizontal position error in meters
    #[nmea(field = 0, unit = 'M', name = "horizontal error")]
    pub horizontal_error: Option<f32>,
    /// Estimated vertical position error in meters
    #[nmea(field = 2, unit = 'M', name = "vertical error")]
    pub vertical_error: Option<f32>,
    /// Estimated overall position error in meters
    #[nmea(field = 4, unit = 'M', name = "spherical error")]
    pub spherical_error: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_sentence;

    #[test]
    fn test_pgrme() {
        let sentence = parse_sentence("$PGRME,15.0,M,45.0,M,25.0,M*1C").unwrap();
        assert_eq!((sentence.talker_id(), sentence.sentence_type()), ("P", "GRME"));

        let pgrme = PGRME::decode(sentence).into_result().unwrap();
        assert_eq!(pgrme.horizontal_error, Some(15.0));
        assert_eq!(pgrme.vertical_error, Some(45.0));
        assert_eq!(pgrme.spherical_error, Some(25.0));
    }
}
