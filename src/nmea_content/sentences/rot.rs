use serde::Serialize;

use crate::{self as nmea0183_decode, Decode, RawSentence, nmea_content::Status};

/// ROT - Rate Of Turn
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rot_rate_of_turn>
///
/// ```text
///         1   2
///         |   |
///  $--ROT,x.x,A*hh<CR><LF>
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "ROT")]
pub struct ROT {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Rate of turn in degrees per minute, negative to port
    #[nmea(field = 0)]
    pub rate: Option<f32>,
    #[nmea(field = 1)]
    pub status: Option<Status>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_sentence;

    #[test]
    fn test_rot() {
        let rot = ROT::decode(parse_sentence("$HEROT,-11.23,A*07").unwrap())
            .into_result()
            .unwrap();

        assert_eq!(rot.rate, Some(-11.23));
        assert_eq!(rot.status, Some(Status::Valid));
    }

    #[test]
    fn test_rot_invalid_status() {
        let rot = ROT::decode(parse_sentence("$HEROT,-11.23,X*1E").unwrap());
        assert_eq!(rot.value.rate, Some(-11.23));
        assert_eq!(rot.value.status, None);
        assert!(rot.error.is_some());
    }
}
