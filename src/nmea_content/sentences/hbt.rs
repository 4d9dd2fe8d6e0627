use serde::Serialize;

use crate::{self as nmea0183_decode, Decode, RawSentence, nmea_content::Status};

/// HBT - Heartbeat Supervision Sentence
///
/// ```text
///         1   2 3
///         |   | |
///  $--HBT,x.x,A,x*hh<CR><LF>
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Decode)]
#[nmea(sentence_type = "HBT")]
pub struct HBT {
    #[nmea(raw)]
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Configured repeat interval in seconds
    #[nmea(field = 0)]
    pub interval: Option<f32>,
    /// Equipment status, [`Status::Valid`] when operating normally
    #[nmea(field = 1)]
    pub status: Option<Status>,
    /// Sequential sequence identifier, 0 to 9
    #[nmea(field = 2)]
    pub id: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_sentence;

    #[test]
    fn test_hbt() {
        let hbt = HBT::decode(parse_sentence("$HCHBT,98.3,0.0,E12*0D").unwrap());
        assert!(hbt.error.is_some());

        let hbt = HBT::decode(parse_sentence("$AIHBT,30.0,A,7*11").unwrap())
            .into_result()
            .unwrap();
        assert_eq!(hbt.interval, Some(30.0));
        assert_eq!(hbt.status, Some(Status::Valid));
        assert_eq!(hbt.id, Some(7));
    }
}
