use serde::Serialize;

use crate::{
    Decode, Decoded, Error, FieldParser, RawSentence,
    nmea_content::{Satellite, SignalId},
};

/// Number of fields describing one satellite.
const SATELLITE_FIELDS: usize = 4;

/// Maximum number of satellites in one sentence.
const MAX_SATELLITES: usize = 4;

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Fields 4 to 7 repeat for up to four satellites. NMEA 4.11 appends a
/// signal id after the last satellite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GSV {
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: u8,
    /// Sentence number of this GSV message within current group
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    /// Satellite information, blocks without a PRN skipped
    pub satellites: heapless::Vec<Satellite, MAX_SATELLITES>,
    /// Signal ID of the GNSS system used for the fix
    pub signal_id: Option<SignalId>,
}

impl Decode for GSV {
    const SENTENCE_TYPE: &'static str = "GSV";

    fn decode(sentence: RawSentence) -> Decoded<Self> {
        let mut p = FieldParser::new(&sentence);
        p.assert_type(Self::SENTENCE_TYPE);

        let repeated = p.len().saturating_sub(3);
        let blocks = repeated / SATELLITE_FIELDS;
        let has_signal_id = repeated % SATELLITE_FIELDS == 1;
        if p.len() < 3 || repeated % SATELLITE_FIELDS > 1 || blocks > MAX_SATELLITES {
            p.record(Error::UnexpectedFieldCount {
                prefix: sentence.prefix(),
                expected: "3 + 4n with n <= 4, optionally followed by a signal id",
                actual: p.len(),
            });
        }

        let total_messages = p.get(0, "total messages");
        let message_number = p.get(1, "message number");
        let satellites_in_view = p.get(2, "satellites in view");

        // at most MAX_SATELLITES blocks are read, so collecting cannot overflow
        let satellites = (0..blocks)
            .take(MAX_SATELLITES)
            .map(|block| 3 + block * SATELLITE_FIELDS)
            .filter_map(|index| {
                let prn: Option<u8> = p.get(index, "satellite PRN");
                let elevation = p.get(index + 1, "elevation");
                let azimuth = p.get(index + 2, "azimuth");
                let snr = p.get(index + 3, "SNR");

                prn.map(|prn| Satellite {
                    prn,
                    elevation,
                    azimuth,
                    snr,
                })
            })
            .collect::<heapless::Vec<_, MAX_SATELLITES>>();

        let signal_id = if has_signal_id {
            p.get(p.len() - 1, "signal id")
        } else {
            None
        };

        let error = p.finish();
        Decoded::new(
            GSV {
                raw: sentence,
                total_messages,
                message_number,
                satellites_in_view,
                satellites,
                signal_id,
            },
            error,
        )
    }

    fn raw(&self) -> &RawSentence {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_sentence;

    fn decode(input: &str) -> Decoded<GSV> {
        GSV::decode(parse_sentence(input).unwrap())
    }

    #[test]
    fn test_gsv() {
        let gsv = decode("$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74")
            .into_result()
            .unwrap();

        assert_eq!(gsv.total_messages, 3);
        assert_eq!(gsv.message_number, 1);
        assert_eq!(gsv.satellites_in_view, 11);
        assert_eq!(gsv.satellites.len(), 4);
        assert_eq!(
            gsv.satellites[3],
            Satellite {
                prn: 13,
                elevation: Some(6),
                azimuth: Some(292),
                snr: Some(0),
            }
        );
        assert_eq!(gsv.signal_id, None);
    }

    #[test]
    fn test_gsv_layouts() {
        let cases = [
            ("$GPGSV,1,1,00*79", 0, None),
            ("$GPGSV,3,3,11,22,42,067,42,24,14,311,43,27,05,244,00,,,,*4D", 3, None),
            ("$GPGSV,1,1,01,05,45,120,*4F", 1, None),
            ("$GAGSV,1,1,01,05,45,120,38,7*4E", 1, Some(SignalId(7))),
            ("$GPGSV,1,1,01,05,45,120,38,*68", 1, None),
        ];

        for (input, satellites, signal_id) in cases {
            let gsv = decode(input).into_result();
            assert!(gsv.is_ok(), "Failed: {input:?}\n\t{gsv:?}");

            let gsv = gsv.unwrap();
            assert_eq!(gsv.satellites.len(), satellites, "Failed: {input:?}");
            assert_eq!(gsv.signal_id, signal_id, "Failed: {input:?}");
        }
    }

    #[test]
    fn test_gsv_unexpected_field_count() {
        let decoded = decode("$GPGSV,1,1,01,05,45*7C");

        assert_eq!(
            decoded.error,
            Some(Error::UnexpectedFieldCount {
                prefix: "GPGSV".into(),
                expected: "3 + 4n with n <= 4, optionally followed by a signal id",
                actual: 5,
            })
        );
        assert_eq!(decoded.value.satellites_in_view, 1);
        assert!(decoded.value.satellites.is_empty());
    }

    #[test]
    fn test_gsv_invalid_satellite() {
        let decoded = decode("$GPGSV,1,1,02,05,45,120,38,06,x,120,38*01");

        assert!(matches!(
            decoded.error,
            Some(Error::InvalidField { index: 8, .. })
        ));
        assert_eq!(decoded.value.satellites.len(), 2);
        assert_eq!(decoded.value.satellites[1].elevation, None);
    }
}
