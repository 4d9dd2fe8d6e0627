use serde::Serialize;

use crate::{Decode, Decoded, FieldParser, RawSentence};

/// Highest number of fill bits the last armoured character can carry.
const MAX_FILL_BITS: u8 = 5;

/// VDM/VDO - AIS VHF Data-Link Message
///
/// <https://gpsd.gitlab.io/gpsd/AIVDM.html#_aivdmaivdo_sentence_layer>
///
/// ```text
///         1 2 3 4 5                            6
///         | | | | |                            |
///  !--VDM,x,x,x,a,s--s,x*hh<CR><LF>
/// ```
///
/// VDM carries messages received from other vessels, VDO the own vessel's
/// reports. Both only exist with the `!` start marker. The payload is 6-bit
/// ASCII armoured; it is unpacked here into one byte per bit, the AIS message
/// itself is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VDMVDO {
    #[serde(flatten)]
    pub raw: RawSentence,
    /// Count of fragments in the currently accumulating message
    pub num_fragments: u8,
    /// Fragment number of this sentence, one-based
    pub fragment_number: u8,
    /// Sequential message id of a multi-sentence message
    pub message_id: Option<u8>,
    /// Radio channel code, `A` or `B` (sometimes `1` or `2`)
    pub channel: String,
    /// Unpacked payload, each element is `0` or `1`
    pub payload: Vec<u8>,
}

impl Decode for VDMVDO {
    const SENTENCE_TYPE: &'static str = "VDM";

    fn decode(sentence: RawSentence) -> Decoded<Self> {
        let mut p = FieldParser::new(&sentence);
        if sentence.sentence_type() != "VDO" {
            p.assert_type(Self::SENTENCE_TYPE);
        }

        let num_fragments = p.get(0, "number of fragments");
        let fragment_number = p.get(1, "fragment number");
        let message_id = p.get(2, "sequence number");
        let channel = p.get(3, "channel");
        let payload = payload(&mut p, 4);

        let error = p.finish();
        Decoded::new(
            VDMVDO {
                raw: sentence,
                num_fragments,
                fragment_number,
                message_id,
                channel,
                payload,
            },
            error,
        )
    }

    fn raw(&self) -> &RawSentence {
        &self.raw
    }
}

/// Unpacks the armoured payload at `index`, dropping the fill bits at `index + 1`.
fn payload(p: &mut FieldParser<'_>, index: usize) -> Vec<u8> {
    let armoured: String = p.get(index, "payload");
    let fill_bits: u8 = p.get(index + 1, "fill bits");
    if fill_bits > MAX_FILL_BITS {
        p.invalid(index + 1, "fill bits");
        return Vec::new();
    }

    let mut bits = Vec::with_capacity(armoured.len() * 6);
    for c in armoured.bytes() {
        let Some(sixbit) = dearmour(c) else {
            p.invalid(index, "payload");
            return Vec::new();
        };
        bits.extend((0..6).rev().map(|shift| (sixbit >> shift) & 1));
    }

    bits.truncate(bits.len().saturating_sub(fill_bits as usize));
    bits
}

/// Maps an armoured character (`0` to `W`, `` ` `` to `w`) to its six bits.
fn dearmour(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'W' => Some(c - b'0'),
        b'`'..=b'w' => Some(c - b'0' - 8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, parse_sentence};

    fn decode(input: &str) -> Decoded<VDMVDO> {
        VDMVDO::decode(parse_sentence(input).unwrap())
    }

    fn to_u32(bits: &[u8]) -> u32 {
        bits.iter().fold(0, |value, bit| (value << 1) | *bit as u32)
    }

    #[test]
    fn test_dearmour() {
        assert_eq!(dearmour(b'0'), Some(0));
        assert_eq!(dearmour(b'W'), Some(39));
        assert_eq!(dearmour(b'`'), Some(40));
        assert_eq!(dearmour(b'w'), Some(63));
        assert_eq!(dearmour(b'X'), None);
        assert_eq!(dearmour(b'x'), None);
    }

    #[test]
    fn test_vdm() {
        let vdm = decode("!AIVDM,1,1,,A,13aEOK?P00PD2wVMdLDRhgvL289?,0*26")
            .into_result()
            .unwrap();

        assert_eq!(vdm.num_fragments, 1);
        assert_eq!(vdm.fragment_number, 1);
        assert_eq!(vdm.message_id, None);
        assert_eq!(vdm.channel, "A");
        assert_eq!(vdm.payload.len(), 168);
        assert!(vdm.payload.iter().all(|bit| *bit <= 1));

        // message type 1, repeat indicator 0, then the MMSI
        assert_eq!(to_u32(&vdm.payload[0..6]), 1);
        assert_eq!(to_u32(&vdm.payload[6..8]), 0);
        assert_eq!(to_u32(&vdm.payload[8..38]), 244_670_316);
    }

    #[test]
    fn test_vdo_fill_bits() {
        let vdo = decode("!AIVDO,2,2,3,B,00000000000,2*26").into_result().unwrap();

        assert_eq!(vdo.raw.sentence_type(), "VDO");
        assert_eq!(vdo.message_id, Some(3));
        assert_eq!(vdo.payload.len(), 11 * 6 - 2);
    }

    #[test]
    fn test_vdm_invalid_payload() {
        let decoded = decode("!AIVDM,1,1,,A,13aEOK?P00PD2wVMdLDRhgvL289X,0*41");
        assert_eq!(decoded.value.payload, Vec::<u8>::new());
        assert!(matches!(
            decoded.error,
            Some(Error::InvalidField { index: 4, .. })
        ));

        let decoded = decode("!AIVDM,1,1,,A,13aEOK?P00PD2wVMdLDRhgvL289?,6*20");
        assert!(matches!(
            decoded.error,
            Some(Error::InvalidField { index: 5, .. })
        ));
    }

    #[test]
    fn test_vdm_type_mismatch() {
        let sentence = parse_sentence("!AIVDQ,1,1,,A,0,0*0A").unwrap();
        assert!(matches!(
            VDMVDO::decode(sentence).error,
            Some(Error::TypeMismatch { .. })
        ));
    }
}
