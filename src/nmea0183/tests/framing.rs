use crate::{
    Error, FramingError,
    nmea0183::{LineEndingMode, frame},
    sentence::Framing,
};

const RMC: &str = "$GPRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*70";

#[test]
fn test_frame_rmc() {
    let sentence = frame(RMC, LineEndingMode::Optional).unwrap();

    assert_eq!(sentence.framing(), Framing::Conventional);
    assert_eq!(sentence.talker_id(), "GP");
    assert_eq!(sentence.sentence_type(), "RMC");
    assert_eq!(sentence.checksum(), "70");
    assert_eq!(sentence.raw(), RMC);
    assert_eq!(
        sentence.fields(),
        [
            "220516", "A", "5133.82", "N", "00042.24", "W", "173.8", "231.8", "130694", "004.2",
            "W"
        ]
    );
}

#[test]
fn test_frame_encapsulated() {
    let input = "!AIVDM,1,1,,A,13aEOK?P00PD2wVMdLDRhgvL289?,0*26";
    let sentence = frame(input, LineEndingMode::Optional).unwrap();

    assert_eq!(sentence.framing(), Framing::Encapsulated);
    assert_eq!(sentence.prefix(), "AIVDM");
    assert_eq!(sentence.fields().len(), 6);
    assert_eq!(sentence.fields()[2], "");
}

#[test]
fn test_frame_strips_line_ending() {
    let sentence = frame(&format!("{RMC}\r\n"), LineEndingMode::Optional).unwrap();
    assert_eq!(sentence.raw(), RMC);
    assert_eq!(sentence.to_string(), RMC);
}

#[test]
fn test_reframe_round_trip() {
    let sentence = frame(RMC, LineEndingMode::Optional).unwrap();

    let rebuilt = format!(
        "{}{},{}*{}",
        sentence.framing().marker(),
        sentence.prefix(),
        sentence.fields().join(","),
        sentence.checksum()
    );
    assert_eq!(rebuilt, RMC);
    assert_eq!(frame(&rebuilt, LineEndingMode::Optional), Ok(sentence));
}

#[test]
fn test_degenerate_prefix() {
    let sentence = frame("$GPRMC*4B", LineEndingMode::Optional).unwrap();
    assert_eq!(sentence.sentence_type(), "RMC");
    assert!(sentence.fields().is_empty());

    let sentence = frame("$G*47", LineEndingMode::Optional).unwrap();
    assert_eq!((sentence.talker_id(), sentence.sentence_type()), ("G", ""));

    let sentence = frame("$*00", LineEndingMode::Optional).unwrap();
    assert_eq!(sentence.prefix(), "");
}

#[test]
fn test_framing_errors() {
    let cases = [
        (format!("x{RMC}"), FramingError::MissingStartMarker),
        (RMC[1..].to_string(), FramingError::MissingStartMarker),
        (String::new(), FramingError::MissingStartMarker),
        ("$GPRMC,220516,A".to_string(), FramingError::MissingChecksumSeparator),
        ("$GPTXT,\u{e9}*09".to_string(), FramingError::NonAscii),
        (format!("{RMC}0"), FramingError::MalformedChecksum("700".into())),
        (RMC.replace("*70", "*7"), FramingError::MalformedChecksum("7".into())),
        (RMC.replace("*70", "*"), FramingError::MalformedChecksum("".into())),
    ];

    for (input, expected) in cases {
        let result = frame(&input, LineEndingMode::Optional);
        assert_eq!(result, Err(Error::Framing(expected)), "Failed: {input:?}");
    }
}

#[test]
fn test_line_ending_modes() {
    let crlf = format!("{RMC}\r\n");

    assert!(frame(&crlf, LineEndingMode::Required).is_ok());
    assert!(frame(&crlf, LineEndingMode::Optional).is_ok());
    assert_eq!(
        frame(&crlf, LineEndingMode::Forbidden),
        Err(Error::Framing(FramingError::LineEnding))
    );

    assert!(frame(RMC, LineEndingMode::Forbidden).is_ok());
    assert_eq!(
        frame(RMC, LineEndingMode::Required),
        Err(Error::Framing(FramingError::LineEnding))
    );
}
