use crate::{
    self as nmea0183_decode, Decode, Decoded, Error, FieldParser, Framing, Parser, RawSentence,
    Registry, decode_as,
    nmea_content::{HDT, Sentence, Status},
};

/// MWV - Wind Speed and Angle, decoded outside the built-in set.
#[derive(Debug, Decode)]
#[nmea(sentence_type = "MWV")]
#[nmea(pre_exec(if nmea_parser.len() < 5 {
    nmea_parser.record(Error::UnexpectedFieldCount {
        prefix: nmea_sentence.prefix(),
        expected: "5",
        actual: nmea_parser.len(),
    });
}))]
struct MWV {
    #[nmea(raw)]
    raw: RawSentence,
    #[nmea(field = 0, name = "wind angle")]
    angle: Option<f32>,
    #[nmea(field = 1)]
    #[nmea(post_exec(if !matches!(reference.as_str(), "R" | "T") {
        nmea_parser.invalid(1, "reference");
    }))]
    reference: String,
    #[nmea(field = 2, unit = 'K', name = "wind speed")]
    speed: Option<f32>,
    #[nmea(field = 4, with = status)]
    status: Status,
    #[nmea(ignore)]
    sequence: u64,
}

/// WPL - Waypoint Location, reading coordinates through each `with` form.
#[derive(Debug, Decode)]
#[nmea(sentence_type = "WPL")]
struct WPL {
    #[nmea(raw)]
    raw: RawSentence,
    #[nmea(field = 0, with = FieldParser::latitude)]
    latitude: Option<f64>,
    #[nmea(field = 2, with(FieldParser::longitude))]
    longitude: Option<f64>,
    #[nmea(field = 4, with = "waypoint_id")]
    id: String,
}

fn waypoint_id(p: &mut FieldParser<'_>, index: usize, name: &str) -> String {
    p.string(index, name)
}

fn status(p: &mut FieldParser<'_>, index: usize, name: &str) -> Status {
    p.get(index, name)
}

fn decode_mwv(sentence: RawSentence) -> Decoded<Sentence> {
    // only used to check that a foreign decoder is dispatched
    let mwv = MWV::decode(sentence);
    let raw = mwv.value.raw().clone();
    let error = mwv.error;

    Decoded::new(
        Sentence::HDT(HDT {
            raw,
            heading: mwv.value.angle,
        }),
        error,
    )
}

#[test]
fn test_derived_decoder() {
    let sentence = Parser::default().frame("$WIMWV,214.8,R,0.1,K,A*28").unwrap();
    let mwv = MWV::decode(sentence).into_result().unwrap();

    assert_eq!(MWV::SENTENCE_TYPE, "MWV");
    assert_eq!(mwv.angle, Some(214.8));
    assert_eq!(mwv.reference, "R");
    assert_eq!(mwv.speed, Some(0.1));
    assert_eq!(mwv.status, Status::Valid);
    assert_eq!(mwv.sequence, 0);
    assert_eq!(mwv.raw().prefix(), "WIMWV");
}

#[test]
fn test_derived_decoder_with_paths() {
    let sentence = Parser::default()
        .frame("$GPWPL,4917.16,N,12310.64,W,003*65")
        .unwrap();
    let wpl = WPL::decode(sentence).into_result().unwrap();

    assert!((wpl.latitude.unwrap() - (49.0 + 17.16 / 60.0)).abs() < 1e-9);
    assert!((wpl.longitude.unwrap() + (123.0 + 10.64 / 60.0)).abs() < 1e-9);
    assert_eq!(wpl.id, "003");
    assert_eq!(wpl.raw.sentence_type(), "WPL");
}

#[test]
fn test_derived_decoder_exec_hooks() {
    let sentence = Parser::default().frame("$WIMWV,214.8,X,0.1,K,A*22").unwrap();
    let decoded = MWV::decode(sentence);
    assert_eq!(
        decoded.error,
        Some(Error::InvalidField {
            prefix: "WIMWV".into(),
            name: "reference".into(),
            index: 1,
            value: Some("X".into()),
        })
    );

    let sentence = Parser::default().frame("$WIMWV,214.8,R*21").unwrap();
    let decoded = MWV::decode(sentence);
    assert_eq!(
        decoded.error,
        Some(Error::UnexpectedFieldCount {
            prefix: "WIMWV".into(),
            expected: "5",
            actual: 2,
        })
    );
    assert_eq!(decoded.value.angle, Some(214.8));
}

#[test]
fn test_custom_registry() {
    let registry = Registry::builder()
        .register(Framing::Conventional, "MWV", decode_mwv)
        .build();
    let parser = Parser::builder().registry(registry).build();

    let sentence = parser.parse("$WIMWV,214.8,R,0.1,K,A*28").unwrap();
    assert_eq!(sentence.sentence_type(), "MWV");
    assert!(matches!(sentence, Sentence::HDT(HDT { heading: Some(_), .. })));

    assert_eq!(
        parser.parse("$GPHDT,274.07,T*03"),
        Err(Error::UnsupportedSentence("GPHDT".into()))
    );
}

#[test]
fn test_alias_keeps_type_check() {
    // an aliased decoder reads every field but still reports the foreign type code
    let registry = Registry::builder()
        .builtin()
        .register(Framing::Conventional, "HDG", decode_as::<HDT>)
        .build();
    assert!(registry.contains(Framing::Conventional, "HDT"));

    let sentence = RawSentence::new(
        Framing::Conventional,
        "HEHDG",
        vec!["274.07".into(), "T".into()],
        "00".into(),
        String::new(),
    );
    let decoded = registry.decode_partial(sentence).unwrap();

    assert!(matches!(
        decoded.error,
        Some(Error::TypeMismatch { ref expected, .. }) if expected == "HDT"
    ));
    assert_eq!(decoded.value.sentence_type(), "HDG");
    assert!(matches!(
        decoded.value,
        Sentence::HDT(HDT { heading: Some(_), .. })
    ));
}

#[test]
fn test_registry_replaces_decoder() {
    let registry = Registry::builder()
        .builtin()
        .register(Framing::Conventional, "RMC", decode_as::<HDT>)
        .build();

    let decode = registry.get(Framing::Conventional, "RMC").unwrap();
    let sentence = Parser::default()
        .frame("$GPRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*70")
        .unwrap();
    assert!(matches!(decode(sentence).value, Sentence::HDT(_)));
}
