mod dbt;
mod dpt;
mod gga;
mod gll;
mod gsa;
mod gsv;
mod hbt;
mod hdt;
mod pgrme;
mod rmc;
mod rot;
mod vdm;
mod vtg;
mod zda;

pub use dbt::DBT;
pub use dpt::DPT;
pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gsv::GSV;
pub use hbt::HBT;
pub use hdt::HDT;
pub use pgrme::PGRME;
pub use rmc::RMC;
pub use rot::ROT;
pub use vdm::VDMVDO;
pub use vtg::VTG;
pub use zda::ZDA;

use std::fmt;

use nom::{Parser, character::complete::satisfy};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Decode, FieldValue, RawSentence, parsing::IResult};

macro_rules! sentence_enum {
    (
        $(
            $(#[$variant_meta:meta])*
            $variant:ident
        ),* $(,)?
    ) => {
        /// A decoded sentence of any built-in type.
        ///
        /// Serializes without a variant tag, as the flat map returned by
        /// [`to_map`](Sentence::to_map).
        ///
        /// ## Supported Sentence Types
        ///
        /// | Variant            | Sentence Type                                            |
        /// |--------------------|----------------------------------------------------------|
        /// | DBT([`DBT`])       | Depth Below Transducer                                   |
        /// | DPT([`DPT`])       | Depth of Water                                           |
        /// | GGA([`GGA`])       | Global Positioning System Fix Data                       |
        /// | GLL([`GLL`])       | Geographic Position - Latitude/Longitude                 |
        /// | GSA([`GSA`])       | GPS DOP and active satellites                            |
        /// | GSV([`GSV`])       | Satellites in View                                       |
        /// | HBT([`HBT`])       | Heartbeat Supervision Sentence                           |
        /// | HDT([`HDT`])       | Heading - True                                           |
        /// | PGRME([`PGRME`])   | Garmin Estimated Error                                   |
        /// | RMC([`RMC`])       | Recommended Minimum Navigation Information               |
        /// | ROT([`ROT`])       | Rate Of Turn                                             |
        /// | VTG([`VTG`])       | Track made good and Ground speed                         |
        /// | ZDA([`ZDA`])       | Time & Date - UTC, day, month, year and local time zone  |
        /// | VDMVDO([`VDMVDO`]) | AIS VHF Data-Link Message (`!` framing only)             |
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Sentence {
            $(
                $(#[$variant_meta])*
                $variant($variant),
            )*
        }

        impl Sentence {
            /// The framed sentence the record was decoded from.
            pub fn raw(&self) -> &RawSentence {
                match self {
                    $(Sentence::$variant(sentence) => sentence.raw(),)*
                }
            }
        }

        $(
            impl From<$variant> for Sentence {
                fn from(sentence: $variant) -> Self {
                    Sentence::$variant(sentence)
                }
            }
        )*
    };
}

sentence_enum! {
    /// Depth Below Transducer
    DBT,
    /// Depth of Water
    DPT,
    /// Global Positioning System Fix Data
    GGA,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// GPS DOP and active satellites
    GSA,
    /// Satellites in View
    GSV,
    /// Heartbeat Supervision Sentence
    HBT,
    /// Heading - True
    HDT,
    /// Garmin Estimated Error
    PGRME,
    /// Recommended Minimum Navigation Information
    RMC,
    /// Rate Of Turn
    ROT,
    /// Track made good and Ground speed
    VTG,
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA,
    /// AIS VHF Data-Link Message, own (VDO) or other (VDM) vessel
    VDMVDO,
}

impl Sentence {
    /// Talker id and type code, as found on the wire.
    pub fn prefix(&self) -> String {
        self.raw().prefix()
    }

    pub fn sentence_type(&self) -> &str {
        self.raw().sentence_type()
    }

    pub fn talker_id(&self) -> &str {
        self.raw().talker_id()
    }

    /// Flattens the sentence into a JSON object.
    ///
    /// The map holds the keys of [`RawSentence`] (`talker`, `type`, `fields`,
    /// `checksum`, `raw`) next to the snake_case attributes of the record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let sentence = nmea0183_decode::parse("$GPHDT,274.07,T*03")?;
    /// let map = sentence.to_map().unwrap();
    ///
    /// assert_eq!(map["talker"], "GP");
    /// assert_eq!(map["type"], "HDT");
    /// assert_eq!(map["heading"], 274.07f32 as f64);
    /// # Ok::<(), nmea0183_decode::Error>(())
    /// ```
    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                "sentence serialized to {other}, not an object"
            ))),
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.raw(), f)
    }
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// The character encoding this value in a field.
            pub fn as_char(self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }

        impl FieldValue for $name {
            /// A single character; an empty field is invalid.
            fn parse(i: &str) -> IResult<'_, Self> {
                nom::branch::alt(($(
                    nom::character::complete::char($char).map(|_| Self::$variant),
                )*)).parse(i)
            }
        }
    };
}

field_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Invalid
    }
}

field_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// C - Quectel Querk, "Caution"
        'C' => Caution,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK Float mode
        'F' => FloatRtk,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Data Not Valid
        'N' => DataNotValid,
        /// P - Precise
        'P' => Precise,
        /// R - RTK Integer mode
        'R' => FixedRtk,
        /// S - Simulated Mode
        'S' => Simulator,
        /// U - Quectel Querk, "Unsafe"
        'U' => Unsafe,
    }
}

field_enum! {
    /// Navigation Status
    pub enum NavStatus {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Not Valid
        'N' => NotValid,
        /// S - Simulated Mode
        'S' => Simulator,
        /// V - Valid
        'V' => Valid,
    }
}

field_enum! {
    /// Quality of the GPS fix
    pub enum Quality {
        /// 0 - Fix not available
        '0' => NoFix,
        /// 1 - GPS fix
        '1' => GPSFix,
        /// 2 - Differential GPS fix
        '2' => DGPSFix,
        /// 3 - PPS fix
        '3' => PPSFix,
        /// 4 - Real Time Kinematic
        '4' => RTK,
        /// 5 - Float RTK
        '5' => FloatRTK,
        /// 6 - estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => Manual,
        /// 8 - Simulation mode
        '8' => Simulation,
    }
}

field_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        'A' => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        'M' => Manual,
    }
}

field_enum! {
    /// Fix Mode
    pub enum FixMode {
        /// 1 - No fix
        '1' => NoFix,
        /// 2 - 2D Fix
        '2' => Fix2D,
        /// 3 - 3D Fix
        '3' => Fix3D,
    }
}

field_enum! {
    /// NMEA 4.11 System ID
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_nmea_4_11_system_id_and_signal_id>
    pub enum SystemId {
        /// 1 - GPS (GP)
        '1' => Gps,
        /// 2 - GLONASS (GL)
        '2' => Glonass,
        /// 3 - Galileo (GA)
        '3' => Galileo,
        /// 4 - BeiDou (GB/BD)
        '4' => Beidou,
        /// 5 - QZSS (GQ)
        '5' => Qzss,
        /// 6 - NavIC (GI)
        '6' => Navic,
    }
}

/// NMEA 4.11 Signal ID, a single hex digit whose meaning depends on the
/// [`SystemId`].
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_nmea_4_11_system_id_and_signal_id>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignalId(pub u8);

impl FieldValue for SignalId {
    fn parse(i: &str) -> IResult<'_, Self> {
        satisfy(|c: char| c.is_ascii_hexdigit())
            .map(|c| SignalId(c.to_digit(16).unwrap_or_default() as u8))
            .parse(i)
    }
}

/// Satellite information used in [`GSV`] sentences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Satellite {
    pub prn: u8,
    /// Elevation in degrees, 90 maximum
    pub elevation: Option<u8>,
    /// Azimuth in degrees from true north, 0 to 359
    pub azimuth: Option<u16>,
    /// Signal to noise ratio in dB, `None` when not tracking
    pub snr: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(Status::from_field("A"), Some(Status::Valid));
        assert_eq!(Status::from_field("V"), Some(Status::Invalid));
        assert_eq!(Status::from_field("K"), None);
        assert_eq!(Status::from_field(""), None);
        assert_eq!(Status::from_field("AV"), None);
        assert_eq!(Option::<Status>::from_field(""), Some(None));
    }

    #[test]
    fn test_faa_mode() {
        let cases = [
            ("A", FaaMode::Autonomous),
            ("C", FaaMode::Caution),
            ("D", FaaMode::Differential),
            ("E", FaaMode::Estimated),
            ("F", FaaMode::FloatRtk),
            ("M", FaaMode::Manual),
            ("N", FaaMode::DataNotValid),
            ("P", FaaMode::Precise),
            ("R", FaaMode::FixedRtk),
            ("S", FaaMode::Simulator),
            ("U", FaaMode::Unsafe),
        ];

        for (field, expected) in cases {
            assert_eq!(FaaMode::from_field(field), Some(expected), "field {field:?}");
            assert_eq!(expected.as_char().to_string(), field);
        }

        assert_eq!(FaaMode::from_field("X"), None);
    }

    #[test]
    fn test_quality() {
        assert_eq!(Quality::from_field("0"), Some(Quality::NoFix));
        assert_eq!(Quality::from_field("4"), Some(Quality::RTK));
        assert_eq!(Quality::from_field("8"), Some(Quality::Simulation));
        assert_eq!(Quality::from_field("9"), None);
        assert_eq!(Quality::from_field("10"), None);
    }

    #[test]
    fn test_system_and_signal_id() {
        assert_eq!(SystemId::from_field("3"), Some(SystemId::Galileo));
        assert_eq!(SystemId::from_field("7"), None);

        assert_eq!(SignalId::from_field("1"), Some(SignalId(1)));
        assert_eq!(SignalId::from_field("B"), Some(SignalId(11)));
        assert_eq!(SignalId::from_field("G"), None);
        assert_eq!(SignalId::from_field("11"), None);
    }
}
