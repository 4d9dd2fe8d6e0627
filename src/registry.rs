//! # Sentence Registry
//!
//! Dispatch from a framed sentence to its typed decoder.
//!
//! A [`Registry`] maps `(framing, type code)` to a [`DecodeFn`]. Conventional
//! (`$`) and encapsulated (`!`) sentences are looked up in separate tables,
//! so `!GPRMC` is unsupported even though `$GPRMC` is not.
//!
//! The built-in registry is created once, on first use, and is immutable and
//! shared afterwards. Custom registries start from [`Registry::builder`] and
//! can extend or replace the built-in table:
//!
//! ```rust
//! use nmea0183_decode::{Framing, Parser, Registry, decode_as, nmea_content::RMC};
//!
//! // accept RMC sentences under the encapsulated framing as well
//! let registry = Registry::builder()
//!     .builtin()
//!     .register(Framing::Encapsulated, "RMC", decode_as::<RMC>)
//!     .build();
//! let parser = Parser::builder().registry(registry).build();
//!
//! let sentence = parser.parse("!GPRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130694,004.2,W*70")?;
//! assert_eq!(sentence.sentence_type(), "RMC");
//! # Ok::<(), nmea0183_decode::Error>(())
//! ```

use std::{collections::HashMap, sync::LazyLock};

use crate::{
    Decode, Decoded, Error, Framing, RawSentence, Result,
    nmea_content::{DBT, DPT, GGA, GLL, GSA, GSV, HBT, HDT, PGRME, RMC, ROT, Sentence, VDMVDO, VTG, ZDA},
};

/// A decoder stored in the registry.
pub type DecodeFn = fn(RawSentence) -> Decoded<Sentence>;

/// Decodes `sentence` as `T` and wraps the record into a [`Sentence`].
pub fn decode_as<T: Decode + Into<Sentence>>(sentence: RawSentence) -> Decoded<Sentence> {
    T::decode(sentence).map(Into::into)
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| Registry::builder().builtin().build());

/// A lookup table from sentence type code to decoder.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: HashMap<Framing, HashMap<String, DecodeFn>>,
}

impl Registry {
    /// The registry of every decoder this crate provides.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Creates an empty [`RegistryBuilder`].
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Returns the decoder for `sentence_type` under `framing`.
    pub fn get(&self, framing: Framing, sentence_type: &str) -> Option<DecodeFn> {
        self.tables.get(&framing)?.get(sentence_type).copied()
    }

    /// Returns `true` if a decoder is registered for `sentence_type` under `framing`.
    pub fn contains(&self, framing: Framing, sentence_type: &str) -> bool {
        self.get(framing, sentence_type).is_some()
    }

    /// Decodes `sentence` with its registered decoder.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedSentence`] if no decoder is registered, or the
    /// first field error met by the decoder.
    pub fn decode(&self, sentence: RawSentence) -> Result<Sentence> {
        self.decode_partial(sentence)?.into_result()
    }

    /// Decodes `sentence`, keeping the partial record if a field fails.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedSentence`] if no decoder is registered.
    pub fn decode_partial(&self, sentence: RawSentence) -> Result<Decoded<Sentence>> {
        let Some(decode) = self.get(sentence.framing(), sentence.sentence_type()) else {
            tracing::debug!(prefix = %sentence.prefix(), framing = ?sentence.framing(), "no decoder registered");
            return Err(Error::UnsupportedSentence(sentence.prefix()));
        };

        let decoded = decode(sentence);
        if let Some(error) = &decoded.error {
            tracing::debug!(%error, "sentence decoded with errors");
        }

        Ok(decoded)
    }
}

/// Builder for a custom [`Registry`].
#[derive(Debug, Default)]
#[must_use]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every decoder this crate provides.
    pub fn builtin(self) -> Self {
        use Framing::{Conventional, Encapsulated};

        self.register_decoder::<DBT>(Conventional)
            .register_decoder::<DPT>(Conventional)
            .register_decoder::<GGA>(Conventional)
            .register_decoder::<GLL>(Conventional)
            .register_decoder::<GSA>(Conventional)
            .register_decoder::<GSV>(Conventional)
            .register_decoder::<HBT>(Conventional)
            .register_decoder::<HDT>(Conventional)
            .register_decoder::<PGRME>(Conventional)
            .register_decoder::<RMC>(Conventional)
            .register_decoder::<ROT>(Conventional)
            .register_decoder::<VTG>(Conventional)
            .register_decoder::<ZDA>(Conventional)
            .register(Encapsulated, "VDM", decode_as::<VDMVDO>)
            .register(Encapsulated, "VDO", decode_as::<VDMVDO>)
    }

    /// Registers `T` under its own [`Decode::SENTENCE_TYPE`].
    pub fn register_decoder<T: Decode + Into<Sentence>>(self, framing: Framing) -> Self {
        self.register(framing, T::SENTENCE_TYPE, decode_as::<T>)
    }

    /// Registers `decode` for `sentence_type`, replacing any previous decoder.
    pub fn register(mut self, framing: Framing, sentence_type: &str, decode: DecodeFn) -> Self {
        let previous = self
            .registry
            .tables
            .entry(framing)
            .or_default()
            .insert(sentence_type.to_string(), decode);

        if previous.is_some() {
            tracing::trace!(?framing, sentence_type, "decoder replaced");
        }

        self
    }

    pub fn build(self) -> Registry {
        self.registry
    }
}
