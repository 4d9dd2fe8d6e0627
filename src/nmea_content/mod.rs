//! # NMEA Content
//!
//! Typed records for the built-in sentence types and the field types they
//! are made of.
//!
//! Every record embeds the [`RawSentence`](crate::RawSentence) it was decoded
//! from and is reachable through the [`Sentence`] enum returned by
//! [`parse`](crate::parse).

pub mod parse;
mod sentences;

pub use sentences::*;
