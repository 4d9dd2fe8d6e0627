//! # A Rust procedural macro for typed NMEA 0183 sentence decoders
//!
//! `nmea0183-decode-derive` derives the `Decode` trait of [`nmea0183-decode`]
//! for structs whose fields map to the data fields of one sentence type. The
//! generated decoder reads every field through a `FieldParser`, so the first
//! invalid field is reported and the remaining fields keep their defaults.
//!
//! [`nmea0183-decode`]: https://crates.io/crates/nmea0183-decode

use generate::generate_decode_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod accessor;
mod config;
mod generate;
mod meta;

#[doc = include_str!("../README.md")]
#[proc_macro_derive(Decode, attributes(nmea))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_decode_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
