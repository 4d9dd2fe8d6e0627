use proc_macro2::{Span, TokenStream};
use syn::{Error, Ident, LitStr, Result, parse2};

use crate::meta::{MetaAttribute, MetaAttributeType};

#[derive(Clone)]
pub struct Config {
    pub sentence_name: Ident,
    pub parser_name: Ident,
    pub error_name: Ident,
    pub sentence_type: LitStr,
}

impl Config {
    pub fn from_meta_attributes(attribute_list: &[MetaAttribute], span: Span) -> Result<Self> {
        let mut sentence_type: Option<TokenStream> = None;

        for meta in attribute_list {
            if meta.r#type == MetaAttributeType::SentenceType {
                sentence_type = Some(meta.arg()?.clone());
            }
        }

        let sentence_type = sentence_type.ok_or_else(|| {
            Error::new(
                span,
                "nmea0183-decode-derive: Missing `#[nmea(sentence_type = \"...\")]` attribute",
            )
        })?;

        Ok(Self {
            sentence_name: Ident::new("nmea_sentence", Span::call_site()),
            parser_name: Ident::new("nmea_parser", Span::call_site()),
            error_name: Ident::new("nmea_error", Span::call_site()),
            sentence_type: parse2(sentence_type)?,
        })
    }
}
