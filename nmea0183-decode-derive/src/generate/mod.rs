use proc_macro2::TokenStream;
use syn::{Data, DeriveInput, Error, Result};

use crate::{
    generate::structs::Struct,
    meta::{MetaAttribute, MetaAttributeType},
};

mod structs;

// Usage:
// #[derive(Decode)]
// #[nmea(sentence_type = "DBT")]
// pub struct DBT {
//     #[nmea(raw)]
//     pub raw: RawSentence,
//     #[nmea(field = 0, unit = 'f')]
//     pub depth_feet: Option<f32>,
//     #[nmea(field = 6, trailing)]
//     pub mode: Option<FaaMode>,
//     #[nmea(ignore)]
//     pub computed_field: u32,
// }

pub fn pre_post_exec(
    attributes: &[MetaAttribute],
) -> Result<(Option<TokenStream>, Option<TokenStream>)> {
    let mut pre_exec = TokenStream::new();
    let mut post_exec = TokenStream::new();

    for attribute in attributes {
        match attribute.r#type {
            MetaAttributeType::PreExec => {
                pre_exec.extend(attribute.arg()?.clone());
            }
            MetaAttributeType::PostExec => {
                post_exec.extend(attribute.arg()?.clone());
            }
            _ => {}
        }
    }

    let pre_exec = (!pre_exec.is_empty()).then_some(pre_exec);
    let post_exec = (!post_exec.is_empty()).then_some(post_exec);

    Ok((pre_exec, post_exec))
}

pub fn generate_decode_impl(input: &DeriveInput) -> Result<TokenStream> {
    match &input.data {
        Data::Struct(datastruct) => {
            Struct::from_datastruct(&input.ident, datastruct, &input.attrs, &input.generics)?
                .generate_impl()
        }
        Data::Enum(_) | Data::Union(_) => Err(Error::new(
            input.ident.span(),
            "nmea0183-decode-derive: Only structs with named fields are supported",
        )),
    }
}
