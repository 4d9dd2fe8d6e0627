use proc_macro2::{Span, TokenStream};
use syn::{Error, Fields, Ident, LitStr, Result, Type, parse2, spanned::Spanned};

use crate::{
    accessor::Accessor,
    generate::pre_post_exec,
    meta::{self, MetaAttribute, MetaAttributeType},
};

#[derive(Clone)]
pub struct FieldDecoder {
    pub ident: Ident,
    pub ty: Type,
    pub accessor: Accessor,
    pub pre_exec: Option<TokenStream>,
    pub post_exec: Option<TokenStream>,
}

#[derive(Clone)]
pub struct StructFields {
    pub raw: Ident,
    pub decoders: Vec<FieldDecoder>,
}

impl StructFields {
    pub fn from_fields(fields: &Fields, span: Span) -> Result<Self> {
        let Fields::Named(named) = fields else {
            return Err(Error::new(
                span,
                "nmea0183-decode-derive: Only structs with named fields are supported",
            ));
        };

        let mut raw = None;
        let mut decoders = vec![];
        for field in &named.named {
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let attributes = meta::parse_field_level_attributes(&field.attrs)?;
            let accessor = Self::get_accessor(&ident, &field.ty, &attributes)?;

            if let Accessor::Raw = accessor {
                if raw.is_some() {
                    return Err(Error::new(
                        ident.span(),
                        "nmea0183-decode-derive: Only one field can be marked `raw`",
                    ));
                }
                raw = Some(ident);
                continue;
            }

            let (pre_exec, post_exec) = pre_post_exec(&attributes)?;

            decoders.push(FieldDecoder {
                ident,
                ty: field.ty.clone(),
                accessor,
                pre_exec,
                post_exec,
            });
        }

        let raw = raw.ok_or_else(|| {
            Error::new(
                span,
                "nmea0183-decode-derive: A `#[nmea(raw)] RawSentence` field is required",
            )
        })?;

        Ok(Self { raw, decoders })
    }

    fn get_accessor(ident: &Ident, ty: &Type, attributes: &[MetaAttribute]) -> Result<Accessor> {
        let find = |r#type| attributes.iter().find(|attribute| attribute.r#type == r#type);

        if find(MetaAttributeType::Raw).is_some() {
            return Ok(Accessor::Raw);
        }
        if find(MetaAttributeType::Ignore).is_some() {
            return Ok(Accessor::Ignore(Box::new(ty.clone())));
        }

        let index = find(MetaAttributeType::Field).ok_or_else(|| {
            Error::new(
                ty.span(),
                format!("nmea0183-decode-derive: Field `{ident}` needs `field = <index>`, `raw` or `ignore`"),
            )
        })?;
        let index = parse2(index.arg()?.clone())?;

        let name = match find(MetaAttributeType::Name) {
            Some(name) => parse2(name.arg()?.clone())?,
            None => LitStr::new(&ident.to_string(), ident.span()),
        };

        let unit = find(MetaAttributeType::Unit);
        let with = find(MetaAttributeType::With);
        let trailing = find(MetaAttributeType::Trailing);

        match (unit, with, trailing) {
            (None, None, None) => Ok(Accessor::Get { index, name }),
            (None, None, Some(_)) => Ok(Accessor::Trailing { index, name }),
            (Some(unit), None, None) => Ok(Accessor::Unit {
                index,
                name,
                unit: parse2(unit.arg()?.clone())?,
            }),
            (None, Some(with), None) => Ok(Accessor::With {
                index,
                name,
                path: parse2(with.arg()?.clone())?,
            }),
            (Some(first), Some(_), _) | (Some(first), _, Some(_)) | (_, Some(first), Some(_)) => {
                Err(Error::new(
                    first.span(),
                    "nmea0183-decode-derive: Attributes `unit`, `with` and `trailing` are mutually exclusive",
                ))
            }
        }
    }
}
