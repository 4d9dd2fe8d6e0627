use std::fmt::Display;

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Error, Ident, Lit, LitChar, LitInt, LitStr, Path, Result, Stmt, Token,
    parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MetaAttributeType {
    Field,
    Ignore,
    Name,
    PostExec,
    PreExec,
    Raw,
    SentenceType,
    Trailing,
    Unit,
    With,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "field" => Some(Self::Field),
            "ignore" => Some(Self::Ignore),
            "name" => Some(Self::Name),
            "post_exec" => Some(Self::PostExec),
            "pre_exec" => Some(Self::PreExec),
            "raw" => Some(Self::Raw),
            "sentence_type" => Some(Self::SentenceType),
            "trailing" => Some(Self::Trailing),
            "unit" => Some(Self::Unit),
            "with" => Some(Self::With),
            _ => None,
        }
    }

    fn takes_argument(&self) -> bool {
        !matches!(self, Self::Ignore | Self::Raw | Self::Trailing)
    }

    fn allowed_multiple(&self) -> bool {
        matches!(self, Self::PreExec | Self::PostExec)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Field => "field",
            Self::Ignore => "ignore",
            Self::Name => "name",
            Self::PostExec => "post_exec",
            Self::PreExec => "pre_exec",
            Self::Raw => "raw",
            Self::SentenceType => "sentence_type",
            Self::Trailing => "trailing",
            Self::Unit => "unit",
            Self::With => "with",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Option<TokenStream>,
    span: Span,
}

impl MetaAttribute {
    pub fn new(r#type: MetaAttributeType, arg: Option<TokenStream>, span: Span) -> Self {
        Self { r#type, arg, span }
    }

    pub fn is_top_level(&self) -> bool {
        matches!(
            self.r#type,
            MetaAttributeType::SentenceType | MetaAttributeType::PreExec | MetaAttributeType::PostExec
        )
    }

    pub fn is_field_level(&self) -> bool {
        !matches!(self.r#type, MetaAttributeType::SentenceType)
    }

    /// The argument of the attribute, present for every type that takes one.
    pub fn arg(&self) -> Result<&TokenStream> {
        self.arg.as_ref().ok_or_else(|| {
            Error::new(
                self.span,
                format!("nmea0183-decode-derive: Attribute `{}` requires an argument", self.r#type),
            )
        })
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let attribute_type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(ident.span(), "nmea0183-decode-derive: Unknown nmea attribute")
        })?;

        let arg = if attribute_type.takes_argument() {
            // read (value) or = value

            let token_stream = match attribute_type {
                MetaAttributeType::PreExec | MetaAttributeType::PostExec => {
                    parse_argument::<Stmt>(input)?
                }
                MetaAttributeType::With => parse_argument::<Path>(input)?,
                MetaAttributeType::Field => parse_literal::<LitInt>(input)?,
                MetaAttributeType::Unit => parse_literal::<LitChar>(input)?,
                _ => parse_literal::<LitStr>(input)?,
            };
            Some(token_stream)
        } else {
            None
        };

        Ok(MetaAttribute::new(attribute_type, arg, ident.span()))
    }
}

impl Display for MetaAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.r#type)?;
        if let Some(arg) = &self.arg {
            write!(f, "({arg})")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct List<T: Parse>(pub Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

/// Reads `= value`, `= "value"` (parsed as `P`) or `(value)`.
fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;

        if !input.peek(Lit) {
            let parsed: P = input.parse()?;
            return Ok(quote! { #parsed });
        }

        match Lit::parse(input)? {
            Lit::Str(string) => {
                let parsed: P = string.parse()?;
                Ok(quote! { #parsed })
            }
            value => Err(Error::new(
                value.span(),
                "nmea0183-decode-derive: Unexpected type for nmea attribute content",
            )),
        }
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        let parsed: P = content.parse()?;
        Ok(quote! { #parsed })
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-decode-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
        ))
    }
}

/// Reads `= literal` or `(literal)`.
fn parse_literal<L>(input: ParseStream) -> Result<TokenStream>
where
    L: Parse + ToTokens,
{
    let literal: L = if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        input.parse()?
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        content.parse()?
    } else {
        return Err(Error::new(
            input.span(),
            "nmea0183-decode-derive: Expected '= <literal>' or '(<literal>)' for nmea attribute",
        ));
    };

    Ok(quote! { #literal })
}

fn parse_attributes(
    attrs: &[Attribute],
    allowed: impl Fn(&MetaAttribute) -> bool,
    level: &str,
) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = std::collections::HashSet::new();

    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .map(|meta_attr| {
            if !allowed(&meta_attr) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decode-derive: Attribute `{}` is not allowed at the {level} level",
                        meta_attr.r#type
                    ),
                ));
            }

            if !meta_attr.r#type.allowed_multiple() && !attributes_set.insert(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decode-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            Ok(meta_attr)
        })
        .collect()
}

pub fn parse_top_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    parse_attributes(attrs, MetaAttribute::is_top_level, "top")
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    parse_attributes(attrs, MetaAttribute::is_field_level, "field")
}
