use proc_macro2::TokenStream;
use quote::quote;
use syn::{LitChar, LitInt, LitStr, Path, Type};

use crate::config::Config;

/// How the value of a struct field is obtained inside the generated decoder.
#[derive(Clone)]
pub enum Accessor {
    /// The framed sentence itself
    Raw,
    /// `Default::default()`, without reading any field
    Ignore(Box<Type>),
    Get {
        index: LitInt,
        name: LitStr,
    },
    Trailing {
        index: LitInt,
        name: LitStr,
    },
    Unit {
        index: LitInt,
        name: LitStr,
        unit: LitChar,
    },
    With {
        index: LitInt,
        name: LitStr,
        path: Path,
    },
}

impl Accessor {
    /// Returns the expression reading the field, `None` for [`Accessor::Raw`].
    pub fn expression(&self, config: &Config) -> Option<TokenStream> {
        let parser = &config.parser_name;

        let expression = match self {
            Self::Raw => return None,
            Self::Ignore(ty) => quote! { <#ty as ::core::default::Default>::default() },
            Self::Get { index, name } => quote! { #parser.get(#index, #name) },
            Self::Trailing { index, name } => quote! { #parser.trailing(#index, #name) },
            Self::Unit { index, name, unit } => quote! { #parser.with_unit(#index, #unit, #name) },
            Self::With { index, name, path } => quote! { #path(&mut #parser, #index, #name) },
        };

        Some(expression)
    }
}
