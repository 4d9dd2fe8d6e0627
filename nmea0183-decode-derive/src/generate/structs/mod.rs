use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, DataStruct, Generics, Ident, Result};

use crate::{
    config::Config,
    generate::{pre_post_exec, structs::fields::StructFields},
    meta,
};

pub mod fields;

pub struct Struct {
    pub name: Ident,
    pub config: Config,
    pub generics: Generics,
    pub pre_exec: Option<TokenStream>,
    pub post_exec: Option<TokenStream>,
    pub fields: StructFields,
}

impl Struct {
    pub fn from_datastruct(
        name: &Ident,
        datastruct: &DataStruct,
        attributes: &[Attribute],
        generics: &Generics,
    ) -> Result<Self> {
        let attributes = meta::parse_top_level_attributes(attributes)?;

        let config = Config::from_meta_attributes(&attributes, name.span())?;
        let fields = StructFields::from_fields(&datastruct.fields, name.span())?;
        let (pre_exec, post_exec) = pre_post_exec(&attributes)?;

        Ok(Self {
            name: name.clone(),
            config,
            generics: generics.clone(),
            pre_exec,
            post_exec,
            fields,
        })
    }

    fn generate_decode_body(&self) -> TokenStream {
        let Config {
            sentence_name: sentence,
            parser_name: parser,
            error_name: error,
            sentence_type,
        } = &self.config;
        let (pre_exec, post_exec) = (&self.pre_exec, &self.post_exec);
        let raw = &self.fields.raw;

        let mut reads = TokenStream::new();
        let mut idents = Vec::with_capacity(self.fields.decoders.len());
        for decoder in &self.fields.decoders {
            let (ident, ty) = (&decoder.ident, &decoder.ty);
            let (field_pre_exec, field_post_exec) = (&decoder.pre_exec, &decoder.post_exec);

            if let Some(expression) = decoder.accessor.expression(&self.config) {
                reads.extend(quote! {
                    #field_pre_exec
                    let #ident: #ty = #expression;
                    #field_post_exec
                });
                idents.push(ident);
            }
        }

        quote! {
            let mut #parser = nmea0183_decode::FieldParser::new(&#sentence);
            #parser.assert_type(#sentence_type);
            #pre_exec
            #reads
            #post_exec
            let #error = #parser.finish();

            nmea0183_decode::Decoded::new(Self { #raw: #sentence, #(#idents),* }, #error)
        }
    }

    pub fn generate_impl(&self) -> Result<TokenStream> {
        let name = &self.name;
        let sentence = &self.config.sentence_name;
        let sentence_type = &self.config.sentence_type;
        let raw = &self.fields.raw;
        let body = self.generate_decode_body();
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        Ok(quote! {
            impl #impl_generics nmea0183_decode::Decode for #name #ty_generics #where_clause {
                const SENTENCE_TYPE: &'static str = #sentence_type;

                fn decode(#sentence: nmea0183_decode::RawSentence) -> nmea0183_decode::Decoded<Self> {
                    #body
                }

                fn raw(&self) -> &nmea0183_decode::RawSentence {
                    &self.#raw
                }
            }
        })
    }
}
