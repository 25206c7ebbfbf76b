//! Implementation of #[derive(Record)] macro

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Field, Fields, LitStr, Visibility};

pub fn derive_record_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Validate: must be a struct with named fields (unit structs describe nothing)
    let empty = Punctuated::<Field, Comma>::new();
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unit => &empty,
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Record requires a struct with named fields: tuple fields have no tags",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Record only works on structs",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    for field in fields {
        let attrs = parse_param_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        // Named fields always carry an ident
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = ident.unraw().to_string();

        if !matches!(field.vis, Visibility::Public(_)) {
            descriptors.push(quote! {
                ::dbparam::Field::unexported(#field_name)
            });
            continue;
        }

        let keys = attrs.tags.iter().map(|(key, _)| key);
        let values = attrs.tags.iter().map(|(_, value)| value);
        descriptors.push(quote! {
            ::dbparam::Field::new(
                #field_name,
                ::std::vec![#((#keys, #values)),*],
                ::dbparam::FieldValue::to_value(&self.#ident),
                ::dbparam::FieldValue::is_zero(&self.#ident),
            )
        });
    }

    Ok(quote! {
        impl #impl_generics ::dbparam::Record for #name #ty_generics #where_clause {
            fn fields(
                &self,
            ) -> ::std::result::Result<
                ::std::vec::Vec<::dbparam::Field<'_>>,
                ::dbparam::ProjectionError,
            > {
                ::std::result::Result::Ok(::std::vec![#(#descriptors),*])
            }
        }
    })
}

#[derive(Default)]
struct ParamAttrs {
    tags: Vec<(String, String)>,
    skip: bool,
}

fn parse_param_attrs(attrs: &[Attribute]) -> syn::Result<ParamAttrs> {
    let mut parsed = ParamAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("param") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                parsed.skip = true;
                return Ok(());
            }

            let key = match meta.path.get_ident() {
                Some(ident) => ident.unraw().to_string(),
                None => return Err(meta.error("expected a tag key such as `db` or `json`")),
            };
            if parsed.tags.iter().any(|(existing, _)| existing == &key) {
                return Err(meta.error(format!("duplicate tag key `{}`", key)));
            }

            let value: LitStr = meta.value()?.parse()?;
            parsed.tags.push((key, value.value()));
            Ok(())
        })?;
    }

    Ok(parsed)
}
