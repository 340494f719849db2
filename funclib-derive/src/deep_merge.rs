//! Implementation of the `#[derive(DeepMerge)]` macro.
//!
//! Structs are records: every field is merged with
//! `funclib::record::DeepMerge::deep_merge`, unless it carries
//! `#[merge(replace)]`, in which case the delta's field is taken as is.
//! Enums are leaves: the delta replaces the main value.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Index, Member, parse_macro_input, parse_quote};

/// How a single field is combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldStrategy {
    /// Recurse through `DeepMerge`.
    Merge,
    /// Take the delta's value.
    Replace,
}

/// Main implementation of the `DeepMerge` derive macro.
pub fn derive_deep_merge_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let mut generics = input.generics.clone();

    let body = match &input.data {
        Data::Struct(data_struct) => {
            let fields = collect_fields(&data_struct.fields)?;

            let where_clause = generics.make_where_clause();
            for (_, field_type, strategy) in &fields {
                if *strategy == FieldStrategy::Merge {
                    where_clause
                        .predicates
                        .push(parse_quote!(#field_type: ::funclib::record::DeepMerge));
                }
            }

            let initializers = fields.iter().map(|(member, _, strategy)| match strategy {
                FieldStrategy::Merge => quote! {
                    #member: ::funclib::record::DeepMerge::deep_merge(self.#member, delta.#member)
                },
                FieldStrategy::Replace => quote! {
                    #member: delta.#member
                },
            });

            quote! {
                Self { #(#initializers),* }
            }
        }
        Data::Enum(_) => quote! { delta },
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "DeepMerge cannot be derived for unions.",
            ));
        }
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::funclib::record::DeepMerge for #name #type_generics #where_clause {
            #[inline]
            fn deep_merge(self, delta: Self) -> Self {
                #body
            }
        }
    })
}

fn collect_fields(fields: &Fields) -> syn::Result<Vec<(Member, syn::Type, FieldStrategy)>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let member = field
                .ident
                .clone()
                .map_or_else(|| Member::Unnamed(Index::from(index)), Member::Named);
            Ok((member, field.ty.clone(), field_strategy(&field.attrs)?))
        })
        .collect()
}

fn field_strategy(attributes: &[Attribute]) -> syn::Result<FieldStrategy> {
    let mut strategy = FieldStrategy::Merge;

    for attribute in attributes.iter().filter(|attribute| attribute.path().is_ident("merge")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("replace") {
                strategy = FieldStrategy::Replace;
                Ok(())
            } else {
                Err(meta.error("unsupported merge option, expected `replace`"))
            }
        })?;
    }

    Ok(strategy)
}
