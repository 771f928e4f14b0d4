// Dweve INIBIND - Typed INI Configuration Binding
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for `inibind::IniRecord` and `inibind::IniSection`.
//!
//! Only fields carrying `#[ini(name = "...")]` become part of the schema;
//! other fields are left untouched by the binder.
//!
//! Field types are classified by how they are spelled: `String` is text,
//! `i8`, `i16`, `i32`, `i64`, `i128` and `isize` are integers (a path
//! prefix such as `std::string::String` is fine). Anything else, type
//! aliases included, is recorded as unsupported and rejected when the
//! schema is built.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, LitStr, Type};

/// Derive `inibind::IniSection` for a struct of annotated scalar fields.
#[proc_macro_derive(IniSection, attributes(ini))]
pub fn derive_ini_section(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_section(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive `inibind::IniRecord` for a struct of annotated sub-records.
#[proc_macro_derive(IniRecord, attributes(ini))]
pub fn derive_ini_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_record(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// A struct field carrying an `#[ini(name = "...")]` annotation.
struct Annotated<'a> {
    ident: &'a Ident,
    name: LitStr,
    ty: &'a Type,
}

fn annotated_fields<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<Vec<Annotated<'a>>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    format!("{} can only be derived for structs with named fields", derive),
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("{} can only be derived for structs", derive),
            ))
        }
    };

    let mut annotated = Vec::new();
    for field in fields {
        let mut name: Option<LitStr> = None;

        for attr in field.attrs.iter().filter(|a| a.path().is_ident("ini")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if name.is_some() {
                        return Err(meta.error("duplicate `name` in #[ini(...)]"));
                    }
                    name = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported #[ini(...)] key, expected `name`"))
                }
            })?;
        }

        if let Some(name) = name {
            // Named fields always have an ident
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            annotated.push(Annotated {
                ident,
                name,
                ty: &field.ty,
            });
        }
    }

    Ok(annotated)
}

/// Map a field type onto `FieldKind` tokens and a slot expression.
fn classify(ty: &Type, ident: &Ident) -> (TokenStream2, TokenStream2) {
    let scalar = match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .filter(|seg| seg.arguments.is_empty())
            .map(|seg| seg.ident.to_string()),
        _ => None,
    };

    let width = match scalar.as_deref() {
        Some("String") => {
            return (
                quote!(::inibind::FieldKind::Text),
                quote!(::core::option::Option::Some(::inibind::FieldSlot::from(&mut self.#ident))),
            )
        }
        Some("i8") => quote!(I8),
        Some("i16") => quote!(I16),
        Some("i32") => quote!(I32),
        Some("i64") => quote!(I64),
        Some("i128") => quote!(I128),
        Some("isize") => quote!(Isize),
        _ => {
            let type_name = ty.to_token_stream().to_string().replace(' ', "");
            return (
                quote!(::inibind::FieldKind::Unsupported { type_name: #type_name }),
                quote!(::core::option::Option::None),
            );
        }
    };

    (
        quote!(::inibind::FieldKind::Integer(::inibind::IntWidth::#width)),
        quote!(::core::option::Option::Some(::inibind::FieldSlot::from(&mut self.#ident))),
    )
}

fn expand_section(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = annotated_fields(input, "IniSection")?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut schemas = Vec::with_capacity(fields.len());
    let mut arms = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let field_ident = field.ident;
        let internal = field_ident.unraw().to_string();
        let key = &field.name;
        let (kind, slot) = classify(field.ty, field_ident);

        schemas.push(quote! {
            ::inibind::FieldSchema { name: #internal, key: #key, kind: #kind }
        });
        arms.push(quote! { #index => #slot });
    }

    Ok(quote! {
        impl #impl_generics ::inibind::IniSection for #ident #ty_generics #where_clause {
            const FIELDS: &'static [::inibind::FieldSchema] = &[#(#schemas),*];

            fn field_mut(&mut self, index: usize) -> ::core::option::Option<::inibind::FieldSlot<'_>> {
                match index {
                    #(#arms,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

fn expand_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = annotated_fields(input, "IniRecord")?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut schemas = Vec::with_capacity(fields.len());
    let mut arms = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let field_ident = field.ident;
        let internal = field_ident.unraw().to_string();
        let section = &field.name;
        let ty = field.ty;

        schemas.push(quote! {
            ::inibind::SectionSchema {
                name: #internal,
                section: #section,
                fields: <#ty as ::inibind::IniSection>::FIELDS,
            }
        });
        arms.push(quote! {
            #index => ::inibind::IniSection::field_mut(&mut self.#field_ident, field)
        });
    }

    Ok(quote! {
        impl #impl_generics ::inibind::IniRecord for #ident #ty_generics #where_clause {
            const SECTIONS: &'static [::inibind::SectionSchema] = &[#(#schemas),*];

            fn field_mut(
                &mut self,
                section: usize,
                field: usize,
            ) -> ::core::option::Option<::inibind::FieldSlot<'_>> {
                match section {
                    #(#arms,)*
                    _ => {
                        let _ = field;
                        ::core::option::Option::None
                    }
                }
            }
        }
    })
}
