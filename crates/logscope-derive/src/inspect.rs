//! Implementation of #[derive(Inspect)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Index, parse_macro_input};

use crate::attrs::{FieldMode, parse_container_attrs, parse_field_attrs};

pub fn derive_inspect_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let container = parse_container_attrs(&input.attrs)?;
    let krate = &container.krate;
    let ident = &input.ident;
    let type_name = container.name.unwrap_or_else(|| ident.to_string());

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Inspect can only be derived for structs",
            ));
        }
    };

    let mut visits = Vec::new();
    let mut zero_checks = Vec::new();

    for (position, field) in fields.iter().enumerate() {
        let attrs = parse_field_attrs(&field.attrs)?;

        let (access, declared_name) = match &field.ident {
            Some(name) => (quote!(self.#name), name.to_string()),
            None => {
                let index = Index::from(position);
                (quote!(self.#index), position.to_string())
            }
        };

        let visibility = if matches!(field.vis, syn::Visibility::Public(_)) {
            quote!(#krate::Visibility::Exposed)
        } else {
            quote!(#krate::Visibility::Hidden)
        };

        let skip = attrs.skip;
        let omit_empty = attrs.omit_empty;
        let omit_nested = attrs.omit_nested;
        let rename = match &attrs.rename {
            Some(key) => quote!(::std::option::Option::Some(#key)),
            None => quote!(::std::option::Option::None),
        };

        let value = format_ident!("__inspect_value");
        let binding = match attrs.mode {
            FieldMode::Subject => quote!(let #value = &#access;),
            FieldMode::Serialize => quote!(let #value = &#krate::Serialized(&#access);),
            FieldMode::Display => quote!(let #value = &#krate::Displayed(&#access);),
        };

        visits.push(quote! {
            {
                #binding
                visitor(#krate::Member {
                    name: #declared_name,
                    visibility: #visibility,
                    options: #krate::MemberOptions {
                        skip: #skip,
                        omit_empty: #omit_empty,
                        omit_nested: #omit_nested,
                        rename: #rename,
                    },
                    value: #value,
                });
            }
        });

        zero_checks.push(quote! {
            {
                #binding
                #krate::Subject::is_zero(#value)
            }
        });
    }

    // Unit and empty structs never call the visitor.
    let visitor = if visits.is_empty() {
        format_ident!("_visitor")
    } else {
        format_ident!("visitor")
    };

    let override_methods = if container.describe {
        quote! {
            fn has_override(&self) -> bool {
                true
            }

            fn describe_override(&self) -> ::std::option::Option<#krate::ResultTriple> {
                ::std::option::Option::Some(#krate::Describe::describe(self))
            }
        }
    } else {
        quote! {}
    };

    let mut generics = input.generics.clone();
    let type_params: Vec<_> = generics.type_params().map(|param| param.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for param in type_params {
        where_clause
            .predicates
            .push(syn::parse_quote!(#param: #krate::Subject));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::Subject for #ident #ty_generics #where_clause {
            fn type_name() -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#type_name)
            }

            fn descriptor(&self) -> #krate::TypeDescriptor {
                #krate::TypeDescriptor::named(#type_name)
            }

            fn shape(&self) -> #krate::Shape {
                #krate::Shape::Record
            }

            fn visit_members(&self, #visitor: &mut dyn ::std::ops::FnMut(#krate::Member<'_>)) {
                #(#visits)*
            }

            fn is_zero(&self) -> bool {
                true #(&& #zero_checks)*
            }

            #override_methods
        }
    })
}
