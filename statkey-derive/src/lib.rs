//! Implements the [`StaticKey`] derive macro.
//!
//! Generally, you want to use the re-export from the `statkey` crate,
//! which requires explicitly enabling the `derive` feature.
//!
//! The generated code refers to the `statkey` crate by name.
//! If you depend on `statkey_core` instead, rename it in your `Cargo.toml`:
//! ```toml
//! statkey = { version = "0.2", package = "statkey-core" }
//! ```
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

/// Derive the `statkey::Key` trait for a unit struct.
///
/// The key's id hashes the declaring module path together with the type
/// name, so keys declared in different modules never collide.
///
/// Only unit structs are accepted: a key type carries no runtime data, and
/// an enum cannot work because each *variant* would need to be its own key,
/// which a single type cannot express. Declare one unit struct per key
/// instead (the `statkey::define_key!` macro batches this and also emits the
/// secondary derives this macro expects you to provide yourself:
/// `Copy`, `Clone`, `PartialEq`, `Eq`, `Debug`, and `Default`).
///
/// ```
/// use statkey::Key;
/// use statkey_derive::StaticKey;
///
/// #[derive(StaticKey, Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
/// struct Timeout;
///
/// #[derive(StaticKey, Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
/// struct Retries;
///
/// assert_ne!(Timeout::ID, Retries::ID);
/// ```
#[proc_macro_derive(StaticKey)]
pub fn static_key(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = syn::parse(input).unwrap();
    impl_static_key(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn impl_static_key(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    if let Some(param) = ast.generics.params.first() {
        return Err(syn::Error::new(
            param.span(),
            "cannot derive StaticKey for a generic type: \
             the key id is derived from the type name alone, \
             so every instantiation would collide",
        ));
    }
    match ast.data {
        Data::Struct(ref data) => match data.fields {
            Fields::Unit => {}
            Fields::Named(_) | Fields::Unnamed(_) => {
                return Err(syn::Error::new(
                    data.fields.span(),
                    "can only derive StaticKey for a unit struct: \
                     a key type must not carry runtime data",
                ));
            }
        },
        Data::Enum(ref data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "cannot derive StaticKey for an enum: \
                 each variant would need to be its own key type. \
                 Declare one unit struct per key, \
                 or use `U64Key<{ Variant as u64 }>` to key by discriminant",
            ));
        }
        Data::Union(ref data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "cannot derive StaticKey for a union",
            ));
        }
    }
    let impl_decl = quote_spanned! { name.span() => impl statkey::Key for #name };
    Ok(quote! {
        #[automatically_derived]
        #impl_decl {
            const ID: statkey::KeyId = statkey::KeyId::named(
                ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#name)),
            );
        }
    })
}
