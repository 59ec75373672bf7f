#![recursion_limit = "128"]

extern crate proc_macro;

mod enum_impl;
mod struct_impl;

use proc_macro::TokenStream;
use syn::{Data, DeriveInput};

/// Derives `Serial` (and the matching `FieldRep`) for a struct with named
/// fields, or `FieldRep` for an enum whose variants are all unit-like.
///
/// The deriving type must be `Clone`. Generated code refers to `Serial`,
/// `FieldRep`, and `Field` by their bare names; bring them into scope,
/// usually via `use jdict::prelude::*`.
#[proc_macro_derive(Serial)]
pub fn serial_derive(input: TokenStream) -> TokenStream {
    // Construct a representation of Rust code as a syntax tree
    // that we can manipulate
    let ast: DeriveInput = syn::parse(input).unwrap();
    let name = ast.ident;

    match ast.data {
        Data::Struct(sd) => struct_impl::serial(name, sd),
        Data::Enum(ed) => enum_impl::case(name, ed),
        Data::Union(_) => panic!("#[derive(Serial)] does not support unions"),
    }
}
