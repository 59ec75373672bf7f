use proc_macro::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, Ident};

pub fn case(name: Ident, data: DataEnum) -> TokenStream {
    let arms: Vec<proc_macro2::TokenStream> = data
        .variants
        .iter()
        .map(|variant| {
            match variant.fields {
                Fields::Unit => {}
                _ => {
                    panic!(
                        "#[derive(Serial)] on an enum supports unit-like variants only; \
                         `{}::{}` carries data",
                        name, variant.ident
                    );
                }
            }

            let ident = &variant.ident;
            let case = ident.to_string();
            quote! { #name::#ident => Field::Case(#case) }
        })
        .collect();

    let imp = quote! {
        impl FieldRep for #name {
            fn to_field(&self) -> Field {
                match self {
                    #(#arms),*
                }
            }
        }
    };

    imp.into()
}
