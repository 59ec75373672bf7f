use proc_macro::TokenStream;
use quote::quote;
use syn::{DataStruct, Fields, Ident};

pub fn serial(name: Ident, data: DataStruct) -> TokenStream {
    let impl_fields = match data.fields {
        // C-style structs
        Fields::Named(fields) => {
            let idents: Vec<Ident> = fields
                .named
                .iter()
                .map(|field| field.ident.clone().unwrap())
                .collect();
            let names: Vec<String> = idents.iter().map(std::string::ToString::to_string).collect();

            quote! {
                vec![#((#names, FieldRep::to_field(&self.#idents))),*]
            }
        }
        // Unit-like structs have no fields and serialize to an empty map
        Fields::Unit => quote! { Vec::new() },
        // Tuple structs
        Fields::Unnamed(_) => {
            panic!("#[derive(Serial)] requires named fields; tuple struct fields have no keys")
        }
    };

    let imp = quote! {
        impl Serial for #name {
            fn fields(&self) -> Vec<(&'static str, Field)> {
                #impl_fields
            }
        }

        impl FieldRep for #name {
            fn to_field(&self) -> Field {
                Field::Obj(self.to_vecmap())
            }
        }
    };

    imp.into()
}
