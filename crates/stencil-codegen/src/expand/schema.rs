use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let stencil = &self.stencil;
        let model_name = self.model.ident.to_string();
        let table_name = &self.model.table;
        let fields = self.expand_model_fields();

        quote! {
            fn schema() -> #stencil::schema::Model {
                use #stencil::schema::{Field, Model};

                Model {
                    name: #model_name.to_string(),
                    table_name: #table_name.to_string(),
                    fields: #fields,
                }
            }
        }
    }

    fn expand_model_fields(&self) -> TokenStream {
        let fields = self.model.fields.iter().map(|field| {
            let name = &field.name;
            let column = match &field.attrs.column {
                Some(column) => {
                    let column = &column.name;
                    quote! { Some(#column.to_string()) }
                }
                None => quote! { None },
            };
            let ignore = field.attrs.skip;
            let primary_key = field.attrs.key.is_some();
            let deletion_flag = field.attrs.deletion_flag.is_some();

            quote! {
                Field {
                    name: #name.to_string(),
                    column: #column,
                    ignore: #ignore,
                    primary_key: #primary_key,
                    deletion_flag: #deletion_flag,
                }
            }
        });

        quote! {
            vec![ #( #fields ),* ]
        }
    }
}
