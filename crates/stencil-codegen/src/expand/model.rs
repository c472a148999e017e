use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let stencil = &self.stencil;
        let model_ident = &self.model.ident;
        let model_name = model_ident.to_string();
        let model_schema = self.expand_model_schema();

        quote! {
            impl #stencil::Model for #model_ident {
                const NAME: &'static str = #model_name;

                #model_schema

                fn statements() -> #stencil::Result<&'static #stencil::ModelStatements> {
                    static STATEMENTS: #stencil::StatementCell = #stencil::StatementCell::new();
                    #stencil::cache_statements::<Self>(&STATEMENTS)
                }
            }
        }
    }
}
