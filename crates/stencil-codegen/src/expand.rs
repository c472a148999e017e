mod model;
mod schema;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for stencil types
    stencil: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impls = self.expand_model_impls();

        wrap_in_const(quote! {
            #model_impls
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        stencil: quote!(_stencil::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use stencil as _stencil;
            #code
        };
    }
}
