mod enumeration;
mod fields;
mod model;
mod schema;
mod util;

use crate::schema::{EnumDef, Model};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
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
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

pub(super) fn enumeration(def: &EnumDef) -> TokenStream {
    let rowmap = quote!(_rowmap::codegen_support);
    wrap_in_const(enumeration::expand(def, &rowmap))
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
