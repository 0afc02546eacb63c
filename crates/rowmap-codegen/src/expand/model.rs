use super::Expand;
use crate::schema::Construct;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let construct = self.expand_construct();
        let load_field_body = self.expand_load_field_body();
        let store_field_body = self.expand_store_field_body();

        quote! {
            impl #rowmap::Model for #model_ident {
                #model_schema

                #construct

                #[allow(unused_variables)]
                fn load_field(&mut self, index: usize, value: #rowmap::Value) -> #rowmap::Result<()> {
                    #load_field_body
                }

                fn store_field(&self, index: usize) -> #rowmap::Result<#rowmap::Value> {
                    #store_field_body
                }
            }

            // A model nested in another model is a reference type and does not map
            impl #rowmap::Field for #model_ident {}
        }
    }

    fn expand_construct(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        match &self.model.construct {
            Construct::Default => quote! {
                fn construct() -> #rowmap::Result<Self> {
                    Ok(<Self as ::core::default::Default>::default())
                }
            },
            Construct::Factory(path) => quote! {
                fn construct() -> #rowmap::Result<Self> {
                    Ok(#path())
                }
            },
            // The trait's provided method fails with a construction error
            Construct::Unsupported => quote!(),
        }
    }
}
