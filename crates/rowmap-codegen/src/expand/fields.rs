use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Body of `Model::load_field`: assigns a coerced value to a writable
    /// field by index.
    pub(super) fn expand_load_field_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_name = self.model.ident.to_string();

        let arms = self
            .model
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_writable())
            .map(|(index, field)| {
                let index = util::int(index);
                let ident = &field.ident;
                let ty = &field.ty;

                quote! {
                    #index => {
                        self.#ident = <#ty as #rowmap::Field>::load(value)?;
                        Ok(())
                    }
                }
            });

        quote! {
            match index {
                #( #arms )*
                _ => Err(#rowmap::Error::from_args(format_args!(
                    "{} has no writable field at index {}",
                    #model_name,
                    index
                ))),
            }
        }
    }

    /// Body of `Model::store_field`: reads a readable field by index.
    pub(super) fn expand_store_field_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_name = self.model.ident.to_string();

        let arms = self
            .model
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_readable())
            .map(|(index, field)| {
                let index = util::int(index);
                let ident = &field.ident;
                let ty = &field.ty;

                quote! {
                    #index => Ok(<#ty as #rowmap::Field>::store(&self.#ident)),
                }
            });

        quote! {
            match index {
                #( #arms )*
                _ => Err(#rowmap::Error::from_args(format_args!(
                    "{} has no readable field at index {}",
                    #model_name,
                    index
                ))),
            }
        }
    }
}
