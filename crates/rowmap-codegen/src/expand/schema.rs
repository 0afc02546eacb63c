use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_name = self.model.ident.to_string();

        let fields = self.model.fields.iter().map(|field| {
            let name = field.name();
            let column = field.column_name();
            let ty = &field.ty;
            let readable = field.is_readable();
            let writable = field.is_writable();

            quote! {
                #rowmap::FieldDescriptor {
                    name: #name,
                    column: #column,
                    declared_ty: ::core::any::type_name::<#ty>(),
                    storage_ty: <#ty as #rowmap::Field>::ty(),
                    nullable: <#ty as #rowmap::Field>::NULLABLE,
                    readable: #readable,
                    writable: #writable,
                }
            }
        });

        quote! {
            fn describe() -> #rowmap::TypeDescriptor {
                #rowmap::TypeDescriptor::new(#model_name, vec![ #( #fields ),* ])
            }
        }
    }
}
