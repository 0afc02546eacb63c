use crate::schema::EnumDef;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(def: &EnumDef, rowmap: &TokenStream) -> TokenStream {
    let ident = &def.ident;
    let enum_name = ident.to_string();

    let variants = def.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let name = variant.name();

        quote! {
            #rowmap::EnumVariant {
                name: #name,
                discriminant: #ident::#variant_ident as i64,
            }
        }
    });

    let discriminant_matches = def.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;

        quote! {
            if discriminant == #ident::#variant_ident as i64 {
                return Ok(#ident::#variant_ident);
            }
        }
    });

    let store_arms = def.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;

        quote! {
            #ident::#variant_ident => #ident::#variant_ident as i64,
        }
    });

    quote! {
        const TYPE: #rowmap::TypeEnum = #rowmap::TypeEnum {
            name: #enum_name,
            variants: &[ #( #variants ),* ],
        };

        impl #rowmap::Field for #ident {
            fn ty() -> Option<#rowmap::Type> {
                Some(#rowmap::Type::Enum(TYPE))
            }

            fn load(value: #rowmap::Value) -> #rowmap::Result<Self> {
                match #rowmap::Type::Enum(TYPE).cast(value)? {
                    #rowmap::Value::I64(discriminant) => {
                        #( #discriminant_matches )*

                        Err(#rowmap::Error::type_conversion_reason(
                            #rowmap::Value::I64(discriminant),
                            #enum_name,
                            "no variant matches the value",
                        ))
                    }
                    value => Err(#rowmap::Error::type_conversion(value, #enum_name)),
                }
            }

            fn store(&self) -> #rowmap::Value {
                #rowmap::Value::I64(match self {
                    #( #store_arms )*
                })
            }
        }
    }
}
