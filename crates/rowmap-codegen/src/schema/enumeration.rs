use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct EnumDef {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Variants in declaration order
    pub(crate) variants: Vec<EnumVariantDef>,
}

#[derive(Debug)]
pub(crate) struct EnumVariantDef {
    /// Rust identifier for this variant (e.g., `Pending`)
    pub(crate) ident: syn::Ident,
}

impl EnumVariantDef {
    /// Variant name matched against string column values.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

impl EnumDef {
    pub(crate) fn from_ast(ast: &syn::ItemEnum) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "enum generics are not supported",
            ));
        }

        if ast.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                ast,
                "enum must have at least one variant",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut variants = vec![];

        for variant in &ast.variants {
            if !matches!(variant.fields, syn::Fields::Unit) {
                errs.push(syn::Error::new_spanned(
                    variant,
                    "enum variants cannot carry data; only unit variants map to a discriminant",
                ));
                continue;
            }

            variants.push(EnumVariantDef {
                ident: variant.ident.clone(),
            });
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(EnumDef {
            ident: ast.ident.clone(),
            variants,
        })
    }
}
