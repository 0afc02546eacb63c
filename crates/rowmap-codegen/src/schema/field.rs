use super::{Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type as declared
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Optional database column name: `#[column("name")]`
    pub(crate) column: Option<Column>,

    /// `#[read_only]`: the field is never assigned from a row
    pub(crate) read_only: bool,

    /// `#[write_only]`: the field is never read into a command
    pub(crate) write_only: bool,

    /// `#[skip]`: the field is left out of the descriptor
    pub(crate) skip: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("read_only") {
                if attrs.read_only {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[read_only] attribute",
                    ));
                } else {
                    attrs.read_only = true;
                }
            } else if attr.path().is_ident("write_only") {
                if attrs.write_only {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[write_only] attribute",
                    ));
                } else {
                    attrs.write_only = true;
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else {
                    attrs.skip = true;
                }
            }
        }

        if attrs.read_only && attrs.write_only {
            errs.push(syn::Error::new_spanned(
                field,
                "a field cannot be both #[read_only] and #[write_only]",
            ));
        }

        if attrs.skip && (attrs.column.is_some() || attrs.read_only || attrs.write_only) {
            errs.push(syn::Error::new_spanned(
                field,
                "#[skip] cannot be combined with other field attributes",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            attrs,
            ident: ident.clone(),
            ty: field.ty.clone(),
        })
    }

    /// Field name as declared, without any `r#` prefix.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Name of the column the field binds to.
    pub(crate) fn column_name(&self) -> String {
        match &self.attrs.column {
            Some(column) => column.name.value(),
            None => self.name(),
        }
    }

    pub(crate) fn is_readable(&self) -> bool {
        !self.attrs.write_only
    }

    pub(crate) fn is_writable(&self) -> bool {
        !self.attrs.read_only
    }
}
