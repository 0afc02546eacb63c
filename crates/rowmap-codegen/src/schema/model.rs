use super::{ErrorSet, Field, ModelAttr};

use std::collections::HashMap;

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Described fields in declaration order. Skipped fields are not listed.
    pub(crate) fields: Vec<Field>,

    /// How `Model::construct` creates an instance
    pub(crate) construct: Construct,
}

#[derive(Debug)]
pub(crate) enum Construct {
    /// `Default::default()`
    Default,

    /// A user function returning `Self`: `#[model(factory = path)]`
    Factory(syn::Path),

    /// `#[model(no_default)]`: construction fails at runtime
    Unsupported,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) if field.attrs.skip => {}
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        // Columns are matched case-insensitively, so two fields may not bind
        // to columns that only differ in case.
        let mut columns = HashMap::new();

        for field in &fields {
            let column = field.column_name();

            if let Some(other) = columns.insert(column.to_uppercase(), &field.ident) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!(
                        "column `{column}` of field `{}` collides with field `{other}`; column names are case-insensitive",
                        field.ident
                    ),
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            construct: model_attr.construct.unwrap_or(Construct::Default),
        })
    }
}
