use super::{Construct, ErrorSet};

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// How new instances are created, if overridden
    pub(crate) construct: Option<Construct>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("model") {
                continue;
            }

            // Allowed syntax:
            //
            // #[model(no_default)]
            // #[model(factory = path::to::function)]
            let res = attr.parse_nested_meta(|meta| {
                let construct = if meta.path.is_ident("no_default") {
                    Construct::Unsupported
                } else if meta.path.is_ident("factory") {
                    Construct::Factory(meta.value()?.parse()?)
                } else {
                    return Err(meta.error("expected `no_default` or `factory = path`"));
                };

                if self.construct.is_some() {
                    return Err(meta.error("duplicate construction option in #[model]"));
                }

                self.construct = Some(construct);
                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
