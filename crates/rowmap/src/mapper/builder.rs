use super::{Mapper, Options};
use rowmap_core::{bail, driver::CommandKind, Result};

/// Configures a [`Mapper`].
#[derive(Debug, Default)]
pub struct Builder {
    options: Options,
}

impl Builder {
    /// Sets the character prepended to parameter names. Accepts `@`, `:` and
    /// `$`; the default is `@`.
    pub fn parameter_prefix(&mut self, prefix: char) -> &mut Self {
        self.options.parameter_prefix = prefix;
        self
    }

    /// Sets the kind of commands built by the typed path.
    pub fn command_kind(&mut self, kind: CommandKind) -> &mut Self {
        self.options.command_kind = kind;
        self
    }

    pub fn build<T>(&self) -> Result<Mapper<T>> {
        let prefix = self.options.parameter_prefix;

        if !matches!(prefix, '@' | ':' | '$') {
            bail!("unsupported parameter prefix {prefix:?}; expected '@', ':' or '$'");
        }

        Ok(Mapper::with_options(self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_options() {
        let mapper: Mapper<()> = Mapper::<()>::builder()
            .parameter_prefix(':')
            .command_kind(CommandKind::StoredProcedure)
            .build()
            .unwrap();

        assert_eq!(mapper.parameter_prefix(), ':');
        assert_eq!(mapper.command_kind(), CommandKind::StoredProcedure);
    }

    #[test]
    fn builder_rejects_unknown_prefix() {
        let err = Mapper::<()>::builder()
            .parameter_prefix('#')
            .build::<()>()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "unsupported parameter prefix '#'; expected '@', ':' or '$'"
        );
    }
}
