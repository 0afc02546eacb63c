//! Maps rows to models and models to parameterized commands.

mod builder;
pub use builder::Builder;

mod command;
pub use command::build_command;

mod materialize;

use crate::Model;
use rowmap_core::{driver::CommandKind, TypeDescriptor};

use std::{fmt, marker::PhantomData, sync::OnceLock};

/// Converts rows into values of `T` and values of `T` into commands.
///
/// The type descriptor of `T` is computed on first use and reused for the
/// lifetime of the mapper. A mapper holds no connection or row source, and is
/// `Send + Sync` for any `T`.
pub struct Mapper<T> {
    /// Descriptor of `T`, computed at most once
    descriptor: OnceLock<TypeDescriptor>,

    options: Options,

    _p: PhantomData<fn() -> T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Options {
    /// Prepended to column names to build parameter names
    parameter_prefix: char,

    /// Kind assigned to built commands
    command_kind: CommandKind,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            parameter_prefix: '@',
            command_kind: CommandKind::Text,
        }
    }
}

impl Options {
    /// Builds a parameter name from a column name or pair key. Names that
    /// already carry the prefix are kept as is.
    fn parameter_name(&self, name: &str) -> String {
        if name.starts_with(self.parameter_prefix) {
            name.to_string()
        } else {
            format!("{}{name}", self.parameter_prefix)
        }
    }
}

impl<T> Mapper<T> {
    /// Creates a mapper with `@`-prefixed parameters and text commands.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    fn with_options(options: Options) -> Self {
        Mapper {
            descriptor: OnceLock::new(),
            options,
            _p: PhantomData,
        }
    }

    pub fn parameter_prefix(&self) -> char {
        self.options.parameter_prefix
    }

    pub fn command_kind(&self) -> CommandKind {
        self.options.command_kind
    }
}

impl<T: Model> Mapper<T> {
    /// Returns the descriptor of `T`, computing it on first call.
    pub fn descriptor(&self) -> &TypeDescriptor {
        self.descriptor.get_or_init(|| {
            let descriptor = T::describe();

            tracing::debug!(
                model = descriptor.name,
                fields = descriptor.fields.len(),
                mappable = descriptor.mappable().count(),
                "computed type descriptor"
            );

            descriptor
        })
    }
}

impl<T> Default for Mapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Mapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("type", &core::any::type_name::<T>())
            .field("parameter_prefix", &self.options.parameter_prefix)
            .field("command_kind", &self.options.command_kind)
            .finish()
    }
}
