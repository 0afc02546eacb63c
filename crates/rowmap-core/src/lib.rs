#[macro_use]
mod macros;

pub mod driver;
pub use driver::{Command, CommandKind, Connection, Parameter, Record, RowSource};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{FieldDescriptor, TypeDescriptor};

pub mod stmt;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
