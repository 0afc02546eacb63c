mod ext;
pub use ext::{ConnectionExt, RecordExt, RowSourceExt};

mod field;
pub use field::Field;

#[cfg(feature = "chrono")]
mod field_chrono;

#[cfg(feature = "rust_decimal")]
mod field_decimal;

pub mod mapper;
pub use mapper::{build_command, Mapper};

mod model;
pub use model::Model;

pub mod schema;

pub use rowmap_core::{
    driver::{self, Command, CommandKind, Connection, Parameter, Record, RowSource},
    stmt::{self, Value},
    Error, Result,
};

pub use rowmap_macros::{Enum, Model};

#[cfg(feature = "sqlite")]
pub use rowmap_driver_sqlite as sqlite;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Field, Model};
    pub use rowmap_core::{
        stmt::{EnumVariant, Type, TypeEnum, Value},
        Error, FieldDescriptor, Result, TypeDescriptor,
    };
}
