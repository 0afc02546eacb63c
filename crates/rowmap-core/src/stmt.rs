mod num;

mod row;
pub use row::Row;

mod rows;
pub use rows::Rows;

mod ty;
pub use ty::Type;

#[cfg(feature = "chrono")]
mod ty_chrono;

#[cfg(feature = "rust_decimal")]
mod ty_decimal;

mod ty_enum;
pub use ty_enum::{EnumVariant, TypeEnum};

mod value;
pub use value::Value;

#[cfg(feature = "chrono")]
mod value_chrono;

#[cfg(feature = "rust_decimal")]
mod value_decimal;
