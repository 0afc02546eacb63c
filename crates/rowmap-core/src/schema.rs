//! Field metadata describing how a model type maps to columns.

mod field;
pub use field::FieldDescriptor;

mod ty;
pub use ty::TypeDescriptor;
