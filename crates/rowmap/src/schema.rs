//! Field metadata of model types.

pub use rowmap_core::schema::{FieldDescriptor, TypeDescriptor};

use crate::Model;

/// Lists the declared fields of `T`.
///
/// The descriptor is built on every call; [`Mapper`](crate::Mapper) caches it
/// per instance.
pub fn describe<T: Model>() -> TypeDescriptor {
    T::describe()
}
