use rowmap_core::{stmt::Value, Error, Result, TypeDescriptor};

/// A struct whose fields map to the columns of a row.
///
/// Implemented by `#[derive(Model)]`. Field indexes are positions in the
/// descriptor returned by [`Model::describe`].
pub trait Model: Sized {
    /// Lists the type's fields in declaration order.
    fn describe() -> TypeDescriptor;

    /// Creates a new instance with every field at its default value.
    ///
    /// Types that opt out of default construction keep this implementation,
    /// which fails with a construction error.
    fn construct() -> Result<Self> {
        Err(Error::construction(core::any::type_name::<Self>()))
    }

    /// Assigns an already coerced value to the writable field at `index`.
    fn load_field(&mut self, index: usize, value: Value) -> Result<()>;

    /// Reads the current value of the readable field at `index`. Absent
    /// values read as [`Value::Null`].
    fn store_field(&self, index: usize) -> Result<Value>;
}
