use rowmap_core::{
    stmt::{Type, Value},
    Error, Result,
};

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

/// A type that can be declared as a model field.
///
/// Mappable types return their storage type from [`Field::ty`] and convert to
/// and from [`Value`]. Reference types (collections, boxes, nested models)
/// keep the provided methods: they are listed in the descriptor but never read
/// from a row or written to a command.
///
/// Every field of a `#[derive(Model)]` struct must implement `Field`. A type
/// from another crate with no impl, such as `std::time::Duration`, is a
/// compile error rather than an unmapped field: mark it `#[skip]` or wrap it
/// in a newtype.
///
/// Implement this for a newtype to make it mappable:
///
/// ```
/// use rowmap::{stmt::{Type, Value}, Field, Result};
///
/// struct Email(String);
///
/// impl Field for Email {
///     fn ty() -> Option<Type> {
///         Some(Type::String)
///     }
///
///     fn load(value: Value) -> Result<Self> {
///         Ok(Email(String::load(value)?))
///     }
///
///     fn store(&self) -> Value {
///         Value::from(&self.0)
///     }
/// }
/// ```
pub trait Field: Sized {
    /// True if the type is `Option<_>`
    const NULLABLE: bool = false;

    /// Storage type of the field, or `None` for reference types.
    fn ty() -> Option<Type> {
        None
    }

    /// Builds the field from a value already coerced to [`Field::ty`].
    fn load(value: Value) -> Result<Self> {
        Err(Error::type_conversion(value, core::any::type_name::<Self>()))
    }

    fn store(&self) -> Value {
        Value::Null
    }
}

macro_rules! impl_field {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Field for $ty {
                fn ty() -> Option<Type> {
                    Some(Type::$variant)
                }

                fn load(value: Value) -> Result<Self> {
                    match Type::$variant.cast(value)? {
                        Value::$variant(v) => Ok(v),
                        value => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }

                fn store(&self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

impl_field! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => String,
    uuid::Uuid => Uuid,
}

impl<T: Field> Field for Option<T> {
    const NULLABLE: bool = true;

    fn ty() -> Option<Type> {
        T::ty()
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn store(&self) -> Value {
        match self {
            Some(value) => value.store(),
            None => Value::Null,
        }
    }
}

// Reference types: listed by the descriptor, never mapped

impl<T> Field for Vec<T> {}

impl<T> Field for VecDeque<T> {}

impl<K, V, S> Field for HashMap<K, V, S> {}

impl<K, V> Field for BTreeMap<K, V> {}

impl<T, S> Field for HashSet<T, S> {}

impl<T> Field for BTreeSet<T> {}

impl<T: ?Sized> Field for Box<T> {}

impl<T: ?Sized> Field for Rc<T> {}

impl<T: ?Sized> Field for Arc<T> {}
