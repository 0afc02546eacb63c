use crate::Field;
use rowmap_core::{
    stmt::{Type, Value},
    Error, Result,
};
use rust_decimal::Decimal;

impl Field for Decimal {
    fn ty() -> Option<Type> {
        Some(Type::Decimal)
    }

    fn load(value: Value) -> Result<Self> {
        match Type::Decimal.cast(value)? {
            Value::Decimal(v) => Ok(v),
            value => Err(Error::type_conversion(value, "rust_decimal::Decimal")),
        }
    }

    fn store(&self) -> Value {
        Value::Decimal(*self)
    }
}
