use crate::Field;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rowmap_core::{
    stmt::{Type, Value},
    Error, Result,
};

macro_rules! impl_chrono_field {
    ($ty:ty, $name:ident, $lit:literal) => {
        impl Field for $ty {
            fn ty() -> Option<Type> {
                Some(Type::$name)
            }

            fn load(value: Value) -> Result<Self> {
                match Type::$name.cast(value)? {
                    Value::$name(v) => Ok(v),
                    value => Err(Error::type_conversion(value, $lit)),
                }
            }

            fn store(&self) -> Value {
                Value::$name(*self)
            }
        }
    };
}

impl_chrono_field!(DateTime<Utc>, ChronoDateTimeUtc, "chrono::DateTime<Utc>");
impl_chrono_field!(NaiveDateTime, ChronoNaiveDateTime, "chrono::NaiveDateTime");
impl_chrono_field!(NaiveDate, ChronoNaiveDate, "chrono::NaiveDate");
impl_chrono_field!(NaiveTime, ChronoNaiveTime, "chrono::NaiveTime");
