use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::{
    stmt::{Type, Value},
    Error, Result,
};

impl Type {
    pub(super) fn cast_decimal(&self, value: Value) -> Result<Value> {
        let cast = match &value {
            Value::Decimal(_) => return Ok(value),
            Value::I8(v) => Ok(Decimal::from(*v)),
            Value::I16(v) => Ok(Decimal::from(*v)),
            Value::I32(v) => Ok(Decimal::from(*v)),
            Value::I64(v) => Ok(Decimal::from(*v)),
            Value::U8(v) => Ok(Decimal::from(*v)),
            Value::U16(v) => Ok(Decimal::from(*v)),
            Value::U32(v) => Ok(Decimal::from(*v)),
            Value::U64(v) => Ok(Decimal::from(*v)),
            Value::F32(v) => Decimal::try_from(*v).map_err(|e| e.to_string()),
            Value::F64(v) => Decimal::try_from(*v).map_err(|e| e.to_string()),
            Value::String(v) => v.trim().parse::<Decimal>().map_err(|e| e.to_string()),
            _ => return Err(Error::type_conversion(value, self.to_string())),
        };

        match cast {
            Ok(v) => Ok(Value::Decimal(v)),
            Err(reason) => Err(Error::type_conversion_reason(
                value,
                self.to_string(),
                reason,
            )),
        }
    }
}

pub(super) fn decimal_to_i128(v: &Decimal) -> core::result::Result<i128, Option<String>> {
    v.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i128()
        .ok_or_else(|| Some(format!("value {v} is out of range")))
}

pub(super) fn decimal_to_f64(v: &Decimal) -> core::result::Result<f64, Option<String>> {
    v.to_f64()
        .ok_or_else(|| Some(format!("value {v} cannot be represented as a float")))
}
