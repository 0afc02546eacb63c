use super::{Type, Value};
use crate::{Error, Result};

// Numeric coercion goes through a wide intermediate (`i128` for integers, `f64`
// for floats) and narrows to the target with a range check. Floats are rounded
// half to even before narrowing to an integer.

/// Why a value could not be turned into a number. `None` means the source type
/// has no numeric conversion at all.
type Reason = Option<String>;

macro_rules! narrow {
    ( $int:expr, $ty:expr => $( $variant:ident($prim:ty) ),* ) => {
        match $ty {
            $(
                Type::$variant => <$prim>::try_from($int).ok().map(Value::$variant),
            )*
            _ => None,
        }
    };
}

impl Type {
    pub(super) fn cast_integer(&self, value: Value) -> Result<Value> {
        let int = match to_i128(&value) {
            Ok(int) => int,
            Err(reason) => return Err(conversion_error(value, self, reason)),
        };

        let narrowed = narrow!(int, self =>
            I8(i8), I16(i16), I32(i32), I64(i64), U8(u8), U16(u16), U32(u32), U64(u64)
        );

        match narrowed {
            Some(value) => Ok(value),
            None => Err(Error::type_conversion_reason(
                value,
                self.to_string(),
                format!("value {int} is out of range"),
            )),
        }
    }

    pub(super) fn cast_float(&self, value: Value) -> Result<Value> {
        let float = match to_f64(&value) {
            Ok(float) => float,
            Err(reason) => return Err(conversion_error(value, self, reason)),
        };

        match self {
            Type::F32 if float.is_finite() && float.abs() > f64::from(f32::MAX) => {
                Err(Error::type_conversion_reason(
                    value,
                    self.to_string(),
                    format!("value {float} is out of range"),
                ))
            }
            Type::F32 => Ok(Value::F32(float as f32)),
            _ => Ok(Value::F64(float)),
        }
    }
}

fn conversion_error(value: Value, ty: &Type, reason: Reason) -> Error {
    match reason {
        Some(reason) => Error::type_conversion_reason(value, ty.to_string(), reason),
        None => Error::type_conversion(value, ty.to_string()),
    }
}

fn to_i128(value: &Value) -> core::result::Result<i128, Reason> {
    Ok(match value {
        Value::Bool(v) => i128::from(*v),
        Value::I8(v) => i128::from(*v),
        Value::I16(v) => i128::from(*v),
        Value::I32(v) => i128::from(*v),
        Value::I64(v) => i128::from(*v),
        Value::U8(v) => i128::from(*v),
        Value::U16(v) => i128::from(*v),
        Value::U32(v) => i128::from(*v),
        Value::U64(v) => i128::from(*v),
        Value::Char(v) => i128::from(u32::from(*v)),
        Value::F32(v) => round_float(f64::from(*v))?,
        Value::F64(v) => round_float(*v)?,
        #[cfg(feature = "rust_decimal")]
        Value::Decimal(v) => super::ty_decimal::decimal_to_i128(v)?,
        Value::String(v) => v
            .trim()
            .parse::<i128>()
            .map_err(|_| Some(format!("cannot parse {v:?} as an integer")))?,
        _ => return Err(None),
    })
}

fn to_f64(value: &Value) -> core::result::Result<f64, Reason> {
    Ok(match value {
        Value::Bool(v) => f64::from(u8::from(*v)),
        Value::I8(v) => f64::from(*v),
        Value::I16(v) => f64::from(*v),
        Value::I32(v) => f64::from(*v),
        Value::I64(v) => *v as f64,
        Value::U8(v) => f64::from(*v),
        Value::U16(v) => f64::from(*v),
        Value::U32(v) => f64::from(*v),
        Value::U64(v) => *v as f64,
        Value::F32(v) => f64::from(*v),
        Value::F64(v) => *v,
        #[cfg(feature = "rust_decimal")]
        Value::Decimal(v) => super::ty_decimal::decimal_to_f64(v)?,
        Value::String(v) => v
            .trim()
            .parse::<f64>()
            .map_err(|_| Some(format!("cannot parse {v:?} as a number")))?,
        _ => return Err(None),
    })
}

fn round_float(v: f64) -> core::result::Result<i128, Reason> {
    if !v.is_finite() {
        return Err(Some(format!("value {v} is not finite")));
    }

    let rounded = v.round_ties_even();

    if rounded < i128::MIN as f64 || rounded > i128::MAX as f64 {
        return Err(Some(format!("value {v} is out of range")));
    }

    Ok(rounded as i128)
}
