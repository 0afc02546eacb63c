use super::{TypeEnum, Value};
use crate::{Error, Result};

/// The storage type of a mappable field.
///
/// A field's storage type is its declared type with one level of `Option`
/// stripped. Raw column values are coerced to it with [`Type::cast`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point number
    F32,

    /// 64-bit floating point number
    F64,

    /// A single character
    Char,

    /// String type
    String,

    /// An array of bytes
    Bytes,

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    /// A fixed-precision decimal number
    #[cfg(feature = "rust_decimal")]
    Decimal,

    /// An instant in time, in UTC
    #[cfg(feature = "chrono")]
    ChronoDateTimeUtc,

    /// A date and time without a time zone
    #[cfg(feature = "chrono")]
    ChronoNaiveDateTime,

    /// A calendar date
    #[cfg(feature = "chrono")]
    ChronoNaiveDate,

    /// A time of day
    #[cfg(feature = "chrono")]
    ChronoNaiveTime,

    /// An enumeration stored as an integer discriminant
    Enum(TypeEnum),

    /// The type of the null marker. No field is stored as `Null`.
    Null,
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32 | Self::U64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Coerces `value` to this type.
    ///
    /// Null values are passed through unchanged. Any value that has no
    /// conversion to this type fails with a type conversion error.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        if self.is_integer() {
            return self.cast_integer(value);
        }

        if self.is_float() {
            return self.cast_float(value);
        }

        match self {
            Self::Bool => self.cast_bool(value),
            Self::Char => self.cast_char(value),
            Self::String => self.cast_string(value),
            Self::Bytes => match value {
                value @ Value::Bytes(_) => Ok(value),
                value => Err(Error::type_conversion(value, self.to_string())),
            },
            Self::Uuid => self.cast_uuid(value),
            #[cfg(feature = "rust_decimal")]
            Self::Decimal => self.cast_decimal(value),
            #[cfg(feature = "chrono")]
            Self::ChronoDateTimeUtc
            | Self::ChronoNaiveDateTime
            | Self::ChronoNaiveDate
            | Self::ChronoNaiveTime => self.cast_chrono(value),
            Self::Enum(ty) => ty.cast(value),
            _ => Err(Error::type_conversion(value, self.to_string())),
        }
    }

    fn cast_bool(&self, value: Value) -> Result<Value> {
        let parsed = match &value {
            Value::Bool(v) => Some(*v),
            Value::I8(v) => Some(*v != 0),
            Value::I16(v) => Some(*v != 0),
            Value::I32(v) => Some(*v != 0),
            Value::I64(v) => Some(*v != 0),
            Value::U8(v) => Some(*v != 0),
            Value::U16(v) => Some(*v != 0),
            Value::U32(v) => Some(*v != 0),
            Value::U64(v) => Some(*v != 0),
            Value::F32(v) => Some(*v != 0.0),
            Value::F64(v) => Some(*v != 0.0),
            #[cfg(feature = "rust_decimal")]
            Value::Decimal(v) => Some(!v.is_zero()),
            Value::String(v) => parse_bool(v),
            _ => None,
        };

        match parsed {
            Some(v) => Ok(Value::Bool(v)),
            None => Err(Error::type_conversion(value, self.to_string())),
        }
    }

    fn cast_char(&self, value: Value) -> Result<Value> {
        let code_point = match &value {
            Value::Char(_) => return Ok(value),
            Value::String(v) => {
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => return Ok(Value::Char(c)),
                    _ => {
                        return Err(Error::type_conversion_reason(
                            value,
                            self.to_string(),
                            "string is not exactly one character",
                        ))
                    }
                }
            }
            Value::I8(v) => u32::try_from(*v).ok(),
            Value::I16(v) => u32::try_from(*v).ok(),
            Value::I32(v) => u32::try_from(*v).ok(),
            Value::I64(v) => u32::try_from(*v).ok(),
            Value::U8(v) => Some(u32::from(*v)),
            Value::U16(v) => Some(u32::from(*v)),
            Value::U32(v) => Some(*v),
            Value::U64(v) => u32::try_from(*v).ok(),
            _ => return Err(Error::type_conversion(value, self.to_string())),
        };

        match code_point.and_then(char::from_u32) {
            Some(c) => Ok(Value::Char(c)),
            None => Err(Error::type_conversion_reason(
                value,
                self.to_string(),
                "value is not a valid code point",
            )),
        }
    }

    fn cast_string(&self, value: Value) -> Result<Value> {
        let text = match &value {
            Value::String(_) => return Ok(value),
            Value::Bool(v) => v.to_string(),
            Value::I8(v) => v.to_string(),
            Value::I16(v) => v.to_string(),
            Value::I32(v) => v.to_string(),
            Value::I64(v) => v.to_string(),
            Value::U8(v) => v.to_string(),
            Value::U16(v) => v.to_string(),
            Value::U32(v) => v.to_string(),
            Value::U64(v) => v.to_string(),
            Value::F32(v) => v.to_string(),
            Value::F64(v) => v.to_string(),
            Value::Char(v) => v.to_string(),
            Value::Uuid(v) => v.to_string(),
            #[cfg(feature = "rust_decimal")]
            Value::Decimal(v) => v.to_string(),
            #[cfg(feature = "chrono")]
            Value::ChronoDateTimeUtc(_)
            | Value::ChronoNaiveDateTime(_)
            | Value::ChronoNaiveDate(_)
            | Value::ChronoNaiveTime(_) => return self.cast_chrono(value),
            _ => return Err(Error::type_conversion(value, self.to_string())),
        };

        Ok(Value::String(text))
    }

    fn cast_uuid(&self, value: Value) -> Result<Value> {
        let parsed = match &value {
            Value::Uuid(_) => return Ok(value),
            Value::String(v) => uuid::Uuid::parse_str(v.trim()).map_err(|e| e.to_string()),
            Value::Bytes(v) => uuid::Uuid::from_slice(v).map_err(|e| e.to_string()),
            _ => return Err(Error::type_conversion(value, self.to_string())),
        };

        match parsed {
            Ok(v) => Ok(Value::Uuid(v)),
            Err(reason) => Err(Error::type_conversion_reason(
                value,
                self.to_string(),
                reason,
            )),
        }
    }
}

fn parse_bool(src: &str) -> Option<bool> {
    let src = src.trim();

    if src.eq_ignore_ascii_case("true") || src == "1" {
        Some(true)
    } else if src.eq_ignore_ascii_case("false") || src == "0" {
        Some(false)
    } else {
        None
    }
}

impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "String",
            Self::Bytes => "bytes",
            Self::Uuid => "Uuid",
            #[cfg(feature = "rust_decimal")]
            Self::Decimal => "Decimal",
            #[cfg(feature = "chrono")]
            Self::ChronoDateTimeUtc => "DateTime<Utc>",
            #[cfg(feature = "chrono")]
            Self::ChronoNaiveDateTime => "NaiveDateTime",
            #[cfg(feature = "chrono")]
            Self::ChronoNaiveDate => "NaiveDate",
            #[cfg(feature = "chrono")]
            Self::ChronoNaiveTime => "NaiveTime",
            Self::Enum(ty) => ty.name,
            Self::Null => "null",
        };

        f.write_str(name)
    }
}
