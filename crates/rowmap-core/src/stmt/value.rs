use super::Type;

/// A dynamically typed cell value exchanged with the database driver.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point number
    F32(f32),

    /// 64-bit floating point number
    F64(f64),

    /// A single character
    Char(char),

    /// String value
    String(String),

    /// An array of bytes
    Bytes(Vec<u8>),

    /// 128-bit universally unique identifier (UUID)
    Uuid(uuid::Uuid),

    /// A fixed-precision decimal number
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),

    /// An instant in time, in UTC
    #[cfg(feature = "chrono")]
    ChronoDateTimeUtc(chrono::DateTime<chrono::Utc>),

    /// A date and time without a time zone
    #[cfg(feature = "chrono")]
    ChronoNaiveDateTime(chrono::NaiveDateTime),

    /// A calendar date
    #[cfg(feature = "chrono")]
    ChronoNaiveDate(chrono::NaiveDate),

    /// A time of day
    #[cfg(feature = "chrono")]
    ChronoNaiveTime(chrono::NaiveTime),

    /// The database null marker
    #[default]
    Null,
}

impl Value {
    /// Returns the database null marker
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns the type this value carries. `Null` infers [`Type::Null`].
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::Char(_) => Type::Char,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Uuid(_) => Type::Uuid,
            #[cfg(feature = "rust_decimal")]
            Self::Decimal(_) => Type::Decimal,
            #[cfg(feature = "chrono")]
            Self::ChronoDateTimeUtc(_) => Type::ChronoDateTimeUtc,
            #[cfg(feature = "chrono")]
            Self::ChronoNaiveDateTime(_) => Type::ChronoNaiveDateTime,
            #[cfg(feature = "chrono")]
            Self::ChronoNaiveDate(_) => Type::ChronoNaiveDate,
            #[cfg(feature = "chrono")]
            Self::ChronoNaiveTime(_) => Type::ChronoNaiveTime,
            Self::Null => Type::Null,
        }
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

macro_rules! impl_from {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(value.clone())
                }
            }
        )*
    };
}

impl_from! {
    Bool(bool)
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
    F32(f32)
    F64(f64)
    Char(char)
    String(String)
    Bytes(Vec<u8>)
    Uuid(uuid::Uuid)
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
