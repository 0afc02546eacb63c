use super::Error;
use crate::stmt::{Type, Value};

/// Error when a value cannot be converted to the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    from: Type,
    to_type: Box<str>,
    reason: Option<Box<str>>,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {:?} to {}", self.from, self.to_type)?;
        if let Some(ref reason) = self.reason {
            write!(f, ": {}", reason)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a type conversion error.
    ///
    /// This is used when a raw value cannot be coerced to a field's storage type.
    pub fn type_conversion(value: Value, to_type: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            from: value.infer_ty(),
            to_type: to_type.into().into(),
            reason: None,
        }))
    }

    /// Creates a type conversion error that explains why the conversion failed.
    pub fn type_conversion_reason(
        value: Value,
        to_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            from: value.infer_ty(),
            to_type: to_type.into().into(),
            reason: Some(reason.into().into()),
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
