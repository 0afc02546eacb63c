use super::Error;

/// Error when an untyped parameter key is empty or only whitespace.
#[derive(Debug)]
pub(super) struct InvalidKeyError {
    key: Box<str>,
}

impl std::error::Error for InvalidKeyError {}

impl core::fmt::Display for InvalidKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid key: parameter key {:?} is empty or whitespace",
            self.key
        )
    }
}

impl Error {
    /// Creates an invalid key error for the offending parameter key.
    pub fn invalid_key(key: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidKey(InvalidKeyError {
            key: key.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid key error.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidKey(_))
    }
}
