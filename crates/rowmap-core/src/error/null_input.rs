use super::Error;

/// Error when a required argument was not supplied.
///
/// Raised before any work is done, for a missing connection, SQL text, model,
/// record or row source.
#[derive(Debug)]
pub(super) struct NullInputError {
    argument: &'static str,
}

impl std::error::Error for NullInputError {}

impl core::fmt::Display for NullInputError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "null input: {} cannot be absent", self.argument)
    }
}

impl Error {
    /// Creates a null input error naming the missing argument.
    pub fn null_input(argument: &'static str) -> Error {
        Error::from(super::ErrorKind::NullInput(NullInputError { argument }))
    }

    /// Returns `true` if this error is a null input error.
    pub fn is_null_input(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NullInput(_))
    }
}
