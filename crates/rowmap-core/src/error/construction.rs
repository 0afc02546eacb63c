use super::Error;

/// Error when a model type cannot be default-constructed.
#[derive(Debug)]
pub(super) struct ConstructionError {
    type_name: &'static str,
}

impl std::error::Error for ConstructionError {}

impl core::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot construct {}: type has no default factory",
            self.type_name
        )
    }
}

impl Error {
    /// Creates a construction error for the given type.
    pub fn construction(type_name: &'static str) -> Error {
        Error::from(super::ErrorKind::Construction(ConstructionError {
            type_name,
        }))
    }

    /// Returns `true` if this error is a construction error.
    pub fn is_construction(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Construction(_))
    }
}
