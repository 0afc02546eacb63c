use super::{Error, ErrorKind};

/// The driver cannot do what the command asks, e.g. run a stored procedure or
/// nest a transaction.
#[derive(Debug)]
pub(super) struct UnsupportedFeature {
    feature: Box<str>,
}

impl std::error::Error for UnsupportedFeature {}

impl core::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("unsupported feature: ")?;
        f.write_str(&self.feature)
    }
}

impl Error {
    pub fn unsupported_feature(feature: impl Into<String>) -> Error {
        Error::from(ErrorKind::UnsupportedFeature(UnsupportedFeature {
            feature: feature.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if a driver rejected the request as unsupported.
    pub fn is_unsupported_feature(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnsupportedFeature(_))
    }
}
