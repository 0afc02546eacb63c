use super::{Error, ErrorKind};

/// A connection URL a driver cannot open: it does not parse, or it names a
/// scheme the driver does not serve.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    url: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidConnectionUrl {}

impl core::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection URL {:?}: {}", self.url, self.reason)
    }
}

impl Error {
    pub fn invalid_connection_url(url: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
            url: url.into().into_boxed_str(),
            reason: reason.into().into_boxed_str(),
        }))
    }

    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidConnectionUrl(_))
    }
}
