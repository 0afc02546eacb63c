use super::{Error, ErrorKind};

/// A collaborator call failed: opening a connection, preparing or running a
/// statement, binding a parameter, or reading a row.
///
/// The driver's own error is kept as the `source` and its message, followed by
/// the messages of its causes, is the display text.
#[derive(Debug)]
pub(super) struct DriverOperationFailed {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

impl core::fmt::Display for DriverOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let root: &(dyn std::error::Error + 'static) = &*self.source;
        let chain = std::iter::successors(Some(root), |err| err.source());

        for (i, err) in chain.enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{err}")?;
        }

        Ok(())
    }
}

impl Error {
    /// Wraps an error returned by a database driver, e.g. `rusqlite::Error`.
    ///
    /// Drivers call this through `map_err(Error::driver_operation_failed)`.
    pub fn driver_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::DriverOperationFailed(DriverOperationFailed {
            source: Box::new(err),
        }))
    }

    /// Returns `true` if a driver call failed.
    pub fn is_driver_operation_failed(&self) -> bool {
        matches!(self.kind(), ErrorKind::DriverOperationFailed(_))
    }
}
