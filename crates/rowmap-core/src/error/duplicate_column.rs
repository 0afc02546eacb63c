use super::Error;

/// Error when two columns of a record share a name once upper-cased.
#[derive(Debug)]
pub(super) struct DuplicateColumnError {
    column: Box<str>,
    first: usize,
    second: usize,
}

impl std::error::Error for DuplicateColumnError {}

impl core::fmt::Display for DuplicateColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate column: {} appears at ordinals {} and {}",
            self.column, self.first, self.second
        )
    }
}

impl Error {
    /// Creates a duplicate column error for the normalized column name and the
    /// ordinals of its first and second occurrence.
    pub fn duplicate_column(column: impl Into<String>, first: usize, second: usize) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumnError {
            column: column.into().into(),
            first,
            second,
        }))
    }

    /// Returns `true` if this error is a duplicate column error.
    pub fn is_duplicate_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumn(_))
    }
}
