use super::Error;

/// Error when two retained fields of one model resolve to the same column.
///
/// Only raised when strict column checking is enabled; otherwise the later
/// field silently wins in the column-to-field mapping.
#[derive(Debug)]
pub(super) struct DuplicateColumnError {
    model: Box<str>,
    column: Box<str>,
    first: Box<str>,
    second: Box<str>,
}

impl std::error::Error for DuplicateColumnError {}

impl core::fmt::Display for DuplicateColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate column `{}` in type `{}`: fields `{}` and `{}` map to the same column",
            self.column, self.model, self.first, self.second
        )
    }
}

impl Error {
    /// Creates a duplicate column error.
    pub fn duplicate_column(
        model: impl Into<String>,
        column: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumnError {
            model: model.into().into(),
            column: column.into().into(),
            first: first.into().into(),
            second: second.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate column error.
    pub fn is_duplicate_column(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::DuplicateColumn(_)))
    }
}
