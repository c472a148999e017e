use super::Error;

/// Error when two registered models map to the same table.
#[derive(Debug)]
pub(super) struct DuplicateTableError {
    table: Box<str>,
    first: Box<str>,
    second: Box<str>,
}

impl std::error::Error for DuplicateTableError {}

impl core::fmt::Display for DuplicateTableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "table `{}` is mapped by both `{}` and `{}`",
            self.table, self.first, self.second
        )
    }
}

impl Error {
    /// Creates a duplicate table error.
    pub fn duplicate_table(
        table: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::DuplicateTable(DuplicateTableError {
            table: table.into().into(),
            first: first.into().into(),
            second: second.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate table error.
    pub fn is_duplicate_table(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::DuplicateTable(_)))
    }
}
