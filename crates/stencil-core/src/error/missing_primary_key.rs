use super::Error;

/// Error when no field of a model resolves to a primary key.
///
/// This occurs when no field is annotated as the primary key and no field
/// carries the conventional key name. Statements cannot be generated for such
/// a model until one of the two is supplied.
#[derive(Debug)]
pub(super) struct MissingPrimaryKeyError {
    model: Box<str>,
}

impl std::error::Error for MissingPrimaryKeyError {}

impl core::fmt::Display for MissingPrimaryKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no primary key found for type `{}`", self.model)
    }
}

impl Error {
    /// Creates a missing primary key error for the named model type.
    pub fn missing_primary_key(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKeyError {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing primary key error.
    pub fn is_missing_primary_key(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingPrimaryKey(_)))
    }
}
