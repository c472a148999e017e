use crate::{schema, Config, ModelStatements, Result};

use std::sync::OnceLock;

/// A record type with statements generated from its field metadata.
///
/// Usually implemented with `#[derive(Model)]`.
pub trait Model: Sized + 'static {
    /// Name of the record type
    const NAME: &'static str;

    /// Field metadata of the record type.
    fn schema() -> schema::Model;

    /// Statements generated with [`Config::default`], computed once per type.
    ///
    /// Use a [`Registry`](crate::Registry) for any other configuration.
    fn statements() -> Result<&'static ModelStatements>;
}

/// Per-type storage for [`Model::statements`].
pub type StatementCell = OnceLock<Result<ModelStatements>>;

/// Generates `M`'s statements on first use and returns the cached result
/// afterwards.
///
/// A failure is cached too: the same metadata always fails the same way.
pub fn cache_statements<M: Model>(cell: &'static StatementCell) -> Result<&'static ModelStatements> {
    cell.get_or_init(|| ModelStatements::new(&M::schema(), &Config::default()))
        .as_ref()
        .map_err(Clone::clone)
}
