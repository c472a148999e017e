use super::{resolve, ColumnMapping, Model};
use crate::{Config, Error, Result};

use indexmap::IndexMap;

/// A model resolved against a [`Config`]: the shape statements are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Name of the record type the table was resolved from
    pub model: String,

    /// Table name, including any configured prefix
    pub name: String,

    /// One column per retained field, in declaration order
    pub columns: Vec<String>,

    /// Primary key column
    pub primary_key: String,

    /// How rows of this table are deleted
    pub deletion: Deletion,

    /// Field and column name associations
    pub mapping: ColumnMapping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    /// Rows are physically removed
    Hard,

    /// Rows are marked deleted by zeroing a flag column
    Soft { column: String },
}

impl Deletion {
    pub fn is_soft(&self) -> bool {
        matches!(self, Deletion::Soft { .. })
    }
}

impl Table {
    /// Resolves `model` into a table.
    ///
    /// Fails if no primary key can be resolved, or, with
    /// [`Config::strict_columns`], if two fields share a column.
    pub fn from_model(model: &Model, config: &Config) -> Result<Table> {
        let columns: Vec<String> = model
            .retained_fields()
            .map(|field| field.column_name(config.naming))
            .collect();

        check_duplicate_columns(model, &columns, config)?;

        let mapping = ColumnMapping::from_pairs(
            model
                .retained_fields()
                .map(|field| field.name.clone())
                .zip(columns.iter().cloned()),
        );

        let Some(primary_key) = resolve::primary_key(model, &mapping, config) else {
            return Err(Error::missing_primary_key(&model.name));
        };

        let deletion = match resolve::deletion_flag(model, &mapping, config) {
            Some(column) => Deletion::Soft { column },
            None => Deletion::Hard,
        };

        let name = config.table_name(&model.table_name);

        tracing::debug!(
            model = %model.name,
            table = %name,
            primary_key = %primary_key,
            soft_delete = deletion.is_soft(),
            columns = columns.len(),
            "resolved table"
        );

        Ok(Table {
            model: model.name.clone(),
            name,
            columns,
            primary_key,
            deletion,
            mapping,
        })
    }
}

fn check_duplicate_columns(model: &Model, columns: &[String], config: &Config) -> Result<()> {
    let mut seen = IndexMap::with_capacity(columns.len());

    for (field, column) in model.retained_fields().zip(columns) {
        let Some(first) = seen.insert(column.as_str(), field.name.as_str()) else {
            continue;
        };

        if config.strict_columns {
            return Err(Error::duplicate_column(
                &model.name,
                column,
                first,
                &field.name,
            ));
        }

        tracing::warn!(
            model = %model.name,
            column = %column,
            first,
            second = %field.name,
            "two fields map to the same column; the later field wins"
        );
    }

    Ok(())
}
