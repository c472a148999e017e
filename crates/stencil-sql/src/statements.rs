use crate::{Serializer, Statement};

use indexmap::IndexMap;
use serde::Serialize;
use stencil_core::{
    schema::{Deletion, Table},
    Config, Model, Result,
};

/// The four CRUD statements of one model, with the data needed to bind and
/// read them back.
///
/// Every statement addresses a single row through `?` placeholders; the
/// execution layer binds values in column order, followed by the primary key
/// value for statements with a `WHERE` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelStatements {
    pub table_name: String,

    /// Column holding the primary key
    pub primary_key: String,

    /// Column zeroed by `delete` when the model soft-deletes
    pub deletion_flag: Option<String>,

    /// `INSERT` of every column
    pub create: String,

    /// `SELECT` of every column by primary key
    pub retrieve: String,

    /// `UPDATE` of every column by primary key
    pub update: String,

    /// `DELETE` by primary key, or an `UPDATE` zeroing the deletion flag
    pub delete: String,

    /// Column name to field name
    pub column_to_field: IndexMap<String, String>,

    /// Field name to column name
    pub field_to_column: IndexMap<String, String>,
}

impl ModelStatements {
    /// Resolves `model` and generates its statements.
    ///
    /// Fails when the model has no resolvable primary key; nothing is
    /// generated in that case.
    pub fn new(model: &Model, config: &Config) -> Result<ModelStatements> {
        let table = Table::from_model(model, config)?;
        Ok(ModelStatements::from_table(&table, config))
    }

    /// Generates statements for an already resolved table.
    pub fn from_table(table: &Table, config: &Config) -> ModelStatements {
        let serializer = Serializer::mysql(config);

        let statements = ModelStatements {
            table_name: table.name.clone(),
            primary_key: table.primary_key.clone(),
            deletion_flag: match &table.deletion {
                Deletion::Hard => None,
                Deletion::Soft { column } => Some(column.clone()),
            },
            create: serializer.serialize(&Statement::insert(table)),
            retrieve: serializer.serialize(&Statement::select(table)),
            update: serializer.serialize(&Statement::update(table)),
            delete: serializer.serialize(&Statement::delete(table)),
            column_to_field: table.mapping.column_to_field.clone(),
            field_to_column: table.mapping.field_to_column.clone(),
        };

        tracing::debug!(
            model = %table.model,
            table = %statements.table_name,
            create = %statements.create,
            retrieve = %statements.retrieve,
            update = %statements.update,
            delete = %statements.delete,
            "generated statements"
        );

        statements
    }

    /// Returns `true` if `delete` marks rows instead of removing them.
    pub fn is_soft_delete(&self) -> bool {
        self.deletion_flag.is_some()
    }
}
