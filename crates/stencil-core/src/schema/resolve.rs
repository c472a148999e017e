use super::{ColumnMapping, Field, Model};
use crate::Config;

/// Resolves the primary key column of `model`.
///
/// A field annotated as the primary key wins. Otherwise a field named
/// `config.key_field` selects `config.key_column`. Returns `None` when
/// neither exists.
pub fn primary_key(model: &Model, mapping: &ColumnMapping, config: &Config) -> Option<String> {
    resolve(
        model,
        mapping,
        |field| field.primary_key,
        &config.key_field,
        &config.key_column,
        "primary key",
    )
}

/// Resolves the soft-delete flag column of `model`, if it has one.
///
/// Same lookup as [`primary_key`], over the deletion flag annotation and
/// `config.deletion_field`.
pub fn deletion_flag(model: &Model, mapping: &ColumnMapping, config: &Config) -> Option<String> {
    resolve(
        model,
        mapping,
        |field| field.deletion_flag,
        &config.deletion_field,
        &config.deletion_column,
        "deletion flag",
    )
}

fn resolve(
    model: &Model,
    mapping: &ColumnMapping,
    annotated: impl Fn(&Field) -> bool,
    conventional_field: &str,
    conventional_column: &str,
    what: &str,
) -> Option<String> {
    if let Some(field) = model.retained_fields().find(|field| annotated(*field)) {
        let column = mapping.column(&field.name)?;
        tracing::trace!(model = %model.name, field = %field.name, column, "{what} from annotation");
        return Some(column.to_string());
    }

    if model
        .retained_fields()
        .any(|field| field.name == conventional_field)
    {
        tracing::trace!(
            model = %model.name,
            field = conventional_field,
            column = conventional_column,
            "{what} from field name"
        );
        return Some(conventional_column.to_string());
    }

    None
}
