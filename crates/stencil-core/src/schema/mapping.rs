use super::{Model, NamingRule};

use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

/// Bidirectional association between a model's field names and columns.
///
/// Both maps iterate in field declaration order. Only retained fields are
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    /// Field name to column name
    pub field_to_column: IndexMap<String, String>,

    /// Column name to field name
    pub column_to_field: IndexMap<String, String>,
}

impl ColumnMapping {
    /// Builds the mapping for every retained field of `model`.
    ///
    /// When two fields resolve to the same column, the later field wins in
    /// `column_to_field`.
    pub fn from_model(model: &Model, naming: NamingRule) -> ColumnMapping {
        ColumnMapping::from_pairs(
            model
                .retained_fields()
                .map(|field| (field.name.clone(), field.column_name(naming))),
        )
    }

    /// Builds the mapping from already resolved `(field, column)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> ColumnMapping {
        let field_to_column: IndexMap<_, _> = pairs.into_iter().collect();
        let column_to_field = reverse(&field_to_column);

        ColumnMapping {
            field_to_column,
            column_to_field,
        }
    }

    pub fn column(&self, field: &str) -> Option<&str> {
        self.field_to_column.get(field).map(String::as_str)
    }

    pub fn field(&self, column: &str) -> Option<&str> {
        self.column_to_field.get(column).map(String::as_str)
    }

    /// Columns in field declaration order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.field_to_column.values().map(String::as_str)
    }
}

/// Returns the value-to-key inverse of `map`.
///
/// The result is exact when every value is unique. With duplicate values the
/// last key wins, keeping the position of the first occurrence.
pub fn reverse<K, V>(map: &IndexMap<K, V>) -> IndexMap<V, K>
where
    K: Clone,
    V: Clone + Hash + Eq,
{
    let mut reversed = IndexMap::with_capacity(map.len());
    for (key, value) in map {
        reversed.insert(value.clone(), key.clone());
    }
    reversed
}
