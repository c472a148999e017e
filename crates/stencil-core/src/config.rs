use crate::schema::NamingRule;

use serde::Deserialize;

/// Configuration for statement generation.
///
/// The default configuration reproduces the historical conventions exactly:
/// per-capital column naming, `Id` / `Deleted` as the conventional key and
/// deletion-flag field names. [`Config::snake_case`] is the preset for
/// Rust-style field names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How field names without an explicit column are turned into columns
    pub naming: NamingRule,

    /// Field name that marks the primary key when no field is annotated
    pub key_field: String,

    /// Column used for the primary key found through `key_field`
    pub key_column: String,

    /// Field name that marks the soft-delete flag when no field is annotated
    pub deletion_field: String,

    /// Column used for the deletion flag found through `deletion_field`
    pub deletion_column: String,

    /// Separator between the `?` markers of an INSERT's VALUES list
    pub placeholder_separator: PlaceholderSeparator,

    /// Reject models where two fields resolve to the same column
    pub strict_columns: bool,

    /// If set, prefix all table names with this string
    pub table_name_prefix: Option<String>,
}

/// Separator placed between positional placeholders in a VALUES list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderSeparator {
    /// `(?, ?, ?)`
    #[default]
    Comma,

    /// `(? ? ?)`, kept for parity with statements generated by older tooling.
    Space,
}

impl PlaceholderSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceholderSeparator::Comma => ", ",
            PlaceholderSeparator::Space => " ",
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for models whose field names are already snake_case.
    pub fn snake_case() -> Self {
        Self {
            naming: NamingRule::SnakeCase,
            key_field: "id".to_string(),
            deletion_field: "deleted".to_string(),
            ..Self::default()
        }
    }

    pub fn naming(mut self, naming: NamingRule) -> Self {
        self.naming = naming;
        self
    }

    /// Set the conventional primary key field and the column it maps to
    pub fn key_field(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.key_field = field.into();
        self.key_column = column.into();
        self
    }

    /// Set the conventional deletion flag field and the column it maps to
    pub fn deletion_field(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.deletion_field = field.into();
        self.deletion_column = column.into();
        self
    }

    pub fn placeholder_separator(mut self, separator: PlaceholderSeparator) -> Self {
        self.placeholder_separator = separator;
        self
    }

    pub fn strict_columns(mut self, strict: bool) -> Self {
        self.strict_columns = strict;
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_name_prefix = Some(prefix.into());
        self
    }

    /// Returns the table name with the configured prefix applied.
    pub fn table_name(&self, name: &str) -> String {
        match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            naming: NamingRule::PerCapital,
            key_field: "Id".to_string(),
            key_column: "id".to_string(),
            deletion_field: "Deleted".to_string(),
            deletion_column: "deleted".to_string(),
            placeholder_separator: PlaceholderSeparator::Comma,
            strict_columns: false,
            table_name_prefix: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_partial_config_keeps_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "naming": "snake_case", "placeholder_separator": "space" }"#,
        )
        .unwrap();

        assert_eq!(config.naming, NamingRule::SnakeCase);
        assert_eq!(config.placeholder_separator, PlaceholderSeparator::Space);
        assert_eq!(config.key_field, "Id");
        assert_eq!(config.deletion_column, "deleted");
        assert!(!config.strict_columns);
    }

    #[test]
    fn table_name_prefix() {
        let config = Config::new().table_name_prefix("app_");
        assert_eq!(config.table_name("users"), "app_users");
        assert_eq!(Config::new().table_name("users"), "users");
    }
}
