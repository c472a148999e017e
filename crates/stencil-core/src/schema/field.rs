use super::NamingRule;

/// Describes one field of a record type.
///
/// Descriptors are built by hand with the builder methods below or generated
/// by `#[derive(Model)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as declared on the record type
    pub name: String,

    /// Explicit database column name, used verbatim when set
    pub column: Option<String>,

    /// True if the field does not participate in any statement
    pub ignore: bool,

    /// True if the field is annotated as the primary key
    pub primary_key: bool,

    /// True if the field is annotated as the soft-delete flag
    pub deletion_flag: bool,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            column: None,
            ignore: false,
            primary_key: false,
            deletion_flag: false,
        }
    }

    pub fn column(mut self, column: impl Into<String>) -> Field {
        self.column = Some(column.into());
        self
    }

    pub fn ignore(mut self) -> Field {
        self.ignore = true;
        self
    }

    pub fn primary_key(mut self) -> Field {
        self.primary_key = true;
        self
    }

    pub fn deletion_flag(mut self) -> Field {
        self.deletion_flag = true;
        self
    }

    /// Returns the column this field is stored in.
    pub fn column_name(&self, naming: NamingRule) -> String {
        match &self.column {
            Some(column) => column.clone(),
            None => naming.column_name(&self.name),
        }
    }
}
