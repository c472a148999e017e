use super::Field;

/// Field metadata of a record type and the table it is stored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Name of the record type, used in error messages
    pub name: String,

    /// Table the record type maps to, before any configured prefix
    pub table_name: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Model {
        Model {
            name: name.into(),
            table_name: table_name.into(),
            fields: vec![],
        }
    }

    pub fn field(mut self, field: Field) -> Model {
        self.fields.push(field);
        self
    }

    /// Fields that take part in statements, in declaration order.
    pub fn retained_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.ignore)
    }

    /// Names of the retained fields, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.retained_fields()
            .map(|field| field.name.as_str())
            .collect()
    }
}
