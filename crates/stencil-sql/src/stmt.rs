use stencil_core::schema::{Deletion, Table};

/// A statement over a single table, ready to be serialized.
#[derive(Debug, Clone, Copy)]
pub enum Statement<'a> {
    Insert(Insert<'a>),
    Select(Select<'a>),
    Update(Update<'a>),
    Delete(Delete<'a>),
}

/// `INSERT INTO` every column of the table.
#[derive(Debug, Clone, Copy)]
pub struct Insert<'a> {
    pub table: &'a str,
    pub columns: &'a [String],
}

/// `SELECT` every column of one row, addressed by its key.
#[derive(Debug, Clone, Copy)]
pub struct Select<'a> {
    pub table: &'a str,
    pub columns: &'a [String],
    pub key: &'a str,
}

/// `UPDATE` one row, addressed by its key.
#[derive(Debug, Clone, Copy)]
pub struct Update<'a> {
    pub table: &'a str,
    pub set: Set<'a>,
    pub key: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub enum Set<'a> {
    /// `column = ?` for every column. Column names are not quoted, so a
    /// column named after a reserved word produces invalid SQL.
    Columns(&'a [String]),

    /// `` `flag` = 0 ``
    ClearFlag(&'a str),
}

/// `DELETE` one row, addressed by its key.
#[derive(Debug, Clone, Copy)]
pub struct Delete<'a> {
    pub table: &'a str,
    pub key: &'a str,
}

impl<'a> Statement<'a> {
    pub fn insert(table: &'a Table) -> Statement<'a> {
        Statement::Insert(Insert {
            table: &table.name,
            columns: &table.columns,
        })
    }

    pub fn select(table: &'a Table) -> Statement<'a> {
        Statement::Select(Select {
            table: &table.name,
            columns: &table.columns,
            key: &table.primary_key,
        })
    }

    pub fn update(table: &'a Table) -> Statement<'a> {
        Statement::Update(Update {
            table: &table.name,
            set: Set::Columns(&table.columns),
            key: &table.primary_key,
        })
    }

    /// Removes a row, or clears its deletion flag when the table soft-deletes.
    pub fn delete(table: &'a Table) -> Statement<'a> {
        match &table.deletion {
            Deletion::Hard => Statement::Delete(Delete {
                table: &table.name,
                key: &table.primary_key,
            }),
            Deletion::Soft { column } => Statement::Update(Update {
                table: &table.name,
                set: Set::ClearFlag(column),
                key: &table.primary_key,
            }),
        }
    }
}
