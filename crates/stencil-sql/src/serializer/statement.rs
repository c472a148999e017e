use super::{Assignment, Comma, Delimited, Formatter, Ident, Placeholder, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Insert<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table_name = Ident(self.table);
        let columns = Comma(self.columns.iter().map(Ident));
        let separator = f.serializer.separator.as_str();
        let values = Delimited(self.columns.iter().map(|_| Placeholder), separator);

        fmt!(f, "INSERT INTO ", table_name, " (", columns, ") VALUES (", values, ")");
    }
}

impl ToSql for &stmt::Select<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(self.columns.iter().map(Ident));

        fmt!(
            f,
            "SELECT ",
            columns,
            " FROM ",
            Ident(self.table),
            " WHERE ",
            Ident(self.key),
            " = ",
            Placeholder
        );
    }
}

impl ToSql for &stmt::Update<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "UPDATE ", Ident(self.table), " SET ");

        match self.set {
            stmt::Set::Columns(columns) => {
                fmt!(f, Comma(columns.iter().map(|column| Assignment(column))));
            }
            stmt::Set::ClearFlag(flag) => {
                fmt!(f, Ident(flag), " = 0");
            }
        }

        fmt!(f, " WHERE ", Ident(self.key), " = ", Placeholder);
    }
}

impl ToSql for &stmt::Delete<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            "DELETE FROM ",
            Ident(self.table),
            " WHERE ",
            Ident(self.key),
            " = ",
            Placeholder
        );
    }
}
