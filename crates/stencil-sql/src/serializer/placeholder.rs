use super::{Formatter, ToSql};

/// A positional `?` parameter marker.
pub(super) struct Placeholder;

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.placeholders += 1;
        f.dst.push('?');
    }
}

/// `column = ?`, with the column written as-is.
pub(super) struct Assignment<'a>(pub(super) &'a str);

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0, " = ", Placeholder);
    }
}
