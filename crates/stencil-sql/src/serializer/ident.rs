use super::{Formatter, ToSql};

/// A backtick-quoted identifier. Embedded backticks are doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();

        f.dst.push('`');
        if name.contains('`') {
            f.dst.push_str(&name.replace('`', "``"));
        } else {
            f.dst.push_str(name);
        }
        f.dst.push('`');
    }
}
