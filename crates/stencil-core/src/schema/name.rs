use heck::ToSnakeCase;
use serde::Deserialize;

/// Rule used to derive a column name from a field name that has no explicit
/// column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingRule {
    /// An underscore before every ASCII uppercase letter, then lowercase.
    ///
    /// Each capital is treated on its own, so a run of capitals gets one
    /// underscore per letter: `URL` becomes `u_r_l` and `UserID` becomes
    /// `user_i_d`.
    #[default]
    PerCapital,

    /// Word-aware snake_case: `URL` becomes `url` and `UserID` becomes
    /// `user_id`.
    SnakeCase,
}

impl NamingRule {
    /// Converts a field name into a column name.
    pub fn column_name(self, field: &str) -> String {
        match self {
            NamingRule::PerCapital => per_capital(field),
            NamingRule::SnakeCase => field.to_snake_case(),
        }
    }
}

fn per_capital(field: &str) -> String {
    let mut column = String::with_capacity(field.len() + 4);

    for (i, ch) in field.chars().enumerate() {
        // No separator in front of a leading capital
        if i > 0 && ch.is_ascii_uppercase() {
            column.push('_');
        }
        column.push(ch);
    }

    column.to_lowercase()
}
