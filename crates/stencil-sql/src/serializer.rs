#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod placeholder;
use placeholder::{Assignment, Placeholder};

// Fragment serializers
mod statement;

use crate::stmt::Statement;

use stencil_core::{Config, PlaceholderSeparator};

/// Serialize a statement to a SQL string
///
/// Identifiers are quoted with backticks and parameters are positional `?`
/// markers.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// Separator between the markers of an INSERT's VALUES list
    separator: PlaceholderSeparator,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Number of placeholders written so far
    placeholders: usize,
}

impl Serializer {
    pub fn mysql(config: &Config) -> Serializer {
        Serializer {
            separator: config.placeholder_separator,
        }
    }

    pub fn serialize(&self, stmt: &Statement<'_>) -> String {
        self.serialize_counted(stmt).0
    }

    /// Serializes `stmt`, also returning the number of `?` markers written.
    pub fn serialize_counted(&self, stmt: &Statement<'_>) -> (String, usize) {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            placeholders: 0,
        };

        stmt.to_sql(&mut fmt);

        let placeholders = fmt.placeholders;
        (ret, placeholders)
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Serializer::mysql(&Config::default())
    }
}
