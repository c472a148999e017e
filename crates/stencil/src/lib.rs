mod model;
pub use model::{cache_statements, Model, StatementCell};

pub mod registry;
pub use registry::Registry;

pub use stencil_core::{
    schema::{self, NamingRule},
    Config, Error, PlaceholderSeparator, Result,
};
pub use stencil_macros::Model;
pub use stencil_sql::ModelStatements;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{cache_statements, Model, ModelStatements, Result, StatementCell};

    pub mod schema {
        pub use stencil_core::schema::{Field, Model};
    }
}
