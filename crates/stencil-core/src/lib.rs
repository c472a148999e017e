mod config;
pub use config::{Config, PlaceholderSeparator};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Model, Table};

/// A Result type alias that uses Stencil's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
