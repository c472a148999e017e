pub mod serializer;
pub use serializer::Serializer;

mod statements;
pub use statements::ModelStatements;

pub mod stmt;
pub use stmt::Statement;
