mod field;
pub use field::Field;

pub mod mapping;
pub use mapping::ColumnMapping;

mod model;
pub use model::Model;

mod name;
pub use name::NamingRule;

pub mod resolve;

mod table;
pub use table::{Deletion, Table};
