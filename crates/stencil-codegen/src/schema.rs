mod column;
pub(crate) use column::Column;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::Model;

mod model_attr;
pub(crate) use model_attr::ModelAttr;

mod name;
pub(crate) use name::table_name;
