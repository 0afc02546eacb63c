mod column;
use column::Column;

mod enumeration;
pub(crate) use enumeration::EnumDef;

mod error;
use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::{Construct, Model};

mod model_attr;
use model_attr::ModelAttr;
