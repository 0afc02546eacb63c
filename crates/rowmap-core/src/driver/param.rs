use super::Parameter;
use crate::stmt::Value;

/// A plain name/value parameter drivers can use as their
/// [`Command::Parameter`](super::Command::Parameter) type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Param {
    name: String,
    value: Value,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Param {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Parameter for Param {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn value(&self) -> &Value {
        &self.value
    }

    fn set_value(&mut self, value: Value) {
        self.value = value;
    }
}
