use super::FieldDescriptor;

/// The field list of a model type.
///
/// Fields appear in declaration order; a field's position is the index the
/// model's accessors take.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Rust name of the type
    pub name: &'static str,

    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        TypeDescriptor { name, fields }
    }

    /// Looks up a field by its declared name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Mappable fields with their index.
    pub fn mappable(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_mappable())
    }

    /// Mappable fields that are assigned when materializing a row.
    pub fn writable(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> {
        self.mappable().filter(|(_, field)| field.writable)
    }

    /// Mappable fields that are read when building a command.
    pub fn readable(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> {
        self.mappable().filter(|(_, field)| field.readable)
    }
}
