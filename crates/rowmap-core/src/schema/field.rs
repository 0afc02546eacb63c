use crate::stmt::Type;

/// Describes one declared field of a model type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field identifier as declared on the type
    pub name: &'static str,

    /// Column the field binds to: matched against record columns and used to
    /// name command parameters. Defaults to `name`.
    pub column: &'static str,

    /// Declared Rust type, e.g. `core::option::Option<i32>`
    pub declared_ty: &'static str,

    /// Declared type with one level of `Option` stripped, or `None` when the
    /// field holds a reference type (collections, boxes, nested models) that
    /// does not take part in mapping.
    pub storage_ty: Option<Type>,

    /// True if the declared type is `Option<_>`
    pub nullable: bool,

    /// True if the field's value is read when building commands
    pub readable: bool,

    /// True if the field is assigned when materializing rows
    pub writable: bool,
}

impl FieldDescriptor {
    /// True if the field's storage type is a primitive, value or text type.
    pub fn is_mappable(&self) -> bool {
        self.storage_ty.is_some()
    }
}
