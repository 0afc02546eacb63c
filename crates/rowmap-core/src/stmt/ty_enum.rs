use super::{Type, Value};
use crate::{Error, Result};

/// The variant table of an enum field.
///
/// Enum fields are stored as their integer discriminant. Raw values are mapped
/// back through this table explicitly rather than by casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEnum {
    /// Rust name of the enum
    pub name: &'static str,

    /// Variants in declaration order
    pub variants: &'static [EnumVariant],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumVariant {
    /// Rust name of the variant
    pub name: &'static str,

    /// Discriminant stored in the database column
    pub discriminant: i64,
}

impl TypeEnum {
    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<&EnumVariant> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant == discriminant)
    }

    /// Finds a variant by name, preferring an exact match over a
    /// case-insensitive one.
    pub fn variant_by_name(&self, name: &str) -> Option<&EnumVariant> {
        self.variants
            .iter()
            .find(|variant| variant.name == name)
            .or_else(|| {
                self.variants
                    .iter()
                    .find(|variant| variant.name.eq_ignore_ascii_case(name))
            })
    }

    /// Maps a raw value to the discriminant of one of this enum's variants.
    ///
    /// Integers select a variant by discriminant. Strings select a variant by
    /// name, or by discriminant when they hold an integer literal.
    pub(super) fn cast(&self, value: Value) -> Result<Value> {
        let variant = match &value {
            Value::String(name) => {
                let name = name.trim();
                match name.parse::<i64>() {
                    Ok(discriminant) => self.variant_by_discriminant(discriminant),
                    Err(_) => self.variant_by_name(name),
                }
            }
            Value::I8(_)
            | Value::I16(_)
            | Value::I32(_)
            | Value::I64(_)
            | Value::U8(_)
            | Value::U16(_)
            | Value::U32(_)
            | Value::U64(_) => match Type::I64.cast(value.clone()) {
                Ok(Value::I64(discriminant)) => self.variant_by_discriminant(discriminant),
                _ => None,
            },
            _ => return Err(Error::type_conversion(value, self.name)),
        };

        match variant {
            Some(variant) => Ok(Value::I64(variant.discriminant)),
            None => Err(Error::type_conversion_reason(
                value,
                self.name,
                "no variant matches the value",
            )),
        }
    }
}

impl From<TypeEnum> for Type {
    fn from(value: TypeEnum) -> Self {
        Self::Enum(value)
    }
}
