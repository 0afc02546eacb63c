use rust_decimal::Decimal;

use crate::stmt::Value;

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&Decimal> for Value {
    fn from(value: &Decimal) -> Self {
        Self::Decimal(*value)
    }
}
