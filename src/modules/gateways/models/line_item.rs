// A cart entry as the gateway itemizes it on the receipt. The six
// sub-fields travel in one `x_line_item` value joined by `<|>`; callers
// must keep that separator out of the field values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Separator between the sub-fields of a serialized line item
pub const LINE_ITEM_SEPARATOR: &str = "<|>";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AimLineItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub taxable: bool,
}

impl AimLineItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        taxable: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            quantity,
            unit_price,
            taxable,
        }
    }

    /// Serialized value of the `x_line_item` field
    pub fn to_wire(&self) -> String {
        [
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.quantity.to_string(),
            self.unit_price.to_string(),
            if self.taxable { "1" } else { "0" }.to_string(),
        ]
        .join(LINE_ITEM_SEPARATOR)
    }
}
