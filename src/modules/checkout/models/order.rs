use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::modules::gateways::AimLineItem;

/// Authorize.net settles AIM transactions in US dollars only
pub const SETTLEMENT_CURRENCY: &str = "USD";

/// One product variation in the shopper's cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: u64,
    pub variation: u32,
    pub sku: Option<String>,
    pub name: String,
    pub permalink: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    /// SKU, or product id followed by variation when the product has none
    pub fn item_id(&self) -> String {
        match self.sku.as_deref().map(str::trim) {
            Some(sku) if !sku.is_empty() => sku.to_string(),
            _ => format!("{}{}", self.product_id, self.variation),
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    pub fn to_line_item(&self) -> AimLineItem {
        AimLineItem::new(
            self.item_id(),
            self.name.clone(),
            self.permalink.clone(),
            self.quantity,
            self.price,
            true,
        )
    }
}

/// Store-side adjustments applied on top of the cart subtotal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutAdjustments {
    /// Total after the coupon discount; replaces the running total
    pub coupon_total: Option<Decimal>,
    pub shipping: Option<Decimal>,
    pub tax: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutTotals {
    pub subtotal: Decimal,
    pub total: Decimal,
}

impl CheckoutTotals {
    pub fn compute(cart: &[CartLine], adjustments: &CheckoutAdjustments) -> Self {
        let subtotal: Decimal = cart.iter().map(CartLine::line_total).sum();

        let mut total = adjustments.coupon_total.unwrap_or(subtotal);
        if let Some(shipping) = adjustments.shipping {
            total += shipping;
        }
        if let Some(tax) = adjustments.tax {
            total += tax;
        }

        // charged and recorded amounts must agree to the cent
        let total = total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Self { subtotal, total }
    }

    /// Amount as sent in `x_amount`
    pub fn amount_param(&self) -> String {
        format!("{:.2}", self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub at: DateTime<Utc>,
    pub status: String,
}

/// Payment details handed to order management after an approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub gateway_public_name: String,
    pub gateway_private_name: String,
    pub method: String,
    pub status: Vec<StatusEntry>,
    pub total: Decimal,
    pub currency: String,
    pub transaction_id: String,
}

/// Short uppercase order reference
pub fn generate_order_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..10].to_uppercase()
}
