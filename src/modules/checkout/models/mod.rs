pub mod card_details;
pub mod customer;
pub mod order;

pub use card_details::CardDetails;
pub use customer::{BillingInfo, CustomerAddress, FieldError, ShippingInfo};
pub use order::{
    generate_order_id, CartLine, CheckoutAdjustments, CheckoutTotals, PaymentInfo, StatusEntry,
    SETTLEMENT_CURRENCY,
};
