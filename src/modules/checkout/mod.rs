pub mod models;
pub mod services;

pub use models::{
    BillingInfo, CardDetails, CartLine, CheckoutAdjustments, CheckoutTotals, CustomerAddress,
    FieldError, PaymentInfo, ShippingInfo,
};
pub use services::{
    CheckoutErrorReporter, CheckoutOutcome, CheckoutRequest, CheckoutService, OrderManager,
};
