pub mod checkout_service;
pub mod ports;

pub use checkout_service::{CheckoutOutcome, CheckoutRequest, CheckoutService};
pub use ports::{CheckoutErrorReporter, OrderManager};
