pub mod checkout;
pub mod gateways;
