use async_trait::async_trait;

use crate::core::Result;
use crate::modules::checkout::models::{CartLine, PaymentInfo, ShippingInfo};

/// Order management owned by the store
#[async_trait]
pub trait OrderManager: Send + Sync {
    /// Record a paid order and return its identifier
    async fn create_order(
        &self,
        order_id: &str,
        cart: &[CartLine],
        shipping: &ShippingInfo,
        payment: &PaymentInfo,
        paid: bool,
    ) -> Result<String>;
}

/// Surfaces checkout problems to the shopper
pub trait CheckoutErrorReporter: Send + Sync {
    /// `context` names the form field at fault, when there is one
    fn checkout_error(&self, message: &str, context: Option<&str>);
}
