use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};

use super::ports::{CheckoutErrorReporter, OrderManager};
use crate::core::{AppError, Result};
use crate::modules::checkout::models::{
    BillingInfo, CardDetails, CartLine, CheckoutAdjustments, CheckoutTotals, PaymentInfo,
    ShippingInfo, StatusEntry, SETTLEMENT_CURRENCY,
};
use crate::modules::gateways::models::parameters::flag;
use crate::modules::gateways::{AimClient, AimClientFactory};

pub const GATEWAY_PUBLIC_NAME: &str = "Credit Card";
pub const GATEWAY_PRIVATE_NAME: &str = "Authorize.net Checkout (Beta)";

/// Everything one payment attempt needs, gathered by the checkout flow
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub order_id: String,
    pub cart: Vec<CartLine>,
    pub billing: BillingInfo,
    pub shipping: ShippingInfo,
    pub card: CardDetails,
    pub adjustments: CheckoutAdjustments,
    pub customer_ip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum CheckoutOutcome {
    Paid { order: String, payment: PaymentInfo },
    Failed { message: String },
}

impl CheckoutOutcome {
    pub fn is_paid(&self) -> bool {
        matches!(self, CheckoutOutcome::Paid { .. })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Drives an Authorize.net AIM payment for the store checkout
pub struct CheckoutService {
    factory: AimClientFactory,
    orders: Arc<dyn OrderManager>,
    errors: Arc<dyn CheckoutErrorReporter>,
}

impl CheckoutService {
    pub fn new(
        factory: AimClientFactory,
        orders: Arc<dyn OrderManager>,
        errors: Arc<dyn CheckoutErrorReporter>,
    ) -> Self {
        Self {
            factory,
            orders,
            errors,
        }
    }

    /// Check the payment form, reporting every problem found.
    /// Returns true when the form can move on to confirmation.
    pub fn validate_payment_form(&self, billing: &BillingInfo, card: &CardDetails) -> bool {
        let problems: Vec<_> = billing
            .validate()
            .into_iter()
            .chain(card.validate())
            .collect();

        for problem in &problems {
            self.errors.checkout_error(&problem.message, Some(problem.field));
        }

        if !problems.is_empty() {
            warn!(
                gateway = "authorizenet-aim",
                errors = problems.len(),
                "Payment form rejected"
            );
        }

        problems.is_empty()
    }

    /// Payment method line for the confirmation page
    pub fn payment_method_summary(&self, card: &CardDetails) -> String {
        card.masked()
    }

    /// Charge the card and create the order when the gateway approves.
    ///
    /// Declines and gateway errors are reported to the shopper and returned
    /// as `CheckoutOutcome::Failed`. An empty cart or a failure to record an
    /// approved order is returned as an error.
    pub async fn process_payment(&self, request: &CheckoutRequest) -> Result<CheckoutOutcome> {
        if request.cart.is_empty() {
            return Err(AppError::validation("Cart is empty"));
        }

        let totals = CheckoutTotals::compute(&request.cart, &request.adjustments);

        info!(
            gateway = "authorizenet-aim",
            order_id = %request.order_id,
            card = %request.card.masked(),
            amount = %totals.total,
            items = request.cart.len(),
            "Submitting payment"
        );

        let mut client = self.factory.create_client();
        self.populate(&mut client, request, &totals);
        client.process(self.factory.retries()).await;

        if client.is_approved() {
            let payment = PaymentInfo {
                gateway_public_name: GATEWAY_PUBLIC_NAME.to_string(),
                gateway_private_name: GATEWAY_PRIVATE_NAME.to_string(),
                method: client.method().to_string(),
                status: vec![StatusEntry {
                    at: Utc::now(),
                    status: "paid".to_string(),
                }],
                total: totals.total,
                currency: SETTLEMENT_CURRENCY.to_string(),
                transaction_id: client.transaction_id().to_string(),
            };

            let order = self
                .orders
                .create_order(
                    &request.order_id,
                    &request.cart,
                    &request.shipping,
                    &payment,
                    true,
                )
                .await
                .map_err(|e| {
                    error!(
                        gateway = "authorizenet-aim",
                        order_id = %request.order_id,
                        transaction_id = %payment.transaction_id,
                        error = %e,
                        "Payment captured but order creation failed"
                    );
                    e
                })?;

            info!(
                gateway = "authorizenet-aim",
                order_id = %order,
                transaction_id = %payment.transaction_id,
                "Order created"
            );

            Ok(CheckoutOutcome::Paid { order, payment })
        } else {
            let message = format!(
                "There was a problem finalizing your purchase. {} Please go back and try again.",
                client.response_text()
            );
            self.errors.checkout_error(&message, None);

            Ok(CheckoutOutcome::Failed { message })
        }
    }

    fn populate(&self, client: &mut AimClient, request: &CheckoutRequest, totals: &CheckoutTotals) {
        let settings = self.factory.settings();
        let billing = request.billing.normalized();
        let shipping = request.shipping.normalized();

        client.transaction(&request.card.number);
        for line in &request.cart {
            client.add_line_item(&line.to_line_item());
        }

        client.set_parameter("x_card_code", &request.card.security_code);
        client.set_parameter("x_exp_date", &request.card.expiration());
        client.set_parameter("x_amount", &totals.amount_param());

        client.set_parameter("x_description", &format!("Order ID {}", request.order_id));
        client.set_parameter("x_invoice_num", &request.order_id);
        client.set_parameter("x_test_request", flag(settings.mode.is_sandbox()));
        client.set_parameter("x_duplicate_window", "30");

        client.set_parameter("x_header_email_receipt", &settings.header_email_receipt);
        client.set_parameter("x_footer_email_receipt", &settings.footer_email_receipt);
        client.set_parameter("x_email_customer", flag(settings.email_customer));

        let (first_name, last_name) = billing.split_name();
        client.set_parameter("x_first_name", &first_name);
        client.set_parameter("x_last_name", &last_name);
        client.set_parameter("x_address", &billing.street_address());
        client.set_parameter("x_city", &billing.city);
        client.set_parameter("x_state", &billing.state);
        client.set_parameter("x_country", &billing.country);
        client.set_parameter("x_zip", &billing.zip);
        client.set_parameter("x_phone", &billing.phone);
        client.set_parameter("x_email", &billing.email);

        let (ship_first, ship_last) = shipping.split_name();
        client.set_parameter("x_ship_to_first_name", &ship_first);
        client.set_parameter("x_ship_to_last_name", &ship_last);
        client.set_parameter("x_ship_to_address", &shipping.street_address());
        client.set_parameter("x_ship_to_city", &shipping.city);
        client.set_parameter("x_ship_to_state", &shipping.state);
        client.set_parameter("x_ship_to_country", &shipping.country);
        client.set_parameter("x_ship_to_zip", &shipping.zip);

        client.set_parameter("x_customer_ip", &request.customer_ip);
    }
}
