// Sandbox smoke check: charges a single test item through the configured
// Authorize.net AIM account and prints the outcome.

use std::env;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use marketpress_aim::checkout::models::generate_order_id;
use marketpress_aim::checkout::{
    BillingInfo, CardDetails, CartLine, CheckoutAdjustments, CheckoutErrorReporter,
    CheckoutRequest, CheckoutService, OrderManager, PaymentInfo, ShippingInfo,
};
use marketpress_aim::config::{Config, LogFormat};
use marketpress_aim::gateways::AimClientFactory;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Order manager that only records the approval in the log
struct LoggedOrders;

#[async_trait]
impl OrderManager for LoggedOrders {
    async fn create_order(
        &self,
        order_id: &str,
        cart: &[CartLine],
        _shipping: &ShippingInfo,
        payment: &PaymentInfo,
        paid: bool,
    ) -> marketpress_aim::Result<String> {
        tracing::info!(
            order_id,
            items = cart.len(),
            transaction_id = %payment.transaction_id,
            paid,
            "Order recorded"
        );
        Ok(order_id.to_string())
    }
}

struct StderrErrors;

impl CheckoutErrorReporter for StderrErrors {
    fn checkout_error(&self, message: &str, context: Option<&str>) {
        match context {
            Some(field) => eprintln!("[{}] {}", field, message),
            None => eprintln!("{}", message),
        }
    }
}

fn init_tracing(format: LogFormat, level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("marketpress_aim={},reqwest=info", level).into());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

fn smoke_address() -> BillingInfo {
    BillingInfo {
        email: env::var("AIM_SMOKE_EMAIL").unwrap_or_else(|_| "buyer@example.com".to_string()),
        name: "Sandbox Buyer".to_string(),
        address1: "1 Test Street".to_string(),
        address2: String::new(),
        city: "Bellevue".to_string(),
        state: "WA".to_string(),
        zip: "98004".to_string(),
        country: "US".to_string(),
        phone: "425-555-0100".to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.app.log_format, &config.app.log_level);
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting Authorize.net AIM smoke check");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        "Gateway: {} ({})",
        config.gateway.endpoint(),
        config.gateway.mode
    );

    let factory = AimClientFactory::with_reqwest(config.gateway.clone())
        .context("Failed to build HTTP transport")?;
    let service = CheckoutService::new(factory, Arc::new(LoggedOrders), Arc::new(StderrErrors));

    let billing = smoke_address();
    let card = CardDetails::new(
        env::var("AIM_SMOKE_CARD").unwrap_or_else(|_| "4007000000027".to_string()),
        env::var("AIM_SMOKE_CARD_CODE").unwrap_or_else(|_| "123".to_string()),
        "12",
        "2030",
    );

    if !service.validate_payment_form(&billing, &card) {
        anyhow::bail!("Smoke check payment form is invalid");
    }

    let request = CheckoutRequest {
        order_id: generate_order_id(),
        cart: vec![CartLine {
            product_id: 1,
            variation: 0,
            sku: Some("SMOKE-1".to_string()),
            name: "Smoke test item".to_string(),
            permalink: "https://example.com/smoke-test".to_string(),
            price: Decimal::ONE,
            quantity: 1,
        }],
        shipping: billing.clone(),
        billing,
        card,
        adjustments: CheckoutAdjustments::default(),
        customer_ip: "127.0.0.1".to_string(),
    };

    println!("Paying with {}", service.payment_method_summary(&request.card));

    let outcome = service.process_payment(&request).await?;
    println!("{}", outcome.to_json()?);

    if !outcome.is_paid() {
        std::process::exit(2);
    }

    Ok(())
}
