use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::transport::AimTransport;
use crate::modules::gateways::models::parameters::flag;
use crate::modules::gateways::models::{AimLineItem, AimResponse, Outcome, ParameterSet};

/// How the merchant account formats delimited responses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFormat {
    pub delim_data: bool,
    pub delim_char: String,
    pub encap_char: String,
}

impl Default for ResponseFormat {
    fn default() -> Self {
        Self {
            delim_data: true,
            delim_char: ",".to_string(),
            encap_char: String::new(),
        }
    }
}

/// API login ID and transaction key
#[derive(Clone)]
pub struct MerchantCredentials {
    pub login: String,
    pub transaction_key: String,
}

impl MerchantCredentials {
    pub fn new(login: impl Into<String>, transaction_key: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            transaction_key: transaction_key.into(),
        }
    }
}

impl std::fmt::Debug for MerchantCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerchantCredentials")
            .field("login", &self.login)
            .field("transaction_key", &"<redacted>")
            .finish()
    }
}

/// Authorize.net AIM transaction client.
///
/// One client covers one checkout attempt: parameters and line items
/// accumulate through the setters, `process` performs the exchange, and
/// the accessors report the outcome of the last attempt. `process` never
/// fails; a transport failure surfaces as `is_error()`.
pub struct AimClient {
    endpoint: String,
    format: ResponseFormat,
    params: ParameterSet,
    line_items: Vec<String>,
    transport: Arc<dyn AimTransport>,
    response: Option<AimResponse>,
    approved: bool,
    declined: bool,
    error: bool,
    attempts: u32,
}

impl AimClient {
    pub fn new(
        endpoint: impl Into<String>,
        format: ResponseFormat,
        credentials: MerchantCredentials,
        test_mode: bool,
        transport: Arc<dyn AimTransport>,
    ) -> Self {
        let mut params = ParameterSet::new();
        params.set("x_delim_data", flag(format.delim_data));
        params.set("x_delim_char", &format.delim_char);
        params.set("x_encap_char", &format.encap_char);
        params.set("x_relay_response", flag(false));
        params.set("x_url", flag(false));
        params.set("x_version", "3.1");
        params.set("x_method", "CC");
        params.set("x_type", "AUTH_CAPTURE");
        params.set("x_login", &credentials.login);
        params.set("x_tran_key", &credentials.transaction_key);
        params.set("x_test_request", flag(test_mode));

        Self {
            endpoint: endpoint.into(),
            format,
            params,
            line_items: Vec::new(),
            transport,
            response: None,
            approved: false,
            declined: false,
            error: true,
            attempts: 0,
        }
    }

    pub fn set_parameter(&mut self, name: &str, value: &str) {
        self.params.set(name, value);
    }

    pub fn set_transaction_type(&mut self, kind: &str) {
        self.params.set("x_type", &kind.trim().to_uppercase());
    }

    /// Set the card number charged by this transaction
    pub fn transaction(&mut self, card_number: &str) {
        self.params.set("x_card_num", card_number);
    }

    pub fn add_line_item(&mut self, item: &AimLineItem) {
        self.line_items.push(item.to_wire());
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Request body: encoded parameters in set order, then one
    /// `x_line_item` pair per line item, joined by `&`
    pub fn request_body(&self) -> String {
        self.params
            .encoded_pairs()
            .chain(self.line_items.iter().map(|item| format!("x_line_item={}", item)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Submit the transaction, sending the identical request up to `retries` times.
    ///
    /// Approved and declined responses end the loop. Error and unmapped
    /// response codes move on to the next attempt. A transport failure ends
    /// the loop immediately with the error flag set.
    pub async fn process(&mut self, retries: u32) {
        let body = self.request_body();
        self.attempts = 0;

        for attempt in 1..=retries {
            self.attempts = attempt;

            let raw = match self.transport.post(&self.endpoint, &body).await {
                Ok(raw) => raw,
                Err(e) => {
                    error!(
                        gateway = "authorizenet-aim",
                        attempt,
                        error = %e,
                        "Transaction request failed"
                    );
                    self.error = true;
                    return;
                }
            };

            let response = AimResponse::parse(&raw, &self.format.delim_char, &self.format.encap_char);
            let outcome = response.outcome();
            debug!(
                gateway = "authorizenet-aim",
                attempt,
                response_code = %response.response_code,
                fields = response.field_count(),
                "Parsed gateway response"
            );
            self.response = Some(response);

            match outcome {
                Some(Outcome::Approved) => {
                    self.approved = true;
                    self.declined = false;
                    self.error = false;
                    info!(
                        gateway = "authorizenet-aim",
                        attempt,
                        transaction_id = %self.transaction_id(),
                        "Transaction approved"
                    );
                    break;
                }
                Some(Outcome::Declined) => {
                    self.approved = false;
                    self.declined = true;
                    self.error = false;
                    info!(
                        gateway = "authorizenet-aim",
                        attempt,
                        reason = %self.response_text(),
                        "Transaction declined"
                    );
                    break;
                }
                _ => {
                    warn!(
                        gateway = "authorizenet-aim",
                        attempt,
                        retries,
                        outcome = ?outcome,
                        reason = %self.response_text(),
                        "Transaction not settled"
                    );
                }
            }
        }
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    pub fn is_declined(&self) -> bool {
        self.declined
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Number of requests sent by the last `process` call
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn response(&self) -> Option<&AimResponse> {
        self.response.as_ref()
    }

    /// Reason text exactly as the gateway sent it, encapsulation included
    pub fn response_text(&self) -> &str {
        self.response.as_ref().map_or("", |r| r.response_text.as_str())
    }

    pub fn auth_code(&self) -> &str {
        self.response.as_ref().map_or("", |r| r.auth_code.as_str())
    }

    pub fn avs_response(&self) -> &str {
        self.response.as_ref().map_or("", |r| r.avs_response.as_str())
    }

    pub fn transaction_id(&self) -> &str {
        self.response.as_ref().map_or("", |r| r.transaction_id.as_str())
    }

    /// Response code with encapsulation removed
    pub fn gateway_response(&self) -> &str {
        self.response.as_ref().map_or("", |r| r.response_code.as_str())
    }

    /// Payment method label, empty when the response is too short to carry one
    pub fn method(&self) -> &str {
        self.response.as_ref().map_or("", |r| r.method.as_str())
    }
}
