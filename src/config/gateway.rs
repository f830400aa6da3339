use crate::core::{AppError, Result};
use crate::modules::gateways::models::line_item::LINE_ITEM_SEPARATOR;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const SANDBOX_ENDPOINT: &str = "https://test.authorize.net/gateway/transact.dll";
pub const LIVE_ENDPOINT: &str = "https://secure.authorize.net/gateway/transact.dll";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    Sandbox,
    Live,
}

impl GatewayMode {
    pub fn is_sandbox(&self) -> bool {
        matches!(self, GatewayMode::Sandbox)
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            GatewayMode::Sandbox => SANDBOX_ENDPOINT,
            GatewayMode::Live => LIVE_ENDPOINT,
        }
    }
}

impl fmt::Display for GatewayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayMode::Sandbox => write!(f, "sandbox"),
            GatewayMode::Live => write!(f, "live"),
        }
    }
}

impl FromStr for GatewayMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" => Ok(GatewayMode::Sandbox),
            "live" => Ok(GatewayMode::Live),
            other => Err(AppError::configuration(format!("Invalid AIM_MODE: {}", other))),
        }
    }
}

/// Merchant settings for the Authorize.net AIM gateway
#[derive(Debug, Clone, Deserialize)]
pub struct AimSettings {
    pub api_user: String,
    pub api_key: String,
    pub mode: GatewayMode,
    pub delim_data: bool,
    pub delim_char: String,
    pub encap_char: String,
    pub email_customer: bool,
    pub header_email_receipt: String,
    pub footer_email_receipt: String,
    pub endpoint_override: Option<String>,
    pub retries: u32,
}

impl AimSettings {
    /// Settings with the gateway's stock formatting: comma delimited, no encapsulation
    pub fn new(api_user: impl Into<String>, api_key: impl Into<String>, mode: GatewayMode) -> Self {
        Self {
            api_user: api_user.into(),
            api_key: api_key.into(),
            mode,
            delim_data: true,
            delim_char: ",".to_string(),
            encap_char: String::new(),
            email_customer: true,
            header_email_receipt: "Thanks for your payment!".to_string(),
            footer_email_receipt: String::new(),
            endpoint_override: None,
            retries: 1,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| AppError::configuration(format!("{} not set", key)))
        };

        Ok(AimSettings {
            api_user: required("AIM_API_USER")?,
            api_key: required("AIM_API_KEY")?,
            mode: lookup("AIM_MODE")
                .unwrap_or_else(|| "sandbox".to_string())
                .parse()?,
            delim_data: parse_yes_no("AIM_DELIM_DATA", lookup("AIM_DELIM_DATA"), true)?,
            delim_char: lookup("AIM_DELIM_CHAR")
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| ",".to_string()),
            encap_char: lookup("AIM_ENCAP_CHAR").unwrap_or_default(),
            email_customer: parse_yes_no(
                "AIM_EMAIL_CUSTOMER",
                lookup("AIM_EMAIL_CUSTOMER"),
                true,
            )?,
            header_email_receipt: lookup("AIM_HEADER_EMAIL_RECEIPT")
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| "Thanks for your payment!".to_string()),
            footer_email_receipt: lookup("AIM_FOOTER_EMAIL_RECEIPT").unwrap_or_default(),
            endpoint_override: lookup("AIM_ENDPOINT").filter(|e| !e.trim().is_empty()),
            retries: lookup("AIM_RETRIES")
                .unwrap_or_else(|| "1".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid AIM_RETRIES"))?,
        })
    }

    /// Endpoint the transaction is posted to
    pub fn endpoint(&self) -> &str {
        self.endpoint_override
            .as_deref()
            .unwrap_or_else(|| self.mode.endpoint())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_user.trim().is_empty() {
            return Err(AppError::configuration("API login ID must not be empty"));
        }

        if self.api_key.trim().is_empty() {
            return Err(AppError::configuration("Transaction key must not be empty"));
        }

        if self.delim_char.chars().count() != 1 {
            return Err(AppError::configuration(format!(
                "Delimiter must be exactly one character, got '{}'",
                self.delim_char
            )));
        }

        if self.encap_char.chars().count() > 1 {
            return Err(AppError::configuration(format!(
                "Encapsulation character must be at most one character, got '{}'",
                self.encap_char
            )));
        }

        if self.delim_char == self.encap_char {
            return Err(AppError::configuration(
                "Delimiter and encapsulation character must differ",
            ));
        }

        for c in [&self.delim_char, &self.encap_char] {
            if !c.is_empty() && LINE_ITEM_SEPARATOR.contains(c.as_str()) {
                return Err(AppError::configuration(format!(
                    "'{}' collides with the line item separator {}",
                    c, LINE_ITEM_SEPARATOR
                )));
            }
        }

        if self.retries == 0 {
            return Err(AppError::configuration("AIM_RETRIES must be greater than 0"));
        }

        Ok(())
    }
}

fn parse_yes_no(key: &str, value: Option<String>, default: bool) -> Result<bool> {
    match value.as_deref().map(|v| v.trim().to_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "yes" | "true" | "1" => Ok(true),
            "no" | "false" | "0" => Ok(false),
            _ => Err(AppError::configuration(format!("Invalid {}", key))),
        },
    }
}
