use serde::{Deserialize, Serialize};
use std::fmt;

/// Positions of the fields the checkout reads from a delimited response
pub mod field {
    pub const RESPONSE_CODE: usize = 0;
    pub const RESPONSE_TEXT: usize = 3;
    pub const AUTH_CODE: usize = 4;
    pub const AVS_RESPONSE: usize = 5;
    pub const TRANSACTION_ID: usize = 6;
    pub const METHOD: usize = 51;
}

/// Classification of a gateway response code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Approved,
    Declined,
    Error,
}

impl Outcome {
    /// Map a response code to an outcome. The code must match exactly;
    /// empty, padded or unknown codes have no outcome.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Outcome::Approved),
            "2" => Some(Outcome::Declined),
            "3" => Some(Outcome::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Approved => write!(f, "Approved"),
            Outcome::Declined => write!(f, "Declined"),
            Outcome::Error => write!(f, "Error"),
        }
    }
}

/// A delimited gateway response decoded into named fields.
///
/// Every field except `response_text` has the encapsulation character
/// removed. `response_text` is kept exactly as received. Positions missing
/// from a short response decode to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AimResponse {
    pub response_code: String,
    pub response_text: String,
    pub auth_code: String,
    pub avs_response: String,
    pub transaction_id: String,
    pub method: String,
    fields: Vec<String>,
}

impl AimResponse {
    pub fn parse(body: &str, delim_char: &str, encap_char: &str) -> Self {
        let fields: Vec<String> = if delim_char.is_empty() {
            vec![body.to_string()]
        } else {
            body.split(delim_char).map(str::to_string).collect()
        };

        let raw = |index: usize| fields.get(index).cloned().unwrap_or_default();
        let stripped = |index: usize| strip(&raw(index), encap_char);

        Self {
            response_code: stripped(field::RESPONSE_CODE),
            response_text: raw(field::RESPONSE_TEXT),
            auth_code: stripped(field::AUTH_CODE),
            avs_response: stripped(field::AVS_RESPONSE),
            transaction_id: stripped(field::TRANSACTION_ID),
            method: stripped(field::METHOD),
            fields,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_code(&self.response_code)
    }

    /// Raw field at `index`, if the gateway sent that many
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

fn strip(value: &str, encap_char: &str) -> String {
    if encap_char.is_empty() {
        value.to_string()
    } else {
        value.replace(encap_char, "")
    }
}
