use std::fmt;

use super::customer::FieldError;
use crate::core::card::{masked_display, CardBrand};

/// Card data entered on the payment form. Held only for the duration of
/// one checkout attempt and never logged in full.
#[derive(Clone)]
pub struct CardDetails {
    pub number: String,
    pub security_code: String,
    pub exp_month: String,
    pub exp_year: String,
}

impl CardDetails {
    pub fn new(
        number: impl Into<String>,
        security_code: impl Into<String>,
        exp_month: impl Into<String>,
        exp_year: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            security_code: security_code.into(),
            exp_month: exp_month.into(),
            exp_year: exp_year.into(),
        }
    }

    pub fn brand(&self) -> Option<CardBrand> {
        CardBrand::detect(self.number.trim())
    }

    /// Expiration as sent in `x_exp_date`: month followed by year
    pub fn expiration(&self) -> String {
        format!("{}{}", self.exp_month.trim(), self.exp_year.trim())
    }

    pub fn masked(&self) -> String {
        masked_display(&self.number)
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.exp_month.trim().is_empty() || self.exp_year.trim().is_empty() {
            errors.push(FieldError::new(
                "exp",
                "Please select your credit card expiration date.",
            ));
        }

        let code = self.security_code.trim();
        if code.is_empty() {
            errors.push(FieldError::new(
                "card_code",
                "Please enter your credit card security code",
            ));
        }

        let number = self.number.trim();
        if number.is_empty() {
            errors.push(FieldError::new(
                "card_num",
                "Please enter your credit card number",
            ));
        } else if self.brand().is_none() {
            errors.push(FieldError::new(
                "card_num",
                "Please enter a valid credit card number",
            ));
        }

        // Code length only matters once everything else checks out
        if errors.is_empty() {
            if let Some(brand) = self.brand() {
                if code.chars().count() != brand.security_code_len() {
                    errors.push(FieldError::new(
                        "card_code",
                        "Please enter a valid credit card security code",
                    ));
                }
            }
        }

        errors
    }
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &self.masked())
            .field("security_code", &"***")
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .finish()
    }
}
