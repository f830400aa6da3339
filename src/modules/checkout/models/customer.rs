use serde::{Deserialize, Serialize};

/// A checkout form field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Name, contact and postal address collected at checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddress {
    pub email: String,
    pub name: String,
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(default)]
    pub phone: String,
}

pub type BillingInfo = CustomerAddress;
pub type ShippingInfo = CustomerAddress;

impl CustomerAddress {
    /// Trimmed copy with the phone number reduced to digits, `-`, `(`, `)` and spaces
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            address1: self.address1.trim().to_string(),
            address2: self.address2.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip: self.zip.trim().to_string(),
            country: self.country.trim().to_string(),
            phone: self
                .phone
                .trim()
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '(' | ')' | ' '))
                .collect(),
        }
    }

    /// Every failing field, in form order
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if !looks_like_email(&self.email) {
            errors.push(FieldError::new("email", "Please enter a valid Email Address."));
        }
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Please enter your Full Name."));
        }
        if self.address1.trim().is_empty() {
            errors.push(FieldError::new("address1", "Please enter your Street Address."));
        }
        if self.city.trim().is_empty() {
            errors.push(FieldError::new("city", "Please enter your City."));
        }

        let country = self.country.trim();
        if (country == "US" || country == "CA") && self.state.trim().is_empty() {
            errors.push(FieldError::new("state", "Please enter your State/Province/Region."));
        }
        if self.zip.trim().is_empty() {
            errors.push(FieldError::new("zip", "Please enter your Zip/Postal Code."));
        }
        if country.chars().count() != 2 {
            errors.push(FieldError::new("country", "Please enter your Country."));
        }

        errors
    }

    /// First word of the name and the rest of it
    pub fn split_name(&self) -> (String, String) {
        match self.name.trim().split_once(' ') {
            Some((first, last)) => (first.to_string(), last.to_string()),
            None => (self.name.trim().to_string(), String::new()),
        }
    }

    /// Street address with the second line appended on its own line
    pub fn street_address(&self) -> String {
        if self.address2.trim().is_empty() {
            self.address1.clone()
        } else {
            format!("{}\n{}", self.address1, self.address2)
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
