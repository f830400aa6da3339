use url::form_urlencoded;

/// Ordered name/value pairs sent to the gateway.
///
/// Names and values are trimmed on insert. Overwriting a name keeps its
/// original position so the serialized body stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: &str) {
        let name = name.trim();
        let value = value.trim().to_string();

        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name.trim())
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `name=value` pairs with form-encoded values; names are sent verbatim
    pub fn encoded_pairs(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|(k, v)| format!("{}={}", k, encode_value(v)))
    }
}

/// Form-encode a value the way the gateway expects (`+` for spaces)
pub fn encode_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Wire form of a protocol boolean
pub fn flag(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}
