//! Hunter API type definitions
//!
//! Request parameters for the three supported endpoints and the JSON
//! envelopes the API wraps its answers in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::hunter::DEFAULT_SEARCH_LIMIT;

/// Outbound query string, in insertion order
pub type QueryPairs = Vec<(&'static str, String)>;

/// Parameters for the email finder endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindEmailParams {
    /// Domain name of the company
    #[serde(default)]
    pub domain: String,

    /// First name of the person
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name of the person
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Full name, when first and last name are not given separately
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl FindEmailParams {
    /// Query pairs; optional fields are sent only when non-empty
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![("domain", self.domain.clone())];

        let optional = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("company", &self.company),
            ("full_name", &self.full_name),
        ];
        for (key, value) in optional {
            if let Some(v) = non_empty(value) {
                pairs.push((key, v.to_string()));
            }
        }

        pairs
    }
}

/// Parameters for the email verifier endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEmailParams {
    /// Address to verify
    #[serde(default)]
    pub email: String,
}

impl VerifyEmailParams {
    pub fn query_pairs(&self) -> QueryPairs {
        vec![("email", self.email.clone())]
    }
}

/// Kind of addresses returned by a domain search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailType {
    Personal,
    Generic,
}

impl EmailType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailType::Personal => "personal",
            EmailType::Generic => "generic",
        }
    }
}

/// Parameters for the domain search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSearchParams {
    /// Domain to search
    #[serde(default)]
    pub domain: String,

    /// Maximum number of results (10 when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Restrict to personal or generic addresses
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub email_type: Option<EmailType>,
}

impl DomainSearchParams {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![
            ("domain", self.domain.clone()),
            ("limit", self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).to_string()),
        ];

        if let Some(email_type) = self.email_type {
            pairs.push(("type", email_type.as_str().to_string()));
        }

        pairs
    }
}

/// Successful response envelope: `{"data": {...}, "meta": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
}

impl DataEnvelope {
    /// The `data` payload, or an empty object when the API sent none
    pub fn into_data(self) -> Value {
        match self.data {
            Some(Value::Null) | None => Value::Object(Map::new()),
            Some(data) => data,
        }
    }
}

/// Error response envelope: `{"errors": [{"id": ..., "code": ..., "details": ...}]}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

impl ErrorEnvelope {
    /// `details` of the first entry, if any
    pub fn first_details(&self) -> Option<&str> {
        self.errors.first().and_then(|e| e.details.as_deref())
    }
}

/// A single upstream error entry
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub code: Option<u16>,

    #[serde(default)]
    pub details: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
