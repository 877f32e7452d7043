//! MCP Tool definitions and handlers
//!
//! Defines the three Hunter tools, turns raw call arguments into typed
//! requests, and dispatches them to the Hunter client.

use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::error::{HunterMcpError, McpError, Result, ValidationError};
use crate::hunter::client::HunterClient;
use crate::hunter::types::{DomainSearchParams, FindEmailParams, VerifyEmailParams};
use crate::mcp::types::{CallToolResult, Tool, ToolAnnotations};

/// The fixed set of tools the gateway serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    EmailFinder,
    EmailVerifier,
    DomainSearch,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [
        ToolKind::EmailFinder,
        ToolKind::EmailVerifier,
        ToolKind::DomainSearch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::EmailFinder => "email_finder",
            ToolKind::EmailVerifier => "email_verifier",
            ToolKind::DomainSearch => "domain_search",
        }
    }

    fn definition(&self) -> Tool {
        match self {
            ToolKind::EmailFinder => tool_def(
                self.name(),
                "Find the most likely email address from a domain name, first name, and last name",
                email_finder_schema(),
                "Find Email Address",
            ),
            ToolKind::EmailVerifier => tool_def(
                self.name(),
                "Verify the deliverability of an email address",
                email_verifier_schema(),
                "Verify Email Address",
            ),
            ToolKind::DomainSearch => tool_def(
                self.name(),
                "Find email addresses from a domain name",
                domain_search_schema(),
                "Search Domain for Emails",
            ),
        }
    }
}

impl FromStr for ToolKind {
    type Err = McpError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| McpError::UnknownTool {
                name: name.to_string(),
            })
    }
}

/// A validated tool invocation, ready for the Hunter client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    FindEmail(FindEmailParams),
    VerifyEmail(VerifyEmailParams),
    DomainSearch(DomainSearchParams),
}

impl ToolRequest {
    /// Extract and validate the arguments for `kind`
    pub fn parse(kind: ToolKind, args: Value) -> Result<Self> {
        match kind {
            ToolKind::EmailFinder => {
                let params: FindEmailParams = parse_args(args)?;
                require("domain", &params.domain)?;

                let has_split_name = is_set(&params.first_name) && is_set(&params.last_name);
                if !has_split_name && !is_set(&params.full_name) {
                    return Err(ValidationError::Requirement {
                        message: "either first_name and last_name, or full_name, must be provided"
                            .to_string(),
                    }
                    .into());
                }

                Ok(ToolRequest::FindEmail(params))
            }
            ToolKind::EmailVerifier => {
                let params: VerifyEmailParams = parse_args(args)?;
                require("email", &params.email)?;
                Ok(ToolRequest::VerifyEmail(params))
            }
            ToolKind::DomainSearch => {
                let params: DomainSearchParams = parse_args(args)?;
                require("domain", &params.domain)?;
                Ok(ToolRequest::DomainSearch(params))
            }
        }
    }
}

/// Tool handler
pub struct ToolHandler {
    hunter_client: Arc<HunterClient>,
    tools: Vec<Tool>,
}

impl ToolHandler {
    /// Create a new tool handler
    pub fn new(hunter_client: Arc<HunterClient>) -> Self {
        Self {
            hunter_client,
            tools: ToolKind::ALL.iter().map(ToolKind::definition).collect(),
        }
    }

    /// List all available tools
    pub fn list_tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Call a tool by name
    pub async fn call_tool(&self, name: &str, args: Value) -> Result<CallToolResult> {
        let kind: ToolKind = name.parse()?;
        let request = ToolRequest::parse(kind, args)?;

        let data = match &request {
            ToolRequest::FindEmail(params) => self.hunter_client.find_email(params).await?,
            ToolRequest::VerifyEmail(params) => self.hunter_client.verify_email(params).await?,
            ToolRequest::DomainSearch(params) => self.hunter_client.domain_search(params).await?,
        };

        CallToolResult::json(&data)
    }
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T> {
    // Derived structs would also accept a positional array.
    let args = match args {
        Value::Null => Value::Object(Map::new()),
        Value::Object(map) => Value::Object(map),
        other => {
            return Err(ValidationError::InvalidParameter {
                name: "arguments".to_string(),
                message: format!("expected an object, got {}", json_kind(&other)),
            }
            .into())
        }
    };

    serde_json::from_value(args).map_err(|e| {
        HunterMcpError::Validation(ValidationError::InvalidParameter {
            name: "arguments".to_string(),
            message: e.to_string(),
        })
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: field.to_string(),
        }
        .into());
    }
    Ok(())
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

// ==================== Tool Definitions ====================

fn tool_def(name: &str, description: &str, schema: Value, title: &str) -> Tool {
    Tool {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: schema,
        annotations: Some(ToolAnnotations::read_only_lookup(title)),
    }
}

fn email_finder_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "domain": {
                "type": "string",
                "description": "The domain name of the company (e.g., 'google.com')"
            },
            "first_name": {
                "type": "string",
                "description": "The first name of the person"
            },
            "last_name": {
                "type": "string",
                "description": "The last name of the person"
            },
            "company": {
                "type": "string",
                "description": "Optional company name if domain is not provided"
            },
            "full_name": {
                "type": "string",
                "description": "Optional full name if first and last name are not provided separately"
            }
        },
        "required": ["domain"],
        "anyOf": [
            {"required": ["first_name", "last_name"]},
            {"required": ["full_name"]}
        ]
    })
}

fn email_verifier_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "email": {
                "type": "string",
                "description": "The email address to verify"
            }
        },
        "required": ["email"]
    })
}

fn domain_search_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "domain": {
                "type": "string",
                "description": "The domain name to search (e.g., 'google.com')"
            },
            "limit": {
                "type": "integer",
                "description": "Maximum number of results to return (default: 10)"
            },
            "type": {
                "type": "string",
                "description": "Type of emails to return (personal or generic)",
                "enum": ["personal", "generic"]
            }
        },
        "required": ["domain"]
    })
}
