//! MCP gateway type definitions
//!
//! Wire types for the HTTP tool/resource endpoints and the SSE handshake.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Server name announced on the SSE stream
pub const SERVER_NAME: &str = "hunter-mcp";

/// Server version announced on the SSE stream and the info endpoint
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Behavioural hints attached to a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    pub title: String,
    pub read_only_hint: bool,
    pub idempotent_hint: bool,
    pub open_world_hint: bool,
}

impl ToolAnnotations {
    /// Annotations for a read-only lookup against the remote API
    pub fn read_only_lookup(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            read_only_hint: true,
            idempotent_hint: true,
            open_world_hint: true,
        }
    }
}

/// Tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Tool name
    pub name: String,

    /// Tool description
    pub description: String,

    /// Input schema (JSON Schema)
    pub input_schema: Value,

    /// Behavioural hints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<ToolAnnotations>,
}

/// List tools result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResult {
    /// Available tools
    pub tools: Vec<Tool>,
}

/// Call tool params
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
    /// Tool name
    pub name: String,

    /// Tool arguments
    #[serde(default)]
    pub arguments: Value,
}

impl CallToolParams {
    /// Arguments, with a missing or `null` value read as `{}`
    pub fn arguments_or_empty(self) -> Value {
        match self.arguments {
            Value::Null => Value::Object(Map::new()),
            args => args,
        }
    }
}

/// Tool result content item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolResultContent {
    /// Text content
    #[serde(rename = "text")]
    Text { text: String },
}

/// Call tool result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolResult {
    /// Result content
    pub content: Vec<ToolResultContent>,
}

impl CallToolResult {
    /// Create a text result
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent::Text { text: text.into() }],
        }
    }

    /// Create a single text block holding pretty-printed JSON
    pub fn json(value: &Value) -> Result<Self> {
        Ok(Self::text(serde_json::to_string_pretty(value)?))
    }
}

/// Resource definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Resource URI
    pub uri: String,

    /// Human-readable title
    pub title: String,

    /// Resource description
    pub description: String,
}

/// List resources result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResourcesResult {
    pub resources: Vec<Resource>,
}

/// Query of `GET /resources/read`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadResourceParams {
    /// Every `uri` value, comma-joined; empty when absent
    pub uri: String,
}

impl ReadResourceParams {
    /// Collect `uri` from raw query pairs. A repeated `uri` stays joined so
    /// it can never match a known resource.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let uris: Vec<&str> = pairs
            .iter()
            .filter(|(key, _)| key == "uri")
            .map(|(_, value)| value.as_str())
            .collect();
        Self {
            uri: uris.join(","),
        }
    }
}

/// Body of a resource read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceContents {
    /// MIME type of `data`
    #[serde(rename = "type")]
    pub mime_type: String,

    pub data: String,
}

/// Error envelope returned by every endpoint on failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Payload of the SSE `connected` event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub server: String,
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            server: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
        }
    }
}

/// Payload of the SSE `capabilities` event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    pub tools: bool,
    pub resources: bool,
    pub logging: bool,
}

impl Default for ServerCapabilities {
    fn default() -> Self {
        Self {
            tools: true,
            resources: true,
            logging: true,
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

impl Default for RootInfo {
    fn default() -> Self {
        Self {
            message: "Hunter MCP Server is running".to_string(),
            version: SERVER_VERSION.to_string(),
            endpoints: vec![
                "/sse - Server-Sent Events endpoint for MCP".to_string(),
                "/tools/list - List available tools".to_string(),
                "/tools/call - Call a tool".to_string(),
                "/resources/list - List available resources".to_string(),
                "/resources/read - Read a resource".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_params_default_arguments() {
        let params: CallToolParams = serde_json::from_str(r#"{"name":"email_verifier"}"#).unwrap();
        assert_eq!(params.name, "email_verifier");
        assert_eq!(params.arguments_or_empty(), json!({}));
    }

    #[test]
    fn test_tool_result_shape() {
        let result = CallToolResult::json(&json!({"email": "a@b.com", "score": 91})).unwrap();
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(
            value["content"][0]["text"],
            "{\n  \"email\": \"a@b.com\",\n  \"score\": 91\n}"
        );
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_tool_serializes_camel_case() {
        let tool = Tool {
            name: "email_verifier".to_string(),
            description: "Verify".to_string(),
            input_schema: json!({"type": "object"}),
            annotations: Some(ToolAnnotations::read_only_lookup("Verify Email Address")),
        };
        let value = serde_json::to_value(&tool).unwrap();
        assert!(value.get("inputSchema").is_some());
        assert_eq!(value["annotations"]["readOnlyHint"], true);
        assert_eq!(value["annotations"]["openWorldHint"], true);
    }

    #[test]
    fn test_read_resource_params_from_pairs() {
        let pairs = vec![("uri".to_string(), "hunter://api-info".to_string())];
        assert_eq!(ReadResourceParams::from_pairs(&pairs).uri, "hunter://api-info");

        let repeated = vec![
            ("uri".to_string(), "a".to_string()),
            ("other".to_string(), "x".to_string()),
            ("uri".to_string(), "b".to_string()),
        ];
        assert_eq!(ReadResourceParams::from_pairs(&repeated).uri, "a,b");

        assert_eq!(ReadResourceParams::from_pairs(&[]).uri, "");
    }

    #[test]
    fn test_resource_contents_type_key() {
        let contents = ResourceContents {
            mime_type: "text/markdown".to_string(),
            data: "# Hunter".to_string(),
        };
        let value = serde_json::to_value(&contents).unwrap();
        assert_eq!(value, json!({"type": "text/markdown", "data": "# Hunter"}));
    }
}
