//! Error types for the Hunter MCP Server
//!
//! This module defines the error hierarchy for all operations in the server.

use thiserror::Error;

/// Main error type for the Hunter MCP Server
#[derive(Error, Debug)]
pub enum HunterMcpError {
    /// Hunter API errors
    #[error(transparent)]
    Hunter(#[from] HunterApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// MCP protocol errors
    #[error("{0}")]
    Mcp(#[from] McpError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HunterMcpError {
    /// HTTP status the gateway answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            HunterMcpError::Mcp(McpError::UnknownTool { .. })
            | HunterMcpError::Mcp(McpError::UnknownResource { .. }) => 404,
            _ => 500,
        }
    }
}

/// Hunter API errors
///
/// Transport failures never carry the underlying `reqwest::Error`; only
/// its message survives, with the request URL (and so the API key) removed.
#[derive(Error, Debug)]
pub enum HunterApiError {
    /// Non-2xx answer. `details` is the first upstream error entry, or the
    /// status reason when the body carried none.
    #[error("Hunter API error: {details}")]
    Rejected { status: u16, details: String },

    #[error("Request error: {message}")]
    Transport { message: String },

    #[error("Hunter API error: malformed response: {message}")]
    MalformedResponse { message: String },
}

impl From<reqwest::Error> for HunterApiError {
    fn from(err: reqwest::Error) -> Self {
        HunterApiError::Transport {
            message: err.without_url().to_string(),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}")]
    MissingEnvVar { var: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid parameter: {name} - {message}")]
    InvalidParameter { name: String, message: String },

    #[error("{message}")]
    Requirement { message: String },
}

/// MCP protocol errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Unknown resource: {uri}")]
    UnknownResource { uri: String },

    #[error("Invalid tool call request: {message}")]
    InvalidRequest { message: String },
}

/// Result type alias for Hunter MCP operations
pub type Result<T> = std::result::Result<T, HunterMcpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HunterMcpError::from(HunterApiError::Rejected {
            status: 401,
            details: "Invalid API key".to_string(),
        });
        assert_eq!(err.to_string(), "Hunter API error: Invalid API key");
    }

    #[test]
    fn test_unknown_tool_message_is_bare() {
        let err: HunterMcpError = McpError::UnknownTool {
            name: "nonexistent_tool".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown tool: nonexistent_tool");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_status_codes() {
        let missing: HunterMcpError = ValidationError::MissingField {
            field: "email".to_string(),
        }
        .into();
        assert_eq!(missing.status_code(), 500);

        let resource: HunterMcpError = McpError::UnknownResource {
            uri: "hunter://nope".to_string(),
        }
        .into();
        assert_eq!(resource.status_code(), 404);

        let transport: HunterMcpError = HunterApiError::Transport {
            message: "connection refused".to_string(),
        }
        .into();
        assert_eq!(transport.status_code(), 500);
        assert_eq!(transport.to_string(), "Request error: connection refused");
    }
}
