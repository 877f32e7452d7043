//! Static MCP resources

use crate::error::{McpError, Result};
use crate::mcp::types::{Resource, ResourceContents};

/// URI of the API overview document
pub const API_INFO_URI: &str = "hunter://api-info";

const API_INFO_MARKDOWN: &str = r#"
# Hunter API

Hunter is an email finding and verification service that allows you to:
- Find email addresses from a domain name
- Verify the deliverability of email addresses
- Find the most likely email address from a domain name, first name, and last name

## Available Tools

1. **email_finder** - Find the most likely email address from a domain name, first name, and last name
2. **email_verifier** - Verify the deliverability of an email address
3. **domain_search** - Find email addresses from a domain name

## API Documentation
For more information, visit: https://hunter.io/api-documentation/v2
"#;

/// All resources the gateway serves
pub fn list_resources() -> Vec<Resource> {
    vec![Resource {
        uri: API_INFO_URI.to_string(),
        title: "Hunter API Information".to_string(),
        description: "Information about the Hunter API and available endpoints".to_string(),
    }]
}

/// Read a resource by URI
pub fn read_resource(uri: &str) -> Result<ResourceContents> {
    match uri {
        API_INFO_URI => Ok(ResourceContents {
            mime_type: "text/markdown".to_string(),
            data: API_INFO_MARKDOWN.to_string(),
        }),
        _ => Err(McpError::UnknownResource {
            uri: uri.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_resource_is_readable() {
        for resource in list_resources() {
            let contents = read_resource(&resource.uri).unwrap();
            assert_eq!(contents.mime_type, "text/markdown");
            assert!(contents.data.contains("# Hunter API"));
        }
    }

    #[test]
    fn test_unknown_resource() {
        let err = read_resource("hunter://missing").unwrap_err();
        assert_eq!(err.to_string(), "Unknown resource: hunter://missing");
        assert_eq!(err.status_code(), 404);
    }
}
