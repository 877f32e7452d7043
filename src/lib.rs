//! Hunter MCP Server Library
//!
//! A Model Context Protocol (MCP) gateway for the Hunter email API.
//! Provides tools for finding, verifying, and discovering email addresses
//! over HTTP, with an SSE stream for MCP clients.

pub mod config;
pub mod error;
pub mod hunter;
pub mod mcp;

pub use config::Config;
pub use error::{HunterMcpError, Result};
