//! MCP (Model Context Protocol) gateway module
//!
//! Exposes the Hunter tools and resources over HTTP and SSE.

pub mod resources;
pub mod server;
pub mod sse;
pub mod tools;
pub mod types;
