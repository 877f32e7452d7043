//! Hunter API module
//!
//! Contains request/response types and the client for the Hunter email API.

pub mod client;
pub mod types;

pub use client::HunterClient;
