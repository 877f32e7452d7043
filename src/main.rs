//! Hunter MCP Server - Rust Implementation
//!
//! A Model Context Protocol (MCP) gateway for the Hunter email API.
//! Serves tool and resource endpoints over HTTP plus an SSE stream.

use anyhow::Context;
use clap::Parser;

use hunter_mcp_server_rust::config::Config;
use hunter_mcp_server_rust::mcp::server;
use hunter_mcp_server_rust::mcp::sse::Shutdown;

/// Hunter MCP Server
#[derive(Parser)]
#[command(name = "hunter-mcp-server")]
#[command(author, version, about = "Hunter MCP Server - An MCP gateway for the Hunter email API")]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values already in the environment win over .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::error!("Please set HUNTER_API_KEY in the environment or a .env file");
            std::process::exit(1);
        }
    };

    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(host) = cli.host {
        config.host = host;
    }

    tracing::info!("Starting Hunter MCP server on port {}", config.port);

    let shutdown = Shutdown::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested");
            signal.trigger();
        }
    });

    server::serve(config, shutdown)
        .await
        .context("Hunter MCP server failed")?;

    Ok(())
}
