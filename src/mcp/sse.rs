//! SSE session stream
//!
//! Every `/sse` connection gets its own stream: a fixed three-event
//! handshake followed by pings until the client goes away or the server
//! shuts down. Dropping the stream (client disconnect) abandons the
//! pending timer; nothing else is held per session.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use async_stream::stream;
use axum::response::sse::Event;
use futures::{pin_mut, Stream, StreamExt};
use serde_json::json;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::config::SseConfig;
use crate::error::Result;
use crate::mcp::types::{ServerCapabilities, ServerInfo};

/// Process-wide shutdown flag shared by all sessions
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Close every open session
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Live session streams, plus any task parked in `wait`
    pub fn open_sessions(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Resolves once `trigger` has been called
    pub async fn wait(&self) {
        let mut rx = self.subscribe();
        // The sender lives in `self`, so this only fails if it was dropped.
        let _ = rx.wait_for(|closed| *closed).await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// One event of a session
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Connected(ServerInfo),
    Capabilities(ServerCapabilities),
    InitializationComplete,
    Ping { timestamp: f64 },
}

impl SessionEvent {
    /// Ping stamped with the current time, in fractional Unix seconds
    pub fn ping() -> Self {
        let micros = chrono::Utc::now().timestamp_micros();
        SessionEvent::Ping {
            timestamp: micros as f64 / 1_000_000.0,
        }
    }

    /// SSE event name
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Connected(_) => "connected",
            SessionEvent::Capabilities(_) => "capabilities",
            SessionEvent::InitializationComplete => "initialization_complete",
            SessionEvent::Ping { .. } => "ping",
        }
    }

    /// JSON data line
    pub fn payload(&self) -> Result<String> {
        let data = match self {
            SessionEvent::Connected(info) => serde_json::to_string(info)?,
            SessionEvent::Capabilities(caps) => serde_json::to_string(caps)?,
            SessionEvent::InitializationComplete => "{}".to_string(),
            SessionEvent::Ping { timestamp } => json!({ "timestamp": timestamp }).to_string(),
        };
        Ok(data)
    }

    pub fn to_sse(&self) -> Result<Event> {
        Ok(Event::default().event(self.name()).data(self.payload()?))
    }
}

/// Logs the end of a session when the stream is dropped
struct SessionGuard;

impl Drop for SessionGuard {
    fn drop(&mut self) {
        info!("SSE connection closed");
    }
}

/// Wait for `duration`; `false` means the session must end instead
async fn pause(duration: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    if *shutdown.borrow() {
        return false;
    }

    let changed = tokio::select! {
        _ = tokio::time::sleep(duration) => None,
        changed = shutdown.changed() => Some(changed.is_ok()),
    };

    match changed {
        None => true,
        // Sender gone: the server is going away.
        Some(false) => false,
        Some(true) => !*shutdown.borrow(),
    }
}

/// Handshake then pings, ending when `shutdown` fires
pub fn session_events(
    config: SseConfig,
    mut shutdown: watch::Receiver<bool>,
) -> impl Stream<Item = SessionEvent> {
    stream! {
        let _guard = SessionGuard;

        let handshake = [
            SessionEvent::Connected(ServerInfo::default()),
            SessionEvent::Capabilities(ServerCapabilities::default()),
            SessionEvent::InitializationComplete,
        ];

        for event in handshake {
            info!(event = event.name(), "Sending SSE event");
            yield event;
            if !pause(config.handshake_delay, &mut shutdown).await {
                return;
            }
        }

        let mut count: u64 = 0;
        loop {
            if !pause(config.ping_interval, &mut shutdown).await {
                info!("SSE connection cancelled by server shutdown");
                return;
            }
            count += 1;
            debug!(count, "Sending ping event");
            yield SessionEvent::ping();
        }
    }
}

/// `session_events` encoded for axum's `Sse` response
pub fn sse_stream(
    config: SseConfig,
    shutdown: watch::Receiver<bool>,
) -> impl Stream<Item = std::result::Result<Event, Infallible>> {
    let events = session_events(config, shutdown);

    stream! {
        pin_mut!(events);
        while let Some(event) = events.next().await {
            match event.to_sse() {
                Ok(sse) => yield Ok(sse),
                Err(e) => {
                    error!("Error in SSE event stream: {}", e);
                    break;
                }
            }
        }
    }
}
