//! HTTP surface of the bot: the webhook verification handshake, event
//! delivery, and a liveness root.

pub mod inbound;

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::bot::Dispatcher;
use crate::gateway::MessagingGateway;

pub use inbound::WebhookDelivery;

pub const STATUS_TEXT: &str = "WhatsApp Bot is running! 🤖";

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub gateway: Arc<dyn MessagingGateway>,
    verify_token: Arc<str>,
}

impl AppState {
    pub fn new(
        dispatcher: Dispatcher,
        gateway: Arc<dyn MessagingGateway>,
        verify_token: &str,
    ) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            gateway,
            verify_token: Arc::from(verify_token),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/webhook", get(verify).post(receive))
        .with_state(state)
}

async fn status() -> &'static str {
    STATUS_TEXT
}

#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Subscription handshake: echo the challenge iff the token matches.
/// A query that does not parse is a failed handshake, not a bad request.
async fn verify(
    State(state): State<AppState>,
    params: Result<Query<VerifyParams>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            warn!(error = %rejection, "Webhook verification query rejected");
            return StatusCode::FORBIDDEN.into_response();
        }
    };

    let subscribed = params.mode.as_deref() == Some("subscribe")
        && params.verify_token.as_deref() == Some(&*state.verify_token);

    if subscribed {
        info!("Webhook verified");
        (StatusCode::OK, params.challenge.unwrap_or_default()).into_response()
    } else {
        warn!(mode = ?params.mode, "Webhook verification rejected");
        StatusCode::FORBIDDEN.into_response()
    }
}

/// Acknowledge the delivery at once; replies are sent from a background task
/// and their failures are only logged.
async fn receive(State(state): State<AppState>, body: Bytes) -> StatusCode {
    tokio::spawn(async move {
        if let Err(e) = process_delivery(&state, &body).await {
            error!(error = %format!("{e:#}"), "Failed to process webhook delivery");
        }
    });

    StatusCode::OK
}

/// Parse a delivery and answer its message, if it has one
pub async fn process_delivery(state: &AppState, body: &[u8]) -> Result<()> {
    let delivery: WebhookDelivery =
        serde_json::from_slice(body).context("invalid webhook payload")?;

    let Some(event) = delivery.first_event() else {
        debug!("Delivery without messages ignored");
        return Ok(());
    };

    debug!(sender = %event.sender, kind = ?event.kind, "Inbound message");

    state
        .dispatcher
        .dispatch(state.gateway.as_ref(), &event)
        .await
        .with_context(|| format!("failed to reply to {}", event.sender))?;

    Ok(())
}

/// Resolves once `signal` fires. If the signal handler cannot be installed the
/// server keeps running instead of shutting down immediately.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
