//! Outbound messaging gateway.
//!
//! The bot only ever needs one operation from the messaging platform: deliver
//! a reply to a user. `MessagingGateway` is that seam; `CloudApiGateway` is the
//! WhatsApp Cloud API implementation used in production.

pub mod payload;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::reply::Reply;

pub use payload::MessagePayload;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request to messaging API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("messaging API rejected the message with {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Delivers replies to a recipient
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    async fn send(&self, to: &str, reply: &Reply) -> Result<(), GatewayError>;
}

/// WhatsApp Cloud API client
pub struct CloudApiGateway {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl CloudApiGateway {
    pub fn new(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            endpoint: messages_endpoint(config),
            token: config.whatsapp_token.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// `<base>/<version>/<phone-number-id>/messages`
pub fn messages_endpoint(config: &Config) -> String {
    format!(
        "{}/{}/{}/messages",
        config.graph_api_base.trim_end_matches('/'),
        config.graph_api_version,
        config.phone_number_id
    )
}

#[async_trait]
impl MessagingGateway for CloudApiGateway {
    async fn send(&self, to: &str, reply: &Reply) -> Result<(), GatewayError> {
        let payload = MessagePayload::new(to, reply);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected { status, body });
        }

        debug!(recipient = %to, kind = reply.kind(), "Message delivered to messaging API");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_is_scoped_by_phone_number_id() {
        let config = Config {
            graph_api_base: "https://graph.facebook.com/".to_string(),
            ..Config::for_tests()
        };
        assert_eq!(
            messages_endpoint(&config),
            "https://graph.facebook.com/v18.0/PHONE_ID/messages"
        );
    }

    #[test]
    fn test_rejection_message_includes_status() {
        let err = GatewayError::Rejected {
            status: StatusCode::UNAUTHORIZED,
            body: "{\"error\":\"bad token\"}".to_string(),
        };
        assert!(err.to_string().contains("401"));
    }
}
