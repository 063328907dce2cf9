//! Test doubles shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;

use storefront_bot::bot::Dispatcher;
use storefront_bot::catalog::Catalog;
use storefront_bot::gateway::{GatewayError, MessagingGateway};
use storefront_bot::localization::LocalizationManager;
use storefront_bot::reply::Reply;

pub fn dispatcher() -> Dispatcher {
    Dispatcher::new(
        Catalog::builtin().expect("built-in catalog should be valid"),
        LocalizationManager::new("ar").expect("failed to create localization manager"),
    )
}

/// Records every send instead of calling the messaging API
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<(String, Reply)>>,
}

impl RecordingGateway {
    pub fn sent(&self) -> Vec<(String, Reply)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingGateway for RecordingGateway {
    async fn send(&self, to: &str, reply: &Reply) -> Result<(), GatewayError> {
        self.sent.lock().unwrap().push((to.to_string(), reply.clone()));
        Ok(())
    }
}

/// Accepts the first `succeed` sends, rejects the rest
pub struct FlakyGateway {
    pub succeed: usize,
    pub attempts: Mutex<usize>,
}

impl FlakyGateway {
    pub fn new(succeed: usize) -> Self {
        Self {
            succeed,
            attempts: Mutex::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl MessagingGateway for FlakyGateway {
    async fn send(&self, _to: &str, _reply: &Reply) -> Result<(), GatewayError> {
        let mut attempts = self.attempts.lock().unwrap();
        *attempts += 1;
        if *attempts > self.succeed {
            return Err(GatewayError::Rejected {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".to_string(),
            });
        }
        Ok(())
    }
}
