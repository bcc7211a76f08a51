use async_trait::async_trait;

use crate::message::OutboundMessage;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Mail provider unavailable: {0}")]
    Unavailable(String),
}

/// Delivery channel for composed contact messages.
#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DispatchError>;
}

/// Records messages in the service log instead of delivering them.
pub struct LogDispatcher;

#[async_trait]
impl MessageDispatcher for LogDispatcher {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DispatchError> {
        tracing::info!(
            to = %message.to,
            from = %message.from,
            subject = %message.subject,
            text = %message.text,
            "Email would be sent"
        );
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::{DispatchError, MessageDispatcher, OutboundMessage};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingDispatcher {
        sent: Mutex<Vec<OutboundMessage>>,
    }

    impl RecordingDispatcher {
        pub fn sent(&self) -> Vec<OutboundMessage> {
            self.sent.lock().expect("poisoned").clone()
        }
    }

    #[async_trait]
    impl MessageDispatcher for RecordingDispatcher {
        async fn send(&self, message: &OutboundMessage) -> Result<(), DispatchError> {
            self.sent.lock().expect("poisoned").push(message.clone());
            Ok(())
        }
    }

    pub struct FailingDispatcher;

    #[async_trait]
    impl MessageDispatcher for FailingDispatcher {
        async fn send(&self, _message: &OutboundMessage) -> Result<(), DispatchError> {
            Err(DispatchError::Unavailable("connection refused".to_string()))
        }
    }
}
