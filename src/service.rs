use serde_json::Value;

use crate::{
    dispatcher::{DispatchError, MessageDispatcher},
    message::OutboundMessage,
};

use std::sync::Arc;

pub struct ContactService {
    recipient: String,
    dispatcher: Arc<dyn MessageDispatcher>,
}

#[derive(Debug, thiserror::Error)]
pub enum ContactServiceError {
    #[error("Failed to parse submission: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Submission body is null")]
    NullBody,

    #[error("Failed to dispatch message: {0}")]
    Dispatch(#[from] DispatchError),
}

impl ContactService {
    pub fn new(recipient: String, dispatcher: Arc<dyn MessageDispatcher>) -> Self {
        Self {
            recipient,
            dispatcher,
        }
    }

    /// Parses a raw JSON submission, composes the outbound message and dispatches it.
    /// Any JSON value other than `null` is accepted; fields are not validated.
    pub async fn handle_submission(
        &self,
        body: &[u8],
    ) -> Result<OutboundMessage, ContactServiceError> {
        let submission: Value = serde_json::from_slice(body)?;
        if submission.is_null() {
            return Err(ContactServiceError::NullBody);
        }

        let message = OutboundMessage::compose(&self.recipient, &submission);

        tracing::info!("Dispatching contact message from '{}'", message.from);

        self.dispatcher.send(&message).await?;

        Ok(message)
    }
}
