use std::fmt;

use crate::{
    client::FormClient,
    dto::ContactSubmission,
    notify::{FAILED_MESSAGE, Notifier, SENT_MESSAGE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Fields in the order they appear on the form.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill out the {0} field")]
    MissingField(Field),
}

/// Contact form state. Fields are only changed through this component.
#[derive(Debug, Default)]
pub struct ContactForm {
    data: ContactSubmission,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn values(&self) -> &ContactSubmission {
        &self.data
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.data.name,
            Field::Email => &self.data.email,
            Field::Message => &self.data.message,
        }
    }

    pub fn handle_change(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.data.name,
            Field::Email => &mut self.data.email,
            Field::Message => &mut self.data.message,
        };
        *slot = value.into();
    }

    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.value(*field).is_empty())
    }

    /// Submits the current values once. The form is cleared only when the
    /// server accepted the submission.
    pub async fn handle_submit(
        &mut self,
        client: &FormClient,
        notifier: &dyn Notifier,
    ) -> Result<Outcome, FormError> {
        if let Some(field) = self.missing_field() {
            return Err(FormError::MissingField(field));
        }

        match client.submit(self.data.clone()).await {
            Ok(()) => {
                notifier.alert(SENT_MESSAGE);
                self.data = ContactSubmission::default();
                Ok(Outcome::Sent)
            }
            Err(e) => {
                tracing::error!("Error sending message: {e}");
                notifier.alert(FAILED_MESSAGE);
                Ok(Outcome::Failed)
            }
        }
    }
}
