pub mod client;
pub mod dto;
pub mod form;
pub mod notify;

pub use client::{FormClient, SubmitError};
pub use dto::ContactSubmission;
pub use form::{ContactForm, Field, FormError, Outcome};
pub use notify::{ConsoleNotifier, Notifier};
