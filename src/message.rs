use serde::Serialize;
use serde_json::Value;

/// Text used for a submission field that was not provided.
const MISSING: &str = "undefined";

/// A mail message built from one contact submission, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
}

impl OutboundMessage {
    /// Builds the message from any JSON submission body. Fields are looked up
    /// by name only; a body that is not an object yields missing fields.
    pub fn compose(recipient: &str, submission: &Value) -> Self {
        let field = |key: &str| submission.get(key).map_or_else(|| MISSING.to_string(), text);

        let name = field("name");
        let email = field("email");
        let message = field("message");

        Self {
            to: recipient.to_string(),
            subject: format!("New message from {name} via Portfolio"),
            text: format!("Name: {name}\nEmail: {email}\nMessage: {message}"),
            from: email,
        }
    }
}

/// Renders a JSON value the way string interpolation shows it to a reader:
/// strings raw, scalars as literals, arrays comma-joined.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
