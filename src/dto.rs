use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Documented request body. The handler reads it as loose JSON, so fields
/// may be missing or of any type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmission {
    /// Sender's name
    pub name: String,
    /// Sender's email address, used as reply-to
    pub email: String,
    /// Message text
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendEmailResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
