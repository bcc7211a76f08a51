use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_macros::debug_handler;
use tower_http::{services::ServeFile, trace::TraceLayer};
use utoipa::OpenApi;

use std::{path::Path, sync::Arc};

use crate::{
    dto::{ContactSubmission, ErrorResponse, SendEmailResponse},
    service::ContactService,
};

#[derive(OpenApi)]
#[openapi(
    paths(send_email),
    components(schemas(ContactSubmission, SendEmailResponse, ErrorResponse)),
    tags(
        (name = "contact", description = "Portfolio contact form API")
    )
)]
pub struct ApiDoc;

pub fn router(service: Arc<ContactService>, resume_path: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/", get(health_check))
        .route("/api/send-email", post(send_email))
        .route("/api-doc/openapi.json", get(openapi));

    if let Some(path) = resume_path {
        router = router.route_service("/resume.pdf", ServeFile::new(path));
    }

    router
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

/// The body is read raw so that any malformed payload, including a missing
/// content type, is answered with the same 500 acknowledgement.
#[utoipa::path(
    post,
    path = "/api/send-email",
    request_body = ContactSubmission,
    responses(
        (status = 200, description = "Submission accepted", body = SendEmailResponse),
        (status = 500, description = "Submission could not be processed", body = ErrorResponse)
    ),
    tag = "contact"
)]
#[debug_handler]
pub async fn send_email(State(service): State<Arc<ContactService>>, body: Bytes) -> Response {
    match service.handle_submission(&body).await {
        Ok(_) => (StatusCode::OK, Json(SendEmailResponse { success: true })).into_response(),
        Err(e) => {
            tracing::error!("Error sending email: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to send email".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[debug_handler]
pub async fn health_check() -> Response {
    (StatusCode::OK, "Hello from contact server!").into_response()
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
