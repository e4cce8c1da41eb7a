use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_macros::debug_handler;

use std::any::Any;
use std::sync::Arc;

use crate::dto::{ContactForm, ContactResponse};
use crate::service::ContactService;

const TEST_FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Test Contact Form</title>
    <style>
        body { font-family: Arial; max-width: 500px; margin: 50px auto; padding: 20px; }
        input, textarea { width: 100%; padding: 10px; margin: 10px 0; }
        button { padding: 10px 20px; background: black; color: white; border: none; cursor: pointer; }
    </style>
</head>
<body>
    <h1>Test Contact Form</h1>
    <form action="/contact" method="POST">
        <input type="text" name="name" placeholder="Name" required>
        <input type="email" name="email" placeholder="Email" required>
        <textarea name="message" placeholder="Message" rows="5" required></textarea>
        <button type="submit">Send</button>
    </form>
</body>
</html>
"#;

#[debug_handler]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    Form(form): Form<ContactForm>,
) -> Response {
    let Some(submission) = form.into_submission() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse::failure("Missing required fields")),
        )
            .into_response();
    };

    // Sends are best-effort; their outcomes are logged but not surfaced.
    service.handle_submission(&submission).await;

    (StatusCode::OK, Json(ContactResponse::sent())).into_response()
}

#[debug_handler]
pub async fn liveness() -> Response {
    (StatusCode::OK, "Contact form handler is running! ✅").into_response()
}

#[debug_handler]
pub async fn home() -> Response {
    Html(TEST_FORM_PAGE).into_response()
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown internal error".to_string()
    };

    tracing::error!("Failed to handle contact request: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ContactResponse::failure(detail)),
    )
        .into_response()
}
