use axum::{
    Json,
    extract::State,
};
use serde_json::{Value, json};

use super::form::FormData;
use crate::{
    pkg::{
        internal::email::{application::ApplicationEmail, deliver},
        server::state::AppState,
    },
    prelude::Result,
};

pub async fn send(State(state): State<AppState>, mut form: FormData) -> Result<Json<Value>> {
    let application = ApplicationEmail {
        name: form.required("name")?,
        email: form.required("email")?,
        phone: form.required("phone")?,
        message: form.required("message")?,
        recipient: form.required("recipientEmail")?,
        attachment: form.file("file"),
    };
    tracing::debug!("sending application from {} to {}", &application.email, &application.recipient);
    let message = application.build_message(state.mailer.account())?;
    deliver(state.mailer.clone(), message).await?;
    Ok(Json(json!({ "message": "Email sent successfully!" })))
}
