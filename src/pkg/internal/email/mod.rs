use std::sync::Arc;

use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

pub mod application;

use crate::{
    conf::Settings,
    prelude::{AppError, Result},
};

/// Blocking handoff of a built message to a mail relay.
pub trait MailRelay: Send + Sync {
    /// Account the relay authenticates as.
    fn account(&self) -> &str;
    fn send(&self, message: &Message) -> Result<()>;
}

pub struct SmtpRelay {
    account: String,
    mailer: SmtpTransport,
}

impl SmtpRelay {
    pub fn new(server: &str, port: u16, user: &str, pass: &str) -> Result<Self> {
        let creds = Credentials::new(user.to_string(), pass.to_string());
        let mailer = SmtpTransport::starttls_relay(server)
            .map_err(|e| AppError::Email(e.to_string()))?
            .port(port)
            .credentials(creds)
            .build();
        Ok(SmtpRelay {
            account: user.to_string(),
            mailer,
        })
    }

    pub fn from_settings(s: &Settings) -> Result<Self> {
        SmtpRelay::new(&s.smtp_server, s.smtp_port, &s.business_email, &s.business_password)
    }
}

impl MailRelay for SmtpRelay {
    fn account(&self) -> &str {
        &self.account
    }

    fn send(&self, message: &Message) -> Result<()> {
        self.mailer
            .send(message)
            .map_err(|e| AppError::Email(e.to_string()))?;
        Ok(())
    }
}

/// Runs the relay handoff off the async runtime and waits for its outcome.
pub async fn deliver(relay: Arc<dyn MailRelay>, message: Message) -> Result<()> {
    let result = tokio::task::spawn_blocking(move || relay.send(&message))
        .await
        .map_err(|e| AppError::Email(e.to_string()))?;
    match &result {
        Ok(_) => tracing::info!("email handed off to relay"),
        Err(e) => tracing::error!("could not send email: {}", e),
    }
    result
}
