use std::sync::Arc;

use crate::{
    conf::settings,
    pkg::internal::{
        email::{MailRelay, SmtpRelay},
        store::JobStore,
    },
    prelude::Result,
};

#[derive(Clone)]
pub struct AppState {
    pub service_name: Arc<str>,
    pub max_upload_bytes: usize,
    pub store: Arc<JobStore>,
    pub mailer: Arc<dyn MailRelay>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let store = JobStore::from_settings(&settings);
        store.ensure().await?;
        Ok(AppState::with_parts(
            &settings.service_name,
            settings.max_upload_bytes,
            store,
            Arc::new(SmtpRelay::from_settings(&settings)?),
        ))
    }

    pub fn with_parts(
        service_name: &str,
        max_upload_bytes: usize,
        store: JobStore,
        mailer: Arc<dyn MailRelay>,
    ) -> AppState {
        AppState {
            service_name: service_name.into(),
            max_upload_bytes,
            store: Arc::new(store),
            mailer,
        }
    }
}
