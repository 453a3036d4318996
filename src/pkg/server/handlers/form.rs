use std::collections::HashMap;

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};

use crate::{
    pkg::internal::adaptors::jobs::spec::FileUpload,
    prelude::{AppError, Result},
};

/// Text fields and file parts of a submitted form, drained up front.
/// Accepts multipart, urlencoded, or no body at all.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, FileUpload>,
}

impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();
        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await?;
            return FormData::read(multipart).await;
        }
        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state).await?;
            return Ok(FormData {
                fields,
                ..Default::default()
            });
        }
        let body = Bytes::from_request(req, state).await?;
        if body.is_empty() {
            return Ok(FormData::default());
        }
        Err(AppError::UnsupportedForm(content_type))
    }
}

impl FormData {
    async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = FormData::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let data = field.bytes().await?;
                    // browsers send an empty, unnamed part for an untouched file input
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        FileUpload {
                            file_name,
                            data: data.to_vec(),
                        },
                    );
                }
                None => {
                    let text = field.text().await?;
                    form.fields.insert(name, text);
                }
            }
        }
        Ok(form)
    }

    pub fn required(&mut self, key: &'static str) -> Result<String> {
        self.fields.remove(key).ok_or(AppError::MissingField(key))
    }

    pub fn optional(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }

    pub fn file(&mut self, key: &str) -> Option<FileUpload> {
        self.files.remove(key)
    }
}
