use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use super::form::FormData;
use crate::{
    pkg::{
        internal::adaptors::jobs::{
            mutators::JobMutator,
            selectors::JobSelector,
            spec::{FileUpload, JobEntry},
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Debug)]
pub struct CreateJobInput {
    pub id: String,
    pub name: String,
    pub experience: String,
    pub location: String,
    pub description: String,
    pub image: Option<FileUpload>,
}

#[derive(Debug, Default)]
pub struct PatchJobInput {
    pub name: Option<String>,
    pub experience: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<FileUpload>,
}

impl CreateJobInput {
    fn from_form(mut form: FormData) -> Result<Self> {
        Ok(CreateJobInput {
            id: form.required("id")?,
            name: form.required("name")?,
            experience: form.required("experience")?,
            location: form.required("location")?,
            description: form.required("description")?,
            image: form.file("image"),
        })
    }
}

impl From<FormData> for PatchJobInput {
    fn from(mut form: FormData) -> Self {
        PatchJobInput {
            name: form.optional("name"),
            experience: form.optional("experience"),
            location: form.optional("location"),
            description: form.optional("description"),
            image: form.file("image"),
        }
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobEntry>>> {
    let jobs = JobSelector::new(&state.store).get_all().await?;
    Ok(Json(jobs))
}

pub async fn create(State(state): State<AppState>, form: FormData) -> Result<Json<Value>> {
    let input = CreateJobInput::from_form(form)?;
    let job = JobMutator::new(&state.store).create(input).await?;
    Ok(Json(json!({
        "message": "Job added successfully!",
        "job": job,
    })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    form: FormData,
) -> Result<Json<Value>> {
    let input = PatchJobInput::from(form);
    let job = JobMutator::new(&state.store).update(&job_id, input).await?;
    Ok(Json(json!({
        "message": "Job updated successfully!",
        "job": job,
    })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Value>> {
    JobMutator::new(&state.store).delete(&job_id).await?;
    Ok(Json(json!({ "message": "Job removed successfully!" })))
}
