use crate::pkg::internal::{adaptors::jobs::spec::JobEntry, store::JobStore};
use crate::pkg::server::handlers::jobs::{CreateJobInput, PatchJobInput};
use crate::prelude::{AppError, Result};

pub struct JobMutator<'a> {
    store: &'a JobStore,
}

fn overwrite(target: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *target = value;
    }
}

impl<'a> JobMutator<'a> {
    pub fn new(store: &'a JobStore) -> Self {
        JobMutator { store }
    }

    /// Appends without checking for an existing id.
    pub async fn create(&self, job: CreateJobInput) -> Result<JobEntry> {
        let mut jobs = self.store.load().await?;
        let image = match job.image {
            Some(upload) => Some(self.store.store_image(&upload.file_name, &upload.data).await?),
            None => None,
        };
        let entry = JobEntry {
            id: job.id,
            name: job.name,
            experience: job.experience,
            location: job.location,
            description: job.description,
            image,
        };
        jobs.push(entry.clone());
        self.store.save(&jobs).await?;
        tracing::info!("job {} added", &entry.id);
        Ok(entry)
    }

    /// Patches the first job with a matching id. Empty values leave the field unchanged.
    pub async fn update(&self, id: &str, job: PatchJobInput) -> Result<JobEntry> {
        let mut jobs = self.store.load().await?;
        let Some(idx) = jobs.iter().position(|j| j.id == id) else {
            tracing::warn!("update: job {} not found", id);
            return Err(AppError::NotFound);
        };
        let image = match job.image {
            Some(upload) => Some(self.store.store_image(&upload.file_name, &upload.data).await?),
            None => None,
        };
        let entry = &mut jobs[idx];
        overwrite(&mut entry.name, job.name);
        overwrite(&mut entry.experience, job.experience);
        overwrite(&mut entry.location, job.location);
        overwrite(&mut entry.description, job.description);
        if image.is_some() {
            entry.image = image;
        }
        let updated = entry.clone();
        self.store.save(&jobs).await?;
        tracing::info!("job {} updated", id);
        Ok(updated)
    }

    /// Removes every job carrying this id and returns how many went.
    pub async fn delete(&self, id: &str) -> Result<usize> {
        let jobs = self.store.load().await?;
        let before = jobs.len();
        let remaining: Vec<JobEntry> = jobs.into_iter().filter(|j| j.id != id).collect();
        let removed = before - remaining.len();
        if removed == 0 {
            tracing::warn!("delete: job {} not found", id);
            return Err(AppError::NotFound);
        }
        self.store.save(&remaining).await?;
        tracing::info!("removed {} job(s) with id {}", removed, id);
        Ok(removed)
    }
}
