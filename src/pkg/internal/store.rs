use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{
    conf::Settings,
    pkg::internal::{adaptors::jobs::spec::JobEntry, uploads::save_upload},
    prelude::Result,
};

/// Flat-file job collection. Every operation loads and rewrites the whole
/// array; concurrent writers are last-writer-wins.
#[derive(Debug, Clone)]
pub struct JobStore {
    jobs_file: PathBuf,
    upload_dir: PathBuf,
}

impl JobStore {
    pub fn new(jobs_file: impl Into<PathBuf>, upload_dir: impl Into<PathBuf>) -> Self {
        JobStore {
            jobs_file: jobs_file.into(),
            upload_dir: upload_dir.into(),
        }
    }

    pub fn from_settings(s: &Settings) -> Self {
        JobStore::new(&s.jobs_file, &s.upload_dir)
    }

    pub fn jobs_file(&self) -> &Path {
        &self.jobs_file
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Creates the upload directory and seeds `[]` if the store file is absent.
    pub async fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.upload_dir).await?;
        if !fs::try_exists(&self.jobs_file).await? {
            if let Some(parent) = self.jobs_file.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            fs::write(&self.jobs_file, "[]").await?;
            tracing::info!("seeded empty job store at {}", self.jobs_file.display());
        }
        Ok(())
    }

    pub async fn load(&self) -> Result<Vec<JobEntry>> {
        self.ensure().await?;
        let raw = fs::read_to_string(&self.jobs_file).await?;
        let jobs: Vec<JobEntry> = serde_json::from_str(&raw)?;
        tracing::debug!("loaded {} jobs from {}", jobs.len(), self.jobs_file.display());
        Ok(jobs)
    }

    pub async fn save(&self, jobs: &[JobEntry]) -> Result<()> {
        let raw = serde_json::to_string_pretty(jobs)?;
        fs::write(&self.jobs_file, raw).await?;
        tracing::debug!("wrote {} jobs to {}", jobs.len(), self.jobs_file.display());
        Ok(())
    }

    pub async fn store_image(&self, file_name: &str, data: &[u8]) -> Result<String> {
        save_upload(&self.upload_dir, file_name, data).await
    }
}

#[cfg(test)]
pub mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::prelude::AppError;

    pub fn temp_store() -> (tempfile::TempDir, JobStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JobStore::new(dir.path().join("json/jobs.json"), dir.path().join("uploads"));
        (dir, store)
    }

    #[tokio::test]
    #[traced_test]
    async fn test_load_seeds_missing_file() -> Result<()> {
        let (_dir, store) = temp_store();
        assert!(store.load().await?.is_empty());
        assert_eq!(fs::read_to_string(store.jobs_file()).await?, "[]");
        assert!(fs::try_exists(store.upload_dir()).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_saved_file_is_indented_json_array() -> Result<()> {
        let (_dir, store) = temp_store();
        let job = JobEntry {
            id: "1".into(),
            name: "Engineer".into(),
            experience: "2 years".into(),
            location: "Remote".into(),
            description: "Build things".into(),
            image: None,
        };
        store.ensure().await?;
        store.save(&[job.clone()]).await?;
        let raw = fs::read_to_string(store.jobs_file()).await?;
        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\"image\": null"));
        assert_eq!(store.load().await?, vec![job]);
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_file_propagates() -> Result<()> {
        let (_dir, store) = temp_store();
        store.ensure().await?;
        fs::write(store.jobs_file(), "{not json").await?;
        assert!(matches!(store.load().await, Err(AppError::Json(_))));
        Ok(())
    }
}
