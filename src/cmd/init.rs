use crate::{conf::StoreSettings, pkg::internal::store::JobStore, prelude::Result};

/// Prepares the store from its own settings; mail credentials are not needed here.
pub async fn apply() -> Result<()> {
    let conf = StoreSettings::new()?;
    let store = JobStore::new(&conf.jobs_file, &conf.upload_dir);
    store.ensure().await?;
    let jobs = store.load().await?;
    tracing::debug!("store at {} is readable", store.jobs_file().display());
    println!(
        "Job store ready at {} ({} jobs), uploads in {}",
        store.jobs_file().display(),
        jobs.len(),
        store.upload_dir().display()
    );
    Ok(())
}
