use crate::pkg::internal::{adaptors::jobs::spec::JobEntry, store::JobStore};
use crate::prelude::Result;

pub struct JobSelector<'a> {
    store: &'a JobStore,
}

impl<'a> JobSelector<'a> {
    pub fn new(store: &'a JobStore) -> Self {
        JobSelector { store }
    }

    pub async fn get_all(&self) -> Result<Vec<JobEntry>> {
        self.store.load().await
    }
}
