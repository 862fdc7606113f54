// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use jobtracker_app::{ApplicationRecord, Credentials, NewApplication};
use jobtracker_store::ApplicationStore;

/// Serves records from an in-memory store. Creation and sign-in are
/// simulated: both are logged and neither changes anything.
pub struct StoreRuntime<'a> {
    store: &'a ApplicationStore,
}

impl<'a> StoreRuntime<'a> {
    pub fn new(store: &'a ApplicationStore) -> Self {
        Self { store }
    }
}

impl jobtracker_tui::AppRuntime for StoreRuntime<'_> {
    fn load_applications(&mut self) -> Result<Vec<ApplicationRecord>> {
        Ok(self.store.records().to_vec())
    }

    fn submit_application(&mut self, draft: &NewApplication) -> Result<()> {
        tracing::info!(
            would_be_id = %self.store.next_id(),
            company = %draft.company,
            level = draft.level.as_str(),
            status = draft.status.as_str(),
            applied_on = %draft.applied_on,
            "simulated application creation; store unchanged"
        );
        Ok(())
    }

    fn authenticate(&mut self, credentials: &Credentials) -> Result<()> {
        tracing::info!(
            mode = credentials.mode.title(),
            email = %credentials.email,
            "accepted credentials without verification"
        );
        Ok(())
    }
}
