// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod seed;
mod validation;

use anyhow::{Context, Result};
use jobtracker_app::{
    ApplicationId, ApplicationLevel, ApplicationListView, ApplicationRecord, ApplicationStats,
    ApplicationStatus, application_stats,
};
use std::path::Path;
use time::macros::date;

pub use seed::{SeedFile, SeedRecord, parse_seed};
pub use validation::{validate_records, validate_seed_path};

pub const APP_NAME: &str = "jobtracker";

/// Owns the application records for the lifetime of the process. Views
/// borrow from it; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationStore {
    records: Vec<ApplicationRecord>,
}

impl ApplicationStore {
    pub fn from_records(records: Vec<ApplicationRecord>) -> Result<Self> {
        validate_records(&records)?;
        Ok(Self { records })
    }

    pub fn with_sample_data() -> Self {
        Self {
            records: sample_records(),
        }
    }

    pub fn open_seed(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read seed file {}", path.display()))?;
        let records = parse_seed(&raw)
            .with_context(|| format!("load seed file {}", path.display()))?;
        let store = Self::from_records(records)
            .with_context(|| format!("validate seed file {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            records = store.len(),
            "loaded seed file"
        );
        Ok(store)
    }

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: ApplicationId) -> Option<&ApplicationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Identifier a newly created record would receive. Ids are never
    /// reused, so this is always past the largest id ever held.
    pub fn next_id(&self) -> ApplicationId {
        let max = self
            .records
            .iter()
            .map(|record| record.id.get())
            .max()
            .unwrap_or(0);
        ApplicationId::new(max + 1)
    }

    pub fn view(&self, search: &str) -> ApplicationListView<'_> {
        ApplicationListView::build(&self.records, search)
    }

    pub fn stats(&self) -> ApplicationStats {
        application_stats(&self.records)
    }
}

impl Default for ApplicationStore {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

pub fn sample_records() -> Vec<ApplicationRecord> {
    vec![
        ApplicationRecord {
            id: ApplicationId::new(1),
            company: "Google".to_owned(),
            level: ApplicationLevel::MidLevel,
            applied_on: date!(2024 - 01 - 15),
            status: ApplicationStatus::NextStage.into(),
        },
        ApplicationRecord {
            id: ApplicationId::new(2),
            company: "Microsoft".to_owned(),
            level: ApplicationLevel::Senior,
            applied_on: date!(2024 - 01 - 10),
            status: ApplicationStatus::PositiveResponse.into(),
        },
        ApplicationRecord {
            id: ApplicationId::new(3),
            company: "Amazon".to_owned(),
            level: ApplicationLevel::Junior,
            applied_on: date!(2024 - 01 - 08),
            status: ApplicationStatus::NoResponse.into(),
        },
        ApplicationRecord {
            id: ApplicationId::new(4),
            company: "Meta".to_owned(),
            level: ApplicationLevel::MidLevel,
            applied_on: date!(2024 - 01 - 05),
            status: ApplicationStatus::Approved.into(),
        },
        ApplicationRecord {
            id: ApplicationId::new(5),
            company: "Apple".to_owned(),
            level: ApplicationLevel::Senior,
            applied_on: date!(2024 - 01 - 03),
            status: ApplicationStatus::Rejected.into(),
        },
    ]
}
