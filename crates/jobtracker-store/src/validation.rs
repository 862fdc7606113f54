// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use jobtracker_app::ApplicationRecord;
use std::collections::BTreeSet;

pub fn validate_records(records: &[ApplicationRecord]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for record in records {
        if record.id.get() <= 0 {
            bail!(
                "application id {} is not positive -- ids start at 1",
                record.id
            );
        }
        if !seen.insert(record.id) {
            bail!(
                "application id {} is used more than once -- ids must be unique",
                record.id
            );
        }
        if record.company.trim().is_empty() {
            bail!(
                "application {} has a blank company -- enter a company name",
                record.id
            );
        }
    }
    Ok(())
}

pub fn validate_seed_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        bail!("seed path must not be empty");
    }

    if let Some(index) = path.find("://")
        && index > 0
    {
        let scheme = &path[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "seed path {path:?} looks like a URI ({scheme}://); pass a filesystem path instead"
            );
        }
    }

    Ok(())
}
