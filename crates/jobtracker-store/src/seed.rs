// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use jobtracker_app::{ApplicationId, ApplicationLevel, ApplicationRecord, RecordStatus, iso_date};
use serde::Deserialize;
use time::Date;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    #[serde(default)]
    pub applications: Vec<SeedRecord>,
}

/// One `[[applications]]` table. Level and status accept either the
/// storage key (`mid_level`) or the display label (`Pleno`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedRecord {
    pub id: i64,
    pub company: String,
    pub level: String,
    #[serde(with = "iso_date")]
    pub applied_on: Date,
    pub status: String,
}

impl SeedRecord {
    fn into_record(self) -> Result<ApplicationRecord> {
        let level = ApplicationLevel::parse(&self.level).ok_or_else(|| {
            anyhow!(
                "application {} has unknown level {:?}; use one of: {}",
                self.id,
                self.level,
                level_choices()
            )
        })?;
        let status = RecordStatus::from_label(&self.status);
        if let RecordStatus::Unrecognized(label) = &status {
            tracing::warn!(
                id = self.id,
                status = %label,
                "unrecognized status; record counts toward no dashboard bucket"
            );
        }
        Ok(ApplicationRecord {
            id: ApplicationId::new(self.id),
            company: self.company,
            level,
            applied_on: self.applied_on,
            status,
        })
    }
}

pub fn parse_seed(raw: &str) -> Result<Vec<ApplicationRecord>> {
    let seed: SeedFile = toml::from_str(raw).context("parse TOML seed")?;
    seed.applications
        .into_iter()
        .map(SeedRecord::into_record)
        .collect()
}

fn level_choices() -> String {
    ApplicationLevel::ALL
        .iter()
        .map(|level| level.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::parse_seed;
    use jobtracker_app::{ApplicationLevel, ApplicationStatus, RecordStatus};
    use time::macros::date;

    #[test]
    fn seed_accepts_labels_and_keys() -> anyhow::Result<()> {
        let records = parse_seed(
            r#"
[[applications]]
id = 10
company = "Nubank"
level = "Pleno"
applied_on = "2024-03-02"
status = "Próxima fase"

[[applications]]
id = 11
company = "iFood"
level = "internship"
applied_on = "2024-03-04"
status = "no_response"
"#,
        )?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, ApplicationLevel::MidLevel);
        assert_eq!(records[0].applied_on, date!(2024 - 03 - 02));
        assert_eq!(
            records[0].status,
            RecordStatus::Known(ApplicationStatus::NextStage)
        );
        assert_eq!(records[1].level, ApplicationLevel::Internship);
        assert_eq!(
            records[1].status,
            RecordStatus::Known(ApplicationStatus::NoResponse)
        );
        Ok(())
    }

    #[test]
    fn seed_keeps_unknown_status_labels() -> anyhow::Result<()> {
        let records = parse_seed(
            "[[applications]]\nid = 1\ncompany = \"Globo\"\nlevel = \"Júnior\"\napplied_on = \"2024-01-01\"\nstatus = \"Em análise\"\n",
        )?;
        assert_eq!(
            records[0].status,
            RecordStatus::Unrecognized("Em análise".to_owned())
        );
        Ok(())
    }

    #[test]
    fn seed_rejects_unknown_level() {
        let error = parse_seed(
            "[[applications]]\nid = 3\ncompany = \"Globo\"\nlevel = \"Staff\"\napplied_on = \"2024-01-01\"\nstatus = \"Inscrito\"\n",
        )
        .expect_err("unknown level should fail");
        let message = error.to_string();
        assert!(message.contains("unknown level \"Staff\""), "{message}");
        assert!(message.contains("Estágio, Júnior, Pleno, Sênior"), "{message}");
    }

    #[test]
    fn seed_rejects_malformed_dates() {
        let error = parse_seed(
            "[[applications]]\nid = 3\ncompany = \"Globo\"\nlevel = \"Pleno\"\napplied_on = \"15/01/2024\"\nstatus = \"Inscrito\"\n",
        )
        .expect_err("non-ISO date should fail");
        assert!(error.to_string().contains("parse TOML seed"));
    }

    #[test]
    fn empty_seed_yields_no_records() -> anyhow::Result<()> {
        assert!(parse_seed("")?.is_empty());
        Ok(())
    }
}
