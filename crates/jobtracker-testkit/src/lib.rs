// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use jobtracker_app::{
    ApplicationId, ApplicationLevel, ApplicationRecord, ApplicationStatus, RecordStatus,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use time::macros::date;
use time::{Date, Duration};

const COMPANIES: [&str; 24] = [
    "Google",
    "Microsoft",
    "Amazon",
    "Meta",
    "Apple",
    "Nubank",
    "iFood",
    "Mercado Livre",
    "Stone",
    "PicPay",
    "Globo",
    "Itaú",
    "Bradesco",
    "Natura",
    "Embraer",
    "Totvs",
    "Locaweb",
    "QuintoAndar",
    "Loft",
    "Creditas",
    "VTEX",
    "Ambev",
    "Magalu",
    "Órama",
];

const UNRECOGNIZED_STATUSES: [&str; 4] = ["Em análise", "Arquivado", "Pendente", "???"];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Reproducible application records for property-style tests. The same
/// seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct ApplicationFaker {
    rng: DeterministicRng,
}

impl ApplicationFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn company(&mut self) -> String {
        let base = COMPANIES[self.rng.int_n(COMPANIES.len())];
        if self.rng.int_n(4) == 0 {
            format!("{base} {}", ["Brasil", "Labs", "Tech", "S.A."][self.rng.int_n(4)])
        } else {
            base.to_owned()
        }
    }

    pub fn level(&mut self) -> ApplicationLevel {
        ApplicationLevel::ALL[self.rng.int_n(ApplicationLevel::ALL.len())]
    }

    pub fn status(&mut self) -> ApplicationStatus {
        ApplicationStatus::ALL[self.rng.int_n(ApplicationStatus::ALL.len())]
    }

    pub fn applied_on(&mut self) -> Date {
        let start = reference_date();
        let offset = self.rng.int_n(730) as i64;
        start - Duration::days(offset)
    }

    pub fn record(&mut self, id: i64) -> ApplicationRecord {
        ApplicationRecord {
            id: ApplicationId::new(id),
            company: self.company(),
            level: self.level(),
            applied_on: self.applied_on(),
            status: RecordStatus::Known(self.status()),
        }
    }

    /// `count` records with ids `1..=count`, all statuses recognized.
    pub fn records(&mut self, count: usize) -> Vec<ApplicationRecord> {
        (1..=count as i64).map(|id| self.record(id)).collect()
    }

    /// Like [`Self::records`], but roughly one record in five carries a
    /// status label outside the enumeration.
    pub fn records_with_unrecognized(&mut self, count: usize) -> Vec<ApplicationRecord> {
        let mut records = self.records(count);
        for record in &mut records {
            if self.rng.int_n(5) == 0 {
                let label = UNRECOGNIZED_STATUSES[self.rng.int_n(UNRECOGNIZED_STATUSES.len())];
                record.status = RecordStatus::Unrecognized(label.to_owned());
            }
        }
        records
    }

    /// A search term that is either a random-cased slice of one of the
    /// companies or a string unlikely to match anything.
    pub fn search_term(&mut self, records: &[ApplicationRecord]) -> String {
        if records.is_empty() || self.rng.int_n(6) == 0 {
            return ["", "zzz", "xq", " "][self.rng.int_n(4)].to_owned();
        }
        let company: Vec<char> = records[self.rng.int_n(records.len())]
            .company
            .chars()
            .collect();
        if company.is_empty() {
            return "zzz".to_owned();
        }
        let start = self.rng.int_n(company.len());
        let len = 1 + self.rng.int_n(company.len() - start);
        company[start..start + len]
            .iter()
            .map(|ch| {
                if self.rng.bool() {
                    ch.to_uppercase().collect::<String>()
                } else {
                    ch.to_lowercase().collect::<String>()
                }
            })
            .collect()
    }
}

/// Renders records as a seed file using display labels.
pub fn seed_toml(records: &[ApplicationRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = write!(
            out,
            "[[applications]]\nid = {}\ncompany = {:?}\nlevel = {:?}\napplied_on = \"{}-{:02}-{:02}\"\nstatus = {:?}\n\n",
            record.id,
            record.company,
            record.level.label(),
            record.applied_on.year(),
            u8::from(record.applied_on.month()),
            record.applied_on.day(),
            record.status.label(),
        );
    }
    out
}

pub fn temp_seed_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let seed_path = dir.path().join("applications.toml");
    Ok((dir, seed_path))
}

pub fn fixture_today() -> Date {
    reference_date()
}

pub fn companies() -> &'static [&'static str] {
    &COMPANIES
}

fn reference_date() -> Date {
    date!(2026 - 02 - 19)
}

#[cfg(test)]
mod tests {
    use super::{ApplicationFaker, companies, fixture_today, seed_toml};
    use jobtracker_app::RecordStatus;
    use std::collections::BTreeSet;

    #[test]
    fn new_deterministic_seed() {
        let mut left = ApplicationFaker::new(42);
        let mut right = ApplicationFaker::new(42);
        assert_eq!(left.records(8), right.records(8));
    }

    #[test]
    fn records_have_sequential_unique_ids() {
        let mut faker = ApplicationFaker::new(3);
        let records = faker.records(20);
        let ids: Vec<i64> = records.iter().map(|record| record.id.get()).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn applied_on_never_passes_reference_date() {
        let mut faker = ApplicationFaker::new(4);
        for _ in 0..200 {
            assert!(faker.applied_on() <= fixture_today());
        }
    }

    #[test]
    fn unrecognized_statuses_show_up_across_seeds() {
        let mut found = false;
        for seed in 0_u64..20_u64 {
            let mut faker = ApplicationFaker::new(seed);
            if faker
                .records_with_unrecognized(10)
                .iter()
                .any(|record| matches!(record.status, RecordStatus::Unrecognized(_)))
            {
                found = true;
                break;
            }
        }
        assert!(found);
    }

    #[test]
    fn search_term_comes_from_a_company_or_a_sentinel() {
        let mut faker = ApplicationFaker::new(5);
        let records = faker.records(10);
        for _ in 0..100 {
            let term = faker.search_term(&records).to_lowercase();
            let from_company = records
                .iter()
                .any(|record| record.company.to_lowercase().contains(&term));
            assert!(from_company || ["zzz", "xq", " "].contains(&term.as_str()));
        }
    }

    #[test]
    fn search_term_handles_blank_company() {
        let mut faker = ApplicationFaker::new(8);
        let mut records = faker.records(1);
        records[0].company.clear();
        for _ in 0..20 {
            let term = faker.search_term(&records);
            assert!(["", "zzz", "xq", " "].contains(&term.as_str()), "{term:?}");
        }
    }

    #[test]
    fn variety_across_seeds() {
        let mut names = BTreeSet::new();
        for seed in 0_u64..30_u64 {
            let mut faker = ApplicationFaker::new(seed);
            names.insert(faker.company());
        }
        assert!(names.len() >= 10, "got {}", names.len());
    }

    #[test]
    fn seed_toml_uses_display_labels() {
        let mut faker = ApplicationFaker::new(6);
        let records = faker.records(1);
        let rendered = seed_toml(&records);
        assert!(rendered.contains("[[applications]]"));
        assert!(rendered.contains(records[0].level.label()));
        assert!(rendered.contains(records[0].status.label()));
    }

    #[test]
    fn company_list_is_non_empty() {
        assert!(!companies().is_empty());
    }
}
