// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Read-only projection of the application list: the rows matching the
//! current search term and the summary counts shown above them.

use crate::{ApplicationRecord, ApplicationStats, StatusCategory};

/// Records whose company contains `search`, compared case-insensitively.
/// Relative order is preserved; an empty search returns every record.
pub fn filter_applications<'a>(
    records: &'a [ApplicationRecord],
    search: &str,
) -> Vec<&'a ApplicationRecord> {
    if search.is_empty() {
        return records.iter().collect();
    }
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| record.company.to_lowercase().contains(&needle))
        .collect()
}

/// Counts over the whole collection, independent of any search term.
pub fn application_stats(records: &[ApplicationRecord]) -> ApplicationStats {
    let mut stats = ApplicationStats {
        total: records.len(),
        ..ApplicationStats::default()
    };
    for record in records {
        match record.status.category() {
            Some(StatusCategory::Approved) => stats.approved += 1,
            Some(StatusCategory::Pending) => stats.pending += 1,
            Some(StatusCategory::Rejected) => stats.rejected += 1,
            None => stats.unrecognized += 1,
        }
    }
    stats
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoRecords,
    NoMatches,
}

impl EmptyState {
    pub const fn title(self) -> &'static str {
        "Nenhuma candidatura encontrada"
    }

    pub const fn hint(self) -> &'static str {
        match self {
            Self::NoRecords => "Comece adicionando sua primeira candidatura",
            Self::NoMatches => "Tente ajustar sua busca",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationListView<'a> {
    pub search: String,
    pub rows: Vec<&'a ApplicationRecord>,
    pub stats: ApplicationStats,
}

impl<'a> ApplicationListView<'a> {
    pub fn build(records: &'a [ApplicationRecord], search: &str) -> Self {
        Self {
            search: search.to_owned(),
            rows: filter_applications(records, search),
            stats: application_stats(records),
        }
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.rows.is_empty() {
            return None;
        }
        if self.search.is_empty() {
            Some(EmptyState::NoRecords)
        } else {
            Some(EmptyState::NoMatches)
        }
    }
}
