// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime};

use crate::ids::*;

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

const MONTH_NAMES_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApplicationLevel {
    Internship,
    Junior,
    MidLevel,
    Senior,
}

impl ApplicationLevel {
    pub const ALL: [Self; 4] = [Self::Internship, Self::Junior, Self::MidLevel, Self::Senior];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internship => "internship",
            Self::Junior => "junior",
            Self::MidLevel => "mid_level",
            Self::Senior => "senior",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Internship => "Estágio",
            Self::Junior => "Júnior",
            Self::MidLevel => "Pleno",
            Self::Senior => "Sênior",
        }
    }

    /// Accepts the storage key or the display label, ignoring case and
    /// surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| matches_key_or_label(value, level.as_str(), level.label()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    NoResponse,
    PositiveResponse,
    NegativeResponse,
    NextStage,
    Rejected,
    Approved,
}

impl ApplicationStatus {
    pub const ALL: [Self; 7] = [
        Self::Applied,
        Self::NoResponse,
        Self::PositiveResponse,
        Self::NegativeResponse,
        Self::NextStage,
        Self::Rejected,
        Self::Approved,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::NoResponse => "no_response",
            Self::PositiveResponse => "positive_response",
            Self::NegativeResponse => "negative_response",
            Self::NextStage => "next_stage",
            Self::Rejected => "rejected",
            Self::Approved => "approved",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Inscrito",
            Self::NoResponse => "Sem retorno",
            Self::PositiveResponse => "Retorno positivo",
            Self::NegativeResponse => "Retorno negativo",
            Self::NextStage => "Próxima fase",
            Self::Rejected => "Reprovado",
            Self::Approved => "Aprovado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| matches_key_or_label(value, status.as_str(), status.label()))
    }

    pub const fn category(self) -> StatusCategory {
        match self {
            Self::Approved => StatusCategory::Approved,
            Self::Applied | Self::NoResponse | Self::PositiveResponse | Self::NextStage => {
                StatusCategory::Pending
            }
            Self::Rejected | Self::NegativeResponse => StatusCategory::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCategory {
    Approved,
    Pending,
    Rejected,
}

/// Status as stored on a record. Seed data may carry labels outside the
/// enumeration; those are kept verbatim and count toward no category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    Known(ApplicationStatus),
    Unrecognized(String),
}

impl RecordStatus {
    pub fn from_label(raw: &str) -> Self {
        match ApplicationStatus::parse(raw) {
            Some(status) => Self::Known(status),
            None => Self::Unrecognized(raw.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Known(status) => status.label(),
            Self::Unrecognized(raw) => raw,
        }
    }

    pub const fn known(&self) -> Option<ApplicationStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }

    pub const fn category(&self) -> Option<StatusCategory> {
        match self.known() {
            Some(status) => Some(status.category()),
            None => None,
        }
    }
}

impl From<ApplicationStatus> for RecordStatus {
    fn from(status: ApplicationStatus) -> Self {
        Self::Known(status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub company: String,
    pub level: ApplicationLevel,
    #[serde(with = "iso_date")]
    pub applied_on: Date,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    pub unrecognized: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Auth,
    Dashboard,
    NewApplication,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Auth, Self::Dashboard, Self::NewApplication];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Auth => "/",
            Self::Dashboard => "/dashboard",
            Self::NewApplication => "/candidatura",
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path.trim())
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Auth => "Entrar",
            Self::Dashboard => "Dashboard",
            Self::NewApplication => "Cadastrar Candidatura",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Route,
}

pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        title: "Dashboard",
        route: Route::Dashboard,
    },
    NavItem {
        title: "Cadastrar Candidatura",
        route: Route::NewApplication,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationSeverity {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: NotificationSeverity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: NotificationSeverity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: NotificationSeverity::Destructive,
        }
    }

    pub const fn is_destructive(&self) -> bool {
        matches!(self.severity, NotificationSeverity::Destructive)
    }
}

/// Current calendar date in the local offset, falling back to UTC when the
/// offset cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// `15/01/2024`
pub fn format_short_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// `15 de janeiro de 2024`
pub fn format_long_date(date: Date) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

fn month_name(month: Month) -> &'static str {
    MONTH_NAMES_PT_BR[usize::from(u8::from(month)) - 1]
}

fn matches_key_or_label(value: &str, key: &str, label: &str) -> bool {
    let needle = value.trim().to_lowercase();
    needle == key || needle == label.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{
        ApplicationLevel, ApplicationStatus, RecordStatus, Route, StatusCategory,
        format_long_date, format_short_date,
    };
    use time::{Date, Month};

    #[test]
    fn level_parse_accepts_key_and_label() {
        assert_eq!(
            ApplicationLevel::parse("mid_level"),
            Some(ApplicationLevel::MidLevel)
        );
        assert_eq!(
            ApplicationLevel::parse("  pleno "),
            Some(ApplicationLevel::MidLevel)
        );
        assert_eq!(
            ApplicationLevel::parse("SÊNIOR"),
            Some(ApplicationLevel::Senior)
        );
        assert_eq!(ApplicationLevel::parse("staff"), None);
    }

    #[test]
    fn status_parse_round_trips_every_label() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::parse(status.label()), Some(status));
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn status_categories_follow_dashboard_buckets() {
        assert_eq!(
            ApplicationStatus::Approved.category(),
            StatusCategory::Approved
        );
        for pending in [
            ApplicationStatus::Applied,
            ApplicationStatus::NoResponse,
            ApplicationStatus::PositiveResponse,
            ApplicationStatus::NextStage,
        ] {
            assert_eq!(pending.category(), StatusCategory::Pending, "{pending:?}");
        }
        for rejected in [
            ApplicationStatus::Rejected,
            ApplicationStatus::NegativeResponse,
        ] {
            assert_eq!(rejected.category(), StatusCategory::Rejected, "{rejected:?}");
        }
    }

    #[test]
    fn unknown_status_label_is_kept_verbatim() {
        let status = RecordStatus::from_label("Em análise");
        assert_eq!(status, RecordStatus::Unrecognized("Em análise".to_owned()));
        assert_eq!(status.label(), "Em análise");
        assert_eq!(status.category(), None);
    }

    #[test]
    fn routes_parse_their_own_paths() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
        assert_eq!(Route::parse("/settings"), None);
    }

    #[test]
    fn dates_format_in_pt_br() {
        let date = Date::from_calendar_date(2024, Month::March, 5).expect("valid date");
        assert_eq!(format_short_date(date), "05/03/2024");
        assert_eq!(format_long_date(date), "05 de março de 2024");
    }
}
