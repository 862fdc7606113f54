// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;

use thiserror::Error;
use time::{Date, Duration, Month};

use crate::{ApplicationLevel, ApplicationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("company, level and status are required")]
    MissingFields,
    #[error("email and password are required, plus name when registering")]
    MissingCredentials,
}

impl ValidationError {
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingFields => "Por favor, preencha todos os campos obrigatórios.",
            Self::MissingCredentials => "Por favor, preencha todos os campos.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationFormField {
    Company,
    Level,
    AppliedOn,
    Status,
}

impl ApplicationFormField {
    pub const ALL: [Self; 4] = [Self::Company, Self::Level, Self::AppliedOn, Self::Status];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "Empresa",
            Self::Level => "Tipo de vaga",
            Self::AppliedOn => "Data da candidatura",
            Self::Status => "Status",
        }
    }

    pub const fn required(self) -> bool {
        !matches!(self, Self::AppliedOn)
    }
}

/// A new application that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub company: String,
    pub level: ApplicationLevel,
    pub status: ApplicationStatus,
    pub applied_on: Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationFormInput {
    pub company: String,
    pub level: Option<ApplicationLevel>,
    pub status: Option<ApplicationStatus>,
    pub applied_on: Date,
}

impl ApplicationFormInput {
    pub fn blank(today: Date) -> Self {
        Self {
            company: String::new(),
            level: None,
            status: None,
            applied_on: today,
        }
    }

    pub fn validate(&self) -> Result<NewApplication, ValidationError> {
        let company = self.company.trim();
        match (company.is_empty(), self.level, self.status) {
            (false, Some(level), Some(status)) => Ok(NewApplication {
                company: company.to_owned(),
                level,
                status,
                applied_on: self.applied_on,
            }),
            _ => Err(ValidationError::MissingFields),
        }
    }

    pub fn cycle_level(&mut self, delta: isize) {
        self.level = cycle_optional(&ApplicationLevel::ALL, self.level, delta);
    }

    pub fn cycle_status(&mut self, delta: isize) {
        self.status = cycle_optional(&ApplicationStatus::ALL, self.status, delta);
    }

    pub fn shift_days(&mut self, days: i64) {
        if let Some(date) = self.applied_on.checked_add(Duration::days(days)) {
            self.applied_on = date;
        }
    }

    pub fn shift_months(&mut self, months: i32) {
        if let Some(date) = shift_date_by_months(self.applied_on, months) {
            self.applied_on = date;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    Register,
}

impl AuthMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register => Self::SignIn,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Entrar",
            Self::Register => "Criar conta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

impl AuthField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Email => "Email",
            Self::Password => "Senha",
        }
    }

    /// Fields shown for `mode`, in focus order.
    pub const fn for_mode(mode: AuthMode) -> &'static [Self] {
        match mode {
            AuthMode::SignIn => &[Self::Email, Self::Password],
            AuthMode::Register => &[Self::Name, Self::Email, Self::Password],
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("mode", &self.mode)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFormInput {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub show_password: bool,
}

impl Default for AuthFormInput {
    fn default() -> Self {
        Self {
            mode: AuthMode::SignIn,
            email: String::new(),
            password: String::new(),
            name: String::new(),
            show_password: false,
        }
    }
}

impl AuthFormInput {
    pub fn field_value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    pub fn field_value_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    /// Presence checks only. No credential is verified anywhere.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let registering = self.mode == AuthMode::Register;
        if self.email.is_empty()
            || self.password.is_empty()
            || (registering && self.name.is_empty())
        {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(Credentials {
            mode: self.mode,
            email: self.email.clone(),
            password: self.password.clone(),
            name: registering.then(|| self.name.clone()),
        })
    }
}

fn cycle_optional<T: Copy + PartialEq>(all: &[T], current: Option<T>, delta: isize) -> Option<T> {
    // Slot 0 is "unset"; slots 1..=len map onto `all`.
    let slots = all.len() as isize + 1;
    let position = current
        .and_then(|value| all.iter().position(|item| *item == value))
        .map_or(0, |index| index as isize + 1);
    let next = (position + delta).rem_euclid(slots) as usize;
    next.checked_sub(1).map(|index| all[index])
}

pub fn shift_date_by_months(date: Date, months: i32) -> Option<Date> {
    let month_index = i32::from(u8::from(date.month())) - 1 + months;
    let year = date.year() + month_index.div_euclid(12);
    let month = Month::try_from(u8::try_from(month_index.rem_euclid(12) + 1).ok()?).ok()?;
    let day = date.day().min(time::util::days_in_year_month(year, month));
    Date::from_calendar_date(year, month, day).ok()
}
