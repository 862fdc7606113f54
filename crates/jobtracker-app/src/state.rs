// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;

use crate::{
    ApplicationFormInput, AuthField, AuthFormInput, AuthMode, NewApplication, Notification, Route,
    ValidationError, today,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub route: Route,
    pub sidebar_collapsed: bool,
    pub search: String,
    pub application_form: ApplicationFormInput,
    pub auth_form: AuthFormInput,
    pub notification: Option<Notification>,
    pub today: Date,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(today())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Navigate(Route),
    ToggleSidebar,
    PushSearchChar(char),
    PopSearchChar,
    ClearSearch,
    PushCompanyChar(char),
    PopCompanyChar,
    CycleLevel(isize),
    CycleStatus(isize),
    ShiftAppliedOnDays(i64),
    ShiftAppliedOnMonths(i32),
    ResetApplicationForm,
    SubmitApplication,
    ToggleAuthMode,
    ToggleShowPassword,
    PushAuthChar(AuthField, char),
    PopAuthChar(AuthField),
    SubmitAuth,
    Logout,
    Notify(Notification),
    ClearNotification,
    /// Moves the calendar date used for new forms.
    SetToday(Date),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    RouteChanged(Route),
    SidebarToggled(bool),
    SearchChanged(String),
    ApplicationFormChanged,
    ApplicationFormReset,
    ApplicationSubmitted(NewApplication),
    AuthModeChanged(AuthMode),
    AuthFormChanged,
    SignedIn(AuthMode),
    SignedOut,
    ValidationFailed(ValidationError),
    Notified(Notification),
    NotificationCleared,
}

impl AppState {
    pub fn new(today: Date) -> Self {
        Self {
            route: Route::Auth,
            sidebar_collapsed: false,
            search: String::new(),
            application_form: ApplicationFormInput::blank(today),
            auth_form: AuthFormInput::default(),
            notification: None,
            today,
        }
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::Navigate(route) => self.navigate(route).into_iter().collect(),
            AppCommand::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                vec![AppEvent::SidebarToggled(self.sidebar_collapsed)]
            }
            AppCommand::PushSearchChar(ch) => {
                self.search.push(ch);
                vec![AppEvent::SearchChanged(self.search.clone())]
            }
            AppCommand::PopSearchChar => {
                if self.search.pop().is_none() {
                    return Vec::new();
                }
                vec![AppEvent::SearchChanged(self.search.clone())]
            }
            AppCommand::ClearSearch => {
                if self.search.is_empty() {
                    return Vec::new();
                }
                self.search.clear();
                vec![AppEvent::SearchChanged(String::new())]
            }
            AppCommand::PushCompanyChar(ch) => {
                self.application_form.company.push(ch);
                vec![AppEvent::ApplicationFormChanged]
            }
            AppCommand::PopCompanyChar => {
                if self.application_form.company.pop().is_none() {
                    return Vec::new();
                }
                vec![AppEvent::ApplicationFormChanged]
            }
            AppCommand::CycleLevel(delta) => {
                self.application_form.cycle_level(delta);
                vec![AppEvent::ApplicationFormChanged]
            }
            AppCommand::CycleStatus(delta) => {
                self.application_form.cycle_status(delta);
                vec![AppEvent::ApplicationFormChanged]
            }
            AppCommand::ShiftAppliedOnDays(days) => {
                self.application_form.shift_days(days);
                vec![AppEvent::ApplicationFormChanged]
            }
            AppCommand::ShiftAppliedOnMonths(months) => {
                self.application_form.shift_months(months);
                vec![AppEvent::ApplicationFormChanged]
            }
            AppCommand::ResetApplicationForm => {
                self.application_form = ApplicationFormInput::blank(self.today);
                vec![AppEvent::ApplicationFormReset]
            }
            AppCommand::SubmitApplication => self.submit_application(),
            AppCommand::ToggleAuthMode => {
                self.auth_form.mode = self.auth_form.mode.toggled();
                vec![AppEvent::AuthModeChanged(self.auth_form.mode)]
            }
            AppCommand::ToggleShowPassword => {
                self.auth_form.show_password = !self.auth_form.show_password;
                vec![AppEvent::AuthFormChanged]
            }
            AppCommand::PushAuthChar(field, ch) => {
                self.auth_form.field_value_mut(field).push(ch);
                vec![AppEvent::AuthFormChanged]
            }
            AppCommand::PopAuthChar(field) => {
                if self.auth_form.field_value_mut(field).pop().is_none() {
                    return Vec::new();
                }
                vec![AppEvent::AuthFormChanged]
            }
            AppCommand::SubmitAuth => self.submit_auth(),
            AppCommand::Logout => {
                let mut events = vec![
                    AppEvent::SignedOut,
                    self.notify(Notification::info(
                        "Logout realizado",
                        "Você foi desconectado com sucesso.",
                    )),
                ];
                events.extend(self.navigate(Route::Auth));
                events
            }
            AppCommand::Notify(notification) => vec![self.notify(notification)],
            AppCommand::ClearNotification => {
                self.notification = None;
                vec![AppEvent::NotificationCleared]
            }
            AppCommand::SetToday(today) => {
                self.today = today;
                Vec::new()
            }
        }
    }

    /// Entering a route mounts fresh page state and leaving it discards the
    /// old one, so search text and form input never outlive their page.
    fn navigate(&mut self, route: Route) -> Option<AppEvent> {
        if self.route == route {
            return None;
        }
        match self.route {
            Route::Auth => self.auth_form = AuthFormInput::default(),
            Route::Dashboard => self.search.clear(),
            Route::NewApplication => {}
        }
        if route == Route::NewApplication {
            self.application_form = ApplicationFormInput::blank(self.today);
        }
        self.route = route;
        Some(AppEvent::RouteChanged(route))
    }

    fn submit_application(&mut self) -> Vec<AppEvent> {
        let draft = match self.application_form.validate() {
            Ok(draft) => draft,
            Err(error) => return self.reject(error),
        };

        let saved = Notification::info(
            "Candidatura salva!",
            format!(
                "Candidatura para {} foi adicionada com sucesso.",
                draft.company
            ),
        );
        let mut events = vec![AppEvent::ApplicationSubmitted(draft), self.notify(saved)];
        self.application_form = ApplicationFormInput::blank(self.today);
        events.push(AppEvent::ApplicationFormReset);
        events.extend(self.navigate(Route::Dashboard));
        events
    }

    fn submit_auth(&mut self) -> Vec<AppEvent> {
        let mode = match self.auth_form.validate() {
            Ok(credentials) => credentials.mode,
            Err(error) => return self.reject(error),
        };

        let welcome = match mode {
            AuthMode::SignIn => Notification::info("Login realizado!", "Bem-vindo ao JobTracker!"),
            AuthMode::Register => {
                Notification::info("Conta criada!", "Sua conta foi criada com sucesso.")
            }
        };
        let mut events = vec![AppEvent::SignedIn(mode), self.notify(welcome)];
        events.extend(self.navigate(Route::Dashboard));
        events
    }

    fn reject(&mut self, error: ValidationError) -> Vec<AppEvent> {
        vec![
            AppEvent::ValidationFailed(error),
            self.notify(Notification::destructive(
                "Erro de validação",
                error.description(),
            )),
        ]
    }

    fn notify(&mut self, notification: Notification) -> AppEvent {
        self.notification = Some(notification.clone());
        AppEvent::Notified(notification)
    }
}
