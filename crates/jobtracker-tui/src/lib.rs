// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use jobtracker_app::{
    AppCommand, AppEvent, AppState, ApplicationFormField, ApplicationListView, ApplicationRecord,
    ApplicationStats, ApplicationStatus, AuthField, AuthMode, Credentials, EmptyState,
    NAV_ITEMS, NewApplication, Notification, RecordStatus, Route, filter_applications,
    format_long_date, format_short_date, today,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(4);

const SIDEBAR_WIDTH: u16 = 28;
const SIDEBAR_COLLAPSED_WIDTH: u16 = 6;
const PASSWORD_MASK: char = '•';

/// Boundary between the terminal shell and whatever holds the records and
/// accepts sign-ins. The TUI validates input before calling into it.
pub trait AppRuntime {
    fn load_applications(&mut self) -> Result<Vec<ApplicationRecord>>;
    fn submit_application(&mut self, draft: &NewApplication) -> Result<()>;
    fn authenticate(&mut self, credentials: &Credentials) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq)]
struct ViewData {
    records: Vec<ApplicationRecord>,
    selected_row: usize,
    search_focused: bool,
    form_field: usize,
    auth_field: usize,
    help_visible: bool,
    status_token: u64,
    notification_ttl: Duration,
}

impl Default for ViewData {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            selected_row: 0,
            search_focused: false,
            form_field: 0,
            auth_field: 0,
            help_visible: false,
            status_token: 0,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    notification_ttl: Duration,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let result = run_terminal(state, runtime, notification_ttl);
    let restored = restore_terminal(disable_raw_mode, || {
        execute!(io::stdout(), terminal::LeaveAlternateScreen)
    });
    tracing::info!("terminal ui stopped");
    result.and(restored)
}

/// Runs both restore steps even when the first fails; the first error wins.
fn restore_terminal(
    disable_raw: impl FnOnce() -> io::Result<()>,
    leave_alternate_screen: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    let raw = disable_raw().context("disable raw mode");
    let screen = leave_alternate_screen().context("leave alternate screen");
    raw.and(screen)
}

fn run_terminal<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    notification_ttl: Duration,
) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        notification_ttl,
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(runtime, &mut view_data) {
        tracing::warn!(error = %format!("{error:#}"), "initial load failed");
        notify(
            state,
            &mut view_data,
            &internal_tx,
            Notification::destructive("Erro ao carregar", error.to_string()),
        );
    }
    tracing::info!(
        route = state.route.path(),
        records = view_data.records.len(),
        "terminal ui started"
    );

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_rx);
        state.dispatch(AppCommand::SetToday(today()));

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearNotification);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64, ttl: Duration) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(ttl);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn notify(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    notification: Notification,
) {
    let events = state.dispatch(AppCommand::Notify(notification));
    apply_events(view_data, internal_tx, &events);
}

fn refresh_view_data<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    view_data.records = runtime.load_applications()?;
    Ok(())
}

/// Keeps the view-side cursors and the notification timer in step with
/// what the state machine reported.
fn apply_events(view_data: &mut ViewData, internal_tx: &Sender<InternalEvent>, events: &[AppEvent]) {
    for event in events {
        match event {
            AppEvent::RouteChanged(route) => {
                tracing::info!(route = route.path(), "navigated");
                view_data.selected_row = 0;
                view_data.search_focused = false;
                view_data.form_field = 0;
                view_data.auth_field = 0;
            }
            AppEvent::AuthModeChanged(_) => view_data.auth_field = 0,
            AppEvent::ApplicationFormReset => view_data.form_field = 0,
            AppEvent::SearchChanged(_) => view_data.selected_row = 0,
            AppEvent::ValidationFailed(error) => {
                tracing::info!(%error, "validation failed");
            }
            AppEvent::SignedIn(mode) => {
                tracing::info!(mode = mode.title(), "signed in");
            }
            AppEvent::SignedOut => tracing::info!("signed out"),
            AppEvent::ApplicationSubmitted(draft) => {
                tracing::info!(company = %draft.company, "application submitted");
            }
            AppEvent::Notified(notification) => {
                tracing::debug!(
                    title = %notification.title,
                    destructive = notification.is_destructive(),
                    "notification shown"
                );
                view_data.status_token = view_data.status_token.saturating_add(1);
                schedule_status_clear(
                    internal_tx,
                    view_data.status_token,
                    view_data.notification_ttl,
                );
            }
            AppEvent::SidebarToggled(_)
            | AppEvent::ApplicationFormChanged
            | AppEvent::AuthFormChanged
            | AppEvent::NotificationCleared => {}
        }
    }
}

fn dispatch_and_refresh<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    apply_events(view_data, internal_tx, &events);

    if events.contains(&AppEvent::RouteChanged(Route::Dashboard))
        && let Err(error) = refresh_view_data(runtime, view_data)
    {
        tracing::warn!(error = %format!("{error:#}"), "reload failed");
        notify(
            state,
            view_data,
            internal_tx,
            Notification::destructive("Erro ao carregar", error.to_string()),
        );
    }
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if key.code == KeyCode::F(1) {
        view_data.help_visible = true;
        return false;
    }

    if state.route != Route::Auth && key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('b') => {
                dispatch_and_refresh(
                    state,
                    runtime,
                    view_data,
                    internal_tx,
                    AppCommand::ToggleSidebar,
                );
                return false;
            }
            KeyCode::Char('l') => {
                dispatch_and_refresh(state, runtime, view_data, internal_tx, AppCommand::Logout);
                return false;
            }
            _ => {}
        }
    }

    match state.route {
        Route::Auth => handle_auth_key(state, runtime, view_data, internal_tx, key),
        Route::Dashboard => handle_dashboard_key(state, runtime, view_data, internal_tx, key),
        Route::NewApplication => handle_form_key(state, runtime, view_data, internal_tx, key),
    }
    false
}

fn handle_auth_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let fields = AuthField::for_mode(state.auth_form.mode);
    let focused = fields[view_data.auth_field.min(fields.len() - 1)];

    let command = match (key.code, key.modifiers) {
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Some(AppCommand::ToggleAuthMode),
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Some(AppCommand::ToggleShowPassword),
        (KeyCode::Tab | KeyCode::Down, _) => {
            view_data.auth_field = (view_data.auth_field + 1) % fields.len();
            None
        }
        (KeyCode::BackTab | KeyCode::Up, _) => {
            view_data.auth_field = (view_data.auth_field + fields.len() - 1) % fields.len();
            None
        }
        (KeyCode::Enter, _) => {
            submit_auth_form(state, runtime, view_data, internal_tx);
            None
        }
        (KeyCode::Backspace, _) => Some(AppCommand::PopAuthChar(focused)),
        (KeyCode::Char(ch), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppCommand::PushAuthChar(focused, ch))
        }
        _ => None,
    };

    if let Some(command) = command {
        dispatch_and_refresh(state, runtime, view_data, internal_tx, command);
    }
}

fn submit_auth_form<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    if let Ok(credentials) = state.auth_form.validate()
        && let Err(error) = runtime.authenticate(&credentials)
    {
        tracing::warn!(error = %format!("{error:#}"), "authentication failed");
        notify(
            state,
            view_data,
            internal_tx,
            Notification::destructive("Falha na autenticação", error.to_string()),
        );
        return;
    }
    dispatch_and_refresh(state, runtime, view_data, internal_tx, AppCommand::SubmitAuth);
}

fn handle_dashboard_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    if view_data.search_focused {
        let command = match key.code {
            KeyCode::Esc => {
                view_data.search_focused = false;
                Some(AppCommand::ClearSearch)
            }
            KeyCode::Enter | KeyCode::Tab => {
                view_data.search_focused = false;
                None
            }
            KeyCode::Backspace => Some(AppCommand::PopSearchChar),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppCommand::PushSearchChar(ch))
            }
            _ => None,
        };
        if let Some(command) = command {
            dispatch_and_refresh(state, runtime, view_data, internal_tx, command);
        }
        return;
    }

    let row_count = visible_rows(state, view_data).len();
    match key.code {
        KeyCode::Char('/') => view_data.search_focused = true,
        KeyCode::Char('?') => view_data.help_visible = true,
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 {
                view_data.selected_row = (view_data.selected_row + 1).min(row_count - 1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.selected_row = view_data.selected_row.saturating_sub(1);
        }
        KeyCode::Char('g') => view_data.selected_row = 0,
        KeyCode::Char('G') => view_data.selected_row = row_count.saturating_sub(1),
        KeyCode::Char('n') | KeyCode::Char('2') => dispatch_and_refresh(
            state,
            runtime,
            view_data,
            internal_tx,
            AppCommand::Navigate(Route::NewApplication),
        ),
        KeyCode::Enter if row_count == 0 => dispatch_and_refresh(
            state,
            runtime,
            view_data,
            internal_tx,
            AppCommand::Navigate(Route::NewApplication),
        ),
        KeyCode::Char('e') | KeyCode::Char('d') => {
            let Some(company) = selected_record(state, view_data).map(|record| record.company.clone())
            else {
                return;
            };
            let action = if key.code == KeyCode::Char('e') {
                "Editar"
            } else {
                "Excluir"
            };
            notify(
                state,
                view_data,
                internal_tx,
                Notification::info(
                    "Em breve",
                    format!("{action} a candidatura para {company} ainda não está disponível."),
                ),
            );
        }
        KeyCode::Char('f') => notify(
            state,
            view_data,
            internal_tx,
            Notification::info("Em breve", "Filtros avançados ainda não estão disponíveis."),
        ),
        KeyCode::Esc => {
            dispatch_and_refresh(state, runtime, view_data, internal_tx, AppCommand::ClearSearch)
        }
        _ => {}
    }
}

fn handle_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let field_count = ApplicationFormField::ALL.len();
    let focused = ApplicationFormField::ALL[view_data.form_field.min(field_count - 1)];

    let command = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Some(AppCommand::Navigate(Route::Dashboard)),
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Some(AppCommand::ResetApplicationForm),
        (KeyCode::Tab | KeyCode::Down, _) => {
            view_data.form_field = (view_data.form_field + 1) % field_count;
            None
        }
        (KeyCode::BackTab | KeyCode::Up, _) => {
            view_data.form_field = (view_data.form_field + field_count - 1) % field_count;
            None
        }
        (KeyCode::Enter, _) => {
            submit_application_form(state, runtime, view_data, internal_tx);
            None
        }
        (code, modifiers) => form_field_command(focused, code, modifiers),
    };

    if let Some(command) = command {
        dispatch_and_refresh(state, runtime, view_data, internal_tx, command);
    }
}

fn form_field_command(
    field: ApplicationFormField,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Option<AppCommand> {
    match field {
        ApplicationFormField::Company => match code {
            KeyCode::Backspace => Some(AppCommand::PopCompanyChar),
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppCommand::PushCompanyChar(ch))
            }
            _ => None,
        },
        ApplicationFormField::Level => match code {
            KeyCode::Left | KeyCode::Char('h') => Some(AppCommand::CycleLevel(-1)),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                Some(AppCommand::CycleLevel(1))
            }
            _ => None,
        },
        ApplicationFormField::Status => match code {
            KeyCode::Left | KeyCode::Char('h') => Some(AppCommand::CycleStatus(-1)),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                Some(AppCommand::CycleStatus(1))
            }
            _ => None,
        },
        ApplicationFormField::AppliedOn => match code {
            KeyCode::Left | KeyCode::Char('h') => Some(AppCommand::ShiftAppliedOnDays(-1)),
            KeyCode::Right | KeyCode::Char('l') => Some(AppCommand::ShiftAppliedOnDays(1)),
            KeyCode::PageUp | KeyCode::Char('[') => Some(AppCommand::ShiftAppliedOnMonths(-1)),
            KeyCode::PageDown | KeyCode::Char(']') => Some(AppCommand::ShiftAppliedOnMonths(1)),
            _ => None,
        },
    }
}

fn submit_application_form<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    if let Ok(draft) = state.application_form.validate()
        && let Err(error) = runtime.submit_application(&draft)
    {
        tracing::warn!(
            company = %draft.company,
            error = %format!("{error:#}"),
            "application submission failed"
        );
        notify(
            state,
            view_data,
            internal_tx,
            Notification::destructive("Erro ao salvar", error.to_string()),
        );
        return;
    }
    dispatch_and_refresh(
        state,
        runtime,
        view_data,
        internal_tx,
        AppCommand::SubmitApplication,
    );
}

fn visible_rows<'a>(state: &AppState, view_data: &'a ViewData) -> Vec<&'a ApplicationRecord> {
    filter_applications(&view_data.records, &state.search)
}

fn selected_record<'a>(state: &AppState, view_data: &'a ViewData) -> Option<&'a ApplicationRecord> {
    visible_rows(state, view_data)
        .get(view_data.selected_row)
        .copied()
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    match state.route {
        Route::Auth => render_auth(frame, layout[0], state, view_data),
        Route::Dashboard | Route::NewApplication => {
            let sidebar_width = if state.sidebar_collapsed {
                SIDEBAR_COLLAPSED_WIDTH
            } else {
                SIDEBAR_WIDTH
            };
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
                .split(layout[0]);

            let sidebar = Paragraph::new(render_sidebar_text(state))
                .block(Block::default().borders(Borders::ALL).title("JobTracker"));
            frame.render_widget(sidebar, columns[0]);

            if state.route == Route::Dashboard {
                render_dashboard(frame, columns[1], state, view_data);
            } else {
                let form = Paragraph::new(render_form_text(state, view_data))
                    .wrap(Wrap { trim: false })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(Route::NewApplication.title()),
                    );
                frame.render_widget(form, columns[1]);
            }
        }
    }

    let status_style = match &state.notification {
        Some(notification) if notification.is_destructive() => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
        Some(_) => Style::default().fg(Color::Green),
        None => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(status_text(state, view_data))
        .style(status_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[1]);

    if view_data.help_visible {
        let area = centered_rect(70, 70, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("ajuda").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_auth(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let area = centered_rect(60, 70, area);
    let auth = Paragraph::new(render_auth_text(state, view_data))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(state.auth_form.mode.title())
                .style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(auth, area);
}

fn render_dashboard(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let header = Paragraph::new(
        "Gerencie e acompanhe o status de suas candidaturas\nn Nova Candidatura",
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Route::Dashboard.title()),
    );
    frame.render_widget(header, sections[0]);

    let list = ApplicationListView::build(&view_data.records, &state.search);
    let cards = stat_cards(&list.stats);
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, cards.len() as u32); 4])
        .split(sections[1]);
    for (card, card_area) in cards.iter().zip(card_areas.iter()) {
        let widget = Paragraph::new(format!("{}\n{}", card.value, card.caption))
            .style(Style::default().fg(card.color))
            .block(Block::default().borders(Borders::ALL).title(card.title));
        frame.render_widget(widget, *card_area);
    }

    let search_style = if view_data.search_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let search = Paragraph::new(render_search_text(state, view_data))
        .style(search_style)
        .block(Block::default().borders(Borders::ALL).title("Buscar"));
    frame.render_widget(search, sections[2]);

    render_applications_table(frame, sections[3], &list, view_data);
}

fn render_applications_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    list: &ApplicationListView<'_>,
    view_data: &ViewData,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Suas Candidaturas");

    if let Some(empty_state) = list.empty_state() {
        let empty = Paragraph::new(render_empty_state_text(empty_state))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        ["Empresa", "Tipo", "Data", "Status", "Ações"].map(|label| {
            Cell::from(label).style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        }),
    );

    // Borders take two lines, the header one more.
    let capacity = usize::from(area.height.saturating_sub(3)).max(1);
    let start = table_window_start(view_data.selected_row, list.rows.len(), capacity);
    let body = list
        .rows
        .iter()
        .enumerate()
        .skip(start)
        .take(capacity)
        .map(|(index, record)| {
            let selected = index == view_data.selected_row;
            let [company, level, applied_on, status, actions] =
                application_row_cells(record, selected);
            let mut row_style = Style::default();
            if selected {
                row_style = row_style.bg(Color::DarkGray);
            }
            Row::new(vec![
                Cell::from(company).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(level),
                Cell::from(applied_on),
                Cell::from(status).style(Style::default().fg(status_color(&record.status))),
                Cell::from(actions).style(Style::default().fg(Color::DarkGray)),
            ])
            .style(row_style)
        });

    let widths = [
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(18),
        Constraint::Length(20),
    ];
    let table = Table::new(body, widths).header(header).block(block);
    frame.render_widget(table, area);
}

/// First row to draw so that `selected` lands inside a window of
/// `capacity` rows.
fn table_window_start(selected: usize, len: usize, capacity: usize) -> usize {
    if capacity == 0 || len <= capacity {
        return 0;
    }
    selected.min(len - 1).saturating_sub(capacity - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StatCard {
    title: &'static str,
    value: usize,
    caption: &'static str,
    color: Color,
}

fn stat_cards(stats: &ApplicationStats) -> [StatCard; 4] {
    [
        StatCard {
            title: "Total",
            value: stats.total,
            caption: "candidaturas",
            color: Color::White,
        },
        StatCard {
            title: "Aprovadas",
            value: stats.approved,
            caption: "aprovações",
            color: Color::Green,
        },
        StatCard {
            title: "Pendentes",
            value: stats.pending,
            caption: "aguardando",
            color: Color::Yellow,
        },
        StatCard {
            title: "Reprovadas",
            value: stats.rejected,
            caption: "rejeitadas",
            color: Color::Red,
        },
    ]
}

fn status_color(status: &RecordStatus) -> Color {
    match status.known() {
        Some(ApplicationStatus::Applied) => Color::Blue,
        Some(ApplicationStatus::NoResponse) => Color::Gray,
        Some(ApplicationStatus::PositiveResponse) => Color::Cyan,
        Some(ApplicationStatus::NegativeResponse) => Color::LightRed,
        Some(ApplicationStatus::NextStage) => Color::Yellow,
        Some(ApplicationStatus::Rejected) => Color::Red,
        Some(ApplicationStatus::Approved) => Color::Green,
        None => Color::DarkGray,
    }
}

fn application_row_cells(record: &ApplicationRecord, selected: bool) -> [String; 5] {
    [
        record.company.clone(),
        record.level.label().to_owned(),
        format_short_date(record.applied_on),
        record.status.label().to_owned(),
        if selected {
            "e editar  d excluir".to_owned()
        } else {
            String::new()
        },
    ]
}

fn render_empty_state_text(empty_state: EmptyState) -> String {
    let mut lines = vec![
        String::new(),
        empty_state.title().to_owned(),
        empty_state.hint().to_owned(),
    ];
    if empty_state == EmptyState::NoRecords {
        lines.push(String::new());
        lines.push("enter Adicionar Candidatura".to_owned());
    }
    lines.join("\n")
}

fn render_search_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.search_focused {
        format!("{}▏", state.search)
    } else if state.search.is_empty() {
        "Buscar por empresa... (/)".to_owned()
    } else {
        state.search.clone()
    }
}

fn render_sidebar_text(state: &AppState) -> String {
    let mut lines = Vec::with_capacity(NAV_ITEMS.len() + 2);
    for (index, item) in NAV_ITEMS.iter().enumerate() {
        let marker = if item.route == state.route { "▸" } else { " " };
        if state.sidebar_collapsed {
            lines.push(format!("{marker}{}", index + 1));
        } else {
            lines.push(format!("{marker} {}", item.title));
        }
    }
    lines.push(String::new());
    if state.sidebar_collapsed {
        lines.push(" ⏻".to_owned());
    } else {
        lines.push("  Sair (ctrl+l)".to_owned());
    }
    lines.join("\n")
}

fn render_auth_text(state: &AppState, view_data: &ViewData) -> String {
    let form = &state.auth_form;
    let (heading, subtitle, switch_hint) = match form.mode {
        AuthMode::SignIn => (
            "Bem-vindo de volta",
            "Acesse seu dashboard de candidaturas",
            "Não tem conta? ctrl+r Criar conta",
        ),
        AuthMode::Register => (
            "Crie sua conta",
            "Comece a organizar suas candidaturas",
            "Já tem conta? ctrl+r Entrar",
        ),
    };

    let mut lines = vec![
        "JobTracker".to_owned(),
        heading.to_owned(),
        subtitle.to_owned(),
        String::new(),
    ];
    let fields = AuthField::for_mode(form.mode);
    for (index, field) in fields.iter().enumerate() {
        let cursor = if index == view_data.auth_field {
            "›"
        } else {
            " "
        };
        let value = form.field_value(*field);
        let shown = if *field == AuthField::Password && !form.show_password {
            PASSWORD_MASK.to_string().repeat(value.chars().count())
        } else {
            value.to_owned()
        };
        lines.push(format!("{cursor} {}: {shown}", field.label()));
    }
    let checkbox = if form.show_password { "x" } else { " " };
    lines.push(format!("  [{checkbox}] mostrar senha (ctrl+p)"));
    lines.push(String::new());
    lines.push(format!("enter {}", form.mode.title()));
    lines.push(switch_hint.to_owned());
    lines.join("\n")
}

fn form_field_hint(field: ApplicationFormField) -> &'static str {
    match field {
        ApplicationFormField::Company => "Nome da empresa para qual você se candidatou",
        ApplicationFormField::Level => "Nível de senioridade da vaga",
        ApplicationFormField::AppliedOn => "Quando você se candidatou para a vaga",
        ApplicationFormField::Status => "Status atual do processo seletivo",
    }
}

fn form_field_value(state: &AppState, field: ApplicationFormField, focused: bool) -> String {
    let form = &state.application_form;
    match field {
        ApplicationFormField::Company if form.company.is_empty() && !focused => {
            "Ex: Google, Microsoft, Amazon...".to_owned()
        }
        ApplicationFormField::Company if focused => format!("{}▏", form.company),
        ApplicationFormField::Company => form.company.clone(),
        ApplicationFormField::Level => form
            .level
            .map_or("Selecione o tipo", |level| level.label())
            .to_owned(),
        ApplicationFormField::AppliedOn => format_long_date(form.applied_on),
        ApplicationFormField::Status => form
            .status
            .map_or("Selecione o status", |status| status.label())
            .to_owned(),
    }
}

fn render_form_text(state: &AppState, view_data: &ViewData) -> String {
    let mut lines = vec![
        "Adicione uma nova candidatura ao seu dashboard".to_owned(),
        String::new(),
        "Nova Candidatura".to_owned(),
        "Preencha as informações da vaga para a qual você se candidatou".to_owned(),
        String::new(),
    ];
    for (index, field) in ApplicationFormField::ALL.iter().enumerate() {
        let focused = index == view_data.form_field;
        let cursor = if focused { "›" } else { " " };
        let required = if field.required() { " *" } else { "" };
        let value = form_field_value(state, *field, focused);
        let value = if focused && *field != ApplicationFormField::Company {
            format!("‹ {value} ›")
        } else {
            value
        };
        lines.push(format!("{cursor} {}{required}: {value}", field.label()));
        lines.push(format!("    {}", form_field_hint(*field)));
    }
    lines.extend([
        String::new(),
        "enter Salvar Candidatura | esc Cancelar | ctrl+r limpar".to_owned(),
        String::new(),
        "Dicas".to_owned(),
        "• Mantenha sempre seus dados atualizados para um melhor acompanhamento".to_owned(),
        "• Use o status \"Próxima fase\" quando avançar no processo seletivo".to_owned(),
    ]);
    lines.join("\n")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if let Some(notification) = &state.notification {
        return format!("{}  {}", notification.title, notification.description);
    }
    let hints = match state.route {
        Route::Auth => "tab campo | enter enviar | ctrl+r alternar modo | ctrl+p senha | ctrl+q sair",
        Route::Dashboard if view_data.search_focused => {
            "digite para buscar | enter confirmar | esc limpar"
        }
        Route::Dashboard => {
            "/ buscar | j/k linha | n nova | e/d ações | ctrl+b menu | ctrl+l sair | F1 ajuda | ctrl+q"
        }
        Route::NewApplication => {
            "tab campo | ←/→ alterar | [/] mês | enter salvar | esc cancelar | F1 ajuda | ctrl+q"
        }
    };
    format!("{} | {hints}", state.route.path())
}

fn help_overlay_text() -> String {
    [
        "geral",
        "  F1          mostrar/ocultar ajuda",
        "  ctrl+q      encerrar",
        "  ctrl+b      recolher menu lateral",
        "  ctrl+l      sair da conta",
        "",
        "entrar",
        "  tab/↑/↓     trocar de campo",
        "  ctrl+r      alternar entre Entrar e Criar conta",
        "  ctrl+p      mostrar senha",
        "  enter       enviar",
        "",
        "dashboard",
        "  /           buscar por empresa",
        "  j/k g/G     mover seleção",
        "  n           Nova Candidatura",
        "  e/d         editar/excluir (em breve)",
        "  esc         limpar busca",
        "",
        "cadastrar candidatura",
        "  tab/↑/↓     trocar de campo",
        "  ←/→         alterar tipo, status ou dia",
        "  [/]         mês anterior/seguinte",
        "  ctrl+r      limpar formulário",
        "  enter       salvar",
        "  esc         cancelar",
    ]
    .join("\n")
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
