// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use riskwise_app::{
    AppCommand, AppState, Company, ComparisonRow, LeadFormInput, ModalState, Outcome, format_inr,
};
use riskwise_catalog::{Catalog, filter_companies, sort_comparisons};
use std::collections::BTreeMap;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;

pub const PHONE_LINK: &str = "tel:+919876543210";
pub const WHATSAPP_LINK: &str = "https://wa.me/919876543210";
pub const QUICK_QUOTE_SOURCE: &str = "Website - Quick Quote";
pub const CONTACT_SOURCE: &str = "Contact Page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEvent {
    pub request_id: u64,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    Lead(LeadEvent),
}

/// Seam between the UI loop and the relay. The default spawn submits inline
/// and reports through the internal channel; the binary overrides it with a
/// worker thread so the event loop never blocks on the network.
pub trait LeadGateway {
    fn submit_lead(&mut self, fields: &BTreeMap<String, String>, source: &str) -> Outcome;

    fn spawn_lead_submission(
        &mut self,
        request_id: u64,
        fields: BTreeMap<String, String>,
        source: &str,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let outcome = self.submit_lead(&fields, source);
        tx.send(InternalEvent::Lead(LeadEvent {
            request_id,
            outcome,
        }))
        .map_err(|_| anyhow::anyhow!("lead event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    #[default]
    Companies,
    Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LeadField {
    #[default]
    Name,
    Phone,
    Email,
    Plan,
    Note,
}

impl LeadField {
    const ALL: [Self; 5] = [Self::Name, Self::Phone, Self::Email, Self::Plan, Self::Note];

    const fn label(self) -> &'static str {
        match self {
            Self::Name => "full name",
            Self::Phone => "mobile",
            Self::Email => "email",
            Self::Plan => "plan",
            Self::Note => "message",
        }
    }

    fn shifted(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let current = Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0) as isize;
        Self::ALL[(current + delta).rem_euclid(len) as usize]
    }
}

/// Which surface opened the lead overlay. The relay tags each lead with the
/// matching source string so downstream templates can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LeadEntry {
    #[default]
    QuickQuote,
    Contact,
}

impl LeadEntry {
    const fn source(self) -> &'static str {
        match self {
            Self::QuickQuote => QUICK_QUOTE_SOURCE,
            Self::Contact => CONTACT_SOURCE,
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::QuickQuote => "request a callback",
            Self::Contact => "contact us",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct LeadUiState {
    form: LeadFormInput,
    active_field: LeadField,
    entry: LeadEntry,
    in_flight: Option<u64>,
    next_request_id: u64,
}

impl LeadUiState {
    fn field_mut(&mut self) -> &mut String {
        match self.active_field {
            LeadField::Name => &mut self.form.name,
            LeadField::Phone => &mut self.form.phone,
            LeadField::Email => &mut self.form.email,
            LeadField::Plan => &mut self.form.plan,
            LeadField::Note => &mut self.form.note,
        }
    }

    fn field_value(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.form.name,
            LeadField::Phone => &self.form.phone,
            LeadField::Email => &self.form.email,
            LeadField::Plan => &self.form.plan,
            LeadField::Note => &self.form.note,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    companies: Vec<Company>,
    comparisons: Vec<ComparisonRow>,
    focus: PaneFocus,
    company_cursor: usize,
    comparison_cursor: usize,
    modal_cursor: usize,
    lead: LeadUiState,
    search_editing: bool,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<G: LeadGateway>(
    state: &mut AppState,
    catalog: &Catalog,
    gateway: &mut G,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();
    refresh_derived(state, catalog, &mut view_data);

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, catalog, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, catalog, gateway, &mut view_data, &internal_tx, key)
                    {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Lead(event) => handle_lead_event(state, view_data, tx, event),
        }
    }
}

fn handle_lead_event(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    event: LeadEvent,
) {
    if view_data.lead.in_flight != Some(event.request_id) {
        // Superseded submission; the active one will report on its own.
        return;
    }
    view_data.lead.in_flight = None;

    if event.outcome.is_sent() {
        view_data.lead.form = LeadFormInput::default();
        view_data.lead.active_field = LeadField::Name;
    }
    emit_status(state, view_data, tx, event.outcome.message().to_owned());
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn refresh_derived(state: &AppState, catalog: &Catalog, view_data: &mut ViewData) {
    view_data.companies = filter_companies(
        catalog.companies(),
        state.selection.category,
        &state.selection.search,
    )
    .into_iter()
    .cloned()
    .collect();
    view_data.comparisons = sort_comparisons(catalog.comparisons(), state.selection.sort);

    view_data.company_cursor = view_data
        .company_cursor
        .min(view_data.companies.len().saturating_sub(1));
    view_data.comparison_cursor = view_data
        .comparison_cursor
        .min(view_data.comparisons.len().saturating_sub(1));
}

fn move_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = cursor as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

fn handle_key_event<G: LeadGateway>(
    state: &mut AppState,
    catalog: &Catalog,
    gateway: &mut G,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if state.lead_open {
        handle_lead_overlay_key(state, gateway, view_data, internal_tx, key);
        return false;
    }

    if view_data.search_editing {
        handle_search_key(state, catalog, view_data, key);
        return false;
    }

    match state.modal.clone() {
        ModalState::PlanOpen(company_id, policy_id) => {
            let plan_name = catalog
                .find_policy(&company_id, policy_id)
                .map(|policy| policy.name.clone());
            match key.code {
                KeyCode::Esc => {
                    state.dispatch(AppCommand::ClosePlan);
                }
                KeyCode::Char('b') | KeyCode::Backspace => {
                    state.dispatch(AppCommand::BackToCompany);
                }
                KeyCode::Char('r') | KeyCode::Char('l') => {
                    if let Some(name) = plan_name {
                        view_data.lead.form.plan = name;
                    }
                    view_data.lead.entry = LeadEntry::QuickQuote;
                    state.dispatch(AppCommand::OpenLead);
                }
                _ => {}
            }
            return false;
        }
        ModalState::CompanyOpen(company_id) => {
            let policy_count = catalog.policies_for(&company_id).len();
            match key.code {
                KeyCode::Esc => {
                    state.dispatch(AppCommand::CloseCompany);
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    view_data.modal_cursor = move_cursor(view_data.modal_cursor, 1, policy_count);
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    view_data.modal_cursor = move_cursor(view_data.modal_cursor, -1, policy_count);
                }
                KeyCode::Enter => {
                    let policies = catalog.policies_for(&company_id);
                    if let Some(policy) = policies.get(view_data.modal_cursor) {
                        let policy_id = policy.id;
                        state.dispatch(AppCommand::OpenPlan(company_id.clone(), policy_id));
                    }
                }
                KeyCode::Char('l') => {
                    view_data.lead.entry = LeadEntry::QuickQuote;
                    state.dispatch(AppCommand::OpenLead);
                }
                _ => {}
            }
            return false;
        }
        ModalState::Closed => {}
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('/'), KeyModifiers::NONE) => {
            view_data.search_editing = true;
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::CycleCategory);
            refresh_derived(state, catalog, view_data);
            let label = state.selection.category.label();
            emit_status(state, view_data, internal_tx, format!("category: {label}"));
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::CycleSort);
            refresh_derived(state, catalog, view_data);
            let label = state.selection.sort.label();
            emit_status(state, view_data, internal_tx, format!("sort: {label}"));
        }
        (KeyCode::Char('l'), KeyModifiers::NONE) => {
            view_data.lead.entry = LeadEntry::QuickQuote;
            state.dispatch(AppCommand::OpenLead);
        }
        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            view_data.lead.entry = LeadEntry::Contact;
            state.dispatch(AppCommand::OpenLead);
        }
        (KeyCode::Char('?'), KeyModifiers::NONE) => {
            view_data.help_visible = true;
        }
        (KeyCode::Tab, _) => {
            view_data.focus = match view_data.focus {
                PaneFocus::Companies => PaneFocus::Comparison,
                PaneFocus::Comparison => PaneFocus::Companies,
            };
        }
        (KeyCode::Char('j') | KeyCode::Down, _) => match view_data.focus {
            PaneFocus::Companies => {
                view_data.company_cursor =
                    move_cursor(view_data.company_cursor, 1, view_data.companies.len());
            }
            PaneFocus::Comparison => {
                view_data.comparison_cursor =
                    move_cursor(view_data.comparison_cursor, 1, view_data.comparisons.len());
            }
        },
        (KeyCode::Char('k') | KeyCode::Up, _) => match view_data.focus {
            PaneFocus::Companies => {
                view_data.company_cursor =
                    move_cursor(view_data.company_cursor, -1, view_data.companies.len());
            }
            PaneFocus::Comparison => {
                view_data.comparison_cursor = move_cursor(
                    view_data.comparison_cursor,
                    -1,
                    view_data.comparisons.len(),
                );
            }
        },
        (KeyCode::Enter, _) => match view_data.focus {
            PaneFocus::Companies => {
                if let Some(company) = view_data.companies.get(view_data.company_cursor) {
                    view_data.modal_cursor = 0;
                    state.dispatch(AppCommand::OpenCompany(company.id.clone()));
                }
            }
            PaneFocus::Comparison => {
                if let Some(row) = view_data.comparisons.get(view_data.comparison_cursor) {
                    state.dispatch(AppCommand::OpenPlan(row.company_id.clone(), row.policy_id));
                }
            }
        },
        (KeyCode::Esc, _) => {
            state.dispatch(AppCommand::ClearStatus);
        }
        _ => {}
    }

    false
}

fn handle_search_key(state: &mut AppState, catalog: &Catalog, view_data: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            view_data.search_editing = false;
        }
        KeyCode::Backspace => {
            let mut search = state.selection.search.clone();
            search.pop();
            state.dispatch(AppCommand::SetSearch(search));
            refresh_derived(state, catalog, view_data);
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut search = state.selection.search.clone();
            search.push(ch);
            state.dispatch(AppCommand::SetSearch(search));
            refresh_derived(state, catalog, view_data);
        }
        _ => {}
    }
}

fn handle_lead_overlay_key<G: LeadGateway>(
    state: &mut AppState,
    gateway: &mut G,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            state.dispatch(AppCommand::CloseLead);
        }
        KeyCode::Tab => {
            view_data.lead.active_field = view_data.lead.active_field.shifted(1);
        }
        KeyCode::BackTab => {
            view_data.lead.active_field = view_data.lead.active_field.shifted(-1);
        }
        KeyCode::Backspace => {
            view_data.lead.field_mut().pop();
        }
        KeyCode::Enter => {
            submit_lead(state, gateway, view_data, internal_tx);
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.lead.field_mut().push(ch);
        }
        _ => {}
    }
}

fn submit_lead<G: LeadGateway>(
    state: &mut AppState,
    gateway: &mut G,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    if view_data.lead.in_flight.is_some() {
        emit_status(state, view_data, internal_tx, "submission in progress");
        return;
    }

    if let Err(error) = view_data.lead.form.validate() {
        emit_status(state, view_data, internal_tx, format!("form invalid: {error}"));
        return;
    }

    let request_id = view_data.lead.next_request_id;
    view_data.lead.next_request_id += 1;
    view_data.lead.in_flight = Some(request_id);

    let fields = view_data.lead.form.to_fields();
    let source = view_data.lead.entry.source();
    if let Err(error) =
        gateway.spawn_lead_submission(request_id, fields, source, internal_tx.clone())
    {
        view_data.lead.in_flight = None;
        emit_status(state, view_data, internal_tx, format!("submit failed: {error}"));
        return;
    }
    emit_status(state, view_data, internal_tx, "sending...");
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, catalog: &Catalog, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_text(state, view_data))
        .block(Block::default().title("riskwise").borders(Borders::ALL))
        .style(Style::default().fg(Color::White));
    frame.render_widget(header, layout[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[1]);

    let companies_style = pane_style(view_data.focus == PaneFocus::Companies);
    let companies = Paragraph::new(companies_pane_text(view_data)).block(
        Block::default()
            .title("insurers")
            .borders(Borders::ALL)
            .style(companies_style),
    );
    frame.render_widget(companies, panes[0]);

    let comparison_style = pane_style(view_data.focus == PaneFocus::Comparison);
    let comparison = Paragraph::new(comparison_pane_text(view_data)).block(
        Block::default()
            .title("compare plans")
            .borders(Borders::ALL)
            .style(comparison_style),
    );
    frame.render_widget(comparison, panes[1]);

    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    match &state.modal {
        ModalState::Closed => {}
        ModalState::CompanyOpen(company_id) => {
            if let Some(text) = company_modal_text(catalog, company_id, view_data.modal_cursor) {
                let area = centered_rect(70, 60, frame.area());
                frame.render_widget(Clear, area);
                let modal = Paragraph::new(text).block(
                    Block::default()
                        .title("insurer")
                        .borders(Borders::ALL)
                        .style(Style::default().fg(Color::Cyan)),
                );
                frame.render_widget(modal, area);
            } else {
                log::debug!("company modal skipped: unknown id {company_id}");
            }
        }
        ModalState::PlanOpen(company_id, policy_id) => {
            if let Some(text) = plan_modal_text(catalog, company_id, *policy_id) {
                let area = centered_rect(70, 60, frame.area());
                frame.render_widget(Clear, area);
                let modal = Paragraph::new(text).block(
                    Block::default()
                        .title("plan")
                        .borders(Borders::ALL)
                        .style(Style::default().fg(Color::Cyan)),
                );
                frame.render_widget(modal, area);
            } else {
                log::debug!("plan modal skipped: unknown id {company_id}/{policy_id}");
            }
        }
    }

    if state.lead_open {
        let area = centered_rect(60, 55, frame.area());
        frame.render_widget(Clear, area);
        let lead = Paragraph::new(lead_overlay_text(&view_data.lead)).block(
            Block::default()
                .title(view_data.lead.entry.title())
                .borders(Borders::ALL)
                .style(Style::default().add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(lead, area);
    }

    if view_data.help_visible {
        let area = centered_rect(80, 72, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn pane_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn header_text(state: &AppState, view_data: &ViewData) -> String {
    let search = if view_data.search_editing {
        format!("/{}_", state.selection.search)
    } else if state.selection.search.is_empty() {
        "(none)".to_owned()
    } else {
        state.selection.search.clone()
    };
    format!(
        "category: {} | sort: {} | search: {}",
        state.selection.category.label(),
        state.selection.sort.label(),
        search
    )
}

fn companies_pane_text(view_data: &ViewData) -> String {
    if view_data.companies.is_empty() {
        return "no insurers match the current filters".to_owned();
    }

    let mut lines = Vec::with_capacity(view_data.companies.len() * 2);
    for (index, company) in view_data.companies.iter().enumerate() {
        let prefix = if index == view_data.company_cursor {
            "> "
        } else {
            "  "
        };
        lines.push(format!(
            "{prefix}{} [{}]",
            company.name,
            company.category.as_str()
        ));
        lines.push(format!("    {}", company.features.join(" | ")));
    }
    lines.join("\n")
}

fn comparison_pane_text(view_data: &ViewData) -> String {
    if view_data.comparisons.is_empty() {
        return "no plans to compare".to_owned();
    }

    let mut lines = Vec::with_capacity(view_data.comparisons.len());
    for (index, row) in view_data.comparisons.iter().enumerate() {
        let prefix = if index == view_data.comparison_cursor {
            "> "
        } else {
            "  "
        };
        lines.push(format!(
            "{prefix}{} | {} | {} | claims {} | {}",
            row.name, row.type_label, row.sum_insured, row.claim_ratio, row.price_fmt
        ));
    }
    lines.join("\n")
}

fn status_text(state: &AppState) -> String {
    if let Some(message) = &state.status_line {
        return message.clone();
    }
    format!(
        "call {PHONE_LINK} | chat {WHATSAPP_LINK} | © {} | ? help",
        OffsetDateTime::now_utc().year()
    )
}

/// Detail text for the company drill-down. `None` when the id no longer
/// resolves; the caller drops the overlay instead of rendering a husk.
fn company_modal_text(catalog: &Catalog, company_id: &riskwise_app::CompanyId, cursor: usize) -> Option<String> {
    let company = catalog.find_company(company_id)?;
    let policies = catalog.policies_for(company_id);

    let mut lines = vec![
        format!("{} [{}]", company.name, company.category.as_str()),
        String::new(),
    ];
    for feature in &company.features {
        lines.push(format!("  • {feature}"));
    }
    lines.push(String::new());
    lines.push("plans:".to_owned());
    for (index, policy) in policies.iter().enumerate() {
        let prefix = if index == cursor.min(policies.len().saturating_sub(1)) {
            "> "
        } else {
            "  "
        };
        lines.push(format!(
            "{prefix}{} ({}) | {}/yr",
            policy.name,
            policy.type_label,
            format_inr(policy.final_price)
        ));
    }
    lines.push(String::new());
    lines.push("j/k move | enter plan | l quote | esc close".to_owned());
    Some(lines.join("\n"))
}

/// Detail text for the plan drill-down, or `None` for a dangling id.
fn plan_modal_text(
    catalog: &Catalog,
    company_id: &riskwise_app::CompanyId,
    policy_id: riskwise_app::PolicyId,
) -> Option<String> {
    let company = catalog.find_company(company_id)?;
    let policy = catalog.find_policy(company_id, policy_id)?;

    let cta = match policy.cta {
        riskwise_app::CtaKind::WhatsApp => format!("chat on WhatsApp: {WHATSAPP_LINK}"),
        riskwise_app::CtaKind::Phone => format!("call an advisor: {PHONE_LINK}"),
    };

    let mut lines = vec![
        format!("{} — {}", company.name, policy.name),
        format!("type: {}", policy.type_label),
        format!("premium: {}/yr", format_inr(policy.final_price)),
        format!("sum insured: {}", policy.details.sum_insured),
        String::new(),
        "covers:".to_owned(),
    ];
    for feature in &policy.details.features {
        lines.push(format!("  • {feature}"));
    }
    if !policy.details.exclusions.is_empty() {
        lines.push("excludes:".to_owned());
        for exclusion in &policy.details.exclusions {
            lines.push(format!("  • {exclusion}"));
        }
    }
    if policy.referral_bonus != "None" {
        lines.push(format!("referral bonus: {}", policy.referral_bonus));
    }
    lines.push(String::new());
    lines.push(cta);
    lines.push("r request quote | b back | esc close".to_owned());
    Some(lines.join("\n"))
}

fn lead_overlay_text(lead: &LeadUiState) -> String {
    let mut lines = Vec::with_capacity(LeadField::ALL.len() + 3);
    for field in LeadField::ALL {
        let marker = if field == lead.active_field { "> " } else { "  " };
        lines.push(format!("{marker}{}: {}", field.label(), lead.field_value(field)));
    }
    lines.push(String::new());
    if lead.in_flight.is_some() {
        lines.push("sending...".to_owned());
    }
    lines.push("tab next field | enter send | esc close".to_owned());
    lines.join("\n")
}

fn help_overlay_text() -> String {
    [
        "j/k or arrows  move cursor",
        "tab            switch pane",
        "enter          open insurer / plan",
        "/              edit search",
        "c              cycle category filter",
        "s              cycle sort mode",
        "l              request a callback",
        "m              contact us",
        "r              request quote from a plan",
        "esc            close overlay / clear status",
        "ctrl+q         quit",
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
