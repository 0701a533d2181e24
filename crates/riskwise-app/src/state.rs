// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{CategoryFilter, CompanyId, PolicyId, SortMode};

/// At most one of the company/plan drill-down overlays is visible at a time.
/// The lead-capture overlay is tracked separately on [`AppState`] because it
/// can coexist with either drill-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    CompanyOpen(CompanyId),
    PlanOpen(CompanyId, PolicyId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortMode,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::Any,
            sort: SortMode::Recommended,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub selection: SelectionState,
    pub modal: ModalState,
    pub lead_open: bool,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selection: SelectionState::default(),
            modal: ModalState::Closed,
            lead_open: false,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    SetSearch(String),
    SetCategory(CategoryFilter),
    CycleCategory,
    SetSort(SortMode),
    CycleSort,
    OpenCompany(CompanyId),
    CloseCompany,
    OpenPlan(CompanyId, PolicyId),
    BackToCompany,
    ClosePlan,
    OpenLead,
    CloseLead,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    SearchChanged(String),
    CategoryChanged(CategoryFilter),
    SortChanged(SortMode),
    ModalChanged(ModalState),
    LeadVisibilityChanged(bool),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::SetSearch(text) => {
                self.selection.search = text.clone();
                vec![AppEvent::SearchChanged(text)]
            }
            AppCommand::SetCategory(filter) => {
                self.selection.category = filter;
                vec![AppEvent::CategoryChanged(filter)]
            }
            AppCommand::CycleCategory => {
                self.selection.category = self.selection.category.next();
                vec![AppEvent::CategoryChanged(self.selection.category)]
            }
            AppCommand::SetSort(mode) => {
                self.selection.sort = mode;
                vec![AppEvent::SortChanged(mode)]
            }
            AppCommand::CycleSort => {
                self.selection.sort = self.selection.sort.next();
                vec![AppEvent::SortChanged(self.selection.sort)]
            }
            AppCommand::OpenCompany(company_id) => {
                self.modal = ModalState::CompanyOpen(company_id);
                vec![AppEvent::ModalChanged(self.modal.clone())]
            }
            AppCommand::CloseCompany => match self.modal {
                ModalState::CompanyOpen(_) => {
                    self.modal = ModalState::Closed;
                    vec![AppEvent::ModalChanged(self.modal.clone())]
                }
                _ => Vec::new(),
            },
            AppCommand::OpenPlan(company_id, policy_id) => {
                // Replaces any open company modal: at most one drill-down at a time.
                self.modal = ModalState::PlanOpen(company_id, policy_id);
                vec![AppEvent::ModalChanged(self.modal.clone())]
            }
            AppCommand::BackToCompany => match &self.modal {
                ModalState::PlanOpen(company_id, _) => {
                    self.modal = ModalState::CompanyOpen(company_id.clone());
                    vec![AppEvent::ModalChanged(self.modal.clone())]
                }
                _ => Vec::new(),
            },
            AppCommand::ClosePlan => match self.modal {
                ModalState::PlanOpen(_, _) => {
                    self.modal = ModalState::Closed;
                    vec![AppEvent::ModalChanged(self.modal.clone())]
                }
                _ => Vec::new(),
            },
            AppCommand::OpenLead => {
                self.lead_open = true;
                vec![AppEvent::LeadVisibilityChanged(true)]
            }
            AppCommand::CloseLead => {
                self.lead_open = false;
                vec![AppEvent::LeadVisibilityChanged(false)]
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState, ModalState};
    use crate::{CompanyId, PolicyId};

    fn star() -> CompanyId {
        CompanyId::new("star")
    }

    #[test]
    fn open_plan_replaces_company_modal() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenCompany(star()));
        assert_eq!(state.modal, ModalState::CompanyOpen(star()));

        let events = state.dispatch(AppCommand::OpenPlan(star(), PolicyId::new(101)));
        assert_eq!(state.modal, ModalState::PlanOpen(star(), PolicyId::new(101)));
        assert_eq!(
            events,
            vec![AppEvent::ModalChanged(ModalState::PlanOpen(
                star(),
                PolicyId::new(101),
            ))],
        );
    }

    #[test]
    fn back_to_company_returns_to_owning_company() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenPlan(star(), PolicyId::new(101)));
        state.dispatch(AppCommand::BackToCompany);
        assert_eq!(state.modal, ModalState::CompanyOpen(star()));
    }

    #[test]
    fn back_to_company_is_a_no_op_outside_plan_view() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::BackToCompany);
        assert!(events.is_empty());
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn close_company_only_applies_to_company_modal() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenPlan(star(), PolicyId::new(101)));

        let events = state.dispatch(AppCommand::CloseCompany);
        assert!(events.is_empty());
        assert_eq!(state.modal, ModalState::PlanOpen(star(), PolicyId::new(101)));

        state.dispatch(AppCommand::ClosePlan);
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn lead_overlay_is_independent_of_drilldowns() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenLead);
        state.dispatch(AppCommand::OpenPlan(star(), PolicyId::new(101)));
        state.dispatch(AppCommand::ClosePlan);
        assert!(state.lead_open, "closing a plan must not close the lead form");

        state.dispatch(AppCommand::CloseLead);
        assert!(!state.lead_open);
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn selection_commands_update_fields_and_report_events() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::SetSearch("cashless".to_owned()));
        assert_eq!(state.selection.search, "cashless");
        assert_eq!(
            events,
            vec![AppEvent::SearchChanged("cashless".to_owned())],
        );

        state.dispatch(AppCommand::CycleSort);
        assert_eq!(state.selection.sort, crate::SortMode::PriceAscending);
    }

    #[test]
    fn status_line_set_and_clear() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetStatus("sent".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("sent"));
        state.dispatch(AppCommand::ClearStatus);
        assert!(state.status_line.is_none());
    }
}
