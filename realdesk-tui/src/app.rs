//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here, including the lead store and the listing
//! catalog. The description worker communicates via channels and never sees
//! the store.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use realdesk_core::board;
use realdesk_core::{LeadId, LeadStore, Property, PropertyCatalog};

use crate::forms::{LeadForm, PropertyForm};
use crate::kanban::BoardView;
use crate::worker::{WorkerCommand, WorkerResponse};

const ERROR_HISTORY_CAP: usize = 50;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Dashboard,
    Properties,
    Leads,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Dashboard => 0,
            Panel::Properties => 1,
            Panel::Leads => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Dashboard),
            1 => Some(Panel::Properties),
            2 => Some(Panel::Leads),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Properties => "Properties",
            Panel::Leads => "Leads",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 4).unwrap_or(Panel::Dashboard)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 3) % 4).unwrap_or(Panel::Dashboard)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Generation,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Generation => "GEN",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// Properties panel state: search box and list cursor.
#[derive(Debug, Clone, Default)]
pub struct PropertiesPanelState {
    pub search: String,
    /// Keys go to the search box while set.
    pub searching: bool,
    pub cursor: usize,
}

impl PropertiesPanelState {
    /// Listings matching the search text, newest first.
    pub fn visible<'a>(&self, catalog: &'a PropertyCatalog) -> Vec<&'a Property> {
        catalog.search(&self.search)
    }

    pub fn clamp(&mut self, catalog: &PropertyCatalog) {
        let len = self.visible(catalog).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    LeadDetail(LeadId),
    LeadForm,
    PropertyForm,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Domain data (owned here, lent to the views)
    pub store: LeadStore,
    pub catalog: PropertyCatalog,

    // Panel states
    pub board: BoardView,
    pub properties: PropertiesPanelState,
    pub lead_form: LeadForm,
    pub property_form: PropertyForm,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
    next_request_id: u64,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,

    // Paths
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(
        store: LeadStore,
        catalog: PropertyCatalog,
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        state_path: PathBuf,
    ) -> Self {
        Self {
            active_panel: Panel::Leads,
            running: true,
            store,
            catalog,
            board: BoardView::new(),
            properties: PropertiesPanelState::default(),
            lead_form: LeadForm::new(),
            property_form: PropertyForm::new(),
            worker_tx,
            worker_rx,
            next_request_id: 0,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::None,
            state_path,
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        tracing::warn!(category = category.label(), %context, "{message}");
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn switch_panel(&mut self, panel: Panel) {
        if panel != self.active_panel {
            tracing::debug!(from = self.active_panel.label(), to = panel.label(), "panel switch");
            self.active_panel = panel;
        }
    }

    // ── Leads ────────────────────────────────────────────────────────

    pub fn open_lead_detail(&mut self, id: LeadId) {
        if self.store.contains(&id) {
            self.overlay = Overlay::LeadDetail(id);
        }
    }

    /// Next Stage on the card under the cursor. Closed cards are left alone.
    pub fn advance_selected(&mut self) {
        let Some(id) = self.board.selected_id(&self.store) else {
            return;
        };
        match board::advance(&mut self.store, &id) {
            Some(next) => {
                tracing::info!(lead = %id, to = %next, "next stage");
                self.board.focus_lead(&self.store, &id);
                self.set_status(format!("Moved to {next}"));
            }
            None => self.set_warning("Lead is already closed"),
        }
    }

    /// Drop the dragged lead on `status` and keep the cursor on it.
    pub fn drop_dragged(&mut self, status: realdesk_core::LeadStatus) -> Option<LeadId> {
        let id = self.board.drag.drop_on(&mut self.store, status)?;
        tracing::info!(lead = %id, to = %status, "drop");
        self.board.focus_lead(&self.store, &id);
        self.set_status(format!("Moved to {status}"));
        Some(id)
    }

    pub fn open_lead_form(&mut self) {
        self.lead_form = LeadForm::new();
        self.overlay = Overlay::LeadForm;
    }

    /// Closing the form discards whatever was typed.
    pub fn cancel_lead_form(&mut self) {
        self.lead_form.form.clear();
        self.overlay = Overlay::None;
    }

    pub fn submit_lead_form(&mut self) {
        match self.lead_form.to_new_lead() {
            Ok(new) => {
                let name = new.name.clone();
                let id = self.store.add(new);
                tracing::info!(lead = %id, "lead created");
                self.lead_form.form.clear();
                self.overlay = Overlay::None;
                self.board.focus_lead(&self.store, &id);
                self.set_status(format!("Added lead {name}"));
            }
            Err(field) => self.set_warning(format!("{field} is required")),
        }
    }

    // ── Properties ───────────────────────────────────────────────────

    pub fn open_property_form(&mut self) {
        self.property_form = PropertyForm::new();
        self.overlay = Overlay::PropertyForm;
    }

    /// Closing drops the form and orphans any generation still in flight.
    pub fn cancel_property_form(&mut self) {
        self.property_form = PropertyForm::new();
        self.overlay = Overlay::None;
    }

    pub fn submit_property_form(&mut self) {
        match self.property_form.to_new_property() {
            Ok(new) => {
                let title = new.title.clone();
                let id = self.catalog.add(new);
                tracing::info!(property = %id, "listing created");
                self.property_form = PropertyForm::new();
                self.overlay = Overlay::None;
                self.properties.cursor = 0;
                self.set_status(format!("Added listing {title}"));
            }
            Err(field) => self.set_warning(format!("{field} is required")),
        }
    }

    /// Ask the worker for a description draft. Ignored while the form is
    /// missing a title or features, or a draft is already in flight.
    pub fn request_description(&mut self) {
        let Some(request) = self.property_form.description_request() else {
            if self.property_form.is_generating() {
                self.set_warning("A description is already being generated");
            } else {
                self.set_warning("Enter a title and key features first");
            }
            return;
        };
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        match self.worker_tx.send(WorkerCommand::Generate { request_id, request }) {
            Ok(()) => {
                self.property_form.pending_generation = Some(request_id);
                self.set_status("Generating description...");
            }
            Err(e) => self.push_error(
                ErrorCategory::Generation,
                "Failed to generate description".into(),
                format!("worker unavailable: {e}"),
            ),
        }
    }

    /// Apply a worker reply. Replies for a form that was since closed or
    /// reset are dropped.
    pub fn handle_worker_response(&mut self, resp: WorkerResponse) {
        let request_id = resp.request_id();
        if self.property_form.pending_generation != Some(request_id) {
            tracing::debug!(request_id, "stale generation reply dropped");
            return;
        }
        self.property_form.pending_generation = None;
        match resp {
            WorkerResponse::DescriptionReady { text, .. } => {
                self.property_form.set_description(text);
                self.set_status("Description generated");
            }
            WorkerResponse::DescriptionFailed { error, .. } => {
                self.push_error(
                    ErrorCategory::Generation,
                    "Failed to generate description".into(),
                    error,
                );
            }
        }
    }
}
