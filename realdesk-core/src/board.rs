//! Pipeline board — status columns, column filter, drag-and-drop, Next Stage.
//!
//! The board never owns leads. It partitions a borrowed sequence into the five
//! fixed columns and turns interactions into [`LeadStore::update_status`] calls.

use serde::{Deserialize, Serialize};

use crate::lead::{Lead, LeadId, LeadStatus};
use crate::store::LeadStore;

/// A board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub status: LeadStatus,
    pub label: &'static str,
}

/// The fixed column order.
pub const COLUMNS: [Column; 5] = [
    Column { status: LeadStatus::New, label: "New Leads" },
    Column { status: LeadStatus::Contacted, label: "Contacted" },
    Column { status: LeadStatus::Viewing, label: "Viewing" },
    Column { status: LeadStatus::Negotiation, label: "Negotiation" },
    Column { status: LeadStatus::Closed, label: "Closed" },
];

pub fn column_for(status: LeadStatus) -> &'static Column {
    &COLUMNS[status.index()]
}

/// Leads split by status, each bucket in store order.
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    buckets: [Vec<&'a Lead>; 5],
}

impl<'a> Partition<'a> {
    pub fn bucket(&self, status: LeadStatus) -> &[&'a Lead] {
        &self.buckets[status.index()]
    }

    pub fn count(&self, status: LeadStatus) -> usize {
        self.buckets[status.index()].len()
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Buckets in column order.
    pub fn iter(&self) -> impl Iterator<Item = (LeadStatus, &[&'a Lead])> + '_ {
        LeadStatus::ALL
            .into_iter()
            .map(move |status| (status, self.bucket(status)))
    }
}

/// Split `leads` into the five status buckets.
pub fn partition(leads: &[Lead]) -> Partition<'_> {
    let mut buckets: [Vec<&Lead>; 5] = Default::default();
    for lead in leads {
        buckets[lead.status.index()].push(lead);
    }
    Partition { buckets }
}

/// Multi-select column filter. An empty selection shows every column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFilter {
    selected: Vec<LeadStatus>,
}

impl StatusFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, status: LeadStatus) {
        if let Some(pos) = self.selected.iter().position(|s| *s == status) {
            self.selected.remove(pos);
        } else {
            self.selected.push(status);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn is_selected(&self, status: LeadStatus) -> bool {
        self.selected.contains(&status)
    }

    pub fn selected(&self) -> &[LeadStatus] {
        &self.selected
    }

    /// Columns to display, always in the fixed order.
    pub fn displayed_columns(&self) -> Vec<&'static Column> {
        COLUMNS
            .iter()
            .filter(|c| !self.is_active() || self.is_selected(c.status))
            .collect()
    }
}

/// Whether Next Stage can be invoked for a lead in `status`.
pub fn can_advance(status: LeadStatus) -> bool {
    status.next().is_some()
}

/// Move a lead one column forward in the fixed order.
///
/// Active filters are ignored. A Closed or unknown lead is left alone and
/// `None` is returned; otherwise the new status.
pub fn advance(store: &mut LeadStore, id: &LeadId) -> Option<LeadStatus> {
    let next = store.get(id)?.status.next()?;
    store.update_status(id, next);
    Some(next)
}

/// Transient drag-and-drop state. Never part of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    payload: Option<LeadId>,
    over: Option<LeadStatus>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the dragged lead's id to the payload.
    pub fn start(&mut self, id: LeadId) {
        self.payload = Some(id);
        self.over = None;
    }

    /// Pointer is over `status`'s column.
    pub fn drag_over(&mut self, status: LeadStatus) {
        self.over = Some(status);
    }

    /// Pointer left the hovered column.
    pub fn leave(&mut self) {
        self.over = None;
    }

    /// Abandon the drag without dropping.
    pub fn cancel(&mut self) {
        self.payload = None;
        self.over = None;
    }

    /// Drop onto `status`'s column.
    ///
    /// Clears the hover state and calls `update_status` unconditionally with
    /// the payload id, so dropping onto the current column is harmless.
    /// Returns the dropped id, or `None` when nothing was being dragged.
    pub fn drop_on(&mut self, store: &mut LeadStore, status: LeadStatus) -> Option<LeadId> {
        self.over = None;
        let id = self.payload.take()?;
        store.update_status(&id, status);
        Some(id)
    }

    pub fn payload(&self) -> Option<&LeadId> {
        self.payload.as_ref()
    }

    pub fn over(&self) -> Option<LeadStatus> {
        self.over
    }

    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }
}
