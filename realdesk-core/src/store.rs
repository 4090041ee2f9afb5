//! Lead store — the single owner of the ordered lead sequence.
//!
//! Newest additions sit at the head. The only mutations are [`LeadStore::add`]
//! and [`LeadStore::update_status`]; neither can fail. Views borrow the store
//! to render and hand identifiers back to mutate it.

use chrono::Utc;
use std::collections::HashSet;

use crate::lead::{Lead, LeadId, LeadStatus, NewLead};

/// Monotonic identifier source owned by the store.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: &'static str,
    next: u64,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    /// Produce the next id for which `taken` is false.
    pub fn next_unused(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = format!("{}-{}", self.prefix, self.next);
            self.next += 1;
            if !taken(&candidate) {
                return candidate;
            }
        }
    }
}

/// In-memory lead store.
#[derive(Debug, Clone)]
pub struct LeadStore {
    leads: Vec<Lead>,
    ids: HashSet<LeadId>,
    generator: IdGenerator,
    revision: u64,
}

impl Default for LeadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadStore {
    pub fn new() -> Self {
        Self {
            leads: Vec::new(),
            ids: HashSet::new(),
            generator: IdGenerator::new("lead"),
            revision: 0,
        }
    }

    /// Build a store from existing records, keeping their order.
    ///
    /// A record whose id was already seen is dropped.
    pub fn with_leads(seed: impl IntoIterator<Item = Lead>) -> Self {
        let mut store = Self::new();
        for lead in seed {
            if store.ids.contains(&lead.id) {
                tracing::warn!(id = %lead.id, "dropping seed lead with duplicate id");
                continue;
            }
            store.ids.insert(lead.id.clone());
            store.leads.push(lead);
        }
        store
    }

    /// Insert a lead at the head and return its assigned id.
    ///
    /// No field validation is performed. A missing creation timestamp is set
    /// to the current time.
    pub fn add(&mut self, new: NewLead) -> LeadId {
        let ids = &self.ids;
        let id = LeadId(self.generator.next_unused(|c| ids.contains(c)));
        let lead = new.into_lead(id.clone(), Utc::now());
        tracing::debug!(id = %id, name = %lead.name, "lead added");
        self.ids.insert(id.clone());
        self.leads.insert(0, lead);
        self.revision += 1;
        id
    }

    /// Replace the status of the lead with `id`.
    ///
    /// Returns whether a lead matched. An unknown id changes nothing.
    pub fn update_status(&mut self, id: &LeadId, status: LeadStatus) -> bool {
        match self.leads.iter_mut().find(|lead| &lead.id == id) {
            Some(lead) => {
                tracing::debug!(id = %id, from = %lead.status, to = %status, "lead status updated");
                lead.status = status;
                self.revision += 1;
                true
            }
            None => {
                tracing::debug!(id = %id, "status update for unknown lead ignored");
                false
            }
        }
    }

    /// The current ordered sequence.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: &LeadId) -> Option<&Lead> {
        self.leads.iter().find(|lead| &lead.id == id)
    }

    pub fn contains(&self, id: &LeadId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
