//! Dashboard summary computed from the lead store and listing catalog.

use serde::Serialize;

use crate::board::partition;
use crate::lead::{Lead, LeadStatus};
use crate::property::{PropertyCatalog, PropertyStatus};
use crate::store::LeadStore;

/// Headline numbers for the dashboard screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_leads: usize,
    /// Lead count per stage, in pipeline order.
    pub leads_by_stage: [(LeadStatus, usize); 5],
    /// Sum of budgets for leads that are not Closed.
    pub open_pipeline_value: f64,
    pub closed_value: f64,
    pub total_listings: usize,
    pub listings_by_status: [(PropertyStatus, usize); 4],
    pub active_listing_value: f64,
}

impl DashboardSummary {
    pub fn compute(store: &LeadStore, catalog: &PropertyCatalog) -> Self {
        let part = partition(store.leads());
        let leads_by_stage = LeadStatus::ALL.map(|status| (status, part.count(status)));

        let (closed_value, open_pipeline_value) =
            store
                .leads()
                .iter()
                .fold((0.0, 0.0), |(closed, open), lead| {
                    if lead.status.is_terminal() {
                        (closed + lead.budget, open)
                    } else {
                        (closed, open + lead.budget)
                    }
                });

        let listings_by_status = PropertyStatus::ALL.map(|status| {
            let count = catalog.all().iter().filter(|p| p.status == status).count();
            (status, count)
        });
        let active_listing_value = catalog
            .all()
            .iter()
            .filter(|p| p.status == PropertyStatus::Active)
            .map(|p| p.price)
            .sum();

        Self {
            total_leads: store.len(),
            leads_by_stage,
            open_pipeline_value,
            closed_value,
            total_listings: catalog.len(),
            listings_by_status,
            active_listing_value,
        }
    }

    /// Fraction of leads that reached Closed, 0 when there are none.
    pub fn conversion_rate(&self) -> f64 {
        if self.total_leads == 0 {
            return 0.0;
        }
        let closed = self.leads_by_stage[LeadStatus::Closed.index()].1;
        closed as f64 / self.total_leads as f64
    }
}

/// The `n` most recently created leads, newest first.
pub fn recent_leads(store: &LeadStore, n: usize) -> Vec<&Lead> {
    let mut leads: Vec<&Lead> = store.leads().iter().collect();
    leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    leads.truncate(n);
    leads
}
