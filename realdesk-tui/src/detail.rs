//! Lead detail view model: the synthesized activity feed and date text.

use chrono::{DateTime, Local, Utc};

use realdesk_core::Lead;

pub const NO_NOTES: &str = "No notes added for this lead yet.";
pub const UNASSIGNED: &str = "Unassigned";

/// One row of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub title: String,
    pub detail: String,
}

/// Two synthesized entries, newest first: the current stage, then creation.
pub fn activity_feed(lead: &Lead) -> [ActivityEntry; 2] {
    [
        ActivityEntry {
            title: format!("Stage changed to {}", lead.status),
            detail: format!("by {}", lead.assigned_to.as_deref().unwrap_or("System")),
        },
        ActivityEntry {
            title: "Lead Created".to_string(),
            detail: format!("{} via Web Form", format_date(lead.created_at)),
        },
    ]
}

pub fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %-d, %Y, %I:%M %p").to_string()
}

pub fn agent(lead: &Lead) -> &str {
    lead.assigned_to.as_deref().unwrap_or(UNASSIGNED)
}

pub fn notes(lead: &Lead) -> &str {
    lead.notes
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(NO_NOTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use realdesk_core::{LeadId, LeadStatus};

    fn lead(assigned_to: Option<&str>, notes: Option<&str>) -> Lead {
        Lead {
            id: LeadId::new("9"),
            name: "Gia".into(),
            email: "gia@example.com".into(),
            phone: "555".into(),
            budget: 0.0,
            status: LeadStatus::Viewing,
            interest: "Loft".into(),
            notes: notes.map(String::from),
            avatar: None,
            assigned_to: assigned_to.map(String::from),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn feed_names_agent_or_system() {
        let [stage, created] = activity_feed(&lead(Some("Sarah Miller"), None));
        assert_eq!(stage.title, "Stage changed to Viewing");
        assert_eq!(stage.detail, "by Sarah Miller");
        assert_eq!(created.title, "Lead Created");
        assert!(created.detail.ends_with(" via Web Form"));

        let [stage, _] = activity_feed(&lead(None, None));
        assert_eq!(stage.detail, "by System");
    }

    #[test]
    fn fallbacks() {
        let l = lead(None, Some("  "));
        assert_eq!(agent(&l), "Unassigned");
        assert_eq!(notes(&l), NO_NOTES);
        let l = lead(Some("Ann"), Some("Wants a yard"));
        assert_eq!(notes(&l), "Wants a yard");
    }
}
