//! Lead records and the five-stage pipeline status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Lead identifier. Unique within a store for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub String);

impl LeadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LeadId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pipeline stage. The declaration order is the board's column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Viewing,
    Negotiation,
    Closed,
}

impl LeadStatus {
    /// All stages in pipeline order.
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Viewing,
        LeadStatus::Negotiation,
        LeadStatus::Closed,
    ];

    pub fn index(self) -> usize {
        match self {
            LeadStatus::New => 0,
            LeadStatus::Contacted => 1,
            LeadStatus::Viewing => 2,
            LeadStatus::Negotiation => 3,
            LeadStatus::Closed => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// The following stage, or `None` for the terminal stage.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn is_terminal(self) -> bool {
        self == LeadStatus::Closed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Viewing => "Viewing",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown lead status '{s}'"))
    }
}

/// A prospective client and their place in the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub budget: f64,
    pub status: LeadStatus,
    /// Free-text description of what the client is looking for.
    pub interest: String,
    pub notes: Option<String>,
    pub avatar: Option<String>,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// First character of the name, used where no avatar is available.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

/// Input to [`crate::store::LeadStore::add`].
///
/// Carries no id (the store assigns one) and no status (new leads always
/// start in [`LeadStatus::New`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub budget: f64,
    pub interest: String,
    pub notes: Option<String>,
    pub avatar: Option<String>,
    pub assigned_to: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewLead {
    pub(crate) fn into_lead(self, id: LeadId, now: DateTime<Utc>) -> Lead {
        Lead {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            budget: self.budget,
            status: LeadStatus::New,
            interest: self.interest,
            notes: self.notes,
            avatar: self.avatar,
            assigned_to: self.assigned_to,
            created_at: self.created_at.unwrap_or(now),
        }
    }
}

/// Placeholder avatar URL built from the lead's name.
pub fn initials_avatar_url(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    format!("https://ui-avatars.com/api/?name={encoded}&background=random&color=fff")
}
