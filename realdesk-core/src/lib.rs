//! realdesk core — domain model for a real-estate back-office.
//!
//! - Lead records and the five-stage pipeline status
//! - The lead store (sole owner of the ordered lead sequence)
//! - Pipeline board logic: partitioning, column filter, drag-and-drop, Next Stage
//! - Listing catalog and dashboard summary
//! - Description-generation boundary and configuration

pub mod board;
pub mod config;
pub mod dashboard;
pub mod describe;
pub mod lead;
pub mod money;
pub mod property;
pub mod seed;
pub mod store;

pub use board::{Column, DragState, Partition, StatusFilter, COLUMNS};
pub use config::{AppConfig, ConfigError};
pub use dashboard::DashboardSummary;
pub use describe::{DescribeError, DescriptionGenerator, DescriptionRequest};
pub use lead::{Lead, LeadId, LeadStatus, NewLead};
pub use property::{NewProperty, Property, PropertyCatalog, PropertyStatus, PropertyType};
pub use store::LeadStore;
