//! RealDesk TUI — terminal back-office for listings and the sales pipeline.
//!
//! Panels:
//! 1. Dashboard — pipeline and listing headline numbers
//! 2. Properties — searchable listings, add form with description drafting
//! 3. Leads — Kanban board with filter, drag-and-drop, Next Stage
//! 4. Help — keyboard and mouse shortcuts

pub mod app;
pub mod detail;
pub mod forms;
pub mod input;
pub mod kanban;
pub mod logging;
pub mod persistence;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::{AppState, Overlay, Panel};
