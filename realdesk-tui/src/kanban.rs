//! Board view state: column filter, cursor, and the drag in progress.
//!
//! The cursor addresses a card by (displayed column, row within that
//! column's bucket). It is re-clamped whenever the store or the filter
//! changes, so it never points past the end of a column.

use realdesk_core::board::{partition, Column};
use realdesk_core::{DragState, LeadId, LeadStatus, LeadStore, StatusFilter, COLUMNS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub filter: StatusFilter,
    pub drag: DragState,
    /// Index into the displayed columns.
    pub column: usize,
    pub row: usize,
    /// Filter chip under the cursor while the filter bar has focus.
    pub filter_focus: Option<usize>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed(&self) -> Vec<&'static Column> {
        self.filter.displayed_columns()
    }

    /// Status of the column under the cursor.
    pub fn current_status(&self) -> Option<LeadStatus> {
        self.displayed().get(self.column).map(|c| c.status)
    }

    pub fn selected_id(&self, store: &LeadStore) -> Option<LeadId> {
        let status = self.current_status()?;
        partition(store.leads())
            .bucket(status)
            .get(self.row)
            .map(|lead| lead.id.clone())
    }

    pub fn clamp(&mut self, store: &LeadStore) {
        let columns = self.displayed();
        self.column = self.column.min(columns.len().saturating_sub(1));
        let len = columns
            .get(self.column)
            .map(|c| partition(store.leads()).count(c.status))
            .unwrap_or(0);
        self.row = self.row.min(len.saturating_sub(1));
    }

    /// Move across columns. While dragging, the hovered column follows.
    pub fn move_column(&mut self, delta: isize, store: &LeadStore) {
        let count = self.displayed().len();
        if count == 0 {
            return;
        }
        self.column = self.column.saturating_add_signed(delta).min(count - 1);
        self.clamp(store);
        if self.drag.is_dragging() {
            if let Some(status) = self.current_status() {
                self.drag.drag_over(status);
            }
        }
    }

    pub fn move_row(&mut self, delta: isize, store: &LeadStore) {
        if self.drag.is_dragging() {
            return;
        }
        self.row = self.row.saturating_add_signed(delta);
        self.clamp(store);
    }

    /// Put the cursor on `id`'s card if its column is displayed.
    pub fn focus_lead(&mut self, store: &LeadStore, id: &LeadId) {
        let Some(lead) = store.get(id) else {
            return;
        };
        let Some(column) = self.displayed().iter().position(|c| c.status == lead.status) else {
            self.clamp(store);
            return;
        };
        let part = partition(store.leads());
        if let Some(row) = part.bucket(lead.status).iter().position(|l| &l.id == id) {
            self.column = column;
            self.row = row;
        }
    }

    /// Start a keyboard drag on the card under the cursor.
    pub fn grab(&mut self, store: &LeadStore) -> Option<LeadId> {
        let id = self.selected_id(store)?;
        self.drag.start(id.clone());
        if let Some(status) = self.current_status() {
            self.drag.drag_over(status);
        }
        Some(id)
    }

    /// Column a keyboard drop lands on: the hovered one, else the cursor's.
    pub fn drop_target(&self) -> Option<LeadStatus> {
        self.drag.over().or_else(|| self.current_status())
    }

    /// Abandon the drag and put the cursor back on the dragged card.
    pub fn cancel_drag(&mut self, store: &LeadStore) {
        let dragged = self.drag.payload().cloned();
        self.drag.cancel();
        match dragged {
            Some(id) => self.focus_lead(store, &id),
            None => self.clamp(store),
        }
    }

    // ── Filter bar ───────────────────────────────────────────────────

    pub fn focus_filter(&mut self) {
        self.filter_focus = Some(self.filter_focus.unwrap_or(0));
    }

    pub fn blur_filter(&mut self) {
        self.filter_focus = None;
    }

    pub fn move_filter_focus(&mut self, delta: isize) {
        if let Some(i) = self.filter_focus {
            self.filter_focus = Some(i.saturating_add_signed(delta).min(COLUMNS.len() - 1));
        }
    }

    pub fn toggle_focused_filter(&mut self, store: &LeadStore) {
        if let Some(column) = self.filter_focus.and_then(|i| COLUMNS.get(i)) {
            self.toggle_filter(column.status, store);
        }
    }

    pub fn toggle_filter(&mut self, status: LeadStatus, store: &LeadStore) {
        let keep = self.selected_id(store);
        self.filter.toggle(status);
        self.refocus(store, keep);
    }

    pub fn clear_filter(&mut self, store: &LeadStore) {
        let keep = self.selected_id(store);
        self.filter.clear();
        self.refocus(store, keep);
    }

    fn refocus(&mut self, store: &LeadStore, keep: Option<LeadId>) {
        self.column = 0;
        self.row = 0;
        match keep {
            Some(id) => self.focus_lead(store, &id),
            None => self.clamp(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realdesk_core::seed;

    // Seed layout: New [1, 2], Contacted [3], Viewing [4], Negotiation [5], Closed [].

    #[test]
    fn cursor_clamps_to_bucket() {
        let store = seed::leads();
        let mut view = BoardView::new();
        view.move_row(10, &store);
        assert_eq!(view.row, 1);
        view.move_column(1, &store);
        assert_eq!(view.row, 0);
        assert_eq!(view.selected_id(&store), Some(LeadId::new("3")));
        view.move_column(10, &store);
        assert_eq!(view.current_status(), Some(LeadStatus::Closed));
        assert_eq!(view.selected_id(&store), None);
    }

    #[test]
    fn keyboard_drag_tracks_hover_and_drops() {
        let mut store = seed::leads();
        let mut view = BoardView::new();
        assert_eq!(view.grab(&store), Some(LeadId::new("1")));
        assert_eq!(view.drag.over(), Some(LeadStatus::New));

        view.move_column(3, &store);
        assert_eq!(view.drag.over(), Some(LeadStatus::Negotiation));
        view.move_row(1, &store);
        assert_eq!(view.row, 0, "rows stay put while dragging");

        let target = view.drop_target().unwrap();
        let id = view.drag.drop_on(&mut store, target).unwrap();
        view.focus_lead(&store, &id);
        assert_eq!(store.get(&id).unwrap().status, LeadStatus::Negotiation);
        assert_eq!(view.selected_id(&store), Some(id));
        assert!(!view.drag.is_dragging());
    }

    #[test]
    fn hovering_a_shorter_column_clamps_the_row() {
        let store = seed::leads();
        let mut view = BoardView::new();
        view.move_row(1, &store);
        assert_eq!(view.grab(&store), Some(LeadId::new("2")));

        view.move_column(1, &store);
        assert_eq!(view.drag.over(), Some(LeadStatus::Contacted));
        assert_eq!(view.row, 0);
        view.move_column(3, &store);
        assert_eq!(view.drag.over(), Some(LeadStatus::Closed));
        assert_eq!(view.row, 0);

        view.cancel_drag(&store);
        assert_eq!(view.current_status(), Some(LeadStatus::New));
        assert_eq!(view.selected_id(&store), Some(LeadId::new("2")));
    }

    #[test]
    fn filter_keeps_cursor_on_lead() {
        let store = seed::leads();
        let mut view = BoardView::new();
        view.focus_lead(&store, &LeadId::new("4"));
        view.toggle_filter(LeadStatus::Viewing, &store);
        view.toggle_filter(LeadStatus::New, &store);
        assert_eq!(view.displayed().len(), 2);
        assert_eq!(view.selected_id(&store), Some(LeadId::new("4")));

        view.clear_filter(&store);
        assert_eq!(view.displayed().len(), 5);
        assert_eq!(view.current_status(), Some(LeadStatus::Viewing));
    }

    #[test]
    fn hidden_column_falls_back_to_clamp() {
        let store = seed::leads();
        let mut view = BoardView::new();
        view.focus_lead(&store, &LeadId::new("5"));
        view.toggle_filter(LeadStatus::Contacted, &store);
        assert_eq!(view.selected_id(&store), Some(LeadId::new("3")));
    }

    #[test]
    fn filter_bar_focus() {
        let store = seed::leads();
        let mut view = BoardView::new();
        view.focus_filter();
        view.move_filter_focus(2);
        view.toggle_focused_filter(&store);
        assert!(view.filter.is_selected(LeadStatus::Viewing));
        view.move_filter_focus(10);
        assert_eq!(view.filter_focus, Some(4));
        view.blur_filter();
        assert_eq!(view.filter_focus, None);
    }
}
