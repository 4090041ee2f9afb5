//! Panel 3 — Leads: the pipeline board.
//!
//! Layout is computed once by [`board_layout`] and shared by rendering and
//! mouse hit-testing, so a click always lands on what is drawn.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use realdesk_core::board::{self, partition};
use realdesk_core::money::format_thousands;
use realdesk_core::{Lead, LeadId, LeadStatus, COLUMNS};

use crate::app::AppState;
use crate::theme;

/// Rows per card, borders included.
pub const CARD_HEIGHT: u16 = 5;
const HEADER_ROWS: u16 = 2;

/// Screen geometry of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardLayout {
    pub columns: Vec<(LeadStatus, Rect)>,
    pub cards: Vec<(LeadId, Rect)>,
}

impl BoardLayout {
    pub fn column_at(&self, x: u16, y: u16) -> Option<LeadStatus> {
        self.columns
            .iter()
            .find(|(_, rect)| rect.contains(Position { x, y }))
            .map(|(status, _)| *status)
    }

    pub fn card_at(&self, x: u16, y: u16) -> Option<&LeadId> {
        self.cards
            .iter()
            .find(|(_, rect)| rect.contains(Position { x, y }))
            .map(|(id, _)| id)
    }
}

fn split_header(inner: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);
    (chunks[0], chunks[1], chunks[2])
}

fn column_block(status: LeadStatus) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::stage(status))
}

/// First card row drawn in a column so the cursor row stays visible.
fn scroll_offset(cursor_row: Option<usize>, visible: usize) -> usize {
    match cursor_row {
        Some(row) if row >= visible => row + 1 - visible,
        _ => 0,
    }
}

/// Lay out the displayed columns and their visible cards inside `inner`.
pub fn board_layout(inner: Rect, app: &AppState) -> BoardLayout {
    let (_, _, board_area) = split_header(inner);
    let displayed = app.board.displayed();
    if displayed.is_empty() || board_area.height == 0 {
        return BoardLayout::default();
    }

    let n = displayed.len() as u32;
    let rects = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(board_area);

    let part = partition(app.store.leads());
    let mut layout = BoardLayout::default();
    for (i, (column, rect)) in displayed.iter().zip(rects.iter()).enumerate() {
        layout.columns.push((column.status, *rect));

        let body = column_block(column.status).inner(*rect);
        let visible = usize::from((body.height / CARD_HEIGHT).max(1));
        let cursor_row = (i == app.board.column).then_some(app.board.row);
        let offset = scroll_offset(cursor_row, visible);

        let mut y = body.y;
        for lead in part.bucket(column.status).iter().skip(offset) {
            let height = CARD_HEIGHT.min(body.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            layout
                .cards
                .push((lead.id.clone(), Rect::new(body.x, y, body.width, height)));
            y += height;
        }
    }
    layout
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let (title_area, filter_area, _) = split_header(area);
    render_title(f, title_area, app);
    render_filter_bar(f, filter_area, app);

    let layout = board_layout(area, app);
    let part = partition(app.store.leads());
    let selected = app.board.selected_id(&app.store);

    for (status, rect) in &layout.columns {
        let column = board::column_for(*status);
        let hovered = app.board.drag.over() == Some(*status);
        let border = if hovered {
            theme::drop_target(*status)
        } else {
            theme::stage(*status)
        };
        let block = column_block(*status)
            .border_style(border)
            .title(format!(" {} ({}) ", column.label, part.count(*status)))
            .title_style(theme::stage(*status).add_modifier(Modifier::BOLD));
        let body = block.inner(*rect);
        f.render_widget(block, *rect);

        if part.count(*status) == 0 {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No Leads", theme::muted())),
                Line::from(Span::styled("Drop here", theme::muted())),
            ])
            .alignment(Alignment::Center);
            f.render_widget(empty, body);
        }
    }

    for (id, rect) in &layout.cards {
        if let Some(lead) = app.store.get(id) {
            let is_selected = selected.as_ref() == Some(id);
            let is_dragged = app.board.drag.payload() == Some(id);
            render_card(f, *rect, lead, is_selected, is_dragged);
        }
    }
}

fn render_title(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![
        Span::styled("Sales Pipeline ", theme::accent_bold()),
        Span::styled(format!("({} leads)  ", app.store.len()), theme::muted()),
        Span::styled("[a]", theme::accent()),
        Span::styled(" Add Lead  ", theme::muted()),
        Span::styled("[Enter]", theme::accent()),
        Span::styled(" Details  ", theme::muted()),
    ];
    if app.board.drag.is_dragging() {
        spans.push(Span::styled("[h/l]", theme::accent()));
        spans.push(Span::styled(" Move  ", theme::muted()));
        spans.push(Span::styled("[m]", theme::accent()));
        spans.push(Span::styled(" Drop  ", theme::muted()));
        spans.push(Span::styled("[Esc]", theme::accent()));
        spans.push(Span::styled(" Cancel", theme::muted()));
    } else {
        spans.push(Span::styled("[m]", theme::accent()));
        spans.push(Span::styled(" Grab  ", theme::muted()));
        spans.push(Span::styled("[n]", theme::accent()));
        spans.push(Span::styled(" Next Stage  ", theme::muted()));
        spans.push(Span::styled("[f]", theme::accent()));
        spans.push(Span::styled(" Filter", theme::muted()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let filter = &app.board.filter;
    let mut spans = vec![Span::styled("Filter: ", theme::muted())];
    for (i, column) in COLUMNS.iter().enumerate() {
        let mark = if filter.is_selected(column.status) { "x" } else { " " };
        let style = if app.board.filter_focus == Some(i) {
            theme::selected()
        } else if filter.is_selected(column.status) {
            theme::stage(column.status).add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!("[{mark}] {}", column.label), style));
        spans.push(Span::raw(" "));
    }
    if filter.is_active() {
        spans.push(Span::styled(" [c] Clear filters", theme::accent()));
    } else {
        spans.push(Span::styled(" (all stages)", theme::muted()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_card(f: &mut Frame, area: Rect, lead: &Lead, selected: bool, dragged: bool) {
    let border = if dragged {
        theme::warning().add_modifier(Modifier::BOLD)
    } else if selected {
        theme::accent_bold()
    } else {
        theme::muted()
    };
    let mut block = Block::default().borders(Borders::ALL).border_style(border);
    if dragged {
        block = block.title(Span::styled(" moving ", theme::warning()));
    }
    let body = block.inner(area);
    f.render_widget(block, area);

    let name_style = if selected {
        theme::selected()
    } else {
        theme::text().add_modifier(Modifier::BOLD)
    };
    let next = if board::can_advance(lead.status) {
        Span::styled("[n] Next Stage >", theme::stage(lead.status))
    } else {
        Span::styled("Deal closed", theme::positive())
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(lead.name.as_str(), name_style),
            Span::raw("  "),
            Span::styled(format_thousands(lead.budget), theme::positive()),
        ]),
        Line::from(Span::styled(lead.interest.as_str(), theme::text_secondary())),
        Line::from(next),
    ];
    f.render_widget(Paragraph::new(lines), body);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_cursor_visible() {
        assert_eq!(scroll_offset(None, 3), 0);
        assert_eq!(scroll_offset(Some(2), 3), 0);
        assert_eq!(scroll_offset(Some(3), 3), 1);
        assert_eq!(scroll_offset(Some(9), 1), 9);
    }
}
