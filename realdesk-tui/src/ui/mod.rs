//! Top-level UI layout — four-panel frame with status bar.

pub mod dashboard_panel;
pub mod help_panel;
pub mod leads_panel;
pub mod overlays;
pub mod properties_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Split the frame into main area and 1-line status bar.
fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn panel_block(panel: Panel) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true))
}

/// Main area of a frame of size `area`.
pub fn main_area(area: Rect) -> Rect {
    split(area).0
}

/// Area inside the active panel's border. Mouse hit-testing uses this too.
pub fn panel_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(main_area(area))
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let (main_area, status_area) = split(f.area());

    // Draw the active panel.
    draw_panel(f, main_area, app);

    // Draw status bar.
    status_bar::render(f, status_area, app);

    // Draw overlays on top.
    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::LeadDetail(id) => overlays::render_lead_detail(f, main_area, app, id),
        Overlay::LeadForm => overlays::render_lead_form(f, main_area, app),
        Overlay::PropertyForm => overlays::render_property_form(f, main_area, app),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::None => {}
    }
}

/// Draw a single panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;
    let block = panel_block(panel);
    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Dashboard => dashboard_panel::render(f, inner, app),
        Panel::Properties => properties_panel::render(f, inner, app),
        Panel::Leads => leads_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_inner_excludes_border_and_status_bar() {
        let inner = panel_inner(Rect::new(0, 0, 100, 40));
        assert_eq!(inner, Rect::new(1, 1, 98, 37));
    }

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);
        assert_eq!(popup.width, 60);
        assert!(popup.x >= 19 && popup.right() <= 81);
    }
}
