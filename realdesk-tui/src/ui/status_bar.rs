//! Bottom status bar — last error/status message, panel hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    // Panel hints
    spans.push(Span::styled(
        " 1:Dashboard 2:Properties 3:Leads 4:Help",
        theme::muted(),
    ));

    if app.board.drag.is_dragging() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("DRAGGING", theme::accent_bold()));
    }

    if app.property_form.is_generating() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Generating...", theme::neutral()));
    }

    // Separator
    spans.push(Span::raw(" | "));

    // Status message
    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
