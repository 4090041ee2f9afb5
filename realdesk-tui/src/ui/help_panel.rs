//! Panel 4 — Help: keyboard and mouse shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-4", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — Properties");
    key(&mut lines, "j / k", "Move through listings");
    key(&mut lines, "/", "Search title or address (Enter/Esc to finish)");
    key(&mut lines, "a", "Add property");
    key(&mut lines, "Ctrl+G", "In the form: generate a description");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 3 — Leads");
    key(&mut lines, "h / l, j / k", "Move between columns and cards");
    key(&mut lines, "Enter", "Open lead details");
    key(&mut lines, "n", "Next Stage (not available once Closed)");
    key(&mut lines, "m / Space", "Grab a card, then drop it on a column");
    key(&mut lines, "Esc", "Cancel a drag");
    key(&mut lines, "f", "Focus filter bar (Space toggles, Esc leaves)");
    key(&mut lines, "c", "Clear filters");
    key(&mut lines, "a", "Add lead");
    key(&mut lines, "mouse", "Drag a card onto a column; click to open it");
    lines.push(Line::from(""));

    section(&mut lines, "Forms");
    key(&mut lines, "Tab / Shift+Tab", "Next / previous field");
    key(&mut lines, "Enter", "Submit");
    key(&mut lines, "Esc", "Cancel and discard");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 4 — Help (this panel)");
    key(
        &mut lines,
        "e",
        &format!("Open error history ({} recorded)", app.error_history.len()),
    );

    f.render_widget(Paragraph::new(lines), area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
