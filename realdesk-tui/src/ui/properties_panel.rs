//! Panel 2 — Properties: searchable listing table with a detail pane.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use realdesk_core::money::format_usd;
use realdesk_core::Property;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    render_search(f, rows[0], app);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let visible = app.properties.visible(&app.catalog);
    if visible.is_empty() {
        let text = Paragraph::new(Span::styled("No properties match.", theme::muted()));
        f.render_widget(text, cols[0]);
        return;
    }

    let height = cols[0].height as usize;
    let start = app.properties.cursor.saturating_sub(height.saturating_sub(1));
    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, p)| row(p, i == app.properties.cursor))
        .collect();
    f.render_widget(Paragraph::new(lines), cols[0]);

    if let Some(property) = visible.get(app.properties.cursor) {
        render_detail(f, cols[1], property);
    }
}

fn render_search(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![Span::styled("Search: ", theme::muted())];
    let style = if app.properties.searching {
        theme::accent_bold()
    } else {
        theme::text()
    };
    spans.push(Span::styled(app.properties.search.as_str(), style));
    if app.properties.searching {
        spans.push(Span::styled("_", theme::accent()));
    } else {
        spans.push(Span::styled("  [/] search  [a] Add Property", theme::muted()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn row(p: &Property, selected: bool) -> Line<'_> {
    let title_style = if selected {
        theme::selected()
    } else {
        theme::text()
    };
    Line::from(vec![
        Span::styled(format!("{:<26}", p.title), title_style),
        Span::styled(format!("{:>12} ", format_usd(p.price)), theme::positive()),
        Span::styled(format!("{:<8}", p.status.to_string()), theme::listing(p.status)),
        Span::styled(p.address.as_str(), theme::muted()),
    ])
}

fn render_detail(f: &mut Frame, area: Rect, p: &Property) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(theme::muted())
        .title(Span::styled(format!(" {} ", p.title), theme::accent_bold()));
    let description = p
        .description
        .as_deref()
        .unwrap_or("No description yet.");
    let lines = vec![
        Line::from(Span::styled(p.address.as_str(), theme::text_secondary())),
        Line::from(""),
        Line::from(vec![
            Span::styled(format_usd(p.price), theme::positive()),
            Span::raw("  "),
            Span::styled(p.status.to_string(), theme::listing(p.status)),
            Span::raw("  "),
            Span::styled(p.property_type.to_string(), theme::neutral()),
        ]),
        Line::from(Span::styled(
            format!("{} bd · {} ba · {} sqft", p.beds, p.baths, p.sqft),
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled(description, theme::text_secondary())),
    ];
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
