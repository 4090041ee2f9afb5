//! Panel 1 — Dashboard: pipeline and listing headline numbers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use realdesk_core::board::column_for;
use realdesk_core::dashboard::{recent_leads, DashboardSummary};
use realdesk_core::money::format_usd;

use crate::app::AppState;
use crate::detail::format_date;
use crate::theme;

const RECENT: usize = 5;
const BAR_WIDTH: usize = 24;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let summary = DashboardSummary::compute(&app.store, &app.catalog);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut left: Vec<Line> = Vec::new();
    section(&mut left, "Pipeline");
    stat(&mut left, "Total leads", summary.total_leads.to_string());
    stat(&mut left, "Open pipeline", format_usd(summary.open_pipeline_value));
    stat(&mut left, "Closed value", format_usd(summary.closed_value));
    stat(
        &mut left,
        "Conversion",
        format!("{:.1}%", summary.conversion_rate() * 100.0),
    );
    left.push(Line::from(""));

    let max = summary
        .leads_by_stage
        .iter()
        .map(|(_, n)| *n)
        .max()
        .unwrap_or(0)
        .max(1);
    for (status, count) in summary.leads_by_stage {
        let filled = count * BAR_WIDTH / max;
        left.push(Line::from(vec![
            Span::styled(format!("  {:>12} ", column_for(status).label), theme::muted()),
            Span::styled("█".repeat(filled), theme::stage(status)),
            Span::styled(format!(" {count}"), theme::text()),
        ]));
    }
    f.render_widget(Paragraph::new(left), halves[0]);

    let mut right: Vec<Line> = Vec::new();
    section(&mut right, "Listings");
    stat(&mut right, "Total listings", summary.total_listings.to_string());
    stat(&mut right, "Active value", format_usd(summary.active_listing_value));
    for (status, count) in summary.listings_by_status {
        right.push(Line::from(vec![
            Span::styled(format!("  {:>16}: ", status.to_string()), theme::muted()),
            Span::styled(count.to_string(), theme::listing(status)),
        ]));
    }
    right.push(Line::from(""));

    section(&mut right, "Recent leads");
    for lead in recent_leads(&app.store, RECENT) {
        right.push(Line::from(vec![
            Span::styled(format!("  {:<18}", lead.name), theme::text()),
            Span::styled(format!("{:<12}", lead.status.to_string()), theme::stage(lead.status)),
            Span::styled(format_date(lead.created_at), theme::muted()),
        ]));
    }
    f.render_widget(Paragraph::new(right), halves[1]);
}

fn section(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn stat(lines: &mut Vec<Line<'static>>, label: &str, value: String) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}: ", label), theme::muted()),
        Span::styled(value, theme::accent()),
    ]));
}
