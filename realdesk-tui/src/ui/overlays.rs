//! Overlay widgets — welcome, lead detail, the two forms, error history.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use realdesk_core::money::format_usd;
use realdesk_core::LeadId;

use crate::app::AppState;
use crate::detail;
use crate::forms::Form;
use crate::theme;
use crate::ui::centered_rect;

fn popup_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(title.to_string())
        .title_style(theme::accent_bold())
}

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 45, area);
    f.render_widget(Clear, popup);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Press 3 for the sales pipeline board",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Move a card with m, or drag it with the mouse",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press n to push a lead to its next stage",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Press 2 for listings, a to add one",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text)
        .block(popup_block(" Welcome to RealDesk "))
        .wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Read-only detail of one lead.
pub fn render_lead_detail(f: &mut Frame, area: Rect, app: &AppState, id: &LeadId) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = popup_block(" Lead Details [Esc]close ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(lead) = app.store.get(id) else {
        let text = Paragraph::new(Span::styled("Lead not found.", theme::muted()));
        f.render_widget(text, inner);
        return;
    };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("({}) ", lead.initial()), theme::neutral()),
            Span::styled(lead.name.as_str(), theme::text().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(lead.status.to_string(), theme::stage(lead.status)),
        ]),
        Line::from(Span::styled(lead.interest.as_str(), theme::text_secondary())),
        Line::from(""),
    ];

    section(&mut lines, "Contact Info");
    field(&mut lines, "Email", lead.email.clone());
    field(&mut lines, "Phone", lead.phone.clone());
    lines.push(Line::from(""));

    section(&mut lines, "Details");
    field(&mut lines, "Budget", format_usd(lead.budget));
    field(&mut lines, "Assigned Agent", detail::agent(lead).to_string());
    field(&mut lines, "Created", detail::format_date(lead.created_at));
    lines.push(Line::from(""));

    section(&mut lines, "Notes");
    let notes_style = if lead.has_notes() {
        theme::text()
    } else {
        theme::muted()
    };
    lines.push(Line::from(Span::styled(
        format!("  {}", detail::notes(lead)),
        notes_style,
    )));
    lines.push(Line::from(""));

    section(&mut lines, "Recent Activity");
    for entry in detail::activity_feed(lead) {
        lines.push(Line::from(vec![
            Span::styled("  • ", theme::accent()),
            Span::styled(entry.title, theme::text()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", entry.detail),
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Add Lead form.
pub fn render_lead_form(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = popup_block(" Add New Lead [Enter]save [Esc]cancel ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let lines = form_lines(&app.lead_form.form);
    f.render_widget(Paragraph::new(lines), inner);
}

/// Add Property form with the description drafting controls.
pub fn render_property_form(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = popup_block(" Add Property [Enter]save [Esc]cancel ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let pf = &app.property_form;
    let mut lines = form_lines(&pf.form);
    let generate = if pf.is_generating() {
        Span::styled("Generating...", theme::neutral())
    } else if pf.can_generate() {
        Span::styled("[Ctrl+G] Generate Description", theme::accent_bold())
    } else {
        Span::styled(
            "[Ctrl+G] Generate Description (needs title and features)",
            theme::muted(),
        )
    };
    lines.push(Line::from(generate));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn form_lines(form: &Form) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        let marker = if field.required { " *" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("{}{marker}", field.label),
            label_style,
        )));

        let mut value = vec![Span::styled(if focused { "> " } else { "  " }, theme::accent())];
        if field.value.is_empty() {
            value.push(Span::styled(field.placeholder, theme::muted()));
        } else {
            value.push(Span::styled(field.value.as_str(), theme::text()));
        }
        if focused {
            value.push(Span::styled("_", theme::accent()));
        }
        lines.push(Line::from(value));
        lines.push(Line::from(""));
    }
    lines
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme::negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, err) in app
        .error_history
        .iter()
        .enumerate()
        .skip(app.error_scroll)
        .take(visible_height)
    {
        let style = if i == app.error_scroll {
            theme::negative().add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", err.timestamp.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(format!("[{}] ", err.category.label()), theme::warning()),
            Span::styled(err.message.as_str(), style),
        ]));

        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(err.context.as_str(), theme::muted()),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn field(lines: &mut Vec<Line<'_>>, label: &str, value: String) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}: ", label), theme::muted()),
        Span::styled(value, theme::accent()),
    ]));
}
