//! End-to-end flows driven through synthesized key and mouse events.

use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

use realdesk_core::{seed, LeadId, LeadStatus, NewLead};
use realdesk_tui::app::{AppState, Overlay, Panel, StatusLevel};
use realdesk_tui::input::{handle_key, handle_mouse};
use realdesk_tui::ui::{self, leads_panel};
use realdesk_tui::worker::{WorkerCommand, WorkerResponse};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 120,
    height: 40,
};

struct Harness {
    app: AppState,
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    _resp_tx: mpsc::Sender<WorkerResponse>,
}

fn harness() -> Harness {
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let app = AppState::new(
        seed::leads(),
        seed::properties(),
        cmd_tx,
        resp_rx,
        PathBuf::from("state.json"),
    );
    Harness {
        app,
        cmd_rx,
        _resp_tx: resp_tx,
    }
}

fn key(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

fn mouse(app: &mut AppState, kind: MouseEventKind, x: u16, y: u16) {
    handle_mouse(
        app,
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        },
        AREA,
    );
}

fn status_of(app: &AppState, id: &str) -> LeadStatus {
    app.store.get(&LeadId::new(id)).unwrap().status
}

fn card_point(app: &AppState, id: &str) -> (u16, u16) {
    let layout = leads_panel::board_layout(ui::panel_inner(AREA), app);
    let (_, rect) = layout
        .cards
        .iter()
        .find(|(card, _)| card.as_str() == id)
        .expect("card on screen");
    (rect.x + 1, rect.y + 1)
}

fn column_point(app: &AppState, status: LeadStatus) -> (u16, u16) {
    let layout = leads_panel::board_layout(ui::panel_inner(AREA), app);
    let (_, rect) = layout
        .columns
        .iter()
        .find(|(s, _)| *s == status)
        .expect("column on screen");
    (rect.x + 2, rect.bottom() - 2)
}

fn render(app: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn region_text(app: &AppState, rect: Rect) -> String {
    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn add_lead_with_non_numeric_budget() {
    let mut h = harness();
    let app = &mut h.app;
    key(app, KeyCode::Char('a'));
    assert_eq!(app.overlay, Overlay::LeadForm);

    for value in ["Frank Ocean", "frank@example.com", "555-0199", "abc", "Condo"] {
        type_text(app, value);
        key(app, KeyCode::Tab);
    }
    key(app, KeyCode::Enter);

    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.store.len(), 6);
    let newest = &app.store.leads()[0];
    assert_eq!(newest.name, "Frank Ocean");
    assert_eq!(newest.budget, 0.0);
    assert_eq!(newest.status, LeadStatus::New);
    assert_eq!(app.board.selected_id(&app.store), Some(newest.id.clone()));

    // Reopening starts from an empty form.
    key(app, KeyCode::Char('a'));
    assert!(app.lead_form.form.fields.iter().all(|f| f.value.is_empty()));
}

#[test]
fn cancelled_form_discards_draft() {
    let mut h = harness();
    let app = &mut h.app;
    key(app, KeyCode::Char('a'));
    type_text(app, "Half typed");
    key(app, KeyCode::Esc);
    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.store.len(), 5);
    key(app, KeyCode::Char('a'));
    assert_eq!(app.lead_form.form.fields[0].value, "");
}

#[test]
fn next_stage_walks_to_closed_then_stops() {
    let mut h = harness();
    let app = &mut h.app;
    // Cursor starts on Alice (New, row 0).
    for expected in [
        LeadStatus::Contacted,
        LeadStatus::Viewing,
        LeadStatus::Negotiation,
        LeadStatus::Closed,
    ] {
        key(app, KeyCode::Char('n'));
        assert_eq!(status_of(app, "1"), expected);
    }
    let revision = app.store.revision();
    key(app, KeyCode::Char('n'));
    assert_eq!(status_of(app, "1"), LeadStatus::Closed);
    assert_eq!(app.store.revision(), revision);
    assert_eq!(app.status_message.as_ref().map(|s| s.1), Some(StatusLevel::Warning));
}

#[test]
fn next_stage_ignores_filter() {
    let mut h = harness();
    let app = &mut h.app;
    // Show only New; advancing moves the lead into a hidden column.
    key(app, KeyCode::Char('f'));
    key(app, KeyCode::Char(' '));
    key(app, KeyCode::Esc);
    assert_eq!(app.board.displayed().len(), 1);

    key(app, KeyCode::Char('n'));
    assert_eq!(status_of(app, "1"), LeadStatus::Contacted);
    assert_eq!(app.board.selected_id(&app.store), Some(LeadId::new("2")));
}

#[test]
fn keyboard_drag_and_drop() {
    let mut h = harness();
    let app = &mut h.app;
    key(app, KeyCode::Char('j')); // Bob
    key(app, KeyCode::Char('m'));
    assert!(app.board.drag.is_dragging());
    key(app, KeyCode::Char('l'));
    key(app, KeyCode::Char('l'));
    assert_eq!(app.board.drag.over(), Some(LeadStatus::Viewing));
    key(app, KeyCode::Char('m'));

    assert_eq!(status_of(app, "2"), LeadStatus::Viewing);
    assert_eq!(status_of(app, "1"), LeadStatus::New);
    assert!(!app.board.drag.is_dragging());
    assert_eq!(app.board.drag.over(), None);
    assert_eq!(app.board.selected_id(&app.store), Some(LeadId::new("2")));
}

#[test]
fn esc_cancels_keyboard_drag() {
    let mut h = harness();
    let app = &mut h.app;
    key(app, KeyCode::Char('m'));
    key(app, KeyCode::Char('l'));
    key(app, KeyCode::Esc);
    assert!(!app.board.drag.is_dragging());
    assert_eq!(status_of(app, "1"), LeadStatus::New);
}

#[test]
fn dragging_a_deep_card_keeps_target_column_visible() {
    let mut h = harness();
    let app = &mut h.app;
    for i in 0..8 {
        app.store.add(NewLead {
            name: format!("Walk-in {i}"),
            email: format!("walkin{i}@example.com"),
            phone: "555-0100".into(),
            budget: 300_000.0,
            interest: "Condo".into(),
            ..NewLead::default()
        });
    }
    for _ in 0..9 {
        key(app, KeyCode::Char('j'));
    }
    assert_eq!(app.board.row, 9);

    key(app, KeyCode::Char('m'));
    key(app, KeyCode::Char('l'));
    assert_eq!(app.board.drag.over(), Some(LeadStatus::Contacted));
    assert_eq!(app.board.row, 0);

    // Charlie is Contacted's only card and must still be laid out and drawn.
    let (cx, cy) = card_point(app, "3");
    assert_eq!(
        leads_panel::board_layout(ui::panel_inner(AREA), app).column_at(cx, cy),
        Some(LeadStatus::Contacted)
    );
    assert!(render(app).contains("Charlie Brown"));

    key(app, KeyCode::Esc);
    assert_eq!(app.board.current_status(), Some(LeadStatus::New));
    assert_eq!(app.board.row, 9);
}

#[test]
fn mouse_drag_and_drop() {
    let mut h = harness();
    let app = &mut h.app;
    let (x, y) = card_point(app, "3");
    mouse(app, MouseEventKind::Down(MouseButton::Left), x, y);
    assert_eq!(app.board.drag.payload(), Some(&LeadId::new("3")));

    let (tx, ty) = column_point(app, LeadStatus::Closed);
    mouse(app, MouseEventKind::Drag(MouseButton::Left), tx, ty);
    assert_eq!(app.board.drag.over(), Some(LeadStatus::Closed));

    // Leaving every column clears the highlight.
    mouse(app, MouseEventKind::Drag(MouseButton::Left), 0, 0);
    assert_eq!(app.board.drag.over(), None);

    mouse(app, MouseEventKind::Drag(MouseButton::Left), tx, ty);
    mouse(app, MouseEventKind::Up(MouseButton::Left), tx, ty);
    assert_eq!(status_of(app, "3"), LeadStatus::Closed);
    assert_eq!(app.board.drag.over(), None);
    assert!(!app.board.drag.is_dragging());
}

#[test]
fn mouse_release_outside_board_cancels() {
    let mut h = harness();
    let app = &mut h.app;
    let (x, y) = card_point(app, "4");
    mouse(app, MouseEventKind::Down(MouseButton::Left), x, y);
    mouse(app, MouseEventKind::Up(MouseButton::Left), 0, AREA.height - 1);
    assert!(!app.board.drag.is_dragging());
    assert_eq!(status_of(app, "4"), LeadStatus::Viewing);
}

#[test]
fn click_opens_detail() {
    let mut h = harness();
    let app = &mut h.app;
    let (x, y) = card_point(app, "2");
    mouse(app, MouseEventKind::Down(MouseButton::Left), x, y);
    mouse(app, MouseEventKind::Up(MouseButton::Left), x, y);
    assert_eq!(app.overlay, Overlay::LeadDetail(LeadId::new("2")));
    assert_eq!(status_of(app, "2"), LeadStatus::New);

    let text = render(app);
    assert!(text.contains("Lead Details"));
    assert!(text.contains("Stage changed to New"));
    assert!(text.contains("via Web Form"));

    key(app, KeyCode::Esc);
    assert_eq!(app.overlay, Overlay::None);
}

#[test]
fn mouse_is_ignored_off_the_board() {
    let mut h = harness();
    let app = &mut h.app;
    let (x, y) = card_point(app, "1");
    key(app, KeyCode::Char('1'));
    assert_eq!(app.active_panel, Panel::Dashboard);
    mouse(app, MouseEventKind::Down(MouseButton::Left), x, y);
    assert!(!app.board.drag.is_dragging());
}

#[test]
fn board_renders_counts_and_empty_column() {
    let h = harness();
    let text = render(&h.app);
    assert!(text.contains("New Leads (2)"));
    assert!(text.contains("Closed (0)"));
    assert!(text.contains("No Leads"));
    assert!(text.contains("Drop here"));
    assert!(text.contains("Alice Johnson"));
}

#[test]
fn closed_card_shows_deal_closed_instead_of_next_stage() {
    let mut h = harness();
    let app = &mut h.app;
    app.store.update_status(&LeadId::new("1"), LeadStatus::Closed);

    let layout = leads_panel::board_layout(ui::panel_inner(AREA), app);
    let (_, card) = layout
        .cards
        .iter()
        .find(|(id, _)| id.as_str() == "1")
        .expect("closed card on screen");
    assert_eq!(layout.column_at(card.x + 1, card.y + 1), Some(LeadStatus::Closed));

    let text = region_text(app, *card);
    assert!(text.contains("Alice Johnson"));
    assert!(text.contains("Deal closed"));
    assert!(!text.contains("Next Stage"));

    // Open cards keep the button.
    let (_, open) = layout
        .cards
        .iter()
        .find(|(id, _)| id.as_str() == "2")
        .expect("open card on screen");
    assert!(region_text(app, *open).contains("Next Stage"));
}

#[test]
fn filtered_board_hides_columns_only() {
    let mut h = harness();
    let app = &mut h.app;
    key(app, KeyCode::Char('f'));
    key(app, KeyCode::Char('l'));
    key(app, KeyCode::Char(' ')); // Contacted
    key(app, KeyCode::Esc);
    let text = render(app);
    assert!(text.contains("Contacted (1)"));
    assert!(!text.contains("New Leads (2)"));
    assert_eq!(app.store.len(), 5);

    key(app, KeyCode::Char('c'));
    assert!(render(app).contains("New Leads (2)"));
}

#[test]
fn property_form_generation_flow() {
    let mut h = harness();
    let app = &mut h.app;
    key(app, KeyCode::Char('2'));
    key(app, KeyCode::Char('a'));
    assert_eq!(app.overlay, Overlay::PropertyForm);

    type_text(app, "Sunny Villa");
    key(app, KeyCode::Tab);
    type_text(app, "500000");
    key(app, KeyCode::Tab);
    type_text(app, "1 Beach Rd");
    key(app, KeyCode::Tab);
    type_text(app, "3 bed, pool");
    handle_key(app, KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL));

    let Ok(WorkerCommand::Generate { request_id, request }) = h.cmd_rx.try_recv() else {
        panic!("expected a generate command");
    };
    assert_eq!(request.features, "3 bed, pool");
    assert!(render(app).contains("Generating..."));

    app.handle_worker_response(WorkerResponse::DescriptionReady {
        request_id,
        text: "A sunlit villa by the sea.".into(),
    });
    key(app, KeyCode::Enter);

    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.catalog.len(), 5);
    let newest = &app.catalog.all()[0];
    assert_eq!(newest.title, "Sunny Villa");
    assert_eq!(newest.description.as_deref(), Some("A sunlit villa by the sea."));
    assert_eq!(newest.beds, 3);
}

#[test]
fn every_panel_renders() {
    let mut h = harness();
    for n in ['1', '2', '3', '4'] {
        key(&mut h.app, KeyCode::Char(n));
        let text = render(&h.app);
        assert!(text.contains(h.app.active_panel.label()));
    }
    assert!(render(&h.app).contains("Open error history"));
}
