//! Input dispatch — overlays → text entry → global keys → panel-specific handlers.
//!
//! Mouse events only act on the Leads board, where they drive drag-and-drop.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use realdesk_core::{LeadId, LeadStatus};

use crate::app::{AppState, Overlay, Panel};
use crate::forms::Form;
use crate::ui;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::LeadDetail(_) => {
            handle_detail_overlay(app, key);
            return;
        }
        Overlay::LeadForm => {
            handle_lead_form(app, key);
            return;
        }
        Overlay::PropertyForm => {
            handle_property_form(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Text entry owns every key while active.
    if app.active_panel == Panel::Properties && app.properties.searching {
        handle_search_key(app, key);
        return;
    }

    // 3. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.switch_panel(Panel::Dashboard); return; }
        KeyCode::Char('2') => { app.switch_panel(Panel::Properties); return; }
        KeyCode::Char('3') => { app.switch_panel(Panel::Leads); return; }
        KeyCode::Char('4') => { app.switch_panel(Panel::Help); return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.switch_panel(app.active_panel.prev());
            } else {
                app.switch_panel(app.active_panel.next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.switch_panel(app.active_panel.prev());
            return;
        }
        _ => {}
    }

    // 4. Panel-specific keys.
    match app.active_panel {
        Panel::Dashboard => {} // display only
        Panel::Properties => handle_properties_key(app, key),
        Panel::Leads => handle_leads_key(app, key),
        Panel::Help => handle_help_key(app, key),
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_detail_overlay(app: &mut AppState, key: KeyEvent) {
    if let KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') = key.code {
        app.overlay = Overlay::None;
    }
}

/// Shared field editing. Returns true when the key was consumed.
fn edit_form(form: &mut Form, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.push_char(c),
        _ => return false,
    }
    true
}

fn handle_lead_form(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_lead_form(),
        KeyCode::Enter => app.submit_lead_form(),
        _ => {
            edit_form(&mut app.lead_form.form, key);
        }
    }
}

fn handle_property_form(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_property_form(),
        KeyCode::Enter => app.submit_property_form(),
        KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.request_description();
        }
        _ => {
            edit_form(&mut app.property_form.form, key);
        }
    }
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.properties.searching = false,
        KeyCode::Backspace => {
            app.properties.search.pop();
            app.properties.cursor = 0;
        }
        KeyCode::Char(c) => {
            app.properties.search.push(c);
            app.properties.cursor = 0;
        }
        _ => {}
    }
}

fn handle_properties_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.properties.cursor += 1;
            app.properties.clamp(&app.catalog);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.properties.cursor = app.properties.cursor.saturating_sub(1);
        }
        KeyCode::Char('/') => app.properties.searching = true,
        KeyCode::Esc => {
            app.properties.search.clear();
            app.properties.cursor = 0;
        }
        KeyCode::Char('a') => app.open_property_form(),
        _ => {}
    }
}

fn handle_leads_key(app: &mut AppState, key: KeyEvent) {
    if app.board.filter_focus.is_some() {
        handle_filter_bar_key(app, key);
        return;
    }

    let dragging = app.board.drag.is_dragging();
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.board.move_column(-1, &app.store),
        KeyCode::Char('l') | KeyCode::Right => app.board.move_column(1, &app.store),
        KeyCode::Char('j') | KeyCode::Down => app.board.move_row(1, &app.store),
        KeyCode::Char('k') | KeyCode::Up => app.board.move_row(-1, &app.store),
        KeyCode::Char('m') | KeyCode::Char(' ') | KeyCode::Enter if dragging => {
            if let Some(status) = app.board.drop_target() {
                app.drop_dragged(status);
            }
        }
        KeyCode::Char('m') | KeyCode::Char(' ') => {
            if let Some(id) = app.board.grab(&app.store) {
                tracing::debug!(lead = %id, "drag start (keyboard)");
                app.set_status("Moving card: h/l to pick a column, m to drop, Esc to cancel");
            }
        }
        KeyCode::Esc if dragging => {
            app.board.cancel_drag(&app.store);
            app.set_status("Move cancelled");
        }
        KeyCode::Enter => {
            if let Some(id) = app.board.selected_id(&app.store) {
                app.open_lead_detail(id);
            }
        }
        KeyCode::Char('n') if !dragging => app.advance_selected(),
        KeyCode::Char('a') if !dragging => app.open_lead_form(),
        KeyCode::Char('f') if !dragging => app.board.focus_filter(),
        KeyCode::Char('c') if !dragging => app.board.clear_filter(&app.store),
        _ => {}
    }
}

fn handle_filter_bar_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.board.move_filter_focus(-1),
        KeyCode::Char('l') | KeyCode::Right => app.board.move_filter_focus(1),
        KeyCode::Char(' ') | KeyCode::Enter => app.board.toggle_focused_filter(&app.store),
        KeyCode::Char('c') => app.board.clear_filter(&app.store),
        KeyCode::Esc | KeyCode::Char('f') | KeyCode::Down | KeyCode::Char('j') => {
            app.board.blur_filter();
        }
        _ => {}
    }
}

fn handle_help_key(app: &mut AppState, key: KeyEvent) {
    if let KeyCode::Char('e') = key.code {
        app.overlay = Overlay::ErrorHistory;
        app.error_scroll = 0;
    }
}

/// Handle a mouse event. `area` is the full terminal area.
///
/// Press on a card starts a drag, motion updates the hovered column, and
/// release drops onto the column under the pointer (or cancels outside any
/// column). Releasing on the same card it was grabbed from opens its detail.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, area: Rect) {
    if app.overlay != Overlay::None || app.active_panel != Panel::Leads {
        return;
    }
    let layout = ui::leads_panel::board_layout(ui::panel_inner(area), app);
    let (x, y) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(id) = layout.card_at(x, y).cloned() else {
                return;
            };
            app.board.blur_filter();
            app.board.focus_lead(&app.store, &id);
            tracing::debug!(lead = %id, "drag start (mouse)");
            app.board.drag.start(id);
            if let Some(status) = layout.column_at(x, y) {
                app.board.drag.drag_over(status);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if !app.board.drag.is_dragging() {
                return;
            }
            match layout.column_at(x, y) {
                Some(status) => app.board.drag.drag_over(status),
                None => app.board.drag.leave(),
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(grabbed) = app.board.drag.payload().cloned() else {
                return;
            };
            match layout.column_at(x, y) {
                Some(status) => {
                    let same_card = layout.card_at(x, y) == Some(&grabbed);
                    drop_or_open(app, grabbed, status, same_card);
                }
                None => app.board.cancel_drag(&app.store),
            }
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if let Some(id) = layout.card_at(x, y).cloned() {
                app.open_lead_detail(id);
            }
        }
        _ => {}
    }
}

fn drop_or_open(app: &mut AppState, grabbed: LeadId, status: LeadStatus, same_card: bool) {
    if same_card {
        // A click: press and release on one card.
        app.board.drag.cancel();
        app.open_lead_detail(grabbed);
    } else {
        app.drop_dragged(status);
    }
}
