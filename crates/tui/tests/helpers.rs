//! Test helpers for driving the console from key events.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gateway_client::Route;
use gateway_config::{Config, PersistedState};
use gateway_tui::action::Action;
use gateway_tui::app::App;
use ratatui::{Terminal, backend::TestBackend};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

pub fn left_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)
}

pub fn right_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)
}

pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// App opened on `route` with default config and fresh state.
pub fn app_at(route: Route) -> App {
    App::new(&Config::default(), PersistedState::default(), Some(route))
}

/// Feed a key through input handling and apply the resulting action, the
/// way the event loop does. Returns the action the key produced.
pub fn press(app: &mut App, key: KeyEvent) -> Option<Action> {
    let action = app.handle_input(key);
    if let Some(action) = &action
        && !matches!(action, Action::Quit | Action::PersistState)
    {
        app.update(action.clone());
    }
    action
}

/// Type each character of `text`.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, key(c));
    }
}

/// Render into a test terminal and return the screen as text.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
