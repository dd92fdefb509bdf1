//! Key handling for the console.
//!
//! Responsibilities:
//! - Route each key to the layer that owns it: open overlays first, then
//!   text-entry modes, then global shortcuts, then the focused pane.
//! - Apply page-local effects (cursor, filters, form fields) directly and
//!   return an Action for anything cross-cutting.
//!
//! Non-responsibilities:
//! - Does NOT perform navigation or async work (returns Actions).
//!
//! Invariants:
//! - Ctrl+C quits from any state.
//! - While a text-entry mode or the add-device form owns the keyboard,
//!   printable keys never trigger shortcuts.

mod chrome;
mod pages;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::app::pages::Page;
use crate::app::state::{Focus, InputMode, LayoutMode};

impl App {
    /// Handle a key press. Returns an Action for the event loop, if any.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.gateway_menu.is_some() {
            return self.handle_gateway_menu_input(key);
        }
        if self.notifications_open {
            return self.handle_notifications_input(key);
        }
        if self.drawer_open {
            return self.handle_drawer_input(key);
        }

        match self.input_mode {
            InputMode::Search => return self.handle_search_input(key),
            InputMode::EditScanField => return self.handle_scan_field_input(key),
            InputMode::Normal => {}
        }

        if self.focus == Focus::Content
            && matches!(self.page, Page::AddDevice(_))
            && let Some(action) = self.handle_form_input(key)
        {
            return action;
        }

        if let Some(action) = self.handle_global_input(key) {
            return action;
        }

        match self.focus {
            Focus::Sidebar if self.layout_mode() == LayoutMode::Desktop => {
                self.handle_sidebar_input(key)
            }
            _ => self.handle_page_input(key),
        }
    }

    /// Shortcuts available from either pane. `Some(_)` means the key was
    /// consumed.
    fn handle_global_input(&mut self, key: KeyEvent) -> Option<Option<Action>> {
        let desktop = self.layout_mode() == LayoutMode::Desktop;
        let action = match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Tab if desktop => {
                self.focus = self.focus.toggle();
                None
            }
            KeyCode::Char('[') if desktop => Some(Action::ToggleSidebar),
            KeyCode::Char('m') => Some(Action::ToggleMobileDrawer),
            KeyCode::Char('n') => Some(Action::ToggleNotifications),
            KeyCode::Char('g') => Some(Action::ToggleGatewayMenu),
            _ => return None,
        };
        Some(action)
    }
}
