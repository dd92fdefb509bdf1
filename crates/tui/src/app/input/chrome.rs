//! Input for the shell around the page: sidebar, mobile drawer, header menus.

use crossterm::event::{KeyCode, KeyEvent};
use gateway_client::NavRowKind;

use crate::action::Action;
use crate::app::App;
use crate::app::state::Focus;

/// What activating a navigation row does.
enum RowTarget {
    Group(String),
    Link(String),
}

fn step(cursor: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (cursor + 1) % len
    } else {
        (cursor + len - 1) % len
    }
}

impl App {
    pub(super) fn handle_sidebar_input(&mut self, key: KeyEvent) -> Option<Action> {
        let len = self.sidebar_rows().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.sidebar_cursor = step(self.sidebar_cursor, len, true);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.sidebar_cursor = step(self.sidebar_cursor, len, false);
                None
            }
            KeyCode::Esc => {
                self.focus = Focus::Content;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                match self.sidebar_target()? {
                    RowTarget::Group(name) => {
                        // Ignored while collapsed.
                        self.sidebar.toggle_group(&name);
                        None
                    }
                    RowTarget::Link(path) => {
                        self.focus = Focus::Content;
                        Some(Action::Navigate(path))
                    }
                }
            }
            _ => None,
        }
    }

    fn sidebar_target(&self) -> Option<RowTarget> {
        let rows = self.sidebar_rows();
        let row = rows.get(self.sidebar_cursor)?;
        Some(match row.kind {
            NavRowKind::Group { .. } => RowTarget::Group(row.name.to_string()),
            NavRowKind::Link { path, .. } => RowTarget::Link(path.to_string()),
        })
    }

    pub(super) fn handle_drawer_input(&mut self, key: KeyEvent) -> Option<Action> {
        let len = self.drawer_rows().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.mobile_cursor = step(self.mobile_cursor, len, true);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.mobile_cursor = step(self.mobile_cursor, len, false);
                None
            }
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::ToggleMobileDrawer),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Enter | KeyCode::Char(' ') => match self.drawer_target()? {
                RowTarget::Group(name) => {
                    self.mobile_expand.toggle(&name);
                    None
                }
                RowTarget::Link(path) => Some(Action::Navigate(path)),
            },
            _ => None,
        }
    }

    fn drawer_target(&self) -> Option<RowTarget> {
        let rows = self.drawer_rows();
        let row = rows.get(self.mobile_cursor)?;
        Some(match row.kind {
            NavRowKind::Group { .. } => RowTarget::Group(row.name.to_string()),
            NavRowKind::Link { path, .. } => RowTarget::Link(path.to_string()),
        })
    }

    pub(super) fn handle_notifications_input(&mut self, key: KeyEvent) -> Option<Action> {
        let len = self.notifications.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.notifications_cursor = step(self.notifications_cursor, len, true);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.notifications_cursor = step(self.notifications_cursor, len, false);
                None
            }
            KeyCode::Enter => {
                if let Some(notification) = self.notifications.get_mut(self.notifications_cursor) {
                    notification.unread = false;
                }
                None
            }
            KeyCode::Esc | KeyCode::Char('n') => Some(Action::ToggleNotifications),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    pub(super) fn handle_gateway_menu_input(&mut self, key: KeyEvent) -> Option<Action> {
        let cursor = self.gateway_menu?;
        let len = self.gateways.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.gateway_menu = Some(step(cursor, len, true));
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.gateway_menu = Some(step(cursor, len, false));
                None
            }
            KeyCode::Enter => Some(Action::SelectGateway(cursor)),
            KeyCode::Esc | KeyCode::Char('g') => Some(Action::ToggleGatewayMenu),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }
}
