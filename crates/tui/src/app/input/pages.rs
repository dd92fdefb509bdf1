//! Input for page content: search mode, list pages, discovery, the
//! add-device form and the not-found page.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gateway_client::models::Protocol;
use gateway_client::navigation::NOT_FOUND_LINKS;

use crate::action::Action;
use crate::app::App;
use crate::app::pages::{Page, ScanField, step_selection};
use crate::app::state::InputMode;
use crate::ui::ToastLevel;

impl App {
    pub(super) fn handle_search_input(&mut self, key: KeyEvent) -> Option<Action> {
        let Some(search) = self.page.search_mut() else {
            self.input_mode = InputMode::Normal;
            return None;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => search.pop_char(),
            KeyCode::Down => search.move_selection(true),
            KeyCode::Up => search.move_selection(false),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search.push_char(c)
            }
            _ => {}
        }
        None
    }

    pub(super) fn handle_scan_field_input(&mut self, key: KeyEvent) -> Option<Action> {
        let Page::Discovery(discovery) = &mut self.page else {
            self.input_mode = InputMode::Normal;
            return None;
        };
        match key.code {
            KeyCode::Esc => discovery.editing = None,
            KeyCode::Enter | KeyCode::Tab => discovery.editing = ScanField::next(discovery.editing),
            KeyCode::Backspace => discovery.edit_backspace(),
            KeyCode::Char(c) => discovery.edit_char(c),
            _ => {}
        }
        if discovery.editing.is_none() {
            self.input_mode = InputMode::Normal;
        }
        None
    }

    /// Keys the add-device form owns. `Some(_)` means the key was consumed;
    /// anything else falls through to the global shortcuts.
    pub(super) fn handle_form_input(&mut self, key: KeyEvent) -> Option<Option<Action>> {
        let Page::AddDevice(form) = &mut self.page else {
            return None;
        };
        let action = match key.code {
            KeyCode::Esc => Some(Action::Navigate("/devices".to_string())),
            KeyCode::Enter => Some(Action::SubmitDevice),
            KeyCode::Down => {
                form.focus_next();
                None
            }
            KeyCode::Up | KeyCode::BackTab => {
                form.focus_prev();
                None
            }
            KeyCode::Right => {
                form.cycle_option(true);
                None
            }
            KeyCode::Left => {
                form.cycle_option(false);
                None
            }
            KeyCode::Backspace => {
                form.backspace();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c);
                None
            }
            _ => return None,
        };
        Some(action)
    }

    pub(super) fn handle_page_input(&mut self, key: KeyEvent) -> Option<Action> {
        if let Some(search) = self.page.search_mut() {
            match key.code {
                KeyCode::Char('/') => {
                    self.input_mode = InputMode::Search;
                    return None;
                }
                KeyCode::Char('f') => {
                    search.cycle_category();
                    return None;
                }
                KeyCode::Esc => {
                    search.clear_query();
                    return None;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    search.move_selection(true);
                    return None;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    search.move_selection(false);
                    return None;
                }
                _ => {}
            }
        }

        match &mut self.page {
            Page::Devices(_) => match key.code {
                KeyCode::Char('a') => Some(Action::Navigate("/devices/add".to_string())),
                KeyCode::Char('d') => Some(Action::Navigate("/devices/discovery".to_string())),
                _ => None,
            },
            Page::Alarms(alarms) => match key.code {
                KeyCode::Char('s') => {
                    alarms.cycle_severity();
                    None
                }
                KeyCode::Char('a') => alarms.acknowledge_selected().map(|device| {
                    Action::Notify(
                        ToastLevel::Success,
                        format!("Alarm on {device} acknowledged"),
                    )
                }),
                _ => None,
            },
            Page::Protocols(protocols) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    protocols.toggle_selected_enabled().map(|(name, enabled)| {
                        let state = if enabled { "enabled" } else { "disabled" };
                        Action::Notify(ToastLevel::Info, format!("{name} {state}"))
                    })
                }
                _ => None,
            },
            Page::Discovery(discovery) => match key.code {
                KeyCode::Enter => Some(Action::StartScan),
                KeyCode::Down | KeyCode::Char('j') => {
                    discovery.move_cursor(true);
                    None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    discovery.move_cursor(false);
                    None
                }
                KeyCode::Char(' ') => {
                    discovery.toggle_at_cursor();
                    None
                }
                KeyCode::Char('i') if !discovery.scan.is_scanning() => {
                    discovery.editing = ScanField::next(None);
                    self.input_mode = InputMode::EditScanField;
                    None
                }
                KeyCode::Char(c @ '1'..='6') => {
                    let index = c as usize - '1' as usize;
                    if let Some(protocol) = Protocol::ALL.get(index) {
                        discovery.scan.config_mut().toggle_protocol(*protocol);
                    }
                    None
                }
                KeyCode::Char('a') => {
                    let count = discovery.scan.selected_count();
                    Some(if count == 0 {
                        Action::Notify(ToastLevel::Warning, "No devices selected".to_string())
                    } else {
                        Action::Notify(
                            ToastLevel::Success,
                            format!("{count} device(s) queued for onboarding"),
                        )
                    })
                }
                KeyCode::Esc => Some(if discovery.cancel_scan() {
                    Action::Notify(ToastLevel::Info, "Scan cancelled".to_string())
                } else {
                    Action::Navigate("/devices".to_string())
                }),
                _ => None,
            },
            Page::Reports(reports) => {
                let len = reports.reports.len();
                move_table(&mut reports.table, len, key)
            }
            Page::Integrations(integrations) => {
                let len = integrations.integrations.len();
                move_table(&mut integrations.table, len, key)
            }
            Page::Settings(_) => match key.code {
                KeyCode::Char('t') => Some(Action::CycleTheme),
                _ => None,
            },
            Page::NotFound(not_found) => {
                let len = NOT_FOUND_LINKS.len();
                match key.code {
                    KeyCode::Down | KeyCode::Char('j') => {
                        not_found.cursor = (not_found.cursor + 1) % len;
                        None
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        not_found.cursor = (not_found.cursor + len - 1) % len;
                        None
                    }
                    KeyCode::Enter => NOT_FOUND_LINKS
                        .get(not_found.cursor)
                        .map(|(_, path)| Action::Navigate((*path).to_string())),
                    _ => None,
                }
            }
            Page::Dashboard(_)
            | Page::AddDevice(_)
            | Page::Data(_)
            | Page::Users(_) => None,
        }
    }
}

fn move_table(
    table: &mut ratatui::widgets::TableState,
    len: usize,
    key: KeyEvent,
) -> Option<Action> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => step_selection(table, len, true),
        KeyCode::Up | KeyCode::Char('k') => step_selection(table, len, false),
        _ => {}
    }
    None
}
