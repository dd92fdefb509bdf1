//! Navigation action handlers.

use tracing::info;

use crate::action::Action;
use crate::app::App;
use crate::app::state::Focus;
use crate::ui::Toast;

use gateway_client::models::GatewayStatus;

impl App {
    pub(super) fn handle_navigation_action(&mut self, action: Action) {
        match action {
            Action::Navigate(path) => self.navigate(&path),
            Action::ToggleSidebar => {
                let collapsed = self.sidebar.toggle_collapsed();
                info!(collapsed, "Sidebar toggled");
                self.sync_sidebar_cursor();
            }
            Action::ToggleMobileDrawer => {
                self.drawer_open = !self.drawer_open;
                if self.drawer_open {
                    self.notifications_open = false;
                    self.gateway_menu = None;
                    self.mobile_cursor = self
                        .drawer_rows()
                        .iter()
                        .position(|row| row.is_active())
                        .unwrap_or(0);
                } else {
                    self.focus = Focus::Content;
                }
            }
            Action::ToggleNotifications => {
                self.notifications_open = !self.notifications_open;
                self.notifications_cursor = 0;
                if self.notifications_open {
                    self.gateway_menu = None;
                }
            }
            Action::ToggleGatewayMenu => {
                self.gateway_menu = match self.gateway_menu {
                    Some(_) => None,
                    None => Some(self.gateways.iter().position(|g| g.current).unwrap_or(0)),
                };
                if self.gateway_menu.is_some() {
                    self.notifications_open = false;
                }
            }
            Action::SelectGateway(index) => self.select_gateway(index),
            _ => {}
        }
    }

    fn select_gateway(&mut self, index: usize) {
        self.gateway_menu = None;
        let Some(chosen) = self.gateways.get(index) else {
            return;
        };
        if chosen.current {
            return;
        }
        let name = chosen.name.clone();
        let offline = chosen.status == GatewayStatus::Offline;
        for (i, gateway) in self.gateways.iter_mut().enumerate() {
            gateway.current = i == index;
        }
        info!(gateway = %name, "Gateway selected");
        if offline {
            self.push_toast(Toast::warning(format!("Switched to {name} (offline)")));
        } else {
            self.push_toast(Toast::success(format!("Switched to {name}")));
        }
    }
}
