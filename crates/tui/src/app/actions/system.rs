//! Ticks, resize, toasts, theme and form submission.

use chrono::Local;
use gateway_config::Theme;
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::action::Action;
use crate::app::App;
use crate::app::pages::Page;
use crate::app::state::{Focus, LayoutMode};
use crate::ui::Toast;

impl App {
    pub(super) fn handle_system_action(&mut self, action: Action) {
        match action {
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.toasts.retain(|t| !t.is_expired());
            }
            Action::ClockTick => self.now = Local::now(),
            Action::Resize(width, height) => self.resize(width, height),
            Action::SubmitDevice => self.submit_device(),
            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                info!(theme = %self.color_theme, "Theme changed");
                self.push_toast(Toast::info(format!("Theme: {}", self.color_theme)));
            }
            Action::Notify(level, message) => self.push_toast(Toast::new(message, level)),
            _ => {}
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.last_area = Rect::new(0, 0, width, height);
        match self.layout_mode() {
            LayoutMode::Mobile => self.focus = Focus::Content,
            LayoutMode::Desktop => self.drawer_open = false,
        }
    }

    fn submit_device(&mut self) {
        let Page::AddDevice(form) = &mut self.page else {
            return;
        };
        match form.validate() {
            Ok(draft) => {
                match serde_json::to_string(&draft) {
                    Ok(json) => info!(device = %json, "Device submitted"),
                    Err(e) => warn!(error = %e, "Failed to serialize submitted device"),
                }
                let name = draft.name;
                self.push_toast(Toast::success(format!("Device {name} added")));
                self.navigate("/devices");
            }
            Err(e) => {
                if let Some(field) = form.first_missing() {
                    form.focus_field(field);
                }
                self.push_toast(Toast::error(e.to_string()));
            }
        }
    }
}
