//! Action handling for the console.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly.
//!
//! Non-responsibilities:
//! - Does NOT create Actions from keys (see `input`).
//! - Does NOT perform async operations. Actions that need a timer queue a
//!   follow-up (`take_followup`) that the runtime turns into a task.
//!
//! This module delegates to domain-specific submodules:
//! - `navigation`: route changes, sidebar, drawer, header menus
//! - `status`: connection probe and discovery scan results
//! - `system`: ticks, resize, toasts, theme, form submission

use crate::action::Action;
use crate::app::App;

mod navigation;
mod status;
mod system;

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Navigate(_)
            | Action::ToggleSidebar
            | Action::ToggleMobileDrawer
            | Action::ToggleNotifications
            | Action::ToggleGatewayMenu
            | Action::SelectGateway(_) => self.handle_navigation_action(action),

            Action::ConnectionEstablished
            | Action::StartScan
            | Action::RunScan { .. }
            | Action::ScanFinished { .. } => self.handle_status_action(action),

            Action::Tick
            | Action::ClockTick
            | Action::Resize(..)
            | Action::SubmitDevice
            | Action::CycleTheme
            | Action::Notify(..) => self.handle_system_action(action),

            // Handled by the event loop.
            Action::Quit | Action::PersistState | Action::Input(_) => {}
        }
    }
}
