//! Action protocol for the console event loop.
//!
//! Actions represent both user input and the results of background timers.
//! `App::update` applies them to state; `runtime::side_effects` turns the
//! few that need async work into spawned tasks that send actions back.
//!
//! # Action Categories
//!
//! - **System**: lifecycle, ticks, raw input, resize
//! - **Navigation**: route changes, sidebar and drawer toggles
//! - **Header**: notifications panel, gateway selector
//! - **Status**: connection probe and discovery scan results
//! - **Pages**: form submission, theme cycling
//! - **Notifications**: toast messages

use crossterm::event::KeyEvent;
use tokio::sync::mpsc::{Sender, error::TrySendError};
use tokio_util::sync::CancellationToken;

use crate::ui::ToastLevel;

/// Unified action type for the event loop.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    Quit,
    /// Animation tick: spinner frame and toast expiry.
    Tick,
    /// Wall-clock tick for the header clock.
    ClockTick,
    Input(KeyEvent),
    Resize(u16, u16),
    PersistState,

    // Navigation
    /// Go to a path. Unknown paths render the not-found page.
    Navigate(String),
    ToggleSidebar,
    ToggleMobileDrawer,

    // Header
    ToggleNotifications,
    ToggleGatewayMenu,
    SelectGateway(usize),

    // Status
    ConnectionEstablished,
    /// Request a discovery scan on the current page.
    StartScan,
    /// Follow-up emitted by `App` once a scan has started; the runtime
    /// spawns the timer.
    RunScan {
        epoch: u64,
        generation: u64,
        cancel: CancellationToken,
    },
    ScanFinished {
        epoch: u64,
        generation: u64,
    },

    // Pages
    SubmitDevice,
    CycleTheme,

    // Notifications
    Notify(ToastLevel, String),
}

impl Action {
    /// Actions that must never be dropped when the channel is full.
    pub fn is_critical(&self) -> bool {
        !matches!(self, Action::Tick | Action::ClockTick | Action::Resize(..))
    }
}

/// Send an action without waiting. Non-critical actions are dropped when the
/// channel is full; returns `false` once the receiver is gone.
pub fn try_send_action(tx: &Sender<Action>, action: Action) -> bool {
    match tx.try_send(action) {
        Ok(()) => true,
        Err(TrySendError::Full(action)) => {
            tracing::debug!(?action, "Action channel full, dropping action");
            true
        }
        Err(TrySendError::Closed(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::channel;

    #[test]
    fn test_ticks_are_droppable() {
        assert!(!Action::Tick.is_critical());
        assert!(!Action::Resize(80, 24).is_critical());
        assert!(Action::ScanFinished { epoch: 1, generation: 1 }.is_critical());
    }

    #[test]
    fn test_try_send_full_channel_keeps_sender_alive() {
        let (tx, mut rx) = channel::<Action>(1);
        assert!(try_send_action(&tx, Action::Tick));
        assert!(try_send_action(&tx, Action::Tick));
        assert!(matches!(rx.try_recv(), Ok(Action::Tick)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_try_send_closed_channel() {
        let (tx, rx) = channel::<Action>(1);
        drop(rx);
        assert!(!try_send_action(&tx, Action::Quit));
    }
}
