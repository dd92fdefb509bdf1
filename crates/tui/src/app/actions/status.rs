//! Connection and discovery scan results.
//!
//! Scan completions carry the page epoch they were started under and the
//! scan generation; anything that does not match the live discovery page
//! is dropped.

use tracing::debug;

use crate::action::Action;
use crate::app::App;
use crate::app::pages::Page;
use crate::ui::Toast;

impl App {
    pub(super) fn handle_status_action(&mut self, action: Action) {
        match action {
            Action::ConnectionEstablished => {
                self.connection.mark_online();
            }
            Action::StartScan => self.start_scan(),
            Action::ScanFinished { epoch, generation } => self.finish_scan(epoch, generation),
            // Spawned by the runtime.
            Action::RunScan { .. } => {}
            _ => {}
        }
    }

    fn start_scan(&mut self) {
        let Page::Discovery(discovery) = &mut self.page else {
            debug!("Ignoring scan request outside the discovery page");
            return;
        };
        discovery.editing = None;
        match discovery.start_scan() {
            Ok((generation, cancel)) => {
                self.followup = Some(Action::RunScan {
                    epoch: self.page_epoch,
                    generation,
                    cancel,
                });
            }
            Err(e) => self.push_toast(Toast::warning(e.to_string())),
        }
    }

    fn finish_scan(&mut self, epoch: u64, generation: u64) {
        if epoch != self.page_epoch {
            debug!(epoch, current = self.page_epoch, "Dropping scan result for a closed page");
            return;
        }
        let Page::Discovery(discovery) = &mut self.page else {
            return;
        };
        if discovery.finish_scan(generation) {
            let found = discovery.scan.devices().len();
            self.push_toast(Toast::success(format!("Scan complete: {found} devices found")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_client::ConnectionStatus;

    fn discovery_app() -> App {
        let mut app = App::default();
        app.update(Action::Navigate("/devices/discovery".to_string()));
        app
    }

    fn scanning(app: &App) -> bool {
        matches!(&app.page, Page::Discovery(d) if d.scan.is_scanning())
    }

    #[test]
    fn test_connection_established() {
        let mut app = App::default();
        app.update(Action::ConnectionEstablished);
        assert_eq!(app.connection.status(), ConnectionStatus::Online);
    }

    #[test]
    fn test_start_scan_queues_timer() {
        let mut app = discovery_app();
        app.update(Action::StartScan);
        assert!(scanning(&app));
        match app.take_followup() {
            Some(Action::RunScan { epoch, generation, .. }) => {
                assert_eq!(epoch, app.page_epoch);
                assert_eq!(generation, 1);
            }
            other => panic!("expected RunScan, got {other:?}"),
        }
        assert!(app.take_followup().is_none());
    }

    #[test]
    fn test_second_start_warns() {
        let mut app = discovery_app();
        app.update(Action::StartScan);
        app.take_followup();
        app.update(Action::StartScan);
        assert!(app.take_followup().is_none());
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn test_scan_finished_returns_to_idle() {
        let mut app = discovery_app();
        app.update(Action::StartScan);
        let epoch = app.page_epoch;
        app.update(Action::ScanFinished { epoch, generation: 1 });
        assert!(!scanning(&app));
        match &app.page {
            Page::Discovery(d) => assert_eq!(d.scan.devices().len(), 3),
            _ => panic!("expected discovery page"),
        }
    }

    #[test]
    fn test_leaving_discovery_cancels_scan() {
        let mut app = discovery_app();
        app.update(Action::StartScan);
        let Some(Action::RunScan { epoch, cancel, .. }) = app.take_followup() else {
            panic!("expected RunScan");
        };
        app.update(Action::Navigate("/devices".to_string()));
        assert!(cancel.is_cancelled());

        // A late completion for the old page is ignored even after returning.
        app.update(Action::Navigate("/devices/discovery".to_string()));
        app.update(Action::ScanFinished { epoch, generation: 1 });
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_start_scan_off_discovery_is_ignored() {
        let mut app = App::default();
        app.update(Action::StartScan);
        assert!(app.take_followup().is_none());
    }
}
