//! Discovery scan lifecycle driven through the event-loop plumbing.
//!
//! Invariants:
//! - The device list exists before any scan and is unchanged by scanning.
//! - A scan started on a page that has since been left never reports back.
//! - Only one scan runs at a time.

mod helpers;
use helpers::*;

use std::time::Duration;

use gateway_client::Route;
use gateway_client::models::Protocol;
use gateway_tui::action::Action;
use gateway_tui::app::{App, InputMode, Page};
use gateway_tui::runtime::side_effects::handle_side_effects;
use gateway_tui::ui::ToastLevel;
use tokio::sync::mpsc::channel;

fn discovery(app: &App) -> &gateway_tui::app::pages::DiscoveryPage {
    match &app.page {
        Page::Discovery(page) => page,
        _ => panic!("expected discovery page"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_scan_completes_with_toast() {
    let mut app = app_at(Route::Discovery);
    let before = discovery(&app).scan.devices().to_vec();
    let (tx, mut rx) = channel(8);

    press(&mut app, enter_key());
    assert!(discovery(&app).scan.is_scanning());
    let run = app.take_followup().expect("scan timer requested");
    let handle = handle_side_effects(run, tx, app.scan_duration).expect("timer spawned");
    handle.await.unwrap();

    let finished = rx.recv().await.expect("scan finished");
    app.update(finished);

    let page = discovery(&app);
    assert!(!page.scan.is_scanning());
    assert_eq!(page.scan.devices(), before.as_slice());
    let toast = app.toasts.last().expect("completion toast");
    assert_eq!(toast.level, ToastLevel::Success);
    assert_eq!(toast.message, "Scan complete: 3 devices found");
}

#[tokio::test(start_paused = true)]
async fn test_leaving_page_discards_scan_result() {
    let mut app = app_at(Route::Discovery);
    let (tx, mut rx) = channel(8);

    press(&mut app, enter_key());
    let run = app.take_followup().expect("scan timer requested");
    let handle = handle_side_effects(run, tx, Duration::from_secs(3)).expect("timer spawned");

    app.update(Action::Navigate("/devices".to_string()));
    app.update(Action::Navigate("/devices/discovery".to_string()));
    handle.await.unwrap();

    // The timer was cancelled on navigation, so nothing arrives.
    assert!(rx.recv().await.is_none());
    assert!(!discovery(&app).scan.is_scanning());
    assert!(app.toasts.is_empty());
}

#[test]
fn test_stale_epoch_ignored() {
    let mut app = app_at(Route::Discovery);
    press(&mut app, enter_key());
    let Some(Action::RunScan {
        epoch, generation, ..
    }) = app.take_followup()
    else {
        panic!("expected RunScan");
    };
    app.update(Action::Navigate("/devices/discovery".to_string()));
    press(&mut app, enter_key());

    app.update(Action::ScanFinished { epoch, generation });
    assert!(discovery(&app).scan.is_scanning());
}

#[test]
fn test_second_start_while_scanning_warns() {
    let mut app = app_at(Route::Discovery);
    press(&mut app, enter_key());
    assert!(app.take_followup().is_some());
    press(&mut app, enter_key());
    assert!(app.take_followup().is_none());
    assert_eq!(app.toasts.last().map(|t| t.level), Some(ToastLevel::Warning));
}

#[test]
fn test_escape_cancels_then_leaves() {
    let mut app = app_at(Route::Discovery);
    press(&mut app, enter_key());
    let action = press(&mut app, esc_key());
    assert!(matches!(action, Some(Action::Notify(ToastLevel::Info, _))));
    assert!(!discovery(&app).scan.is_scanning());

    press(&mut app, esc_key());
    assert_eq!(app.route, Route::Devices);
}

#[test]
fn test_select_devices_and_add() {
    let mut app = app_at(Route::Discovery);
    let action = press(&mut app, key('a'));
    assert!(matches!(action, Some(Action::Notify(ToastLevel::Warning, _))));

    press(&mut app, key(' '));
    press(&mut app, down_key());
    press(&mut app, key(' '));
    assert_eq!(discovery(&app).scan.selected_count(), 2);

    let action = press(&mut app, key('a'));
    assert!(matches!(
        action,
        Some(Action::Notify(ToastLevel::Success, ref msg)) if msg.starts_with('2')
    ));
}

#[test]
fn test_edit_scan_range_and_protocols() {
    let mut app = app_at(Route::Discovery);
    press(&mut app, key('i'));
    assert_eq!(app.input_mode, InputMode::EditScanField);
    press(&mut app, backspace_key());
    type_text(&mut app, "10x");
    press(&mut app, enter_key());
    press(&mut app, enter_key());
    press(&mut app, backspace_key());
    press(&mut app, enter_key());
    assert_eq!(app.input_mode, InputMode::Normal);

    press(&mut app, key('3'));
    press(&mut app, key('1'));

    let config = discovery(&app).scan.config();
    assert_eq!(config.start_ip, "192.168.1.10");
    assert_eq!(config.timeout_ms, 500);
    assert_eq!(config.protocols, vec![Protocol::ALL[2], Protocol::ALL[0]]);
}
