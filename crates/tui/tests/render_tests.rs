//! Every page renders at desktop and mobile widths.

mod helpers;
use helpers::*;

use gateway_client::Route;
use gateway_tui::action::Action;

const ROUTES: [&str; 12] = [
    "/dashboard",
    "/devices",
    "/devices/add",
    "/devices/discovery",
    "/alarms",
    "/data",
    "/protocols",
    "/reports",
    "/integrations",
    "/users",
    "/settings",
    "/does-not-exist",
];

#[test]
fn test_every_route_renders_on_desktop() {
    for path in ROUTES {
        let mut app = app_at(Route::from_path(path));
        let screen = render_to_string(&mut app, 160, 48);
        assert!(
            screen.contains(app.route.title()),
            "{path} should show its title"
        );
        assert!(screen.contains("Gateway-001"), "{path} should show the header");
    }
}

#[test]
fn test_every_route_renders_narrow() {
    for path in ROUTES {
        let mut app = app_at(Route::from_path(path));
        app.update(Action::Resize(60, 30));
        render_to_string(&mut app, 60, 30);
    }
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = app_at(Route::Devices);
    app.update(Action::Resize(10, 5));
    render_to_string(&mut app, 10, 5);
}

#[test]
fn test_devices_screen_lists_fixture_rows() {
    let mut app = app_at(Route::Devices);
    let screen = render_to_string(&mut app, 160, 48);
    for name in ["PLC-001", "Sensor-045", "HMI-002", "Meter-078", "Controller-003"] {
        assert!(screen.contains(name), "missing {name}");
    }
}

#[test]
fn test_empty_search_shows_empty_state() {
    let mut app = app_at(Route::Devices);
    press(&mut app, key('/'));
    type_text(&mut app, "zzz");
    let screen = render_to_string(&mut app, 160, 48);
    assert!(!screen.contains("PLC-001"));
}

#[test]
fn test_overlays_render() {
    let mut app = app_at(Route::Dashboard);
    press(&mut app, key('n'));
    let screen = render_to_string(&mut app, 160, 48);
    assert!(screen.contains("View all notifications"));

    press(&mut app, esc_key());
    press(&mut app, key('g'));
    let screen = render_to_string(&mut app, 160, 48);
    assert!(screen.contains("Gateway-003"));
}

#[test]
fn test_discovery_shows_scan_state() {
    let mut app = app_at(Route::Discovery);
    let idle = render_to_string(&mut app, 160, 48);
    assert!(idle.contains("Ready."));
    press(&mut app, enter_key());
    let scanning = render_to_string(&mut app, 160, 48);
    assert!(scanning.contains("Scanning network..."));
}
