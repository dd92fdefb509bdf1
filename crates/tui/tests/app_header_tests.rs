//! Header menus, connection indicator, theme cycling and persisted state.

mod helpers;
use helpers::*;

use gateway_client::{ConnectionStatus, Route};
use gateway_config::{ColorTheme, Config, PersistedState};
use gateway_tui::action::Action;
use gateway_tui::app::App;
use gateway_tui::ui::ToastLevel;

#[test]
fn test_connection_starts_connecting() {
    let mut app = app_at(Route::Dashboard);
    assert_eq!(app.connection.status(), ConnectionStatus::Connecting);
    app.update(Action::ConnectionEstablished);
    app.update(Action::ConnectionEstablished);
    assert_eq!(app.connection.status(), ConnectionStatus::Online);
}

#[test]
fn test_header_menus_are_exclusive() {
    let mut app = app_at(Route::Dashboard);
    press(&mut app, key('n'));
    assert!(app.notifications_open);
    // The open panel owns the keyboard; close it, then open the selector.
    press(&mut app, esc_key());
    press(&mut app, key('g'));
    assert!(app.gateway_menu.is_some());
    app.update(Action::ToggleNotifications);
    assert!(app.notifications_open);
    assert!(app.gateway_menu.is_none());
}

#[test]
fn test_mark_notification_read() {
    let mut app = app_at(Route::Dashboard);
    assert_eq!(app.unread_count(), 2);
    press(&mut app, key('n'));
    press(&mut app, enter_key());
    assert_eq!(app.unread_count(), 1);
}

#[test]
fn test_gateway_selection() {
    let mut app = app_at(Route::Dashboard);
    assert_eq!(app.current_gateway(), "Gateway-001");

    press(&mut app, key('g'));
    press(&mut app, down_key());
    press(&mut app, enter_key());
    assert_eq!(app.current_gateway(), "Gateway-002");
    assert!(app.gateway_menu.is_none());
    assert_eq!(app.toasts.last().map(|t| t.level), Some(ToastLevel::Success));

    press(&mut app, key('g'));
    press(&mut app, down_key());
    press(&mut app, enter_key());
    assert_eq!(app.current_gateway(), "Gateway-003");
    assert_eq!(app.toasts.last().map(|t| t.level), Some(ToastLevel::Warning));
}

#[test]
fn test_configured_gateway_is_current() {
    let config = Config {
        gateway_name: "Gateway-002".to_string(),
        ..Config::default()
    };
    let app = App::new(&config, PersistedState::default(), None);
    assert_eq!(app.current_gateway(), "Gateway-002");
    assert_eq!(app.gateways.iter().filter(|g| g.current).count(), 1);
}

#[test]
fn test_theme_cycles_on_settings_and_persists() {
    let mut app = app_at(Route::Settings);
    assert_eq!(app.color_theme, ColorTheme::Neon);
    press(&mut app, key('t'));
    assert_eq!(app.color_theme, ColorTheme::Light);
    assert_eq!(app.get_persisted_state().selected_theme, ColorTheme::Light);
}

#[test]
fn test_t_does_nothing_off_settings() {
    let mut app = app_at(Route::Dashboard);
    press(&mut app, key('t'));
    assert_eq!(app.color_theme, ColorTheme::Neon);
}

#[test]
fn test_persisted_state_round_trip() {
    let mut app = app_at(Route::Reports);
    press(&mut app, key('['));
    let state = app.get_persisted_state();
    assert_eq!(state.last_route.as_deref(), Some("/reports"));

    let restored = App::new(&Config::default(), state, None);
    assert_eq!(restored.route, Route::Reports);
    assert!(restored.sidebar.is_collapsed());
}

#[test]
fn test_not_found_route_not_persisted() {
    let app = app_at(Route::from_path("/security/audit"));
    assert_eq!(app.get_persisted_state().last_route, None);
}

#[test]
fn test_tick_advances_spinner_and_expires_nothing_fresh() {
    let mut app = app_at(Route::Dashboard);
    app.update(Action::Notify(ToastLevel::Info, "hello".to_string()));
    let frame = app.spinner_frame;
    app.update(Action::Tick);
    assert_eq!(app.spinner_frame, frame.wrapping_add(1));
    assert_eq!(app.toasts.len(), 1);
}
