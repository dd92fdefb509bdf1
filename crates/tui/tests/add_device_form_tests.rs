//! Add-device form: typing, select cycling and submission.

mod helpers;
use helpers::*;

use gateway_client::{FormField, Route};
use gateway_tui::action::Action;
use gateway_tui::app::{App, Page};
use gateway_tui::ui::ToastLevel;

fn form(app: &App) -> &gateway_client::AddDeviceForm {
    match &app.page {
        Page::AddDevice(form) => form,
        _ => panic!("expected add-device page"),
    }
}

#[test]
fn test_form_captures_shortcut_letters() {
    let mut app = app_at(Route::AddDevice);
    let action = press(&mut app, key('q'));
    assert!(action.is_none());
    type_text(&mut app, "mng");
    assert_eq!(form(&app).value(FormField::Name), "qmng");
    assert!(!app.notifications_open);
}

#[test]
fn test_ctrl_c_still_quits_from_form() {
    let mut app = app_at(Route::AddDevice);
    assert!(matches!(app.handle_input(ctrl_key('c')), Some(Action::Quit)));
}

#[test]
fn test_select_fields_cycle_with_arrows() {
    let mut app = app_at(Route::AddDevice);
    press(&mut app, down_key());
    assert_eq!(form(&app).focused(), FormField::DeviceType);
    press(&mut app, right_key());
    assert_eq!(form(&app).value(FormField::DeviceType), "Sensor");
    press(&mut app, left_key());
    press(&mut app, left_key());
    assert_eq!(form(&app).value(FormField::DeviceType), "Actuator");
}

#[test]
fn test_submit_missing_field_focuses_it() {
    let mut app = app_at(Route::AddDevice);
    type_text(&mut app, "PLC-010");
    press(&mut app, enter_key());

    assert_eq!(app.route, Route::AddDevice);
    assert_eq!(form(&app).focused(), FormField::IpAddress);
    let toast = app.toasts.last().expect("error toast");
    assert_eq!(toast.level, ToastLevel::Error);
    assert!(toast.message.contains("IP Address"));
}

#[test]
fn test_valid_submit_returns_to_device_list() {
    let mut app = app_at(Route::AddDevice);
    type_text(&mut app, "PLC-010");
    press(&mut app, enter_key());
    type_text(&mut app, "10.0.0.5");
    press(&mut app, enter_key());

    assert_eq!(app.route, Route::Devices);
    assert_eq!(app.toasts.last().map(|t| t.level), Some(ToastLevel::Success));
    // Submission is logged only; the fixture list is unchanged.
    let Page::Devices(devices) = &app.page else {
        panic!("expected devices page");
    };
    assert_eq!(devices.records.len(), 5);
}

#[test]
fn test_escape_cancels_form() {
    let mut app = app_at(Route::AddDevice);
    type_text(&mut app, "draft");
    press(&mut app, esc_key());
    assert_eq!(app.route, Route::Devices);
}
