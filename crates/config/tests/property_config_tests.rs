//! Property-based tests for configuration validation and persistence.
//!
//! Test coverage:
//! - PersistedState: arbitrary states survive a save/load cycle on disk
//! - ConfigLoader: the UI tick is accepted exactly inside its bounds
//! - ColorTheme: cycling visits every theme before repeating

use std::time::Duration;

use gateway_config::constants::{MAX_UI_TICK_MS, MIN_UI_TICK_MS};
use gateway_config::{ColorTheme, ConfigLoader, ConfigManager, PersistedState};
use proptest::prelude::*;
use tempfile::TempDir;

fn theme_strategy() -> impl Strategy<Value = ColorTheme> {
    prop::sample::select(ColorTheme::ALL.to_vec())
}

fn route_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("/[a-z]{1,10}(/[a-z]{1,10})?")
}

proptest! {
    #[test]
    fn prop_persisted_state_survives_disk(
        theme in theme_strategy(),
        collapsed in any::<bool>(),
        route in route_strategy(),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let state = PersistedState {
            selected_theme: theme,
            sidebar_collapsed: collapsed,
            last_route: route,
        };

        ConfigManager::new_with_path(path.clone()).unwrap().save(&state).unwrap();
        let loaded = ConfigManager::new_with_path(path).unwrap().load();
        prop_assert_eq!(loaded, state);
    }

    #[test]
    fn prop_ui_tick_bounds(ms in 0u64..10_000) {
        let result = ConfigLoader::new()
            .with_ui_tick(Duration::from_millis(ms))
            .build();
        let in_range = (MIN_UI_TICK_MS..=MAX_UI_TICK_MS).contains(&ms);
        prop_assert_eq!(result.is_ok(), in_range);
    }

    #[test]
    fn prop_theme_cycle_returns_home(start in theme_strategy()) {
        let mut theme = start;
        for _ in 0..ColorTheme::ALL.len() {
            theme = theme.cycle_next();
        }
        prop_assert_eq!(theme, start);
    }
}
