//! Property-based tests for ShellSettings serialization round-trip.
//!
//! These tests verify that ShellSettings can be serialized to JSON and
//! deserialized back without data loss for arbitrary valid inputs.

use std::path::PathBuf;

use proptest::prelude::*;
use webshell::types::settings::{ShellSettings, WindowSettings};

fn arb_window_settings() -> impl Strategy<Value = WindowSettings> {
    (
        "[a-zA-Z0-9 ._-]{0,40}",
        1u32..8000,
        1u32..8000,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(title, width, height, frameless, resizable, easy_drag)| WindowSettings {
                title,
                width,
                height,
                frameless,
                resizable,
                easy_drag,
            },
        )
}

fn arb_shell_settings() -> impl Strategy<Value = ShellSettings> {
    (
        arb_window_settings(),
        any::<bool>(),
        proptest::option::of("/[a-z]{1,10}(/[a-z]{1,10}){0,3}"),
        "[a-z_]{1,10}=(trace|debug|info|warn|error)",
    )
        .prop_map(|(window, devtools, frontend_dir, log_filter)| ShellSettings {
            window,
            devtools,
            frontend_dir: frontend_dir.map(PathBuf::from),
            log_filter,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn settings_json_roundtrip(settings in arb_shell_settings()) {
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed: ShellSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, settings);
    }
}
