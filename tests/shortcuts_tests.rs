// Host-side tests for the page protection shortcut matcher.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod shortcuts {
    include!("../src/core/shortcuts.rs");
}

use shortcuts::*;

const NONE: Modifiers = Modifiers {
    ctrl: false,
    meta: false,
    shift: false,
};
const CTRL: Modifiers = Modifiers {
    ctrl: true,
    meta: false,
    shift: false,
};
const CMD: Modifiers = Modifiers {
    ctrl: false,
    meta: true,
    shift: false,
};
const CTRL_SHIFT: Modifiers = Modifiers {
    ctrl: true,
    meta: false,
    shift: true,
};

#[test]
fn f12_is_always_blocked() {
    assert!(is_blocked_shortcut("F12", NONE));
    assert!(is_blocked_shortcut("F12", CTRL));
}

#[test]
fn dev_tools_needs_shift() {
    assert!(is_blocked_shortcut("I", CTRL_SHIFT));
    assert!(is_blocked_shortcut("i", CTRL_SHIFT));
    assert!(is_blocked_shortcut(
        "I",
        Modifiers {
            shift: true,
            ..CMD
        }
    ));
    assert!(!is_blocked_shortcut("i", CTRL));
}

#[test]
fn view_source_and_save_are_blocked_with_ctrl_or_cmd() {
    for key in ["u", "U", "s", "S"] {
        assert!(is_blocked_shortcut(key, CTRL), "ctrl+{key}");
        assert!(is_blocked_shortcut(key, CMD), "cmd+{key}");
        assert!(!is_blocked_shortcut(key, NONE), "{key}");
    }
}

#[test]
fn ordinary_keys_pass_through() {
    for key in ["a", "ArrowDown", " ", "F5", "Enter", "c"] {
        assert!(!is_blocked_shortcut(key, NONE));
        assert!(!is_blocked_shortcut(key, CTRL));
    }
    assert!(!is_blocked_shortcut("c", CTRL_SHIFT));
}
