// Host-side tests for `data-*` settings overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod settings {
    include!("../src/core/settings.rs");
}

use constants::*;
use settings::*;

#[test]
fn defaults_mirror_constants() {
    let s = Settings::default();
    assert_eq!(s.particle_count, PARTICLE_COUNT);
    assert_eq!(s.particle_spread, PARTICLE_SPREAD);
    assert_eq!(s.lock_ms, TRANSITION_LOCK_MS);
    assert_eq!(s.swipe_threshold_px, SWIPE_THRESHOLD_PX);
    assert_eq!(s.max_pixel_ratio, MAX_PIXEL_RATIO);
}

#[test]
fn every_known_key_is_accepted() {
    let mut s = Settings::default();
    let values = ["2000", "25", "0.3", "0.8", "3", "1200", "80"];
    for (key, value) in SETTING_KEYS.iter().zip(values) {
        assert_eq!(s.apply(key, value), Ok(()), "key {key}");
    }
    assert_eq!(s.particle_count, 2000);
    assert_eq!(s.particle_spread, 25.0);
    assert_eq!(s.particle_size, 0.3);
    assert_eq!(s.particle_opacity, 0.8);
    assert_eq!(s.max_pixel_ratio, 3.0);
    assert_eq!(s.lock_ms, 1200);
    assert_eq!(s.swipe_threshold_px, 80.0);
}

#[test]
fn values_are_trimmed() {
    let mut s = Settings::default();
    s.apply("lock-ms", "  900 ").unwrap();
    assert_eq!(s.lock_ms, 900);
}

#[test]
fn bad_values_keep_defaults() {
    let mut s = Settings::default();
    assert!(matches!(
        s.apply("particle-count", "lots"),
        Err(SettingsError::Parse { key: "particle-count", .. })
    ));
    assert!(matches!(
        s.apply("particle-count", "0"),
        Err(SettingsError::OutOfRange { .. })
    ));
    assert!(matches!(
        s.apply("particle-opacity", "1.5"),
        Err(SettingsError::OutOfRange { .. })
    ));
    assert!(matches!(
        s.apply("max-pixel-ratio", "0.5"),
        Err(SettingsError::OutOfRange { .. })
    ));
    assert!(matches!(
        s.apply("particle-size", "NaN"),
        Err(SettingsError::OutOfRange { .. })
    ));
    assert_eq!(s, Settings::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let mut s = Settings::default();
    assert_eq!(
        s.apply("speed", "3"),
        Err(SettingsError::UnknownKey("speed".to_string()))
    );
}

#[test]
fn from_pairs_collects_errors_and_applies_the_rest() {
    let (s, errors) = Settings::from_pairs([
        ("particle-count", "500"),
        ("lock-ms", "-1"),
        ("swipe-threshold", "30"),
    ]);
    assert_eq!(s.particle_count, 500);
    assert_eq!(s.lock_ms, TRANSITION_LOCK_MS);
    assert_eq!(s.swipe_threshold_px, 30.0);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "`lock-ms`: cannot parse `-1`");
}

#[test]
fn huge_particle_spread_is_rejected() {
    let mut s = Settings::default();
    for value in ["3e38", "inf", "10000.5"] {
        assert!(matches!(
            s.apply("particle-spread", value),
            Err(SettingsError::OutOfRange {
                key: "particle-spread",
                ..
            })
        ));
    }
    assert_eq!(s.particle_spread, PARTICLE_SPREAD);
    assert_eq!(s.apply("particle-spread", "10000"), Ok(()));
    assert_eq!(s.particle_spread, MAX_PARTICLE_SPREAD);
}
