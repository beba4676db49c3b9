// Host-side tests for preset lookup and per-field override merging.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod presets {
    include!("../src/presets.rs");
}

use presets::*;

#[test]
fn known_names_resolve() {
    for name in ["default", "editor", "wizard", "minimal"] {
        assert_eq!(preset(Some(name)).name, name);
    }
}

#[test]
fn unknown_or_missing_name_falls_back_to_default() {
    assert_eq!(*preset(Some("does-not-exist")), DEFAULT_PRESET);
    assert_eq!(*preset(Some("")), DEFAULT_PRESET);
    assert_eq!(*preset(None), DEFAULT_PRESET);
}

#[test]
fn default_preset_matches_the_documented_feel() {
    assert_eq!(DEFAULT_PRESET.damping, 0.15);
    assert_eq!(DEFAULT_PRESET.mass, 0.8);
    assert_eq!(DEFAULT_PRESET.magnet_strength, 0.22);
    assert_eq!(DEFAULT_PRESET.magnet_radius, 140.0);
}

#[test]
fn all_presets_have_usable_physics() {
    for name in ["default", "editor", "wizard", "minimal"] {
        let p = preset(Some(name));
        assert!(p.damping > 0.0, "{name}");
        assert!(p.mass > 0.0, "{name}");
        // Stability bound of the per-frame integrator.
        assert!(p.damping / p.mass < 0.65, "{name}");
        assert!(p.halo_size > 0.0 && p.magnet_radius > 0.0, "{name}");
    }
}

#[test]
fn merge_is_per_field_not_whole_object() {
    let base = preset(Some("editor"));
    let merged = base.merged(&PresetOverrides {
        magnet_strength: Some(0.5),
        ..PresetOverrides::default()
    });
    // Only the overridden field changes.
    assert_eq!(merged.magnet_strength, 0.5);
    assert_eq!(merged.damping, base.damping);
    assert_eq!(merged.mass, base.mass);
    assert_eq!(merged.halo_size, base.halo_size);
    assert_eq!(merged.magnet_radius, base.magnet_radius);
    assert_eq!(merged.transition_duration, base.transition_duration);
}

#[test]
fn empty_overrides_are_identity() {
    let base = preset(Some("wizard"));
    assert_eq!(base.merged(&PresetOverrides::default()), *base);
}

#[test]
fn every_field_can_be_overridden() {
    let merged = DEFAULT_PRESET.merged(&PresetOverrides {
        damping: Some(0.2),
        mass: Some(0.7),
        halo_size: Some(40.0),
        magnet_strength: Some(0.4),
        magnet_radius: Some(200.0),
        transition_duration: Some(0.1),
    });
    assert_eq!(merged.damping, 0.2);
    assert_eq!(merged.mass, 0.7);
    assert_eq!(merged.halo_size, 40.0);
    assert_eq!(merged.magnet_strength, 0.4);
    assert_eq!(merged.magnet_radius, 200.0);
    assert_eq!(merged.transition_duration, 0.1);
}
