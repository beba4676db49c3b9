// Named cursor personalities, selected per page context.
//
// Pure data; the spring and magnet modules own the behavior. Lookup can
// never fail: unknown names fall back to the default preset, and per-mount
// overrides merge field by field rather than replacing the whole profile.
// Plain comments here: this file is included directly by the host-side tests.

/// Physics feel plus halo and magnet tuning for one page context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPreset {
    pub name: &'static str,
    pub damping: f32,
    pub mass: f32,
    pub halo_size: f32,
    pub magnet_strength: f32,
    pub magnet_radius: f32,
    pub transition_duration: f32,
}

pub const DEFAULT_PRESET: CursorPreset = CursorPreset {
    name: "default",
    damping: 0.15,
    mass: 0.8,
    halo_size: 28.0,
    magnet_strength: 0.22,
    magnet_radius: 140.0,
    transition_duration: 0.3,
};

// damping/mass pairs are kept well inside the stable region of the per-frame
// integrator (damping / mass < ~0.6).
const PRESETS: &[CursorPreset] = &[
    DEFAULT_PRESET,
    CursorPreset {
        name: "editor",
        damping: 0.1,
        mass: 1.0,
        halo_size: 22.0,
        magnet_strength: 0.18,
        magnet_radius: 120.0,
        transition_duration: 0.35,
    },
    CursorPreset {
        name: "wizard",
        damping: 0.22,
        mass: 0.6,
        halo_size: 34.0,
        magnet_strength: 0.3,
        magnet_radius: 160.0,
        transition_duration: 0.25,
    },
    CursorPreset {
        name: "minimal",
        damping: 0.3,
        mass: 0.5,
        halo_size: 16.0,
        magnet_strength: 0.12,
        magnet_radius: 90.0,
        transition_duration: 0.2,
    },
];

/// Look up a preset by name. Unknown or missing names fall back to the
/// default preset.
pub fn preset(name: Option<&str>) -> &'static CursorPreset {
    match name {
        Some(n) => PRESETS
            .iter()
            .find(|p| p.name == n)
            .unwrap_or(&DEFAULT_PRESET),
        None => &DEFAULT_PRESET,
    }
}

/// Per-mount overrides; each field falls back to the preset independently.
#[derive(Clone, Copy, Debug, Default)]
pub struct PresetOverrides {
    pub damping: Option<f32>,
    pub mass: Option<f32>,
    pub halo_size: Option<f32>,
    pub magnet_strength: Option<f32>,
    pub magnet_radius: Option<f32>,
    pub transition_duration: Option<f32>,
}

impl CursorPreset {
    pub fn merged(&self, ov: &PresetOverrides) -> CursorPreset {
        CursorPreset {
            name: self.name,
            damping: ov.damping.unwrap_or(self.damping),
            mass: ov.mass.unwrap_or(self.mass),
            halo_size: ov.halo_size.unwrap_or(self.halo_size),
            magnet_strength: ov.magnet_strength.unwrap_or(self.magnet_strength),
            magnet_radius: ov.magnet_radius.unwrap_or(self.magnet_radius),
            transition_duration: ov
                .transition_duration
                .unwrap_or(self.transition_duration),
        }
    }
}
