// Interaction engine DOM contract and tuning constants

// Element the halo renderer drives; the host page provides it.
pub const HALO_ELEMENT_ID: &str = "cursor-halo";

// Class set on the halo while the engine is off (env-restricted or manual).
pub const HALO_DISABLED_CLASS: &str = "halo-disabled";

// Attribute mirroring the current cursor mode on the halo element.
pub const HALO_MODE_ATTR: &str = "data-mode";

// Elements opting into the magnet effect, plus their per-mount overrides.
pub const MAGNET_SELECTOR: &str = "[data-magnet]";
pub const MAGNET_STRENGTH_ATTR: &str = "data-magnet-strength";
pub const MAGNET_RADIUS_ATTR: &str = "data-magnet-radius";
pub const MAGNET_CLAMP_ATTR: &str = "data-magnet-clamp";
pub const MAGNET_DAMPING_ATTR: &str = "data-magnet-damping";
pub const MAGNET_MASS_ATTR: &str = "data-magnet-mass";

// Preset selection, read once from <body> at startup.
pub const PRESET_ATTR: &str = "data-cursor-preset";

// Max pixels a magnet may displace an element along either axis unless the
// mount overrides it.
pub const MAGNET_CLAMP_DEFAULT: f32 = 12.0;
