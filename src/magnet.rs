use glam::Vec2;

/// Axis-aligned element bounds in viewport pixels. Mirrors the fields of a
/// DOM bounding rect without referencing web types, so the calculator stays
/// host-testable.
#[derive(Clone, Copy, Debug)]
pub struct ElementBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBox {
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetParams {
    pub strength: f32,
    pub radius: f32,
    pub clamp: f32,
}

/// Bounded pull toward `target` for an element hovered by the cursor.
///
/// Influence cuts off hard at `radius` (exactly zero outside, not an
/// asymptotic decay) and falls off linearly inside it. The result is clamped
/// per axis, so the cursor can never drag an element more than `clamp` pixels
/// along either axis. Stateless; callers that want the offset animated run it
/// through their own follower.
pub fn magnet_offset(bounds: ElementBox, target: Vec2, params: MagnetParams) -> Vec2 {
    let clamp = params.clamp.max(0.0);
    let d = target - bounds.center();
    let distance = d.length();
    if params.radius <= 0.0 || distance >= params.radius {
        return Vec2::ZERO;
    }
    if distance == 0.0 {
        // Cursor sits exactly on the center; no direction to pull along.
        return Vec2::ZERO;
    }
    let proximity = 1.0 - distance / params.radius;
    let pull = params.strength * proximity;
    let raw = (d / distance) * pull * clamp;
    raw.clamp(Vec2::splat(-clamp), Vec2::splat(clamp))
}
