use glam::Vec2;

// Defaults used when a caller hands the integrator unusable values.
pub const DEFAULT_DAMPING: f32 = 0.15;
pub const DEFAULT_MASS: f32 = 0.8;

// Largest damping/mass ratio the per-frame integrator stays stable at;
// beyond it the fixed step diverges instead of converging faster.
pub const MAX_RESPONSE_RATE: f32 = 0.6;

/// Damping/mass pair driving the critically damped follower.
///
/// Both fields are tuned in per-frame units: one integration step corresponds
/// to one nominal 60 Hz frame (~16.7 ms), regardless of the actual display
/// refresh. The loop never feeds wall-clock deltas in, so the feel is the
/// same everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub damping: f32,
    pub mass: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
        }
    }
}

impl PhysicsParams {
    pub fn is_valid(&self) -> bool {
        self.damping > 0.0 && self.mass > 0.0 && self.damping.is_finite() && self.mass.is_finite()
    }

    /// Both fields divide the acceleration every frame; non-positive or
    /// non-finite values must never reach the integrator. Positive values
    /// whose damping/mass ratio exceeds the stable region are capped at the
    /// fastest stable response rather than allowed to diverge.
    pub fn sanitized(self) -> Self {
        if !self.is_valid() {
            return Self::default();
        }
        if self.damping / self.mass > MAX_RESPONSE_RATE {
            return Self {
                damping: self.mass * MAX_RESPONSE_RATE,
                mass: self.mass,
            };
        }
        self
    }
}

/// Position/velocity of the followed point. Owned by the engine; mutated once
/// per tick and read-only everywhere else.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FollowerState {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl FollowerState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Advance one frame toward `target`.
    ///
    /// The damping coefficient `c = 2 * damping` and stiffness
    /// `k = c^2 / (4 * mass)` satisfy the critical damping relation
    /// `c^2 = 4 * k * mass`, so the follower closes on the target as fast as
    /// possible without crossing it. Large target jumps (page navigation
    /// resetting the pointer) produce a brief overshoot-free catch-up, never a
    /// discontinuity. A non-finite target is a caller bug and is not guarded
    /// here.
    pub fn step(&mut self, target: Vec2, params: PhysicsParams) {
        let c = params.damping * 2.0;
        let k = c * c / (4.0 * params.mass);
        let d = target - self.position;
        let accel = (d * k - self.velocity * c) / params.mass;
        self.velocity += accel;
        self.position += self.velocity;
    }
}
