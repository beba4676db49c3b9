// Platform-free engine core: the per-tick advance, the enable/disable epoch
// discipline, and the per-element cursor mode machine. The wasm controller
// layers scheduling and fan-out on top of this. Plain comments here: this
// file is included directly by the host-side tests.

use crate::spring::{FollowerState, PhysicsParams};
use glam::Vec2;

/// Transient cursor feedback state. Last write wins; there is no queue, so
/// rapid enter/leave churn simply tracks the latest call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Default,
    Hover,
    Click,
}

impl CursorMode {
    pub fn parse(s: &str) -> Option<CursorMode> {
        match s {
            "default" => Some(CursorMode::Default),
            "hover" => Some(CursorMode::Hover),
            "click" => Some(CursorMode::Click),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CursorMode::Default => "default",
            CursorMode::Hover => "hover",
            CursorMode::Click => "click",
        }
    }
}

/// Pointer happenings an interactive element reports about itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementEvent {
    Enter,
    Leave,
    Press,
    Release,
}

/// Per-element mode machine: Default -> Hover on enter, Hover -> Click ->
/// Hover on press/release while hovered, and back to Default whenever the
/// pointer leaves, pressed or not. Anything else keeps the current mode.
pub fn next_mode(current: CursorMode, event: ElementEvent) -> CursorMode {
    use CursorMode::*;
    use ElementEvent::*;
    match (current, event) {
        (Default, Enter) => Hover,
        (Hover, Press) => Click,
        (Click, Release) => Hover,
        (Hover, Leave) | (Click, Leave) => Default,
        (current, _) => current,
    }
}

/// What the controller publishes to every subscriber on each tick.
#[derive(Clone, Copy, Debug)]
pub struct CursorFrame {
    pub enabled: bool,
    pub mode: CursorMode,
    /// Followed (spring-smoothed) cursor point.
    pub position: Vec2,
    /// Last raw pointer sample the follower is chasing.
    pub target: Vec2,
}

/// Single-writer engine state. Only the owning controller mutates this;
/// every other component consumes published `CursorFrame`s.
#[derive(Clone, Debug)]
pub struct EngineState {
    params: PhysicsParams,
    follower: FollowerState,
    sample: Vec2,
    mode: CursorMode,
    enabled: bool,
    epoch: u64,
}

impl EngineState {
    pub fn new(params: PhysicsParams) -> Self {
        Self {
            params: params.sanitized(),
            follower: FollowerState::default(),
            sample: Vec2::ZERO,
            mode: CursorMode::Default,
            enabled: true,
            epoch: 0,
        }
    }

    pub fn params(&self) -> PhysicsParams {
        self.params
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    pub fn position(&self) -> Vec2 {
        self.follower.position
    }

    pub fn target(&self) -> Vec2 {
        self.sample
    }

    /// Identifies the currently live loop. A scheduled tick that captured an
    /// older epoch must do nothing at all, which makes cancellation safe
    /// against already-queued callbacks.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Raw pointer sample, overwritten in place. The pointer listener calls
    /// this and nothing else; all computation stays on the frame loop.
    pub fn set_sample(&mut self, sample: Vec2) {
        self.sample = sample;
    }

    /// Fire-and-forget, idempotent, last write wins.
    pub fn set_mode(&mut self, mode: CursorMode) {
        self.mode = mode;
    }

    /// Returns true when the flag actually flipped. Every transition bumps
    /// the epoch so exactly one loop is live after any off/on churn; the
    /// engine never re-enables on its own.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        self.epoch += 1;
        true
    }

    /// Permanent (for the session) environment-driven disable. Identical to
    /// `set_enabled(false)`; only an explicit manual call turns the engine
    /// back on afterwards.
    pub fn force_disable(&mut self) -> bool {
        self.set_enabled(false)
    }

    /// Advance the follower one frame toward the raw sample. Returns `None`
    /// without touching any state while disabled, so position and velocity
    /// stay frozen rather than drifting.
    pub fn tick(&mut self) -> Option<CursorFrame> {
        if !self.enabled {
            return None;
        }
        self.follower.step(self.sample, self.params);
        Some(self.snapshot())
    }

    /// Current state as a publishable frame, without advancing.
    pub fn snapshot(&self) -> CursorFrame {
        CursorFrame {
            enabled: self.enabled,
            mode: self.mode,
            position: self.follower.position,
            target: self.sample,
        }
    }
}
