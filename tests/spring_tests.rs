// Host-side tests for the pure spring follower.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod spring {
    include!("../src/spring.rs");
}

use glam::Vec2;
use spring::*;

fn params(damping: f32, mass: f32) -> PhysicsParams {
    PhysicsParams { damping, mass }
}

#[test]
fn converges_to_fixed_target_without_overshoot() {
    // damping=0.15, mass=0.8, target jumps (0,0) -> (100,100) and stays.
    let p = params(0.15, 0.8);
    let target = Vec2::new(100.0, 100.0);
    let mut state = FollowerState::default();
    let mut prev = state.position;
    for tick in 0..120 {
        state.step(target, p);
        // Monotone non-overshooting approach on both axes.
        assert!(
            state.position.x <= 100.0 + 1e-3 && state.position.y <= 100.0 + 1e-3,
            "overshoot at tick {}: {:?}",
            tick,
            state.position
        );
        assert!(
            state.position.x >= prev.x - 1e-6 && state.position.y >= prev.y - 1e-6,
            "non-monotone at tick {}: {:?} after {:?}",
            tick,
            state.position,
            prev
        );
        prev = state.position;
    }
    // Settled within +/-1px inside 120 ticks.
    assert!((state.position - target).length() <= 1.0, "{:?}", state.position);
}

#[test]
fn converges_for_all_preset_like_params() {
    for (damping, mass) in [(0.15, 0.8), (0.1, 1.0), (0.22, 0.6), (0.3, 0.5)] {
        let p = params(damping, mass);
        let target = Vec2::new(-40.0, 250.0);
        let mut state = FollowerState::at(Vec2::new(10.0, -5.0));
        for _ in 0..600 {
            state.step(target, p);
            assert!(
                state.position.is_finite() && state.velocity.is_finite(),
                "diverged for damping={damping} mass={mass}"
            );
        }
        assert!(
            (state.position - target).length() <= 1.0,
            "did not settle for damping={damping} mass={mass}: {:?}",
            state.position
        );
    }
}

#[test]
fn large_target_jump_is_a_smooth_catch_up() {
    let p = PhysicsParams::default();
    let mut state = FollowerState::at(Vec2::new(500.0, 500.0));
    // Page navigation resets the pointer to the origin.
    let target = Vec2::ZERO;
    let mut prev = state.position;
    for _ in 0..600 {
        state.step(target, p);
        assert!(state.position.is_finite());
        // Approach from above, never crossing below the target.
        assert!(state.position.x >= -1e-3 && state.position.y >= -1e-3);
        assert!(state.position.x <= prev.x + 1e-6);
        prev = state.position;
    }
    assert!((state.position - target).length() <= 1.0);
}

#[test]
fn velocity_settles_with_position() {
    let p = params(0.22, 0.6);
    let target = Vec2::new(100.0, 0.0);
    let mut state = FollowerState::default();
    for _ in 0..300 {
        state.step(target, p);
    }
    assert!(state.velocity.length() < 0.05, "{:?}", state.velocity);
}

#[test]
fn invalid_params_are_substituted_before_use() {
    assert_eq!(params(0.0, 0.8).sanitized(), PhysicsParams::default());
    assert_eq!(params(0.15, 0.0).sanitized(), PhysicsParams::default());
    assert_eq!(params(-0.2, 0.8).sanitized(), PhysicsParams::default());
    assert_eq!(params(0.15, -1.0).sanitized(), PhysicsParams::default());
    assert_eq!(params(f32::NAN, 0.8).sanitized(), PhysicsParams::default());
    assert_eq!(params(0.15, f32::INFINITY).sanitized(), PhysicsParams::default());

    let valid = params(0.3, 0.5);
    assert_eq!(valid.sanitized(), valid);
    assert!(valid.is_valid());
    assert!(!params(0.0, 0.0).is_valid());
}

#[test]
fn overdriven_overrides_are_capped_to_the_stable_region() {
    // Positive but too-stiff pairs (a page author writing an aggressive
    // per-mount damping override) must be capped, not integrated as-is:
    // uncapped, the very first step toward (100,100) lands in the tens of
    // thousands of pixels.
    for (damping, mass) in [(2.0, 0.1), (0.45, 0.35), (10.0, 1.0)] {
        let p = params(damping, mass).sanitized();
        assert!(
            p.damping / p.mass <= MAX_RESPONSE_RATE + 1e-6,
            "uncapped ratio for damping={damping} mass={mass}: {p:?}"
        );
        assert_eq!(p.mass, mass);

        let target = Vec2::new(100.0, 100.0);
        let mut state = FollowerState::default();
        for tick in 0..600 {
            state.step(target, p);
            assert!(
                state.position.is_finite(),
                "diverged at tick {tick} for damping={damping} mass={mass}"
            );
            assert!(state.position.x <= 100.0 + 1e-3);
        }
        assert!((state.position - target).length() <= 1.0);
    }
}

#[test]
fn stationary_at_target_stays_put() {
    let p = PhysicsParams::default();
    let target = Vec2::new(12.0, 34.0);
    let mut state = FollowerState::at(target);
    state.step(target, p);
    assert_eq!(state.position, target);
    assert_eq!(state.velocity, Vec2::ZERO);
}
