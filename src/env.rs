//! One-shot environment capability probes. Run once at startup; later device
//! changes are not observed.

use web_sys as web;

/// Why the engine was forced off at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForcedOff {
    ReducedMotion,
    TouchPrimary,
    ProbeFailed,
}

/// Probe the environment. `None` means the engine may run. Any probe failure
/// counts as forced-off: the host UI has no fallback path for a crashed
/// provider, so an unknown environment gets the safe behavior instead of an
/// error.
pub fn startup_restriction() -> Option<ForcedOff> {
    let window = match web::window() {
        Some(w) => w,
        None => return Some(ForcedOff::ProbeFailed),
    };
    match window.match_media("(prefers-reduced-motion: reduce)") {
        Ok(Some(mq)) if mq.matches() => return Some(ForcedOff::ReducedMotion),
        Ok(_) => {}
        Err(_) => return Some(ForcedOff::ProbeFailed),
    }
    if touch_primary(&window) {
        return Some(ForcedOff::TouchPrimary);
    }
    None
}

/// Touch-primary means a coarse primary pointer, or touch points reported
/// with no fine pointer available at all (some hybrids report both).
fn touch_primary(window: &web::Window) -> bool {
    if let Ok(Some(mq)) = window.match_media("(pointer: coarse)") {
        if mq.matches() {
            return true;
        }
    }
    let has_fine = matches!(
        window.match_media("(pointer: fine)"),
        Ok(Some(mq)) if mq.matches()
    );
    window.navigator().max_touch_points() > 0 && !has_fine
}
