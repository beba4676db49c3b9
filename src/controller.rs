use crate::engine::{CursorFrame, CursorMode, EngineState};
use crate::presets::CursorPreset;
use crate::spring::PhysicsParams;
use fnv::FnvHashMap;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SubscriptionId = u64;

/// Owns the single animation loop and all shared cursor state.
///
/// Constructed once per page and handed to consumers by `Rc`; there is no
/// ambient global. Running two controllers on the same page is unsupported.
/// The controller is the only writer of engine state; everything else reads
/// the `CursorFrame`s it publishes.
pub struct CursorController {
    state: RefCell<EngineState>,
    preset: CursorPreset,
    subscribers: RefCell<FnvHashMap<SubscriptionId, Box<dyn FnMut(&CursorFrame)>>>,
    next_sub_id: Cell<SubscriptionId>,
    // Which subscriber last set a non-default mode, for best-effort reset
    // when that element unmounts mid-transition.
    mode_setter: Cell<Option<SubscriptionId>>,
}

impl CursorController {
    pub fn new(preset: CursorPreset) -> Rc<Self> {
        let params = PhysicsParams {
            damping: preset.damping,
            mass: preset.mass,
        };
        if !params.is_valid() {
            log::warn!(
                "invalid physics params ({:?}), substituting defaults",
                params
            );
        }
        Rc::new(Self {
            state: RefCell::new(EngineState::new(params)),
            preset,
            subscribers: RefCell::new(FnvHashMap::default()),
            next_sub_id: Cell::new(0),
            mode_setter: Cell::new(None),
        })
    }

    pub fn preset(&self) -> &CursorPreset {
        &self.preset
    }

    pub fn params(&self) -> PhysicsParams {
        self.state.borrow().params()
    }

    pub fn enabled(&self) -> bool {
        self.state.borrow().enabled()
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.state.borrow().mode()
    }

    pub fn position(&self) -> Vec2 {
        self.state.borrow().position()
    }

    pub fn target_position(&self) -> Vec2 {
        self.state.borrow().target()
    }

    /// Called by the pointer-move listener only; writes the raw sample and
    /// nothing else, so the event thread never competes with the loop.
    pub fn write_sample(&self, sample: Vec2) {
        self.state.borrow_mut().set_sample(sample);
    }

    /// Fire-and-forget, idempotent, last write wins.
    pub fn set_cursor_mode(&self, mode: CursorMode) {
        self.state.borrow_mut().set_mode(mode);
    }

    pub(crate) fn set_mode_from(&self, setter: SubscriptionId, mode: CursorMode) {
        self.set_cursor_mode(mode);
        self.mode_setter.set(if mode == CursorMode::Default {
            None
        } else {
            Some(setter)
        });
    }

    /// Best-effort: an element unmounting mid-transition resets the global
    /// mode only if it was the last writer.
    pub(crate) fn clear_mode_if_setter(&self, setter: SubscriptionId) {
        if self.mode_setter.get() == Some(setter) {
            self.set_cursor_mode(CursorMode::Default);
            self.mode_setter.set(None);
        }
    }

    /// Register a per-tick consumer. Callbacks must not mutate the registry
    /// or engine state from inside the frame callback.
    pub fn subscribe(&self, f: impl FnMut(&CursorFrame) + 'static) -> SubscriptionId {
        let id = self.next_sub_id.get();
        self.next_sub_id.set(id + 1);
        self.subscribers.borrow_mut().insert(id, Box::new(f));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().remove(&id);
    }

    /// Toggle the engine. Disabling publishes one final frozen frame so
    /// consumers can settle, then stops scheduling; a tick already queued by
    /// the browser sees a stale epoch and does nothing. Enabling starts
    /// exactly one fresh loop. Tearing the engine down for good is this same
    /// path: disable and drop.
    pub fn set_enabled(self: &Rc<Self>, enabled: bool) {
        let changed = self.state.borrow_mut().set_enabled(enabled);
        if !changed {
            return;
        }
        if enabled {
            log::info!("cursor engine enabled, starting loop");
            start_loop(self.clone());
        } else {
            log::info!("cursor engine disabled, loop will stop");
            let frame = self.state.borrow().snapshot();
            self.publish(&frame);
        }
    }

    /// Environment-driven permanent disable; never self-reverts.
    pub fn force_disable(self: &Rc<Self>) {
        self.set_enabled(false);
    }

    fn publish(&self, frame: &CursorFrame) {
        let mut subs = self.subscribers.borrow_mut();
        for f in subs.values_mut() {
            f(frame);
        }
    }
}

/// Drive the engine off requestAnimationFrame. The tick closure re-checks the
/// epoch and the enabled flag before doing any work, so a callback queued
/// across a cancellation is a guaranteed no-op rather than merely unscheduled.
pub fn start_loop(ctrl: Rc<CursorController>) {
    let epoch = ctrl.state.borrow().epoch();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctrl_tick = ctrl.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if ctrl_tick.state.borrow().epoch() != epoch || !ctrl_tick.enabled() {
            return;
        }
        let frame = ctrl_tick.state.borrow_mut().tick();
        if let Some(frame) = frame {
            ctrl_tick.publish(&frame);
        }
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
