#![cfg(target_arch = "wasm32")]
//! Pointer-interaction engine: a critically damped spring follower driving a
//! custom cursor halo, plus an element-level magnetic attraction effect.
//!
//! One controller owns the single requestAnimationFrame loop; pointer events
//! only write a raw sample, the loop advances the physics and fans the result
//! out to subscribers (halo renderer, magnet mounts). Under a reduced-motion
//! preference or on touch-primary devices the engine is force-disabled for
//! the session and no physics ever runs.

use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod controller;
pub mod engine;
mod env;
mod events;
mod halo;
pub mod magnet;
mod magnet_mount;
pub mod presets;
pub mod spring;

pub use engine::{CursorFrame, CursorMode};
pub use magnet::{magnet_offset, ElementBox, MagnetParams};

use controller::CursorController;
use magnet_mount::MagnetMount;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-halo loaded");
    Ok(())
}

/// Host-facing handle around the controller. The host constructs exactly one
/// of these per page and reaches the engine only through it; there is no
/// implicit lookup anywhere.
#[wasm_bindgen]
pub struct CursorEngine {
    ctrl: Rc<CursorController>,
    mounts: Rc<RefCell<Vec<MagnetMount>>>,
}

#[wasm_bindgen]
impl CursorEngine {
    pub fn enabled(&self) -> bool {
        self.ctrl.enabled()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.ctrl.set_enabled(enabled);
    }

    /// Fire-and-forget; unknown mode names are logged and dropped.
    pub fn set_cursor_mode(&self, mode: &str) {
        match CursorMode::parse(mode) {
            Some(m) => self.ctrl.set_cursor_mode(m),
            None => log::warn!("unknown cursor mode {mode:?}"),
        }
    }

    pub fn cursor_mode(&self) -> String {
        self.ctrl.cursor_mode().as_str().to_owned()
    }

    pub fn preset_name(&self) -> String {
        self.ctrl.preset().name.to_owned()
    }

    pub fn damping(&self) -> f32 {
        self.ctrl.params().damping
    }

    pub fn mass(&self) -> f32 {
        self.ctrl.params().mass
    }

    /// Followed (spring-smoothed) cursor point.
    pub fn position_x(&self) -> f32 {
        self.ctrl.position().x
    }

    pub fn position_y(&self) -> f32 {
        self.ctrl.position().y
    }

    /// Last raw pointer sample.
    pub fn target_x(&self) -> f32 {
        self.ctrl.target_position().x
    }

    pub fn target_y(&self) -> f32 {
        self.ctrl.target_position().y
    }

    /// Detach every magnet mount and re-scan the document. The host calls
    /// this after swapping page content so mounts track element lifecycle.
    pub fn remount_magnets(&self) {
        for mount in self.mounts.borrow_mut().drain(..) {
            mount.detach();
        }
        if let Some(document) = web::window().and_then(|w| w.document()) {
            let mut mounts = self.mounts.borrow_mut();
            *mounts = scan_magnets(&self.ctrl, &document);
            log::info!("magnet mounts rescanned: {}", mounts.len());
        }
    }
}

#[wasm_bindgen(js_name = initCursorEngine)]
pub fn init_cursor_engine() -> Result<CursorEngine, JsValue> {
    init().map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn init() -> anyhow::Result<CursorEngine> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;

    let preset_name = document
        .body()
        .and_then(|b| b.get_attribute(constants::PRESET_ATTR));
    let preset = presets::preset(preset_name.as_deref());
    log::info!("cursor engine starting with preset {:?}", preset.name);

    let ctrl = CursorController::new(*preset);
    events::wire_pointer_move(ctrl.clone());
    halo::attach(&ctrl, &document)?;
    let mounts = scan_magnets(&ctrl, &document);

    match env::startup_restriction() {
        Some(reason) => {
            // Skip loop startup entirely; only an explicit set_enabled(true)
            // brings the engine up afterwards.
            log::info!("cursor engine force-disabled: {reason:?}");
            ctrl.force_disable();
        }
        None => controller::start_loop(ctrl.clone()),
    }

    Ok(CursorEngine {
        ctrl,
        mounts: Rc::new(RefCell::new(mounts)),
    })
}

fn scan_magnets(ctrl: &Rc<CursorController>, document: &web::Document) -> Vec<MagnetMount> {
    let mut mounts = Vec::new();
    let list = match document.query_selector_all(constants::MAGNET_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            log::error!("magnet scan failed: {e:?}");
            return mounts;
        }
    };
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        mounts.push(magnet_mount::attach(ctrl.clone(), el));
    }
    mounts
}
