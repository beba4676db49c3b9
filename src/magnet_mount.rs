//! Per-element magnet lifecycle. Each mount subscribes to cursor frames,
//! recomputes its own offset while hovered (no per-element frame loops), and
//! settles back to zero through the same critically damped family the cursor
//! itself uses. Detach must leave the element untouched: listeners removed,
//! subscription gone, transform cleared.

use crate::constants::{
    MAGNET_CLAMP_ATTR, MAGNET_CLAMP_DEFAULT, MAGNET_DAMPING_ATTR, MAGNET_MASS_ATTR,
    MAGNET_RADIUS_ATTR, MAGNET_STRENGTH_ATTR,
};
use crate::controller::{CursorController, SubscriptionId};
use crate::engine::{next_mode, CursorMode, ElementEvent};
use crate::magnet::{magnet_offset, ElementBox, MagnetParams};
use crate::presets::PresetOverrides;
use crate::spring::{FollowerState, PhysicsParams};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One magnetic interactive element, alive from attach to detach.
pub struct MagnetMount {
    ctrl: Rc<CursorController>,
    el: web::HtmlElement,
    sub_id: SubscriptionId,
    listeners: Vec<(&'static str, Closure<dyn FnMut(web::PointerEvent)>)>,
}

fn attr_f32(el: &web::Element, name: &str) -> Option<f32> {
    el.get_attribute(name)
        .and_then(|v| v.parse::<f32>().ok())
        .filter(|v| v.is_finite())
}

/// Per-mount overrides read from data attributes; absent or unparsable
/// values fall back to the page preset field by field.
pub fn overrides_from_element(el: &web::Element) -> PresetOverrides {
    PresetOverrides {
        damping: attr_f32(el, MAGNET_DAMPING_ATTR),
        mass: attr_f32(el, MAGNET_MASS_ATTR),
        magnet_strength: attr_f32(el, MAGNET_STRENGTH_ATTR),
        magnet_radius: attr_f32(el, MAGNET_RADIUS_ATTR),
        ..PresetOverrides::default()
    }
}

pub fn attach(ctrl: Rc<CursorController>, el: web::HtmlElement) -> MagnetMount {
    let overrides = overrides_from_element(&el);
    let merged = ctrl.preset().merged(&overrides);
    let magnet_params = MagnetParams {
        strength: merged.magnet_strength,
        radius: merged.magnet_radius,
        clamp: attr_f32(&el, MAGNET_CLAMP_ATTR).unwrap_or(MAGNET_CLAMP_DEFAULT),
    };
    let settle_params = PhysicsParams {
        damping: merged.damping,
        mass: merged.mass,
    }
    .sanitized();

    let hovered = Rc::new(Cell::new(false));
    let mode = Rc::new(Cell::new(CursorMode::Default));

    // Presentation smoothing state; the calculator itself is stateless.
    let smooth = Rc::new(RefCell::new(FollowerState::default()));

    let sub_id = {
        let el = el.clone();
        let hovered = hovered.clone();
        let smooth = smooth.clone();
        ctrl.subscribe(move |frame| {
            if !frame.enabled {
                // Loop stops after this frame; snap rather than animate.
                smooth.replace(FollowerState::default());
                apply_offset(&el, Vec2::ZERO);
                return;
            }
            let offset = if hovered.get() {
                let rect = el.get_bounding_client_rect();
                let bounds = ElementBox {
                    left: rect.left() as f32,
                    top: rect.top() as f32,
                    width: rect.width() as f32,
                    height: rect.height() as f32,
                };
                magnet_offset(bounds, frame.position, magnet_params)
            } else {
                // Explicit reset on un-hover; only the smoothing below decays.
                Vec2::ZERO
            };
            let mut s = smooth.borrow_mut();
            s.step(offset, settle_params);
            apply_offset(&el, s.position);
        })
    };

    let mut listeners = Vec::with_capacity(4);
    for (name, event) in [
        ("pointerenter", ElementEvent::Enter),
        ("pointerleave", ElementEvent::Leave),
        ("pointerdown", ElementEvent::Press),
        ("pointerup", ElementEvent::Release),
    ] {
        let ctrl = ctrl.clone();
        let hovered = hovered.clone();
        let mode = mode.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            match event {
                ElementEvent::Enter => hovered.set(true),
                ElementEvent::Leave => hovered.set(false),
                _ => {}
            }
            let next = next_mode(mode.get(), event);
            mode.set(next);
            ctrl.set_mode_from(sub_id, next);
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        listeners.push((name, closure));
    }

    MagnetMount {
        ctrl,
        el,
        sub_id,
        listeners,
    }
}

impl MagnetMount {
    /// Unregister everything this mount wired up. The offset is forced to
    /// zero before teardown so no open transition outlives the element, and
    /// the global mode is reset if this mount was the last writer.
    pub fn detach(self) {
        for (name, closure) in &self.listeners {
            _ = self
                .el
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        self.ctrl.unsubscribe(self.sub_id);
        self.ctrl.clear_mode_if_setter(self.sub_id);
        apply_offset(&self.el, Vec2::ZERO);
    }
}

fn apply_offset(el: &web::HtmlElement, offset: Vec2) {
    _ = el.style().set_property(
        "transform",
        &format!("translate3d({}px, {}px, 0)", offset.x, offset.y),
    );
}
