use crate::controller::CursorController;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn pointer_viewport_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Window-level pointermove feed. Passive, and the handler only overwrites
/// the raw sample; all physics happens on the frame loop. Lives for the whole
/// page, so the closure is forgotten rather than stored.
pub fn wire_pointer_move(ctrl: Rc<CursorController>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ctrl.write_sample(pointer_viewport_px(&ev));
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "pointermove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
