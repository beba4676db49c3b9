//! Drives the halo DOM element from published frames: positions it at the
//! followed point and mirrors mode/enabled state onto attributes the
//! stylesheet keys off. All styling itself lives with the host page.

use crate::constants::{HALO_DISABLED_CLASS, HALO_ELEMENT_ID, HALO_MODE_ATTR};
use crate::controller::CursorController;
use anyhow::anyhow;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn attach(ctrl: &Rc<CursorController>, document: &web::Document) -> anyhow::Result<()> {
    let el = document
        .get_element_by_id(HALO_ELEMENT_ID)
        .ok_or_else(|| anyhow!("missing #{}", HALO_ELEMENT_ID))?;
    let halo: web::HtmlElement = el
        .dyn_into()
        .map_err(|_| anyhow!("#{} is not an HtmlElement", HALO_ELEMENT_ID))?;

    let size = ctrl.preset().halo_size;
    let style = halo.style();
    _ = style.set_property("width", &format!("{size}px"));
    _ = style.set_property("height", &format!("{size}px"));
    _ = style.set_property(
        "transition-duration",
        &format!("{}s", ctrl.preset().transition_duration),
    );

    let half = size * 0.5;
    ctrl.subscribe(move |frame| {
        _ = halo
            .class_list()
            .toggle_with_force(HALO_DISABLED_CLASS, !frame.enabled);
        if !frame.enabled {
            return;
        }
        _ = halo.style().set_property(
            "transform",
            &format!(
                "translate3d({}px, {}px, 0)",
                frame.position.x - half,
                frame.position.y - half
            ),
        );
        _ = halo.set_attribute(HALO_MODE_ATTR, frame.mode.as_str());
    });
    Ok(())
}
