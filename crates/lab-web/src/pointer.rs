use crate::particles::ParticleScene;
use glam::Vec2;
use lab_core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Convert a pointer event's client coordinates into field space using the
/// ratio of the canvas backing size to its displayed size.
#[inline]
pub fn pointer_field_pos(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let scale_x = canvas.width() as f32 / w;
    let scale_y = canvas.height() as f32 / h;
    Some(Vec2::new(
        (ev.client_x() as f32 - rect.left() as f32) * scale_x,
        (ev.client_y() as f32 - rect.top() as f32) * scale_y,
    ))
}

/// Wire the pointer bridge: a press toggles attraction on, release or
/// leaving the canvas toggles it off, and every move refreshes the
/// attraction point whether or not a press is active.
pub fn wire_pointer_handlers(scene: &ParticleScene) {
    let canvas = scene.canvas.clone();
    let field = scene.field.clone();

    // pointermove
    {
        let canvas_move = canvas.clone();
        let field_move = field.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                if let Some(pos) = pointer_field_pos(&ev, &canvas_move) {
                    field_move.borrow_mut().set_attraction_point(pos);
                }
            }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerdown
    {
        let field_down = field.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                field_down.borrow_mut().set_attraction_active(true);
                ev.prevent_default();
            }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup / pointerleave both release the attraction
    for event in ["pointerup", "pointerleave"] {
        let field_up: Rc<RefCell<ParticleField>> = field.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            field_up.borrow_mut().set_attraction_active(false);
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
