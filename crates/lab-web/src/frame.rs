use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `frame` once per animation frame until `alive` is cleared.
///
/// The loop lives entirely in the closure chain: each invocation checks the
/// flag before doing work, so dropping the owner and clearing `alive` stops
/// the loop by simply not rescheduling it. Frame delivery rate is up to the
/// host; there is no catch-up stepping when frames arrive late.
pub fn start_raf_loop(alive: Rc<Cell<bool>>, mut frame: impl FnMut() + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive.get() {
            // Owner torn down; stop rescheduling and let the chain end.
            return;
        }
        frame();
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
