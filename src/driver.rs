// Self-driving loop: requestAnimationFrame for frames, the window resize
// event for re-fitting. Both closures live for the rest of the page.

use crate::ParticleBackdrop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

pub fn run(backdrop: Rc<RefCell<ParticleBackdrop>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;

    let resize_target = backdrop.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        if let Err(err) = resize_target.borrow_mut().fit_to_window() {
            console::error_1(&err);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    // The frame closure reschedules itself, so it needs a handle to its own
    // slot. Filling the slot after creation closes the loop.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        backdrop.borrow_mut().frame();
        if let Some(callback) = f.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                console::error_1(&err);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = g.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no global window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
