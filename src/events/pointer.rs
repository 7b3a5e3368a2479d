use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in engine space so the frame loop can hand it to the
/// simulation each tick.
pub fn wire_pointer_handlers(
    canvas: web::HtmlCanvasElement,
    mouse_state: Rc<RefCell<input::MouseState>>,
) {
    wire_pointermove(&canvas, &mouse_state);
    wire_pointerdown(&canvas, &mouse_state);
    wire_pointerup(&mouse_state);
}

// Moves are tracked on the window so the position stays current while the
// pointer is outside the canvas.
fn wire_pointermove(canvas: &web::HtmlCanvasElement, mouse_state: &Rc<RefCell<input::MouseState>>) {
    let canvas = canvas.clone();
    let mouse_state = mouse_state.clone();
    let closure: Closure<dyn FnMut(web::PointerEvent)> =
        Closure::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_engine_pos(&ev, &canvas);
            let mut ms = mouse_state.borrow_mut();
            ms.x = pos.x;
            ms.y = pos.y;
        });
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, mouse_state: &Rc<RefCell<input::MouseState>>) {
    let target = canvas.clone();
    let canvas = canvas.clone();
    let mouse_state = mouse_state.clone();
    let closure: Closure<dyn FnMut(web::PointerEvent)> =
        Closure::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_engine_pos(&ev, &canvas);
            {
                let mut ms = mouse_state.borrow_mut();
                ms.x = pos.x;
                ms.y = pos.y;
                ms.down = true;
            }
            // Keep receiving moves while the button is held, even off-canvas.
            _ = canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        });
    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(mouse_state: &Rc<RefCell<input::MouseState>>) {
    let mouse_state = mouse_state.clone();
    let closure: Closure<dyn FnMut(web::PointerEvent)> =
        Closure::new(move |ev: web::PointerEvent| {
            mouse_state.borrow_mut().down = false;
            ev.prevent_default();
        });
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
