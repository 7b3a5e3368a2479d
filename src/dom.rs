use crate::audio::{self, InputSource};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window()?.document()
}

/// Attach a click handler to an element by id. Missing elements are skipped
/// so a stripped-down page still loads.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    let closure: Closure<dyn FnMut()> = Closure::new(handler);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the canvas backing store at CSS size times devicePixelRatio so the
/// renderer draws at native resolution.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let rect = canvas.get_bounding_client_rect();
    let dpr = window.device_pixel_ratio();
    let width = ((rect.width() * dpr) as u32).max(1);
    let height = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
}

/// Wire the audio-file input: a picked file is decoded and played, and the
/// frame loop switches from the demo spectrum to live analyser data.
pub fn wire_file_input(
    document: &web::Document,
    audio_ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    source: Rc<RefCell<InputSource>>,
) {
    let Some(el) = document.get_element_by_id("audio-file") else {
        return;
    };
    let Ok(file_input) = el.dyn_into::<web::HtmlInputElement>() else {
        log::warn!("#audio-file is not an <input> element");
        return;
    };
    let input_for_closure = file_input.clone();
    let closure: Closure<dyn FnMut(web::Event)> = Closure::new(move |_ev: web::Event| {
        let Some(file) = input_for_closure.files().and_then(|l| l.get(0)) else {
            return;
        };
        let audio_ctx = audio_ctx.clone();
        let analyser = analyser.clone();
        let source = source.clone();
        spawn_local(async move {
            match audio::play_file(audio_ctx, analyser, file).await {
                Ok(()) => *source.borrow_mut() = InputSource::Live,
                Err(e) => log::error!("[audio] file playback failed: {e:?}"),
            }
        });
    });
    _ = file_input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
