use crate::audio::{self, InputSource};
use crate::constants::SENSITIVITY_KEY_STEP;
use crate::core::VisualizerEngine;
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[inline]
pub fn mode_for_digit(key: &str) -> Option<i32> {
    match key {
        "1" => Some(0), // Radial
        "2" => Some(1), // Orbital
        "3" => Some(2), // Spectral wave
        _ => None,
    }
}

/// Refresh the hint overlay after an engine or input change
fn update_hint_after_change(
    engine: &Rc<RefCell<VisualizerEngine>>,
    source: &Rc<RefCell<InputSource>>,
) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let (mode, sensitivity) = {
        let eng = engine.borrow();
        (eng.visualization_mode(), eng.sensitivity())
    };
    overlay::update_hint(&document, mode, sensitivity, source.borrow().label());
    overlay::show_hint(&document);
}

fn nudge_sensitivity(engine: &Rc<RefCell<VisualizerEngine>>, delta: f32) {
    let mut eng = engine.borrow_mut();
    let v = eng.sensitivity() + delta;
    eng.set_sensitivity(v);
}

fn toggle_fullscreen(canvas: &web::HtmlCanvasElement) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    if doc.fullscreen_element().is_some() {
        _ = doc.exit_fullscreen();
    } else {
        _ = canvas.request_fullscreen();
    }
}

pub struct KeyWiring {
    pub engine: Rc<RefCell<VisualizerEngine>>,
    pub paused: Rc<RefCell<bool>>,
    pub source: Rc<RefCell<InputSource>>,
    pub audio_ctx: web::AudioContext,
    pub analyser: Option<web::AnalyserNode>,
    pub canvas: web::HtmlCanvasElement,
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &KeyWiring) {
    let key = ev.key();
    if let Some(mode) = mode_for_digit(&key) {
        w.engine.borrow_mut().set_visualization_mode(mode);
        update_hint_after_change(&w.engine, &w.source);
        return;
    }
    match key.as_str() {
        "ArrowUp" => {
            nudge_sensitivity(&w.engine, SENSITIVITY_KEY_STEP);
            update_hint_after_change(&w.engine, &w.source);
            ev.prevent_default();
        }
        "ArrowDown" => {
            nudge_sensitivity(&w.engine, -SENSITIVITY_KEY_STEP);
            update_hint_after_change(&w.engine, &w.source);
            ev.prevent_default();
        }
        " " => {
            let mut paused = w.paused.borrow_mut();
            *paused = !*paused;
            log::info!("[keys] simulation paused: {}", *paused);
            ev.prevent_default();
        }
        "d" | "D" => {
            *w.source.borrow_mut() = InputSource::Demo;
            log::info!("[keys] switched to the demo spectrum");
            update_hint_after_change(&w.engine, &w.source);
        }
        "m" | "M" => {
            let Some(analyser) = w.analyser.clone() else {
                return;
            };
            let audio_ctx = w.audio_ctx.clone();
            let source = w.source.clone();
            let engine = w.engine.clone();
            spawn_local(async move {
                match audio::connect_microphone(audio_ctx, analyser).await {
                    Ok(()) => {
                        *source.borrow_mut() = InputSource::Live;
                        update_hint_after_change(&engine, &source);
                    }
                    Err(e) => log::error!("[audio] microphone unavailable: {e:?}"),
                }
            });
        }
        "Enter" => {
            toggle_fullscreen(&w.canvas);
            ev.prevent_default();
        }
        "Escape" => {
            if let Some(doc) = dom::window_document() {
                _ = doc.exit_fullscreen();
            }
        }
        _ => {}
    }
}

/// Toggle the start overlay with 'h', independent of the pause state.
pub fn wire_overlay_toggle_h(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let closure: Closure<dyn FnMut(web::KeyboardEvent)> =
        Closure::new(move |ev: web::KeyboardEvent| {
            if matches!(ev.key().as_str(), "h" | "H") {
                overlay::toggle(&doc);
                ev.prevent_default();
            }
        });
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_global_keydown(wiring: KeyWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let closure: Closure<dyn FnMut(web::KeyboardEvent)> =
        Closure::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &wiring);
        });
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
