#![cfg(target_arch = "wasm32")]
use crate::audio::InputSource;
use crate::core::VisualizerEngine;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

// Track the CSS size on resize so the backing store stays at native
// resolution.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let closure: Closure<dyn FnMut()> = Closure::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    });
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Both overlay buttons dismiss it; resuming the AudioContext here satisfies
// the browser's user-gesture requirement.
fn wire_overlay_buttons(audio_ctx: &web::AudioContext) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    for id in ["overlay-ok", "overlay-close"] {
        let audio_ctx = audio_ctx.clone();
        dom::add_click_listener(&doc, id, move || {
            _ = audio_ctx.resume();
            if let Some(d) = dom::window_document() {
                overlay::hide(&d);
            }
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pulse-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("viz-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #viz-canvas"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#viz-canvas is not a canvas"))?;

    wire_canvas_resize(&canvas);
    let ctx2d = render::canvas_context(&canvas)?;

    // One engine instance for the whole session; everything reaches it
    // through this handle.
    let engine = Rc::new(RefCell::new(VisualizerEngine::new(
        crate::core::constants::DEFAULT_PARTICLE_COUNT,
        constants::ENGINE_SEED,
    )));
    {
        let e = engine.borrow();
        log::info!(
            "[engine] particles={} mode={:?} sensitivity={}",
            e.particle_count(),
            e.visualization_mode(),
            e.sensitivity()
        );
    }
    let paused = Rc::new(RefCell::new(false));

    // Audio graph: one analyser shared by the microphone and file playback.
    // Until an input is started the frame loop feeds the engine a synthetic
    // demo spectrum.
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let (analyser, analyser_buf) = audio::create_analyser(&audio_ctx);
    let source = Rc::new(RefCell::new(InputSource::Demo));

    wire_overlay_buttons(&audio_ctx);
    events::wire_overlay_toggle_h(&document);

    if let Some(a) = &analyser {
        dom::wire_file_input(&document, audio_ctx.clone(), a.clone(), source.clone());
    }

    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_pointer_handlers(canvas.clone(), mouse_state.clone());
    events::wire_global_keydown(events::KeyWiring {
        engine: engine.clone(),
        paused: paused.clone(),
        source: source.clone(),
        audio_ctx: audio_ctx.clone(),
        analyser: analyser.clone(),
        canvas: canvas.clone(),
    });

    // Simulation + renderer loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        paused,
        source,
        canvas,
        ctx2d,
        mouse: mouse_state,
        analyser,
        analyser_buf,
        spectrum_frame: vec![0.0; crate::core::constants::BAND_COUNT],
        last_instant: Instant::now(),
        demo_time: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
