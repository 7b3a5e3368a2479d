use crate::audio::{self, InputSource};
use crate::constants::*;
use crate::core::{demo, VisualizerEngine};
use crate::input;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<VisualizerEngine>>,
    pub paused: Rc<RefCell<bool>>,
    pub source: Rc<RefCell<InputSource>>,

    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub mouse: Rc<RefCell<input::MouseState>>,

    pub analyser: Option<web::AnalyserNode>,
    pub analyser_buf: Rc<RefCell<Vec<f32>>>,

    pub spectrum_frame: Vec<f32>,
    pub last_instant: Instant,
    pub demo_time: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(FRAME_DT_MAX);
        self.last_instant = now;

        // This frame's spectrum: live analyser data when an input is
        // running, synthetic demo bands otherwise.
        let live = *self.source.borrow() == InputSource::Live;
        let mut have_frame = false;
        if live {
            if let Some(a) = &self.analyser {
                audio::read_normalized_spectrum(
                    a,
                    &mut self.analyser_buf.borrow_mut(),
                    &mut self.spectrum_frame,
                );
                have_frame = true;
            }
        }
        if !have_frame {
            self.demo_time += dt;
            demo::fill_demo_spectrum(self.demo_time, &mut self.spectrum_frame);
        }

        if !*self.paused.borrow() {
            let ms = *self.mouse.borrow();
            let mut engine = self.engine.borrow_mut();
            engine.update_audio_data(&self.spectrum_frame);
            engine.update_particles(dt, ms.x, ms.y, ms.down);
        }

        let engine = self.engine.borrow();
        render::draw_frame(&self.ctx2d, &self.canvas, &engine, &self.spectrum_frame);
    }
}

fn request_frame(tick: &Closure<dyn FnMut()>) {
    if let Some(window) = web::window() {
        _ = window.request_animation_frame(tick.as_ref().unchecked_ref());
    }
}

/// Drive the simulation and renderer from requestAnimationFrame. The tick
/// closure holds a handle to itself so it can keep rescheduling.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_inner = tick.clone();
    *tick.borrow_mut() = Some(Closure::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_inner.borrow().as_ref() {
            request_frame(cb);
        }
    }));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
