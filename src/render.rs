use crate::constants::*;
use crate::core::VisualizerEngine;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_context(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("2d context error: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?;
    ctx.dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("unexpected context object: {:?}", e))
}

/// Draw one frame: fading trail wash, every particle from the snapshot, and
/// the decorative spectrum strip. Stateless; reads the engine, never writes.
pub fn draw_frame(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    engine: &VisualizerEngine,
    spectrum: &[f32],
) {
    let w = canvas.width().max(1) as f64;
    let h = canvas.height().max(1) as f64;
    let sx = w / ENGINE_SPACE_WIDTH as f64;
    let sy = h / ENGINE_SPACE_HEIGHT as f64;

    // translucent wash instead of a full clear leaves short motion trails
    ctx.set_fill_style_str(&format!("rgba(5, 8, 16, {TRAIL_FADE_ALPHA})"));
    ctx.fill_rect(0.0, 0.0, w, h);

    let total_energy = engine.total_energy() as f64;
    let radius = PARTICLE_BASE_RADIUS + total_energy * PARTICLE_ENERGY_RADIUS;

    for p in engine.snapshot() {
        let alpha = (p.life as f64 / 2.0).clamp(0.15, 1.0);
        ctx.set_fill_style_str(&format!(
            "hsla({:.0}, {PARTICLE_SATURATION_PCT}%, {PARTICLE_LIGHTNESS_PCT}%, {alpha:.2})",
            p.hue
        ));
        ctx.begin_path();
        _ = ctx.arc(
            p.position.x as f64 * sx,
            p.position.y as f64 * sy,
            radius,
            0.0,
            TAU,
        );
        ctx.fill();
    }

    draw_spectrum_strip(ctx, w, h, spectrum);
}

fn draw_spectrum_strip(
    ctx: &web::CanvasRenderingContext2d,
    w: f64,
    h: f64,
    spectrum: &[f32],
) {
    if spectrum.is_empty() {
        return;
    }
    let bars = SPECTRUM_BAR_COUNT.min(spectrum.len());
    let bands_per_bar = spectrum.len() / bars;
    let bar_width = w / bars as f64;
    for i in 0..bars {
        let lo = i * bands_per_bar;
        let hi = (lo + bands_per_bar).min(spectrum.len());
        let value = spectrum[lo..hi].iter().sum::<f32>() as f64 / (hi - lo).max(1) as f64;
        let height = value * SPECTRUM_BAR_MAX_HEIGHT;
        let hue = i as f64 / bars as f64 * 300.0;
        ctx.set_fill_style_str(&format!("hsla({hue:.0}, 70%, 55%, {SPECTRUM_BAR_ALPHA})"));
        ctx.fill_rect(i as f64 * bar_width, h - height, bar_width * 0.8, height);
    }
}
