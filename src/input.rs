use crate::constants::{ENGINE_SPACE_HEIGHT, ENGINE_SPACE_WIDTH};
use glam::Vec2;
use web_sys as web;

/// Latest pointer position in engine space, plus the held state.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// Map a pointer event's CSS position onto the engine's fixed reference
/// frame, so pointer coordinates match particle coordinates regardless of
/// the canvas element's on-screen size.
#[inline]
pub fn pointer_engine_pos(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::new(ENGINE_SPACE_WIDTH * 0.5, ENGINE_SPACE_HEIGHT * 0.5);
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(
        (x_css / w).clamp(0.0, 1.0) * ENGINE_SPACE_WIDTH,
        (y_css / h).clamp(0.0, 1.0) * ENGINE_SPACE_HEIGHT,
    )
}
