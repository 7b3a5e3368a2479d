// Frontend tuning constants: frame loop, rendering and input mapping.

// Engine-space reference frame; the renderer scales this to the canvas
// backing size and the pointer mapping inverts it.
pub const ENGINE_SPACE_WIDTH: f32 = 800.0;
pub const ENGINE_SPACE_HEIGHT: f32 = 600.0;

// Frame loop
pub const FRAME_DT_MAX: f32 = 0.1; // clamp after tab switches / long stalls
pub const ENGINE_SEED: u64 = 42;

// Keyboard sensitivity step
pub const SENSITIVITY_KEY_STEP: f32 = 0.1;

// Rendering
pub const TRAIL_FADE_ALPHA: f64 = 0.16; // translucent clear that leaves motion trails
pub const PARTICLE_BASE_RADIUS: f64 = 2.0;
pub const PARTICLE_ENERGY_RADIUS: f64 = 3.0; // extra radius at full total energy
pub const PARTICLE_SATURATION_PCT: f64 = 85.0;
pub const PARTICLE_LIGHTNESS_PCT: f64 = 60.0;

// Decorative spectrum strip along the bottom edge
pub const SPECTRUM_BAR_COUNT: usize = 32;
pub const SPECTRUM_BAR_MAX_HEIGHT: f64 = 48.0;
pub const SPECTRUM_BAR_ALPHA: f64 = 0.35;
