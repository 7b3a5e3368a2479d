// Shared simulation tuning constants used by the engine and the web frontend.

// Spectrum layout
pub const BAND_COUNT: usize = 128;
pub const LOW_BANDS_END: usize = 32; // low bands are [0, 32)
pub const MID_BANDS_END: usize = 96; // mid bands are [32, 96), high bands [96, 128)

// Neutral centroid reported when the spectrum is silent
pub const CENTROID_SILENT_DEFAULT: f32 = 0.5;

// Particle arena
pub const DEFAULT_PARTICLE_COUNT: usize = 200;
pub const CENTER_X: f32 = 400.0; // simulation-space center, also the spawn anchor
pub const CENTER_Y: f32 = 300.0;

// Spawn ranges
pub const SPAWN_JITTER: f32 = 25.0; // per-axis offset from center
pub const SPAWN_SPEED_MIN: f32 = 10.0;
pub const SPAWN_SPEED_MAX: f32 = 30.0;
pub const SPAWN_LIFE_MIN: f32 = 2.0;
pub const SPAWN_LIFE_MAX: f32 = 5.0;

// Integration
pub const VELOCITY_DAMPING: f32 = 0.98; // applied once per update call, not per second
pub const HUE_TOTAL_WEIGHT: f32 = 2.0;
pub const HUE_CENTROID_WEIGHT: f32 = 1.5;

// Sensitivity clamp range
pub const SENSITIVITY_MIN: f32 = 0.1;
pub const SENSITIVITY_MAX: f32 = 3.0;
pub const SENSITIVITY_DEFAULT: f32 = 1.0;

// Radial mode
pub const RADIAL_OUTWARD_FORCE: f32 = 80.0;
pub const RADIAL_SPIRAL_FORCE: f32 = 40.0;
pub const RADIAL_SPIRAL_TWIST: f32 = 2.0; // centroid contribution to the spiral angle
pub const RADIAL_JITTER_FORCE: f32 = 20.0;

// Orbital mode
pub const ORBITAL_TANGENT_FORCE: f32 = 40.0;
pub const ORBITAL_TANGENT_SCALE: f32 = 0.01; // the tangent vector is unnormalized
pub const ORBITAL_BREATHING_FORCE: f32 = 30.0;
pub const ORBITAL_BREATHING_BIAS: f32 = 0.3; // low energy below this contracts the orbit
pub const ORBITAL_WOBBLE_FORCE: f32 = 15.0;
pub const ORBITAL_WOBBLE_TIME_RATE: f32 = 3.0;
pub const ORBITAL_WOBBLE_LIFE_RATE: f32 = 2.0;

// Spectral wave mode: one sinusoid per band group (low, mid, high)
pub const WAVE_BASE_FREQS: [f32; 3] = [0.01, 0.02, 0.03];
pub const WAVE_CENTROID_FREQS: [f32; 3] = [0.02, 0.03, 0.04];
pub const WAVE_BAND_FORCES: [f32; 3] = [80.0, 60.0, 40.0];
pub const WAVE_DRIFT_FORCE: f32 = 30.0;
pub const WAVE_DRIFT_TIME_RATE: f32 = 2.0;
