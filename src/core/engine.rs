use super::constants::*;
use super::particles::{Particle, ParticlePool, PointerState, VisualizationMode};
use super::spectrum::{AudioFeatures, SpectrumBuffer};

/// The whole simulation behind one handle.
///
/// Constructed once by the driver and held for the session's lifetime. A
/// single driver thread calls `update_audio_data`, `update_particles` and
/// `snapshot` in sequence once per animation frame; the engine is not safe
/// for concurrent calls and does not try to be.
pub struct VisualizerEngine {
    spectrum: SpectrumBuffer,
    pool: ParticlePool,
    mode_raw: i32,
    sensitivity: f32,
    time: f32,
}

impl VisualizerEngine {
    pub fn new(particle_count: usize, seed: u64) -> Self {
        Self {
            spectrum: SpectrumBuffer::new(),
            pool: ParticlePool::new(particle_count, seed),
            mode_raw: 0,
            sensitivity: SENSITIVITY_DEFAULT,
            time: 0.0,
        }
    }

    /// Store the raw mode integer. Unknown values are kept as-is and make
    /// subsequent updates a no-force pass-through (position, life and hue
    /// still advance).
    pub fn set_visualization_mode(&mut self, mode: i32) {
        self.mode_raw = mode;
    }

    pub fn visualization_mode(&self) -> Option<VisualizationMode> {
        VisualizationMode::from_raw(self.mode_raw)
    }

    pub fn set_sensitivity(&mut self, value: f32) {
        self.sensitivity = value.clamp(SENSITIVITY_MIN, SENSITIVITY_MAX);
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Overwrite the spectrum with this frame's magnitudes. Short frames
    /// leave the tail bands at their previous values.
    pub fn update_audio_data(&mut self, spectrum: &[f32]) {
        self.spectrum.set_frame(spectrum);
    }

    /// Advance the simulation one tick. `dt` is seconds since the previous
    /// call and must be non-negative.
    pub fn update_particles(&mut self, dt: f32, pointer_x: f32, pointer_y: f32, pointer_active: bool) {
        self.time += dt;
        let features = AudioFeatures::from_spectrum(&self.spectrum);
        let pointer = PointerState {
            x: pointer_x,
            y: pointer_y,
            active: pointer_active,
        };
        self.pool.update(
            dt,
            pointer,
            VisualizationMode::from_raw(self.mode_raw),
            &features,
            self.sensitivity,
            self.time,
        );
    }

    pub fn particle_count(&self) -> usize {
        self.pool.count()
    }

    /// Copy of every particle in slot order, for the renderer.
    pub fn snapshot(&self) -> Vec<Particle> {
        self.pool.snapshot()
    }

    // Read-only feature queries for diagnostics and the overlay.

    pub fn total_energy(&self) -> f32 {
        self.spectrum.band_energy(0, BAND_COUNT)
    }

    pub fn low_freq_energy(&self) -> f32 {
        self.spectrum.band_energy(0, LOW_BANDS_END)
    }

    pub fn mid_freq_energy(&self) -> f32 {
        self.spectrum.band_energy(LOW_BANDS_END, MID_BANDS_END)
    }

    pub fn high_freq_energy(&self) -> f32 {
        self.spectrum.band_energy(MID_BANDS_END, BAND_COUNT)
    }

    pub fn spectral_centroid(&self) -> f32 {
        self.spectrum.spectral_centroid()
    }
}
