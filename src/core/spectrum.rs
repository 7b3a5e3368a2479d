use super::constants::*;

/// Latest normalized frequency magnitudes, one slot per band.
///
/// The buffer is allocated once and overwritten wholesale each frame by the
/// driver. A frame shorter than the buffer only overwrites its prefix; the
/// tail keeps the previous frame's values.
pub struct SpectrumBuffer {
    bands: Vec<f32>,
}

impl SpectrumBuffer {
    pub fn new() -> Self {
        Self {
            bands: vec![0.0; BAND_COUNT],
        }
    }

    /// Copy the incoming frame into the buffer starting at band 0.
    /// Never fails; excess input bands are ignored.
    pub fn set_frame(&mut self, values: &[f32]) {
        let n = values.len().min(self.bands.len());
        self.bands[..n].copy_from_slice(&values[..n]);
    }

    /// Arithmetic mean of the bands in `[lo, hi)`, clamped to valid indices.
    /// An empty effective range yields 0.0.
    pub fn band_energy(&self, lo: usize, hi: usize) -> f32 {
        let lo = lo.min(self.bands.len());
        let hi = hi.min(self.bands.len());
        if lo >= hi {
            return 0.0;
        }
        let sum: f32 = self.bands[lo..hi].iter().sum();
        sum / (hi - lo) as f32
    }

    /// Energy-weighted mean band index, normalized to [0, 1].
    /// A silent spectrum reports the neutral value instead of dividing by zero.
    pub fn spectral_centroid(&self) -> f32 {
        let total: f32 = self.bands.iter().sum();
        if total == 0.0 {
            return CENTROID_SILENT_DEFAULT;
        }
        let weighted: f32 = self
            .bands
            .iter()
            .enumerate()
            .map(|(i, &v)| i as f32 * v)
            .sum();
        weighted / total / self.bands.len() as f32
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }
}

impl Default for SpectrumBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scalar audio features derived from the current spectrum.
///
/// Recomputed each frame; nothing here persists between frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct AudioFeatures {
    pub total_energy: f32,
    pub low_energy: f32,
    pub mid_energy: f32,
    pub high_energy: f32,
    pub spectral_centroid: f32,
}

impl AudioFeatures {
    pub fn from_spectrum(spectrum: &SpectrumBuffer) -> Self {
        Self {
            total_energy: spectrum.band_energy(0, BAND_COUNT),
            low_energy: spectrum.band_energy(0, LOW_BANDS_END),
            mid_energy: spectrum.band_energy(LOW_BANDS_END, MID_BANDS_END),
            high_energy: spectrum.band_energy(MID_BANDS_END, BAND_COUNT),
            spectral_centroid: spectrum.spectral_centroid(),
        }
    }
}
