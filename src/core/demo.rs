use super::constants::BAND_COUNT;

/// Fill a frame with a smoothly varying synthetic spectrum.
///
/// Used by the driver whenever no live audio input is active, so the
/// visualization keeps moving. The engine receives it through the same
/// `update_audio_data` path as real spectra and cannot tell the difference.
pub fn fill_demo_spectrum(time: f32, out: &mut [f32]) {
    for (i, band) in out.iter_mut().enumerate() {
        let t = i as f32 / BAND_COUNT as f32;
        let wave = (time * 1.3 + t * 9.0).sin() * 0.35
            + (time * 0.7 + t * 23.0).sin() * 0.2
            + (time * 2.1).sin() * 0.1;
        let falloff = 1.0 - t * 0.6; // quieter toward the high bands
        *band = ((0.45 + wave) * falloff).clamp(0.0, 1.0);
    }
}
