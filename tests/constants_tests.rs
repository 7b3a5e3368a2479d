// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn band_ranges_partition_the_spectrum() {
    assert!(LOW_BANDS_END > 0);
    assert!(LOW_BANDS_END < MID_BANDS_END);
    assert!(MID_BANDS_END < BAND_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spawn_ranges_are_ordered_and_positive() {
    assert!(SPAWN_JITTER > 0.0);
    assert!(SPAWN_SPEED_MIN > 0.0);
    assert!(SPAWN_SPEED_MAX > SPAWN_SPEED_MIN);
    assert!(SPAWN_LIFE_MIN > 0.0);
    assert!(SPAWN_LIFE_MAX > SPAWN_LIFE_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_keeps_velocities_bounded() {
    assert!(VELOCITY_DAMPING > 0.0 && VELOCITY_DAMPING < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sensitivity_clamp_brackets_the_default() {
    assert!(SENSITIVITY_MIN > 0.0);
    assert!(SENSITIVITY_MIN < SENSITIVITY_DEFAULT);
    assert!(SENSITIVITY_DEFAULT < SENSITIVITY_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn centroid_default_is_mid_spectrum() {
    assert!(CENTROID_SILENT_DEFAULT >= 0.0 && CENTROID_SILENT_DEFAULT <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn force_coefficients_are_positive() {
    assert!(RADIAL_OUTWARD_FORCE > 0.0);
    assert!(RADIAL_SPIRAL_FORCE > 0.0);
    assert!(RADIAL_JITTER_FORCE > 0.0);
    assert!(ORBITAL_TANGENT_FORCE > 0.0);
    assert!(ORBITAL_TANGENT_SCALE > 0.0);
    assert!(ORBITAL_BREATHING_FORCE > 0.0);
    assert!(ORBITAL_WOBBLE_FORCE > 0.0);
    assert!(WAVE_DRIFT_FORCE > 0.0);
}

#[test]
fn wave_tables_are_consistent() {
    assert_eq!(WAVE_BASE_FREQS.len(), WAVE_CENTROID_FREQS.len());
    assert_eq!(WAVE_BASE_FREQS.len(), WAVE_BAND_FORCES.len());
    for k in 1..WAVE_BASE_FREQS.len() {
        assert!(
            WAVE_BASE_FREQS[k] > WAVE_BASE_FREQS[k - 1],
            "wave frequencies should rise with the band group"
        );
        assert!(
            WAVE_BAND_FORCES[k] < WAVE_BAND_FORCES[k - 1],
            "wave amplitudes should fall with the band group"
        );
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn breathing_bias_sits_inside_the_energy_range() {
    assert!(ORBITAL_BREATHING_BIAS > 0.0 && ORBITAL_BREATHING_BIAS < 1.0);
}
