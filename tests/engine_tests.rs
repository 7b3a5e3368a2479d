// Host-side integration tests for the visualizer engine facade.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod spectrum {
    include!("../src/core/spectrum.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod engine {
    include!("../src/core/engine.rs");
}

use constants::*;
use engine::VisualizerEngine;
use particles::VisualizationMode;

fn make_engine() -> VisualizerEngine {
    VisualizerEngine::new(DEFAULT_PARTICLE_COUNT, 42)
}

#[test]
fn sensitivity_clamps_to_exact_bounds() {
    let mut eng = make_engine();
    assert_eq!(eng.sensitivity(), SENSITIVITY_DEFAULT);

    eng.set_sensitivity(5.0);
    assert_eq!(eng.sensitivity(), 3.0);

    eng.set_sensitivity(-1.0);
    assert_eq!(eng.sensitivity(), 0.1);

    eng.set_sensitivity(1.7);
    assert_eq!(eng.sensitivity(), 1.7);
}

#[test]
fn mode_setter_accepts_any_integer() {
    let mut eng = make_engine();
    assert_eq!(eng.visualization_mode(), Some(VisualizationMode::Radial));

    eng.set_visualization_mode(2);
    assert_eq!(eng.visualization_mode(), Some(VisualizationMode::SpectralWave));

    eng.set_visualization_mode(-5);
    assert_eq!(eng.visualization_mode(), None);
    // An unknown mode must not keep the engine from ticking.
    eng.update_particles(0.016, 0.0, 0.0, false);
}

#[test]
fn snapshot_is_stable_without_updates_and_changes_with_one() {
    let mut eng = make_engine();
    let first = eng.snapshot();
    let second = eng.snapshot();
    assert_eq!(first, second, "snapshot must be repeatable between updates");
    assert_eq!(first.len(), eng.particle_count());

    eng.update_particles(0.016, 0.0, 0.0, false);
    let third = eng.snapshot();
    assert_ne!(
        first, third,
        "an update with dt > 0 must move at least one live particle"
    );
}

#[test]
fn fresh_engine_reports_neutral_features() {
    let eng = make_engine();
    assert_eq!(eng.total_energy(), 0.0);
    assert_eq!(eng.low_freq_energy(), 0.0);
    assert_eq!(eng.mid_freq_energy(), 0.0);
    assert_eq!(eng.high_freq_energy(), 0.0);
    assert_eq!(eng.spectral_centroid(), CENTROID_SILENT_DEFAULT);
}

#[test]
fn feature_queries_split_the_spectrum() {
    let mut eng = make_engine();
    let mut frame = vec![0.0; BAND_COUNT];
    for v in frame[..LOW_BANDS_END].iter_mut() {
        *v = 1.0;
    }
    eng.update_audio_data(&frame);

    assert_eq!(eng.low_freq_energy(), 1.0);
    assert_eq!(eng.mid_freq_energy(), 0.0);
    assert_eq!(eng.high_freq_energy(), 0.0);
    let expected_total = LOW_BANDS_END as f32 / BAND_COUNT as f32;
    assert!((eng.total_energy() - expected_total).abs() < 1e-6);
}

#[test]
fn short_frames_keep_the_stale_tail() {
    let mut eng = make_engine();
    eng.update_audio_data(&vec![1.0; BAND_COUNT]);
    eng.update_audio_data(&vec![0.0; 64]);

    assert_eq!(eng.low_freq_energy(), 0.0);
    assert_eq!(
        eng.high_freq_energy(),
        1.0,
        "bands beyond a short frame must keep their previous values"
    );
}

#[test]
fn zero_energy_radial_run_decreases_life_by_elapsed_time() {
    let mut eng = make_engine();
    let initial = eng.snapshot();
    let dt = 1.0 / 60.0;
    for _ in 0..60 {
        eng.update_particles(dt, 0.0, 0.0, false);
    }
    // One second is shorter than any initial lifetime, so no slot respawned
    // and every life dropped by exactly the summed dt.
    for (slot, (a, b)) in initial.iter().zip(eng.snapshot().iter()).enumerate() {
        assert!(
            (b.life - (a.life - 1.0)).abs() < 1e-3,
            "slot {slot} life went {} -> {}",
            a.life,
            b.life
        );
    }

    // Six more seconds outlives every lifetime, so each slot must have
    // cycled through a respawn: a slot that never respawned would be about
    // two seconds past dead, while a respawning slot is never more than one
    // tick below zero.
    for _ in 0..360 {
        eng.update_particles(dt, 0.0, 0.0, false);
    }
    for (slot, p) in eng.snapshot().iter().enumerate() {
        assert!(
            p.life > -dt && p.life <= SPAWN_LIFE_MAX,
            "slot {slot} was not respawned: life={}",
            p.life
        );
    }
}

#[test]
fn full_spectrum_spectral_wave_drives_every_particle() {
    let mut eng = make_engine();
    eng.set_visualization_mode(2);
    eng.update_audio_data(&vec![1.0; BAND_COUNT]);
    assert_eq!(eng.total_energy(), 1.0);

    eng.update_particles(0.016, 0.0, 0.0, false);
    for (slot, p) in eng.snapshot().iter().enumerate() {
        assert!(
            p.velocity.length() > 0.0,
            "slot {slot} has zero velocity under a maximal spectrum"
        );
    }
}

#[test]
fn unknown_mode_still_integrates_and_ages() {
    let mut eng = make_engine();
    eng.set_visualization_mode(7);
    eng.update_audio_data(&vec![1.0; BAND_COUNT]);
    let before = eng.snapshot();
    let dt = 0.02;
    eng.update_particles(dt, 0.0, 0.0, false);
    for (slot, (a, b)) in before.iter().zip(eng.snapshot().iter()).enumerate() {
        let expected_pos = a.position + a.velocity * dt;
        let expected_vel = a.velocity * VELOCITY_DAMPING;
        assert!(
            (b.position - expected_pos).length() < 1e-3,
            "slot {slot} did not integrate under an unknown mode"
        );
        assert!(
            (b.velocity - expected_vel).length() < 1e-3,
            "slot {slot} received a force under an unknown mode"
        );
        assert!(
            (b.life - (a.life - dt)).abs() < 1e-5,
            "slot {slot} life bookkeeping broke under an unknown mode"
        );
    }
}

#[test]
fn identical_seeds_and_input_replay_identically() {
    let mut a = VisualizerEngine::new(DEFAULT_PARTICLE_COUNT, 7);
    let mut b = VisualizerEngine::new(DEFAULT_PARTICLE_COUNT, 7);
    let frame = vec![0.8; BAND_COUNT];
    for step in 0..20 {
        let mode = (step / 7) % 3;
        for eng in [&mut a, &mut b] {
            eng.set_visualization_mode(mode);
            eng.update_audio_data(&frame);
            eng.update_particles(0.016, 10.0, 20.0, step % 2 == 0);
        }
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn pointer_input_is_accepted_but_inert() {
    let mut with_pointer = VisualizerEngine::new(DEFAULT_PARTICLE_COUNT, 99);
    let mut without_pointer = VisualizerEngine::new(DEFAULT_PARTICLE_COUNT, 99);
    let frame = vec![0.6; BAND_COUNT];
    for _ in 0..10 {
        with_pointer.update_audio_data(&frame);
        without_pointer.update_audio_data(&frame);
        with_pointer.update_particles(0.016, 123.0, 456.0, true);
        without_pointer.update_particles(0.016, 0.0, 0.0, false);
    }
    assert_eq!(
        with_pointer.snapshot(),
        without_pointer.snapshot(),
        "no current force model reads the pointer"
    );
}
