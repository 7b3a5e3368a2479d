use super::constants::*;
use super::spectrum::AudioFeatures;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One slot of the particle arena. Owned exclusively by the pool; the
/// renderer only ever sees copies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining seconds before the slot is respawned.
    pub life: f32,
    /// Degrees, wrapped to [0, 360).
    pub hue: f32,
}

/// Force model applied to every live particle this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualizationMode {
    Radial,
    Orbital,
    SpectralWave,
}

impl VisualizationMode {
    /// Raw integers outside the known modes map to `None`; the update then
    /// runs as a no-force pass-through.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Radial),
            1 => Some(Self::Orbital),
            2 => Some(Self::SpectralWave),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Radial => "Radial",
            Self::Orbital => "Orbital",
            Self::SpectralWave => "Spectral wave",
        }
    }
}

/// Pointer input threaded through the update. No current force model reads
/// it; it is kept in the signatures as an interaction hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

/// Fixed-capacity particle arena. Slots are allocated once and reused
/// forever; slot index is the stable ordering key for snapshots.
pub struct ParticlePool {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticlePool {
    pub fn new(capacity: usize, seed: u64) -> Self {
        let mut pool = Self {
            particles: vec![
                Particle {
                    position: Vec2::ZERO,
                    velocity: Vec2::ZERO,
                    life: 0.0,
                    hue: 0.0,
                };
                capacity
            ],
            rng: StdRng::seed_from_u64(seed),
        };
        for slot in 0..capacity {
            pool.spawn(slot);
        }
        pool
    }

    /// Reset a slot to a fresh particle near the center.
    fn spawn(&mut self, slot: usize) {
        let rng = &mut self.rng;
        let x = CENTER_X + rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER);
        let y = CENTER_Y + rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER);
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MAX);
        self.particles[slot] = Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: rng.gen_range(SPAWN_LIFE_MIN..SPAWN_LIFE_MAX),
            hue: rng.gen_range(0.0..360.0),
        };
    }

    /// Advance every slot by one tick.
    ///
    /// Dead slots (`life <= 0`) are respawned before any force model touches
    /// them, so a particle is never force-updated in a dead state. Damping is
    /// applied once per call regardless of `dt`.
    pub fn update(
        &mut self,
        dt: f32,
        pointer: PointerState,
        mode: Option<VisualizationMode>,
        features: &AudioFeatures,
        sensitivity: f32,
        time: f32,
    ) {
        let hue_step = features.total_energy * HUE_TOTAL_WEIGHT
            + features.spectral_centroid * HUE_CENTROID_WEIGHT;
        for slot in 0..self.particles.len() {
            if self.particles[slot].life <= 0.0 {
                self.spawn(slot);
            } else if let Some(mode) = mode {
                let ParticlePool { particles, rng } = self;
                let p = &mut particles[slot];
                match mode {
                    VisualizationMode::Radial => {
                        radial_force(p, dt, features, sensitivity, rng, pointer)
                    }
                    VisualizationMode::Orbital => {
                        orbital_force(p, dt, features, sensitivity, time, pointer)
                    }
                    VisualizationMode::SpectralWave => {
                        spectral_wave_force(p, dt, features, sensitivity, time, pointer)
                    }
                }
            }
            let p = &mut self.particles[slot];
            p.position += p.velocity * dt;
            p.velocity *= VELOCITY_DAMPING;
            p.life -= dt;
            p.hue = (p.hue + hue_step).rem_euclid(360.0);
        }
    }

    /// Copy of all slots in index order. The caller cannot reach the pool's
    /// own storage through it.
    pub fn snapshot(&self) -> Vec<Particle> {
        self.particles.clone()
    }

    pub fn count(&self) -> usize {
        self.particles.len()
    }
}

/// Outward push, centroid-twisted spiral, and high-band jitter away from the
/// fixed center. A particle sitting exactly on the center gets no force.
fn radial_force(
    p: &mut Particle,
    dt: f32,
    f: &AudioFeatures,
    sensitivity: f32,
    rng: &mut StdRng,
    _pointer: PointerState,
) {
    let dx = p.position.x - CENTER_X;
    let dy = p.position.y - CENTER_Y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist <= 0.0 {
        return;
    }
    let radial = Vec2::new(dx, dy) / dist;
    p.velocity += radial * (f.total_energy * sensitivity * RADIAL_OUTWARD_FORCE * dt);

    let spiral_angle = dy.atan2(dx) + f.spectral_centroid * RADIAL_SPIRAL_TWIST;
    p.velocity += Vec2::new(spiral_angle.cos(), spiral_angle.sin())
        * (f.mid_energy * sensitivity * RADIAL_SPIRAL_FORCE * dt);

    let jitter = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5);
    p.velocity += jitter * (f.high_energy * sensitivity * RADIAL_JITTER_FORCE * dt);
}

/// Tangential swirl around the center with a low-band breathing term and a
/// high-band wobble. Breathing contracts the orbit when low energy is quiet.
fn orbital_force(
    p: &mut Particle,
    dt: f32,
    f: &AudioFeatures,
    sensitivity: f32,
    time: f32,
    _pointer: PointerState,
) {
    let dx = p.position.x - CENTER_X;
    let dy = p.position.y - CENTER_Y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist <= 0.0 {
        return;
    }
    let tangent_speed = (f.mid_energy + f.spectral_centroid)
        * sensitivity
        * ORBITAL_TANGENT_FORCE
        * ORBITAL_TANGENT_SCALE;
    p.velocity += Vec2::new(-dy, dx) * (tangent_speed * dt);

    let breathing = (f.low_energy - ORBITAL_BREATHING_BIAS) * sensitivity * ORBITAL_BREATHING_FORCE;
    p.velocity += Vec2::new(dx, dy) / dist * (breathing * dt);

    let wobble = time * ORBITAL_WOBBLE_TIME_RATE + p.life * ORBITAL_WOBBLE_LIFE_RATE;
    let wobble_amp = f.high_energy * sensitivity * ORBITAL_WOBBLE_FORCE;
    p.velocity += Vec2::new(wobble.sin(), wobble.cos()) * (wobble_amp * dt);
}

/// Sum of three band-driven sinusoids per axis, phase-shifted by the
/// particle's own position, plus a rotating drift. The centroid raises the
/// spatial frequency of every wave.
fn spectral_wave_force(
    p: &mut Particle,
    dt: f32,
    f: &AudioFeatures,
    sensitivity: f32,
    time: f32,
    _pointer: PointerState,
) {
    let c = f.spectral_centroid;
    let band_energies = [f.low_energy, f.mid_energy, f.high_energy];
    let mut force = Vec2::ZERO;
    for k in 0..3 {
        let freq = WAVE_BASE_FREQS[k] + c * WAVE_CENTROID_FREQS[k];
        let amp = band_energies[k] * sensitivity * WAVE_BAND_FORCES[k];
        force.x += (p.position.y * freq + time).sin() * amp;
        force.y += (p.position.x * freq + time).cos() * amp;
    }
    let drift_angle = time * WAVE_DRIFT_TIME_RATE + p.life;
    force += Vec2::new(drift_angle.cos(), drift_angle.sin())
        * (f.total_energy * sensitivity * WAVE_DRIFT_FORCE);
    p.velocity += force * dt;
}
