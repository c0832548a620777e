// Owns the particle collection. The population is a pure function of
// surface area and the whole collection is replaced on every resize.

use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::{Surface, SurfaceSize};
use rand::Rng;

pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Surface pixels per particle, chosen for visual balance.
    pub const DENSITY: u64 = 9000;

    pub fn new() -> ParticleField {
        ParticleField {
            particles: Vec::new(),
        }
    }

    /// How many particles a surface of this size carries.
    pub fn population_for(bounds: SurfaceSize) -> usize {
        (bounds.area() / Self::DENSITY) as usize
    }

    /// Replace the collection with a fresh randomized population sized for
    /// `bounds`. Zero-area surfaces produce an empty field.
    pub fn populate(&mut self, bounds: SurfaceSize) {
        self.populate_with(bounds, &mut rand::thread_rng());
    }

    pub fn populate_with(&mut self, bounds: SurfaceSize, rng: &mut impl Rng) {
        let count = Self::population_for(bounds);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(bounds, rng));
        }
    }

    /// Advance every particle one frame. Outcome is order-independent.
    pub fn tick(&mut self, bounds: SurfaceSize, pointer: &PointerState, surface: &mut impl Surface) {
        for particle in &mut self.particles {
            particle.update(bounds, pointer, surface);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Default for ParticleField {
    fn default() -> ParticleField {
        ParticleField::new()
    }
}
