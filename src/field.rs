//! The particle field: a fixed set of drifting sprites behind the page.
//!
//! The field owns its particles outright. The host calls [`ParticleField::advance`]
//! and [`ParticleField::render`] once per frame with the current canvas size;
//! the field itself keeps no notion of time or of the canvas.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::surface::Surface;

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawn `count` particles with the default ranges, uniformly placed in
    /// `[0, width) x [0, height)`.
    pub fn initialize<R>(count: usize, width: f64, height: f64, rng: &mut R) -> ParticleField
    where
        R: RandomSource + ?Sized,
    {
        let config = FieldConfig::default().with_particle_count(count);
        ParticleField::with_config(&config, width, height, rng)
    }

    /// Spawn `config.particle_count` particles using the ranges in `config`.
    pub fn with_config<R>(config: &FieldConfig, width: f64, height: f64, rng: &mut R) -> ParticleField
    where
        R: RandomSource + ?Sized,
    {
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            particles.push(Particle::spawn(rng, width, height, config));
        }
        ParticleField { particles }
    }

    /// Build a field from already constructed particles, kept in order.
    pub fn from_particles(particles: Vec<Particle>) -> ParticleField {
        ParticleField { particles }
    }

    /// Move every particle one step, wrapping at the given bounds.
    pub fn advance(&mut self, width: f64, height: f64) {
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    /// Draw every particle as a filled, unstroked circle in insertion order.
    pub fn render<S>(&self, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        for particle in &self.particles {
            surface.set_fill(particle.color());
            surface.no_stroke();
            surface.circle(particle.pos(), particle.size());
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
