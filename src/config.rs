// Tunables for the backdrop. Defaults reproduce the site's gold dust.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    // Bounds are [lo, hi) pairs
    pub velocity: (f64, f64),
    pub size: (f64, f64),
    pub opacity: (f64, f64),
    pub color: Color,
    // Id of the element the canvas is appended to
    pub container_id: String,
    pub z_index: i32,
}

impl FieldConfig {
    pub const DEFAULT_PARTICLE_COUNT: usize = 50;
    pub const DEFAULT_CONTAINER_ID: &'static str = "p5-container";

    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_container_id(mut self, container_id: &str) -> Self {
        self.container_id = container_id.to_owned();
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::DEFAULT_PARTICLE_COUNT,
            velocity: (-0.5, 0.5),
            size: (2.0, 6.0),
            opacity: (0.1, 0.3),
            color: Color::GOLD,
            container_id: FieldConfig::DEFAULT_CONTAINER_ID.to_owned(),
            z_index: -1,
        }
    }
}
