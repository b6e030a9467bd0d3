// A particle field bound to the surface it is drawn on and the size of that
// surface. One frame clears, advances and redraws.

use crate::field::ParticleField;
use crate::surface::Surface;

pub struct Backdrop<S: Surface> {
    field: ParticleField,
    surface: S,
    width: f64,
    height: f64,
}

impl<S: Surface> Backdrop<S> {
    pub fn new(field: ParticleField, surface: S, width: f64, height: f64) -> Self {
        Backdrop {
            field,
            surface,
            width,
            height,
        }
    }

    pub fn frame(&mut self) {
        self.surface.clear();
        self.field.advance(self.width, self.height);
        self.field.render(&mut self.surface);
    }

    // Particles keep their positions; any left outside the new bounds come
    // back through the normal wrap.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.surface.resize(width, height);
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::particle::Particle;
    use crate::test_support::{Call, RecordingSurface};

    fn single(pos: [f64; 2], vel: [f64; 2]) -> Backdrop<RecordingSurface> {
        let field = ParticleField::from_particles(vec![Particle::new(pos, vel, 4.0, 0.2, Color::GOLD)]);
        Backdrop::new(field, RecordingSurface::default(), 100.0, 100.0)
    }

    #[test]
    fn frame_clears_then_moves_then_draws() {
        let mut backdrop = single([10.0, 10.0], [0.5, -0.5]);
        backdrop.frame();

        assert_eq!(
            backdrop.surface().calls,
            vec![
                Call::Clear,
                Call::Fill(Color::GOLD.with_opacity(0.2)),
                Call::NoStroke,
                Call::Circle([10.5, 9.5], 4.0),
            ]
        );
    }

    #[test]
    fn resize_refits_surface_but_keeps_particles() {
        let mut backdrop = single([90.0, 90.0], [0.5, 0.5]);
        let before = backdrop.field().particles().to_vec();

        backdrop.resize(50.0, 40.0);

        assert_eq!(backdrop.field().particles(), &before[..]);
        assert_eq!(backdrop.dimensions(), (50.0, 40.0));
        assert_eq!(backdrop.surface().calls, vec![Call::Resize(50.0, 40.0)]);
    }

    #[test]
    fn shrink_leaves_stragglers_until_they_wrap() {
        let mut backdrop = single([90.0, 10.0], [0.5, 0.0]);
        backdrop.resize(50.0, 50.0);

        // Already past the new right edge, so the next step snaps it to 0
        backdrop.frame();
        assert_eq!(backdrop.field().particles()[0].pos(), [0.0, 10.0]);
    }

    #[test]
    fn advance_uses_latest_dimensions() {
        // Would wrap at the old width of 100
        let mut backdrop = single([99.75, 10.0], [0.5, 0.0]);
        backdrop.resize(200.0, 100.0);
        backdrop.frame();
        assert_eq!(backdrop.field().particles()[0].pos(), [100.25, 10.0]);
    }
}
