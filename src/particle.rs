// Simple particle struct to keep track of individual position, velocity, and color.
// Only the position changes once a particle exists.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::random::RandomSource;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pos: Vector2<f64>,
    vel: Vector2<f64>,
    size: f64,
    opacity: f64,
    color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, opacity: f64, base: Color) -> Particle {
        Particle {
            pos,
            vel,
            size,
            opacity,
            color: base.with_opacity(opacity),
        }
    }

    // Draws x, y, vx, vy, size, opacity in that order
    pub fn spawn<R>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle
    where
        R: RandomSource + ?Sized,
    {
        let pos_x = rng.range(0.0, width);
        let pos_y = rng.range(0.0, height);
        let vel_x = rng.range(config.velocity.0, config.velocity.1);
        let vel_y = rng.range(config.velocity.0, config.velocity.1);
        let size = rng.range(config.size.0, config.size.1);
        let opacity = rng.range(config.opacity.0, config.opacity.1);
        Particle::new([pos_x, pos_y], [vel_x, vel_y], size, opacity, config.color)
    }

    // Move by one velocity step, then snap to the opposite edge if outside.
    // This is a single snap, not a modulo wrap.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);

        if self.pos[0] < 0.0 {
            self.pos[0] = width;
        }
        if self.pos[0] > width {
            self.pos[0] = 0.0;
        }
        if self.pos[1] < 0.0 {
            self.pos[1] = height;
        }
        if self.pos[1] > height {
            self.pos[1] = 0.0;
        }
    }

    pub fn pos(&self) -> Vector2<f64> {
        self.pos
    }

    pub fn vel(&self) -> Vector2<f64> {
        self.vel
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_at(x: f64, y: f64) -> Particle {
        Particle::new([x, y], [0.0, 0.0], 4.0, 0.2, Color::GOLD)
    }

    #[test]
    fn left_exit_snaps_to_right_edge() {
        let mut p = still_at(-0.1, 10.0);
        p.step(800.0, 600.0);
        assert_eq!(p.pos(), [800.0, 10.0]);
    }

    #[test]
    fn right_exit_snaps_to_left_edge() {
        let mut p = still_at(800.1, 10.0);
        p.step(800.0, 600.0);
        assert_eq!(p.pos(), [0.0, 10.0]);
    }

    #[test]
    fn vertical_exits_snap_to_opposite_edge() {
        let mut top = still_at(10.0, -0.1);
        top.step(800.0, 600.0);
        assert_eq!(top.pos(), [10.0, 600.0]);

        let mut bottom = still_at(10.0, 600.1);
        bottom.step(800.0, 600.0);
        assert_eq!(bottom.pos(), [10.0, 0.0]);
    }

    #[test]
    fn interior_step_adds_velocity() {
        let mut p = Particle::new([400.0, 300.0], [0.3, -0.25], 4.0, 0.2, Color::GOLD);
        p.step(800.0, 600.0);
        assert!((p.pos()[0] - 400.3).abs() < 1e-9);
        assert_eq!(p.pos()[1], 299.75);
    }

    #[test]
    fn sitting_on_the_far_edge_does_not_wrap() {
        let mut p = still_at(800.0, 600.0);
        p.step(800.0, 600.0);
        assert_eq!(p.pos(), [800.0, 600.0]);
    }

    #[test]
    fn overshoot_gets_one_snap_only() {
        // Far beyond the left edge: snaps to width, never reduced modulo width
        let mut p = Particle::new([-5000.0, 1.0], [-0.5, 0.0], 4.0, 0.2, Color::GOLD);
        p.step(100.0, 100.0);
        assert_eq!(p.pos()[0], 100.0);
    }

    #[test]
    fn color_alpha_follows_opacity() {
        let p = Particle::new([0.0, 0.0], [0.0, 0.0], 2.0, 0.2, Color::GOLD);
        assert_eq!(p.color(), Color::GOLD.with_opacity(0.2));
        assert_eq!(p.color().a, 51);
    }
}
