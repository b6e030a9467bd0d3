// Drawing target for the particle field. The browser canvas implements it,
// tests use a recorder.

use crate::color::Color;
use vecmath::Vector2;

pub trait Surface {
    // Wipe to a transparent background
    fn clear(&mut self);
    fn set_fill(&mut self, color: Color);
    fn no_stroke(&mut self);
    // Filled circle, diameter in surface pixels
    fn circle(&mut self, center: Vector2<f64>, diameter: f64);
    fn resize(&mut self, width: f64, height: f64);
}
