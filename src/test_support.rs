// Stubs shared by unit tests

use crate::color::Color;
use crate::random::RandomSource;
use crate::surface::Surface;
use vecmath::Vector2;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    Fill(Color),
    NoStroke,
    Circle(Vector2<f64>, f64),
    Resize(f64, f64),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn set_fill(&mut self, color: Color) {
        self.calls.push(Call::Fill(color));
    }

    fn no_stroke(&mut self) {
        self.calls.push(Call::NoStroke);
    }

    fn circle(&mut self, center: Vector2<f64>, diameter: f64) {
        self.calls.push(Call::Circle(center, diameter));
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.calls.push(Call::Resize(width, height));
    }
}

// Hands out a fixed sequence of values, cycling when exhausted
pub struct Scripted {
    values: Vec<f64>,
    next: usize,
}

impl Scripted {
    pub fn new(values: &[f64]) -> Scripted {
        Scripted {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn range(&mut self, _lo: f64, _hi: f64) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
