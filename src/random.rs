// Uniform random numbers for spawning particles. Anything implementing
// rand::Rng works; tests can script exact values instead.

use rand::Rng;

pub trait RandomSource {
    // Value in [lo, hi), or lo when the range is empty
    fn range(&mut self, lo: f64, hi: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi > lo {
            self.gen_range(lo, hi)
        } else {
            lo
        }
    }
}
