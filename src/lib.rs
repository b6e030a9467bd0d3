#[macro_use]
mod logging;
mod backdrop;
mod canvas;
mod color;
mod config;
mod driver;
mod field;
mod particle;
mod random;
mod surface;
mod utils;
#[cfg(test)]
mod test_support;

use crate::logging::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Window;

pub use backdrop::Backdrop;
pub use canvas::CanvasSurface;
pub use color::Color;
pub use config::FieldConfig;
pub use field::ParticleField;
pub use particle::Particle;
pub use random::RandomSource;
pub use surface::Surface;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Builds the backdrop in `container_id` and keeps it animating and sized to
// the window without any further calls from JavaScript
#[wasm_bindgen]
pub fn start_backdrop(container_id: &str, particle_count: u32) -> Result<(), JsValue> {
    utils::set_panic_hook();
    let backdrop = ParticleBackdrop::new(container_id, particle_count)?;
    driver::run(Rc::new(RefCell::new(backdrop)))
}

// Handle for pages that run their own animation loop and call `frame` and
// `resize` themselves
#[wasm_bindgen]
pub struct ParticleBackdrop {
    inner: Backdrop<CanvasSurface>,
}

#[wasm_bindgen]
impl ParticleBackdrop {
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, particle_count: u32) -> Result<ParticleBackdrop, JsValue> {
        let _timer = Timer::new("ParticleBackdrop::new");
        let config = FieldConfig::default()
            .with_particle_count(particle_count as usize)
            .with_container_id(container_id);

        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("window has no document")?;
        let (width, height) = viewport_size(&window)?;

        let surface = CanvasSurface::attach(&document, &config, width, height)?;
        let mut rng = rand::thread_rng();
        let field = ParticleField::with_config(&config, width, height, &mut rng);
        console_log!(
            "particle backdrop: {} particles in #{} ({}x{})",
            field.len(),
            config.container_id,
            width,
            height
        );

        Ok(ParticleBackdrop {
            inner: Backdrop::new(field, surface, width, height),
        })
    }

    pub fn frame(&mut self) {
        self.inner.frame();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let _timer = Timer::new("ParticleBackdrop::resize");
        self.inner.resize(width, height);
    }

    pub fn fit_to_window(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no global window")?;
        let (width, height) = viewport_size(&window)?;
        self.resize(width, height);
        Ok(())
    }

    pub fn particle_count(&self) -> u32 {
        self.inner.field().len() as u32
    }

    pub fn width(&self) -> f64 {
        self.inner.dimensions().0
    }

    pub fn height(&self) -> f64 {
        self.inner.dimensions().1
    }
}

impl ParticleBackdrop {
    pub fn backdrop(&self) -> &Backdrop<CanvasSurface> {
        &self.inner
    }
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or("window.innerWidth is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("window.innerHeight is not a number")?;
    Ok((width, height))
}
