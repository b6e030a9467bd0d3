// Surface backed by a 2d canvas that sits behind the page content.
// Drawing happens in CSS pixels; the backing store is scaled by the
// device pixel ratio so circles stay crisp on high density screens.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::surface::Surface;
use vecmath::Vector2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, Document, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    // Creates the canvas inside the configured container, pinned to the
    // top left corner beneath everything else
    pub fn attach(
        document: &Document,
        config: &FieldConfig,
        width: f64,
        height: f64,
    ) -> Result<CanvasSurface, JsValue> {
        let container = document
            .get_element_by_id(&config.container_id)
            .ok_or_else(|| {
                js_sys::Error::new(&format!("no element with id '{}'", config.container_id))
            })?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        let style = canvas.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", "0")?;
        style.set_property("top", "0")?;
        style.set_property("z-index", &config.z_index.to_string())?;
        container.append_child(&canvas)?;

        let context = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut surface = CanvasSurface {
            canvas,
            context,
            width,
            height,
        };
        surface.fit(width, height)?;
        Ok(surface)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn fit(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        let ratio = pixel_ratio();
        self.width = width;
        self.height = height;

        // Setting the backing size resets the context, so the transform is
        // reapplied afterwards
        self.canvas.set_width((width * ratio).round() as u32);
        self.canvas.set_height((height * ratio).round() as u32);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", width))?;
        style.set_property("height", &format!("{}px", height))?;
        self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn set_fill(&mut self, color: Color) {
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    // The context only outlines on an explicit stroke(), which is never issued
    fn no_stroke(&mut self) {}

    fn circle(&mut self, center: Vector2<f64>, diameter: f64) {
        self.context.begin_path();
        let radius = diameter / 2.0;
        match self
            .context
            .arc(center[0], center[1], radius, 0.0, std::f64::consts::PI * 2.0)
        {
            Ok(()) => self.context.fill(),
            Err(err) => console::error_1(&err),
        }
    }

    fn resize(&mut self, width: f64, height: f64) {
        if let Err(err) = self.fit(width, height) {
            console::error_1(&err);
        }
    }
}

fn pixel_ratio() -> f64 {
    web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .filter(|ratio| *ratio > 0.0)
        .unwrap_or(1.0)
}
