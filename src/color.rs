// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // Antique gold used for the page backdrop
    pub const GOLD: Color = Color::from_u32(0xd4af37ff);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Same rgb, alpha taken from an opacity in [0, 1]
    pub fn with_opacity(self, opacity: f64) -> Color {
        let a = (opacity.max(0.0).min(1.0) * 255.0).round() as u8;
        Color { a, ..self }
    }

    // CSS color string for canvas fill styles
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }
}
