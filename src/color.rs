// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Lavender used for particle bodies and particle-to-particle links.
pub const ACCENT: Color = Color::from_u32(0xa78bfaff);

/// Lighter violet used for pointer-to-particle links.
pub const ACCENT_LIGHT: Color = Color::from_u32(0xe9d5ffff);

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    /// CSS `rgba()` string at this color's own alpha.
    pub fn css(&self) -> String {
        self.css_with_alpha(self.a as f64 / 255.0)
    }

    /// CSS `rgba()` string with the alpha channel overridden, clamped to [0, 1].
    pub fn css_with_alpha(&self, alpha: f64) -> String {
        let alpha = alpha.max(0.0).min(1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
