#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let channel = |i: usize, fallback: u8| {
            s.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(fallback)
        };
        match s.len() {
            6 => Color(channel(0, 0), channel(2, 0), channel(4, 0), 255),
            8 => Color(channel(0, 0), channel(2, 0), channel(4, 0), channel(6, 255)),
            _ => {
                log::warn!("invalid hex color '{hex}'");
                Color::BLACK
            }
        }
    }
    /// Scales the existing alpha by `opacity` (clamped to `0..=1`).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let o = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Color(self.0, self.1, self.2, (self.3 as f32 * o).round() as u8)
    }

    pub fn to_hex(self) -> String {
        if self.3 == 255 {
            format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
        }
    }
}
