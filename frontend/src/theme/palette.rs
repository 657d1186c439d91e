//! Fixed brand palette shared by every chart.

/// One palette entry as an sRGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` form used wherever the chart config expects a solid color.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `rgba(...)` form with an explicit opacity, used for gradient stops.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

pub const BLUE: Color = Color::new(0x1E, 0x73, 0xBE);
pub const BLUE_DARK: Color = Color::new(0x16, 0x5A, 0x91);
pub const GREEN: Color = Color::new(0x28, 0xA7, 0x45);
pub const RED: Color = Color::new(0xDC, 0x35, 0x45);
pub const GRAY_600: Color = Color::new(0x6E, 0x6E, 0x6E);
pub const GRAY_200: Color = Color::new(0xE6, 0xE6, 0xE6);

pub const TEXT: Color = Color::new(0x2B, 0x2B, 0x2B);
pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);

/// Dataset series order for multi-series charts.
const SERIES_ORDER: [Color; 6] = [BLUE, GREEN, RED, BLUE_DARK, GRAY_600, GRAY_200];

/// First `n` brand colors in fixed order. Zero or negative asks for one
/// color; requests beyond the palette return all of it, never cycling.
pub fn series(n: i32) -> Vec<Color> {
    let n = (n.max(1) as usize).min(SERIES_ORDER.len());
    SERIES_ORDER[..n].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_clamps_low_requests_to_one_color() {
        assert_eq!(series(0), vec![BLUE]);
        assert_eq!(series(-7), vec![BLUE]);
    }

    #[test]
    fn series_returns_exactly_n_in_brand_order() {
        assert_eq!(series(3), vec![BLUE, GREEN, RED]);
    }

    #[test]
    fn series_never_wraps_past_the_palette() {
        let all = series(99);
        assert_eq!(all.len(), 6);
        assert_eq!(all, series(6));
    }

    #[test]
    fn color_renders_hex_and_rgba() {
        assert_eq!(BLUE.hex(), "#1E73BE");
        assert_eq!(BLUE.rgba(0.25), "rgba(30, 115, 190, 0.25)");
    }
}
