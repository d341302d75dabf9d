/// Opaque sRGB color used for accent-tone derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the shorthand `#rgb`. Leading/trailing whitespace is
    /// tolerated; anything else is `None`.
    pub fn from_hex(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('#')?;
        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                let channel = |nibble: &str| -> Option<u8> {
                    let value = u8::from_str_radix(nibble, 16).ok()?;
                    Some(value << 4 | value)
                };
                Some(Self::new(
                    channel(&digits[0..1])?,
                    channel(&digits[1..2])?,
                    channel(&digits[2..3])?,
                ))
            }
            _ => None,
        }
    }

    /// Lenient form used during derivation: invalid input degrades to black,
    /// the way toolkit color constructors treat unparseable names.
    pub fn from_hex_lossy(value: &str) -> Self {
        Self::from_hex(value).unwrap_or(BLACK)
    }

    /// Per-channel linear interpolation: `self * ratio + other * (1 - ratio)`,
    /// floored to integer. Ratio is clamped to [0, 1], so `mix(_, b, 0) == b`
    /// and `mix(a, _, 1) == a`.
    pub fn mix(self, other: Rgb, ratio: f64) -> Rgb {
        let clamped = ratio.clamp(0.0, 1.0);
        let inverse = 1.0 - clamped;
        let blend = |a: u8, b: u8| (f64::from(a) * clamped + f64::from(b) * inverse) as u8;
        Rgb::new(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
        )
    }

    /// Lowercase `#rrggbb`.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba(r, g, b, a)` string with the alpha expressed on the 0–255
    /// scale, floored from the [0, 1] input.
    pub fn rgba(self, alpha: f64) -> String {
        let alpha_255 = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha_255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_long_and_short_forms() {
        assert_eq!(Rgb::from_hex("#ff4d9e"), Some(Rgb::new(0xff, 0x4d, 0x9e)));
        assert_eq!(Rgb::from_hex("  #FF4D9E "), Some(Rgb::new(0xff, 0x4d, 0x9e)));
        assert_eq!(Rgb::from_hex("#f0a"), Some(Rgb::new(0xff, 0x00, 0xaa)));
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert_eq!(Rgb::from_hex("ff4d9e"), None);
        assert_eq!(Rgb::from_hex("#ff4d"), None);
        assert_eq!(Rgb::from_hex("#gggggg"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn from_hex_lossy_degrades_to_black() {
        assert_eq!(Rgb::from_hex_lossy("not-a-color"), BLACK);
        assert_eq!(Rgb::from_hex_lossy("#ffffff"), WHITE);
    }

    #[test]
    fn mix_floors_each_channel() {
        let a = Rgb::new(0xff, 0x4d, 0x9e);
        let mixed = a.mix(WHITE, 0.45);
        // 77 * 0.45 + 255 * 0.55 = 174.9 -> 174; 158 * 0.45 + 255 * 0.55 = 211.35 -> 211
        assert_eq!(mixed, Rgb::new(255, 174, 211));
        assert_eq!(mixed.hex(), "#ffaed3");
    }

    #[test]
    fn mix_endpoints_return_the_inputs() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(a.mix(b, 1.0), a);
        assert_eq!(a.mix(b, 0.0), b);
    }

    #[test]
    fn mix_clamps_out_of_range_ratios() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(a.mix(b, 2.5), a);
        assert_eq!(a.mix(b, -1.0), b);
    }

    #[test]
    fn rgba_floors_alpha_to_byte_scale() {
        let accent = Rgb::new(0xff, 0x4d, 0x9e);
        // 0.55 * 255 = 140.25 -> 140
        assert_eq!(accent.rgba(0.55), "rgba(255, 77, 158, 140)");
        assert_eq!(accent.rgba(0.0), "rgba(255, 77, 158, 0)");
        assert_eq!(accent.rgba(1.0), "rgba(255, 77, 158, 255)");
        assert_eq!(accent.rgba(1.5), "rgba(255, 77, 158, 255)");
    }
}
