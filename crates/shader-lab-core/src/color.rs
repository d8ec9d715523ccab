//! Hex colour parsing.

/// Normalized RGB triple, each channel in `[0, 1]`.
pub type Rgb = [f32; 3];

/// Returned for colours that cannot be parsed.
pub const WHITE: Rgb = [1.0, 1.0, 1.0];

/// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive).
pub fn try_hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Parse a hex colour, falling back to white when malformed.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    try_hex_to_rgb(hex).unwrap_or(WHITE)
}

/// CSS `linear-gradient` between two colours, used for swatches and fallbacks.
pub fn linear_gradient_css(angle_deg: u16, from: &str, to: &str) -> String {
    format!("linear-gradient({angle_deg}deg, {from}, {to})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_violet() {
        let rgb = hex_to_rgb("#8b5cf6");
        assert_eq!(rgb, [139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0]);
    }

    #[test]
    fn test_hash_is_optional_and_case_insensitive() {
        assert_eq!(hex_to_rgb("8B5CF6"), hex_to_rgb("#8b5cf6"));
    }

    #[test]
    fn test_malformed_is_white() {
        for bad in ["", "#fff", "#12345g", "#1234567", "red", "#ééé"] {
            assert_eq!(hex_to_rgb(bad), WHITE, "{bad:?}");
        }
    }

    #[test]
    fn test_channels_in_unit_range() {
        let [r, g, b] = hex_to_rgb("#ff0000");
        assert_eq!((r, g, b), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_gradient_css() {
        assert_eq!(
            linear_gradient_css(135, "#6366f1", "#ec4899"),
            "linear-gradient(135deg, #6366f1, #ec4899)"
        );
    }
}
