/// Plain white, the fallback for any malformed configured color.
pub const WHITE: u32 = 0xFF_FF_FF;

/// Parse a 6-hex-digit RGB color string, with or without a leading `#`.
/// Returns `None` for anything that is not exactly six hex digits.
pub fn parse_hex_rgb(text: &str) -> Option<u32> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Combine a 24-bit RGB color with an opacity into a packed ARGB value.
pub const fn with_alpha(rgb: u32, alpha: u8) -> u32 {
    ((alpha as u32) << 24) | (rgb & 0x00FF_FFFF)
}

/// Split a 24-bit RGB color into components.
pub const fn rgb_components(rgb: u32) -> (u8, u8, u8) {
    ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

#[cfg(test)]
mod tests {
    use super::{parse_hex_rgb, rgb_components, with_alpha};

    #[test]
    fn parses_plain_and_hash_prefixed() {
        assert_eq!(parse_hex_rgb("ffcc00"), Some(0xFFCC00));
        assert_eq!(parse_hex_rgb("#ffcc00"), Some(0xFFCC00));
        assert_eq!(parse_hex_rgb("FFFFFF"), Some(0xFFFFFF));
        assert_eq!(parse_hex_rgb("000000"), Some(0x000000));
    }

    #[test]
    fn rejects_wrong_length_and_non_hex() {
        assert_eq!(parse_hex_rgb(""), None);
        assert_eq!(parse_hex_rgb("fff"), None);
        assert_eq!(parse_hex_rgb("ffcc001"), None);
        assert_eq!(parse_hex_rgb("ggcc00"), None);
        assert_eq!(parse_hex_rgb("#"), None);
    }

    #[test]
    fn alpha_packs_into_high_byte() {
        assert_eq!(with_alpha(0xFFCC00, 0xFF), 0xFFFF_CC00);
        assert_eq!(with_alpha(0xFFCC00, 0x00), 0x00FF_CC00);
        assert_eq!(with_alpha(0xFFFF_CC00, 0x80), 0x80FF_CC00);
    }

    #[test]
    fn components_split_round_trips() {
        assert_eq!(rgb_components(0x12AB34), (0x12, 0xAB, 0x34));
    }
}
