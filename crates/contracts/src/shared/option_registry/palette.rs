/// Pastel palette cycled for options that arrive without a color
pub const PASTEL_COLORS: [&str; 8] = [
    "#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF", "#D4BAFF", "#FFBAE1", "#BAFFD4",
];

/// Swatch color shown when the current selection matches no option
pub const NEUTRAL_SWATCH: &str = "transparent";

/// Palette color for the option at `index`, wrapping around
pub fn palette_color(index: usize) -> &'static str {
    PASTEL_COLORS[index % PASTEL_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), "#FFB3BA");
        assert_eq!(palette_color(7), "#BAFFD4");
        assert_eq!(palette_color(8), "#FFB3BA");
        assert_eq!(palette_color(19), PASTEL_COLORS[3]);
    }
}
