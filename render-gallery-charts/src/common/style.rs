//! Palette constants and the styled-preset colors
//!
//! The default palette mirrors the usual ten-color cycle (C0 through C9).
//! The styled bar stages use a "538"-like preset: light gray canvas, white
//! grid lines, signature blue bars, accent red for rules.

use plotters::style::RGBColor;

/// Default color cycle, C0 through C9
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // C0 — blue
    RGBColor(255, 127, 14),  // C1 — orange
    RGBColor(44, 160, 44),   // C2 — green
    RGBColor(214, 39, 40),   // C3 — red
    RGBColor(148, 103, 189), // C4 — purple
    RGBColor(140, 86, 75),   // C5 — brown
    RGBColor(227, 119, 194), // C6 — pink
    RGBColor(127, 127, 127), // C7 — gray
    RGBColor(188, 189, 34),  // C8 — olive
    RGBColor(23, 190, 207),  // C9 — cyan
];

/// Light gray canvas of the styled preset
pub const STYLED_BACKGROUND: RGBColor = RGBColor(240, 240, 240);

/// Signature blue used for bars in the styled preset
pub const STYLED_BLUE: RGBColor = RGBColor(0, 143, 213);

/// Accent red used for the dashed target rule
pub const RULE_RED: RGBColor = RGBColor(252, 79, 48);

/// Returns the palette color for an index, cycling past the end
pub fn palette_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_color_cycles() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(9), PALETTE[9]);
        assert_eq!(palette_color(10), PALETTE[0]);
        assert_eq!(palette_color(23), PALETTE[3]);
    }
}
