use egui::Color32;

use crate::error::{WhiteboardError, WhiteboardResult};

/// Colors offered by the toolbar, in display order.
pub const PRESET_COLORS: [(&str, Color32); 5] = [
    ("Black", Color32::BLACK),
    ("White", Color32::WHITE),
    ("Red", Color32::from_rgb(0xff, 0x00, 0x00)),
    ("Green", Color32::from_rgb(0x00, 0xff, 0x00)),
    ("Blue", Color32::from_rgb(0x00, 0x00, 0xff)),
];

/// Parse `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(text: &str) -> WhiteboardResult<Color32> {
    let invalid = || WhiteboardError::InvalidColor(text.to_owned());

    let digits = text.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !digits.is_ascii() || !(digits.len() == 6 || digits.len() == 8) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if digits.len() == 8 { channel(6)? } else { 0xff };

    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}

/// Format as `#rrggbb`, or `#rrggbbaa` when not opaque.
pub fn to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 0xff {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toolbar_colors() {
        assert_eq!(parse_hex_color("#000000").unwrap(), Color32::BLACK);
        assert_eq!(parse_hex_color("#ff0000").unwrap(), Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_hex_color("#0000FF").unwrap(), Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "ff0000", "#ff00", "#gg0000", "#ff0000ff00"] {
            assert!(
                matches!(parse_hex_color(text), Err(WhiteboardError::InvalidColor(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_round_trip_for_presets() {
        for (_, color) in PRESET_COLORS {
            assert_eq!(parse_hex_color(&to_hex(color)).unwrap(), color);
        }
    }
}
