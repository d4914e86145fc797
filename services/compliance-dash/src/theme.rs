// services/compliance-dash/src/theme.rs
//
// Color palette. Colors are kept as 24-bit hex values so the same constant can
// paint a terminal cell and be exported to a web charting config.
//

use std::fmt;

use ratatui::style::{Color, Modifier, Style};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub u32);

impl HexColor {
    pub const fn rgb(self) -> Color {
        Color::Rgb(
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<HexColor> for Color {
    fn from(hex: HexColor) -> Self {
        hex.rgb()
    }
}

// Page palette
pub const BG: HexColor = HexColor(0xffffff);
pub const BG_PANEL: HexColor = HexColor(0xfafafa);
pub const BG_SIDEBAR: HexColor = HexColor(0xf4f6f8);
pub const BG_SELECTED: HexColor = HexColor(0xe8f0fe);
pub const BG_HEADER_CELL: HexColor = HexColor(0xf4f6f8);
pub const BG_BUTTON: HexColor = HexColor(0xf9f9f9);
pub const BORDER: HexColor = HexColor(0xdddddd);
pub const TEXT: HexColor = HexColor(0x202124);
pub const TEXT_SECONDARY: HexColor = HexColor(0x444444);
pub const TEXT_MUTED: HexColor = HexColor(0x666666);
pub const TEXT_FAINT: HexColor = HexColor(0x999999);
pub const NAV_TEXT: HexColor = HexColor(0x555555);
pub const ACCENT: HexColor = HexColor(0x1a73e8);
pub const ON_COLOR: HexColor = HexColor(0xffffff);
pub const CHANGE_UP: HexColor = HexColor(0x4caf50);
pub const CHANGE_DOWN: HexColor = HexColor(0xd32f2f);
pub const PROGRESS_TRACK: HexColor = HexColor(0xdddddd);
pub const PROGRESS_PRIMARY: HexColor = HexColor(0x1976d2);
pub const PROGRESS_SECONDARY: HexColor = HexColor(0x90caf9);

pub fn page() -> Style {
    Style::default().fg(TEXT.rgb()).bg(BG.rgb())
}

pub fn panel() -> Style {
    Style::default().fg(TEXT.rgb()).bg(BG_PANEL.rgb())
}

pub fn border() -> Style {
    Style::default().fg(BORDER.rgb())
}

pub fn heading() -> Style {
    Style::default().fg(TEXT.rgb()).add_modifier(Modifier::BOLD)
}

pub fn subtitle() -> Style {
    Style::default().fg(TEXT_MUTED.rgb())
}

pub fn change(up: bool) -> Style {
    let color = if up { CHANGE_UP } else { CHANGE_DOWN };
    Style::default().fg(color.rgb()).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_and_display() {
        assert_eq!(HexColor(0x4caf50).rgb(), Color::Rgb(0x4c, 0xaf, 0x50));
        assert_eq!(HexColor(0x0d47a1).to_string(), "#0d47a1");
        assert_eq!(serde_json::to_string(&HexColor(0xffb300)).unwrap(), "\"#ffb300\"");
    }
}
