// services/compliance-dash/src/badge.rs
//
// Status badges: status label -> fill color. Unmapped labels fall back to a
// neutral gray instead of failing.
//

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::model::{ActivityStatus, AuditStatus};
use crate::theme::{self, HexColor};

pub const DEFAULT_BADGE: HexColor = HexColor(0xe0e0e0);

pub fn audit_badge_color(status: &str) -> HexColor {
    match status {
        "In audit" => HexColor(0x616161),
        "Awaiting report" => HexColor(0x9e9e9e),
        "Completed" => HexColor(0x4caf50),
        "Upcoming" => HexColor(0x2196f3),
        _ => DEFAULT_BADGE,
    }
}

pub fn activity_badge_color(status: &str) -> HexColor {
    match status {
        "Completed" => HexColor(0x4caf50),
        "In Progress" => HexColor(0xffb300),
        "Pending" => HexColor(0xf44336),
        _ => DEFAULT_BADGE,
    }
}

impl AuditStatus {
    pub fn color(self) -> HexColor {
        audit_badge_color(self.label())
    }
}

impl ActivityStatus {
    pub fn color(self) -> HexColor {
        activity_badge_color(self.label())
    }
}

/// White bold label on the badge color, padded by one cell each side
pub fn badge(label: &str, color: HexColor) -> Span<'static> {
    Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(theme::ON_COLOR.rgb())
            .bg(color.rgb())
            .add_modifier(Modifier::BOLD),
    )
}
