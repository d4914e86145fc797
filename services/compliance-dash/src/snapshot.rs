// services/compliance-dash/src/snapshot.rs
//
// Headless rendering: the full page as plain text lines
//

use ratatui::buffer::Buffer;
use ratatui::text::Span;

use crate::app::Dashboard;
use crate::fixtures::DashboardData;

/// Render sidebar and the full-height main column `width` columns wide
pub fn render_text(data: &DashboardData, width: u16) -> Vec<String> {
    let dashboard = Dashboard::new(data);
    buffer_lines(&dashboard.render_full(width))
}

/// One string per buffer row with trailing blanks trimmed. Cells covered by
/// a wide glyph are skipped so emoji do not gain a phantom space.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            let mut hidden = 0usize;
            for x in area.left()..area.right() {
                if hidden > 0 {
                    hidden -= 1;
                    continue;
                }
                let symbol = buf[(x, y)].symbol();
                hidden = Span::raw(symbol).width().saturating_sub(1);
                line.push_str(symbol);
            }
            line.trim_end().to_string()
        })
        .collect()
}
