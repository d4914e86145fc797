// services/compliance-dash/src/components/mod.rs
//
// Dashboard view components. Each one is a ratatui widget over borrowed
// fixture data and reports the rows it needs in the scrollable column.
//

mod chart_card;
mod footer;
mod header;
mod overview;
mod risk_heatmap;
mod sidebar;
mod tables;
mod task_completion;

pub use chart_card::ChartCard;
pub use footer::{Copyright, KeyHints};
pub use header::{PageHeader, Topbar};
pub use overview::OverviewCards;
pub use risk_heatmap::RiskHeatmap;
pub use sidebar::Sidebar;
pub use tables::{ActivitiesTable, AuditsTable};
pub use task_completion::TaskCompletion;

use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use crate::theme;

/// Rounded white card with a bold title, the common frame of every section
pub(crate) fn card(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), theme::heading()))
        .title_alignment(Alignment::Left)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .padding(Padding::horizontal(1))
        .style(theme::page())
}

pub(crate) fn subtitle_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, theme::subtitle()))
}

/// "▲ 5%" / "▼ 3"
pub(crate) fn change_span(change: &str, up: bool) -> Span<'static> {
    let arrow = if up { "▲" } else { "▼" };
    Span::styled(format!("{} {}", arrow, change), theme::change(up))
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::widgets::Widget;

    pub fn render_rows<W: Widget>(widget: W, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        crate::snapshot::buffer_lines(&buf)
    }
}
