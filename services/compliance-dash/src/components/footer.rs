// services/compliance-dash/src/components/footer.rs
//
// Copyright line at the end of the page and the fixed key-hint bar
//

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::fixtures::COPYRIGHT;
use crate::state::DashboardState;
use crate::theme;

pub struct Copyright;

impl Copyright {
    pub const HEIGHT: u16 = 2;
}

impl Widget for Copyright {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            COPYRIGHT,
            Style::default().fg(theme::TEXT_FAINT.rgb()),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme::border()),
        )
        .style(theme::page())
        .render(area, buf);
    }
}

pub struct KeyHints<'a> {
    state: &'a DashboardState,
}

impl<'a> KeyHints<'a> {
    pub const HEIGHT: u16 = 2;

    pub fn new(state: &'a DashboardState) -> Self {
        Self { state }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = Style::default()
            .fg(theme::ON_COLOR.rgb())
            .bg(theme::ACCENT.rgb());
        let label = Style::default().fg(theme::TEXT_MUTED.rgb());

        let help = Line::from(vec![
            Span::styled(" [Q] ", key),
            Span::styled(" Quit ", label),
            Span::raw("  "),
            Span::styled(" [UP/DOWN] ", key),
            Span::styled(" Scroll ", label),
            Span::raw("  "),
            Span::styled(" [PGUP/PGDN] ", key),
            Span::styled(" Page ", label),
            Span::raw("  "),
            Span::styled(" [HOME/END] ", key),
            Span::styled(" Jump ", label),
            Span::raw("  "),
            Span::styled(
                format!("{:>3}%", self.state.scroll_percent()),
                Style::default().fg(theme::TEXT_FAINT.rgb()),
            ),
        ]);

        Paragraph::new(help)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(theme::border()),
            )
            .style(theme::panel())
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_rows;

    #[test]
    fn test_copyright_is_centered_below_rule() {
        let rows = render_rows(Copyright, 80, Copyright::HEIGHT);
        assert!(rows[0].chars().all(|c| c == '─'));
        let text = rows[1].trim_start();
        assert_eq!(text, COPYRIGHT);
        assert!(rows[1].len() > text.len());
    }

    #[test]
    fn test_key_hints_show_scroll_position() {
        let mut state = DashboardState::new();
        state.set_dimensions(100, 50);
        state.end();
        let rows = render_rows(KeyHints::new(&state), 100, KeyHints::HEIGHT);
        assert!(rows[1].contains("[Q]  Quit"));
        assert!(rows[1].contains("100%"));
    }
}
