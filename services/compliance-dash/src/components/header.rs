// services/compliance-dash/src/components/header.rs
//
// Topbar (breadcrumbs, search, actions) and the page title with filters
//

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::fixtures::{AVATAR_INITIALS, BREADCRUMBS, PAGE_TITLE, SEARCH_PLACEHOLDER};
use crate::theme;

pub struct Topbar;

impl Topbar {
    pub const HEIGHT: u16 = 2;
}

impl Widget for Topbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border())
            .style(theme::page());
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24), // Breadcrumbs
                Constraint::Min(20),    // Search
                Constraint::Length(16), // Share + avatar
            ])
            .split(inner);

        Paragraph::new(Span::styled(
            BREADCRUMBS,
            Style::default()
                .fg(theme::TEXT_MUTED.rgb())
                .add_modifier(Modifier::BOLD),
        ))
        .render(chunks[0], buf);

        let search_width = chunks[1].width.min(48);
        let search = Rect {
            width: search_width,
            ..chunks[1]
        };
        Paragraph::new(Span::styled(
            format!(" 🔍 {}", SEARCH_PLACEHOLDER),
            Style::default().fg(theme::TEXT_FAINT.rgb()),
        ))
        .style(Style::default().bg(theme::BG_BUTTON.rgb()))
        .render(search, buf);

        let on_accent = Style::default()
            .fg(theme::ON_COLOR.rgb())
            .bg(theme::ACCENT.rgb())
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(vec![
            Span::styled(" Share ", on_accent),
            Span::raw("  "),
            Span::styled(format!(" {} ", AVATAR_INITIALS), on_accent),
        ]))
        .alignment(Alignment::Right)
        .render(chunks[2], buf);
    }
}

pub struct PageHeader<'a> {
    filters: &'a [String],
}

impl<'a> PageHeader<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(filters: &'a [String]) -> Self {
        Self { filters }
    }
}

impl Widget for PageHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let button = Style::default()
            .fg(theme::TEXT_SECONDARY.rgb())
            .bg(theme::BG_BUTTON.rgb());

        let mut filters = Vec::new();
        for (idx, filter) in self.filters.iter().enumerate() {
            if idx > 0 {
                filters.push(Span::raw("  "));
            }
            filters.push(Span::styled(format!(" {} ", filter), button));
        }

        let lines = vec![
            Line::from(Span::styled(
                PAGE_TITLE,
                theme::heading().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(""),
            Line::from(filters),
        ];
        Paragraph::new(lines).style(theme::page()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_rows;
    use crate::fixtures::dashboard_data;

    #[test]
    fn test_topbar_shows_breadcrumbs_search_and_actions() {
        let rows = render_rows(Topbar, 100, Topbar::HEIGHT);
        assert!(rows[0].starts_with("Dashboard / Reports"));
        assert!(rows[0].contains("Search reports, controls..."));
        assert!(rows[0].ends_with("Share    CI"));
        assert!(rows[1].chars().all(|c| c == '─'));
    }

    #[test]
    fn test_page_header_lists_filters() {
        let data = dashboard_data();
        let rows = render_rows(PageHeader::new(&data.filters), 100, PageHeader::HEIGHT);
        assert_eq!(rows[0], "Program Overview");
        assert!(rows[2].contains("Last 30 days (Aug 11, 2024 - Sep 10, 2024) ▼"));
        assert!(rows[2].contains("Framework ▼"));
    }
}
