// services/compliance-dash/src/components/sidebar.rs
//
// Fixed left navigation with the product logo
//

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Widget};

use crate::fixtures::{LOGO_ICON, PRODUCT_NAME};
use crate::model::NavItem;
use crate::theme;

pub struct Sidebar<'a> {
    items: &'a [NavItem],
}

impl<'a> Sidebar<'a> {
    pub const WIDTH: u16 = 24;

    pub fn new(items: &'a [NavItem]) -> Self {
        Self { items }
    }

    /// Rows needed to show every entry: border padding, logo, gap, items
    pub fn height(&self) -> u16 {
        3 + self.items.len() as u16
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme::border())
            .padding(Padding::new(1, 1, 1, 0))
            .style(Style::default().bg(theme::BG_SIDEBAR.rgb()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", LOGO_ICON)),
                Span::styled(
                    PRODUCT_NAME,
                    Style::default()
                        .fg(theme::ACCENT.rgb())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ];

        for item in self.items {
            let style = if item.selected {
                Style::default()
                    .fg(theme::ACCENT.rgb())
                    .bg(theme::BG_SELECTED.rgb())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::NAV_TEXT.rgb())
            };
            lines.push(Line::from(format!(" {}  {}", item.icon, item.name)).style(style));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_rows;
    use crate::fixtures::sidebar_items;

    #[test]
    fn test_sidebar_lists_entries_in_order() {
        let items = sidebar_items();
        let sidebar = Sidebar::new(&items);
        let height = sidebar.height();
        let rows = render_rows(sidebar, Sidebar::WIDTH, height);

        assert!(rows[1].contains("ComplianceIQ"));
        let names: Vec<&str> = items.iter().map(|i| i.name).collect();
        let mut cursor = 0;
        for name in names {
            let found = rows[cursor..]
                .iter()
                .position(|row| row.contains(name))
                .unwrap_or_else(|| panic!("{} missing from sidebar", name));
            cursor += found + 1;
        }
    }

    #[test]
    fn test_selected_entry_is_highlighted() {
        let items = sidebar_items();
        let area = Rect::new(0, 0, Sidebar::WIDTH, Sidebar::new(&items).height());
        let mut buf = Buffer::empty(area);
        Sidebar::new(&items).render(area, &mut buf);

        // Reports is the third entry, after padding, logo and gap
        let reports_row = 1 + 2 + 2;
        assert_eq!(buf[(2, reports_row)].bg, theme::BG_SELECTED.rgb());
        assert_eq!(buf[(2, reports_row - 1)].bg, theme::BG_SIDEBAR.rgb());
    }
}
