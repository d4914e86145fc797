// services/compliance-dash/src/components/overview.rs
//
// Summary cards: value, directional delta, title, description
//

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget};

use super::change_span;
use crate::model::OverviewMetric;
use crate::theme;

pub struct OverviewCards<'a> {
    metrics: &'a [OverviewMetric],
}

impl<'a> OverviewCards<'a> {
    pub const HEIGHT: u16 = 6;

    pub fn new(metrics: &'a [OverviewMetric]) -> Self {
        Self { metrics }
    }
}

impl Widget for OverviewCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.metrics.is_empty() {
            return;
        }
        let count = self.metrics.len() as u32;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(2)
            .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
            .split(area);

        for (metric, chunk) in self.metrics.iter().zip(chunks.iter()) {
            render_card(metric, *chunk, buf);
        }
    }
}

fn render_card(metric: &OverviewMetric, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .padding(Padding::horizontal(1))
        .style(theme::panel());
    let inner = block.inner(area);
    block.render(area, buf);

    let text = vec![
        Line::from(Span::styled(
            metric.value,
            Style::default()
                .fg(theme::TEXT.rgb())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(change_span(metric.change, metric.change_up)),
        Line::from(Span::styled(
            metric.title,
            Style::default()
                .fg(theme::TEXT_SECONDARY.rgb())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(metric.description, theme::subtitle())),
    ];
    Paragraph::new(text).render(inner, buf);
}
