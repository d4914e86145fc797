// services/compliance-dash/src/components/chart_card.rs
//
// Card around a chart: title, subtitle, and whatever the chart renderer
// produced. A spec the renderer rejects becomes an inline notice.
//

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use tracing::warn;

use super::{card, subtitle_line};
use crate::chart::ChartRenderer;
use crate::fixtures::ChartPanel;
use crate::theme;

#[derive(Debug, Clone)]
pub struct ChartCard<W> {
    title: String,
    subtitle: String,
    chart: Result<W, String>,
}

impl<W> ChartCard<W> {
    pub const HEIGHT: u16 = 18;

    /// Hand the panel's spec to the renderer once; the result is reused for
    /// every frame.
    pub fn build<R>(panel: &ChartPanel, renderer: &R) -> Self
    where
        R: ChartRenderer<Output = W>,
    {
        let chart = renderer.render_chart(&panel.spec).map_err(|e| {
            warn!(chart = panel.id, error = %e, "Chart unavailable");
            e.to_string()
        });
        Self {
            title: panel.title.to_string(),
            subtitle: panel.subtitle.to_string(),
            chart,
        }
    }

    pub fn is_available(&self) -> bool {
        self.chart.is_ok()
    }
}

impl<W> Widget for &ChartCard<W>
where
    W: Widget + Clone,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = card(&self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Subtitle
                Constraint::Length(1),
                Constraint::Min(0), // Chart
            ])
            .split(inner);
        Paragraph::new(subtitle_line(&self.subtitle)).render(rows[0], buf);

        match &self.chart {
            Ok(chart) => chart.clone().render(rows[2], buf),
            Err(reason) => {
                let notice = vec![
                    Line::from(Span::styled(
                        "chart unavailable",
                        Style::default()
                            .fg(theme::CHANGE_DOWN.rgb())
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(reason.as_str(), theme::subtitle())),
                ];
                Paragraph::new(notice)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .render(rows[2], buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::terminal::TerminalCharts;
    use crate::chart::{ChartDataset, ChartKind, ChartSpec};
    use crate::components::test_support::render_rows;
    use crate::fixtures::{inherent_risk, framework_progress};
    use crate::theme::HexColor;

    #[test]
    fn test_valid_chart_renders_title_and_legend() {
        let card = ChartCard::build(&inherent_risk(), &TerminalCharts);
        assert!(card.is_available());
        let rows = render_rows(&card, 60, ChartCard::<()>::HEIGHT);
        let text = rows.join("\n");
        assert!(rows[0].contains("Inherent risk"));
        assert!(rows[1].contains("Risk scenarios over time grouped by risk level"));
        assert!(text.contains("High Risk"));
        assert!(text.contains("Low Risk"));
        assert!(!text.contains("chart unavailable"));
    }

    #[test]
    fn test_invalid_chart_shows_notice() {
        let mut panel = framework_progress();
        panel.spec = ChartSpec::new(ChartKind::Line, &["Jan", "Feb", "Mar"])
            .dataset(ChartDataset::new("Progress", &[5.0, 12.0], HexColor(0x1976d2)));

        let card = ChartCard::build(&panel, &TerminalCharts);
        assert!(!card.is_available());
        let rows = render_rows(&card, 80, ChartCard::<()>::HEIGHT);
        let text = rows.join("\n");
        assert!(rows[0].contains("Framework progress"));
        assert!(text.contains("chart unavailable"));
        assert!(text.contains("has 2 values for 3 labels"));
    }
}
