// services/compliance-dash/src/components/risk_heatmap.rs
//
// Likelihood x impact matrix with a severity legend
//

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Widget};

use super::{card, subtitle_line};
use crate::heatmap::{self, Severity, IMPACT, LIKELIHOOD, MATRIX_SIZE};
use crate::theme;

const SUBTITLE: &str = "Visual representation of inherent risks by likelihood and impact.";
const LABEL_WIDTH: u16 = 16;
const CELL_WIDTH: u16 = 14;

pub struct RiskHeatmap;

impl RiskHeatmap {
    pub const HEIGHT: u16 = 7 + MATRIX_SIZE as u16;
}

fn severity_cell(severity: Severity) -> Cell<'static> {
    Cell::from(Line::from(severity.code().to_string()).centered()).style(
        Style::default()
            .fg(theme::ON_COLOR.rgb())
            .bg(severity.color().rgb())
            .add_modifier(Modifier::BOLD),
    )
}

fn legend() -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, severity) in Severity::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled("  ", Style::default().bg(severity.color().rgb())));
        spans.push(Span::styled(
            format!(" {}", severity.label()),
            Style::default().fg(theme::TEXT_SECONDARY.rgb()),
        ));
    }
    Line::from(spans)
}

impl Widget for RiskHeatmap {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = card("Risk Heatmap");
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Subtitle
                Constraint::Length(1),
                Constraint::Length(1 + MATRIX_SIZE as u16), // Matrix
                Constraint::Length(1),
                Constraint::Length(1), // Legend
            ])
            .split(inner);

        Paragraph::new(subtitle_line(SUBTITLE)).render(rows[0], buf);

        let label_style = Style::default()
            .fg(theme::TEXT_SECONDARY.rgb())
            .add_modifier(Modifier::BOLD);

        let header = Row::new(
            std::iter::once(Cell::from(""))
                .chain(IMPACT.iter().map(|impact| {
                    Cell::from(Line::from(Span::styled(*impact, label_style)).centered())
                })),
        )
        .style(Style::default().bg(theme::BG_HEADER_CELL.rgb()));

        let mut body: Vec<Vec<Cell>> = LIKELIHOOD
            .iter()
            .map(|likelihood| vec![Cell::from(Span::styled(*likelihood, label_style))])
            .collect();
        for cell in heatmap::cells() {
            if let Some(row) = body.get_mut(cell.likelihood_row) {
                row.push(severity_cell(cell.severity));
            }
        }
        let body: Vec<Row> = body.into_iter().map(Row::new).collect();

        let widths = std::iter::once(Constraint::Length(LABEL_WIDTH))
            .chain(std::iter::repeat(Constraint::Length(CELL_WIDTH)).take(MATRIX_SIZE));
        Widget::render(
            Table::new(body, widths).header(header).column_spacing(1),
            rows[2],
            buf,
        );

        Paragraph::new(legend()).render(rows[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_rows;
    use crate::heatmap::RISK_MATRIX;

    fn rendered() -> Vec<String> {
        render_rows(RiskHeatmap, 110, RiskHeatmap::HEIGHT)
    }

    #[test]
    fn test_headers_keep_literal_order() {
        let rows = rendered();

        let header = &rows[3];
        let positions: Vec<usize> = IMPACT
            .iter()
            .map(|impact| header.find(impact).unwrap_or_else(|| panic!("{} missing", impact)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);

        for (offset, likelihood) in LIKELIHOOD.iter().enumerate() {
            assert!(rows[4 + offset].contains(likelihood), "{:?}", rows[4 + offset]);
        }
    }

    #[test]
    fn test_cells_show_matrix_codes() {
        let rows = rendered();
        for (offset, severities) in RISK_MATRIX.iter().enumerate() {
            let codes: String = rows[4 + offset]
                .split_whitespace()
                .filter(|word| word.len() == 1)
                .collect();
            let expected: String = severities.iter().map(|s| s.code()).collect();
            assert_eq!(codes, expected);
        }
    }

    #[test]
    fn test_cell_background_is_severity_color() {
        let area = Rect::new(0, 0, 110, RiskHeatmap::HEIGHT);
        let mut buf = Buffer::empty(area);
        RiskHeatmap.render(area, &mut buf);

        // bottom right cell is the only Very High
        let last_row = 4 + MATRIX_SIZE as u16 - 1;
        let inner_left = 2;
        let last_cell = inner_left + LABEL_WIDTH + 1 + (CELL_WIDTH + 1) * (MATRIX_SIZE as u16 - 1);
        assert_eq!(buf[(last_cell, last_row)].bg, Severity::VeryHigh.color().rgb());
        assert_eq!(buf[(inner_left + LABEL_WIDTH + 1, 4)].bg, Severity::Low.color().rgb());
    }

    #[test]
    fn test_legend_lists_severities_in_order() {
        let rows = rendered();
        let legend = &rows[rows.len() - 2];
        let low = legend.find("Low").unwrap();
        let medium = legend.find("Medium").unwrap();
        let high = legend.find(" High").unwrap();
        let very_high = legend.find("Very High").unwrap();
        assert!(low < medium && medium < high && high < very_high);
    }
}
