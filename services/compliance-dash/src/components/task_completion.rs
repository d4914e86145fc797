// services/compliance-dash/src/components/task_completion.rs
//
// SLA remediation bars. Each bar shows the authored percentage; the
// "(n of total)" detail is informational only.
//

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Widget, Wrap};

use super::{card, change_span, subtitle_line};
use crate::fixtures::{TASKS_COMPARISON, TASKS_SUBTITLE, TASKS_TITLE};
use crate::model::{BarEmphasis, TaskBar};
use crate::theme;

pub struct TaskCompletion<'a> {
    bars: &'a [TaskBar],
}

impl<'a> TaskCompletion<'a> {
    /// Borders, subtitle, gap, and five rows per bar group
    pub const HEIGHT: u16 = 9;

    pub fn new(bars: &'a [TaskBar]) -> Self {
        Self { bars }
    }
}

impl Widget for TaskCompletion<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = card(TASKS_TITLE);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Subtitle
                Constraint::Length(1),
                Constraint::Min(0), // Bars
            ])
            .split(inner);
        Paragraph::new(subtitle_line(TASKS_SUBTITLE)).render(rows[0], buf);

        if self.bars.is_empty() {
            return;
        }
        let count = self.bars.len() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(3)
            .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
            .split(rows[2]);

        for (bar, column) in self.bars.iter().zip(columns.iter()) {
            render_bar(bar, *column, buf);
        }
    }
}

fn fill_color(emphasis: BarEmphasis) -> theme::HexColor {
    match emphasis {
        BarEmphasis::Primary => theme::PROGRESS_PRIMARY,
        BarEmphasis::Secondary => theme::PROGRESS_SECONDARY,
    }
}

fn render_bar(bar: &TaskBar, area: Rect, buf: &mut Buffer) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Percent + detail
            Constraint::Length(1), // Gauge
            Constraint::Min(1),    // Change
        ])
        .split(area);

    Paragraph::new(Span::styled(
        bar.title,
        Style::default().fg(theme::TEXT_SECONDARY.rgb()),
    ))
    .render(rows[0], buf);

    Paragraph::new(Line::from(vec![
        Span::styled(format!("{}%", bar.percent), theme::heading()),
        Span::styled(
            format!("  ({} of {})", bar.completed, bar.total),
            Style::default().fg(theme::TEXT_MUTED.rgb()),
        ),
    ]))
    .render(rows[1], buf);

    Gauge::default()
        .gauge_style(
            Style::default()
                .fg(fill_color(bar.emphasis).rgb())
                .bg(theme::PROGRESS_TRACK.rgb()),
        )
        .percent(bar.percent.min(100))
        .label("")
        .render(rows[2], buf);

    Paragraph::new(Line::from(vec![
        change_span(bar.change, bar.change_up),
        Span::raw(" "),
        Span::styled(
            TASKS_COMPARISON,
            theme::change(bar.change_up).remove_modifier(Modifier::BOLD),
        ),
    ]))
    .wrap(Wrap { trim: true })
    .render(rows[3], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_rows;
    use crate::fixtures::task_bars;

    #[test]
    fn test_bars_render_literal_percentages() {
        let bars = task_bars();
        let rows = render_rows(TaskCompletion::new(&bars), 120, TaskCompletion::HEIGHT);
        let text = rows.join("\n");

        assert!(rows[0].contains(TASKS_TITLE));
        assert!(rows[1].contains(TASKS_SUBTITLE));
        assert!(text.contains("93%  (483 of 521)"));
        assert!(text.contains("7%  (36 of 521)"));
        assert!(text.contains("0%  (2 of 521)"));
        assert!(text.contains("▲ 27%"));
        assert!(text.contains("▼ 18%"));
        assert!(text.contains("▼ 9%"));
    }

    #[test]
    fn test_gauge_fill_uses_emphasis_color() {
        let bars = task_bars();
        let area = Rect::new(0, 0, 120, TaskCompletion::HEIGHT);
        let mut buf = Buffer::empty(area);
        TaskCompletion::new(&bars).render(area, &mut buf);

        // gauge row: border, subtitle, gap, title, percent
        let gauge_row = 5;
        let first_column = 2;
        assert_eq!(buf[(first_column, gauge_row)].fg, theme::PROGRESS_PRIMARY.rgb());
        assert_eq!(fill_color(bars[1].emphasis), theme::PROGRESS_SECONDARY);
    }
}
