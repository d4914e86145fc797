// services/compliance-dash/src/components/tables.rs
//
// Audit and activity tables with colored status badges
//

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Widget};

use super::{card, subtitle_line};
use crate::badge::badge;
use crate::model::{ActivityRecord, AuditRecord};
use crate::theme;

const ACTIVITIES_SUBTITLE: &str = "Overview of the latest actions taken to maintain compliance.";

/// Header row plus its bottom margin
const HEADER_ROWS: u16 = 2;

fn header(columns: [&'static str; 3]) -> Row<'static> {
    Row::new(columns.map(|name| {
        Cell::from(Span::styled(
            name,
            Style::default()
                .fg(theme::TEXT_SECONDARY.rgb())
                .add_modifier(Modifier::BOLD),
        ))
    }))
    .style(Style::default().bg(theme::BG_HEADER_CELL.rgb()))
    .bottom_margin(1)
}

fn status_table<'a>(columns: [&'static str; 3], rows: Vec<Row<'a>>) -> Table<'a> {
    Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(18),
            Constraint::Length(12),
        ],
    )
    .header(header(columns))
    .column_spacing(2)
}

fn text_cell(text: &str) -> Cell<'_> {
    Cell::from(Span::styled(text, Style::default().fg(theme::TEXT.rgb())))
}

pub struct AuditsTable<'a> {
    audits: &'a [AuditRecord],
}

impl<'a> AuditsTable<'a> {
    pub fn new(audits: &'a [AuditRecord]) -> Self {
        Self { audits }
    }

    pub fn height(&self) -> u16 {
        2 + HEADER_ROWS + self.audits.len() as u16
    }
}

impl Widget for AuditsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = card("Audits as of today");
        let rows: Vec<Row> = self
            .audits
            .iter()
            .map(|audit| {
                Row::new(vec![
                    text_cell(audit.audit_type),
                    Cell::from(Line::from(badge(audit.status.label(), audit.status.color()))),
                    text_cell(audit.due_date),
                ])
            })
            .collect();

        Widget::render(
            status_table(["Type", "Status", "Due Date"], rows).block(block),
            area,
            buf,
        );
    }
}

pub struct ActivitiesTable<'a> {
    activities: &'a [ActivityRecord],
}

impl<'a> ActivitiesTable<'a> {
    pub fn new(activities: &'a [ActivityRecord]) -> Self {
        Self { activities }
    }

    /// One more row than the audits for the subtitle
    pub fn height(&self) -> u16 {
        3 + HEADER_ROWS + self.activities.len() as u16
    }
}

impl Widget for ActivitiesTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = card("Recent Compliance Activities");
        let inner = block.inner(area);
        block.render(area, buf);

        let (subtitle_area, table_area) = if inner.height > 0 {
            (
                Rect { height: 1, ..inner },
                Rect {
                    y: inner.y + 1,
                    height: inner.height - 1,
                    ..inner
                },
            )
        } else {
            (inner, inner)
        };
        Paragraph::new(subtitle_line(ACTIVITIES_SUBTITLE)).render(subtitle_area, buf);

        let rows: Vec<Row> = self
            .activities
            .iter()
            .map(|entry| {
                Row::new(vec![
                    text_cell(entry.activity),
                    Cell::from(Line::from(badge(entry.status.label(), entry.status.color()))),
                    text_cell(entry.date),
                ])
            })
            .collect();

        Widget::render(
            status_table(["Activity", "Status", "Date"], rows),
            table_area,
            buf,
        );
    }
}
