// services/compliance-dash/src/app.rs
//
// Root view: fixed sidebar on the left, a scrollable main column on the
// right. The main column is drawn once into an off-screen buffer as tall as
// its content and the visible window is copied into the frame.
//

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;
use tracing::{debug, info};

use crate::chart::terminal::{ChartView, TerminalCharts};
use crate::components::{
    ActivitiesTable, AuditsTable, ChartCard, Copyright, KeyHints, OverviewCards, PageHeader,
    RiskHeatmap, Sidebar, TaskCompletion, Topbar,
};
use crate::fixtures::DashboardData;
use crate::state::DashboardState;
use crate::theme;

/// Blank rows between sections
const GAP: u16 = 1;
/// Columns left blank on each side of the main column
const MAIN_PADDING: u16 = 2;
/// Narrower terminals get a clipped view of a canvas this wide. The heatmap
/// table is the widest section: label column, five cells, spacing, card
/// frame and main padding.
const MIN_MAIN_WIDTH: u16 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Section {
    Topbar,
    PageHeader,
    Overview,
    Tasks,
    /// Indices into the chart cards drawn side by side
    Charts(Vec<usize>),
    Audits,
    Activities,
    Heatmap,
    Copyright,
}

pub struct Dashboard<'a> {
    data: &'a DashboardData,
    charts: Vec<ChartCard<ChartView>>,
    canvas: Option<Buffer>,
}

impl<'a> Dashboard<'a> {
    pub fn new(data: &'a DashboardData) -> Self {
        let renderer = TerminalCharts;
        let charts: Vec<ChartCard<ChartView>> = data
            .charts
            .iter()
            .map(|panel| ChartCard::build(panel, &renderer))
            .collect();
        let unavailable = charts.iter().filter(|c| !c.is_available()).count();
        info!(charts = charts.len(), unavailable, "Dashboard initialized");
        Self {
            data,
            charts,
            canvas: None,
        }
    }

    /// Non-wide charts pair up two per row; wide charts take a row alone
    fn chart_rows(&self) -> Vec<Vec<usize>> {
        let mut rows = Vec::new();
        let mut pending: Vec<usize> = Vec::new();
        for (idx, panel) in self.data.charts.iter().enumerate() {
            if panel.wide {
                if !pending.is_empty() {
                    rows.push(std::mem::take(&mut pending));
                }
                rows.push(vec![idx]);
            } else {
                pending.push(idx);
                if pending.len() == 2 {
                    rows.push(std::mem::take(&mut pending));
                }
            }
        }
        if !pending.is_empty() {
            rows.push(pending);
        }
        rows
    }

    fn sections(&self) -> Vec<(Section, u16)> {
        let mut sections = vec![
            (Section::Topbar, Topbar::HEIGHT),
            (Section::PageHeader, PageHeader::HEIGHT),
            (Section::Overview, OverviewCards::HEIGHT),
            (Section::Tasks, TaskCompletion::HEIGHT),
        ];
        for row in self.chart_rows() {
            sections.push((Section::Charts(row), ChartCard::<ChartView>::HEIGHT));
        }
        sections.extend([
            (Section::Audits, AuditsTable::new(&self.data.audits).height()),
            (
                Section::Activities,
                ActivitiesTable::new(&self.data.activities).height(),
            ),
            (Section::Heatmap, RiskHeatmap::HEIGHT),
            (Section::Copyright, Copyright::HEIGHT),
        ]);
        sections
    }

    pub fn content_height(&self) -> u16 {
        let sections = self.sections();
        let gaps = GAP * sections.len().saturating_sub(1) as u16;
        sections.iter().map(|(_, h)| *h).sum::<u16>() + gaps
    }

    /// Draw the whole main column into a buffer `width` columns wide
    pub fn render_canvas(&self, width: u16) -> Buffer {
        let width = width.max(MIN_MAIN_WIDTH);
        let area = Rect::new(0, 0, width, self.content_height());
        let mut buf = Buffer::empty(area);
        buf.set_style(area, theme::page());

        let inner_width = width - 2 * MAIN_PADDING;
        let mut y = 0;
        for (section, height) in self.sections() {
            let rect = Rect::new(MAIN_PADDING, y, inner_width, height);
            self.render_section(&section, rect, &mut buf);
            y += height + GAP;
        }
        debug!(width, height = area.height, "Rendered dashboard canvas");
        buf
    }

    fn render_section(&self, section: &Section, area: Rect, buf: &mut Buffer) {
        match section {
            Section::Topbar => Topbar.render(area, buf),
            Section::PageHeader => PageHeader::new(&self.data.filters).render(area, buf),
            Section::Overview => OverviewCards::new(&self.data.overview).render(area, buf),
            Section::Tasks => TaskCompletion::new(&self.data.task_bars).render(area, buf),
            Section::Charts(indices) => {
                let count = indices.len() as u32;
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .spacing(2)
                    .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
                    .split(area);
                for (idx, column) in indices.iter().zip(columns.iter()) {
                    if let Some(card) = self.charts.get(*idx) {
                        card.render(*column, buf);
                    }
                }
            }
            Section::Audits => AuditsTable::new(&self.data.audits).render(area, buf),
            Section::Activities => ActivitiesTable::new(&self.data.activities).render(area, buf),
            Section::Heatmap => RiskHeatmap.render(area, buf),
            Section::Copyright => Copyright.render(area, buf),
        }
    }

    fn cached_canvas(&mut self, width: u16) -> &Buffer {
        let stale = self
            .canvas
            .as_ref()
            .map_or(true, |canvas| canvas.area.width != width.max(MIN_MAIN_WIDTH));
        if stale {
            self.canvas = Some(self.render_canvas(width));
        }
        self.canvas.get_or_insert_with(Buffer::default)
    }

    /// Interactive frame: sidebar, scrolled main column, key hints
    pub fn draw(&mut self, frame: &mut Frame, state: &mut DashboardState) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::page()), area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(Sidebar::WIDTH), Constraint::Min(0)])
            .split(area);
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(KeyHints::HEIGHT)])
            .split(columns[1]);

        frame.render_widget(Sidebar::new(&self.data.nav), columns[0]);

        let viewport = main[0];
        let canvas = self.cached_canvas(viewport.width);
        state.set_dimensions(canvas.area.height, viewport.height);
        blit(canvas, state.scroll_offset, frame.buffer_mut(), viewport);

        frame.render_widget(KeyHints::new(state), main[1]);
    }

    /// The whole page at once, sidebar included, for headless output
    pub fn render_full(&self, width: u16) -> Buffer {
        let sidebar = Sidebar::new(&self.data.nav);
        let canvas = self.render_canvas(width.saturating_sub(Sidebar::WIDTH));
        let height = canvas.area.height.max(sidebar.height());
        let area = Rect::new(0, 0, Sidebar::WIDTH + canvas.area.width, height);

        let mut buf = Buffer::empty(area);
        buf.set_style(area, theme::page());
        sidebar.render(Rect::new(0, 0, Sidebar::WIDTH, height), &mut buf);
        blit(
            &canvas,
            0,
            &mut buf,
            Rect::new(Sidebar::WIDTH, 0, canvas.area.width, canvas.area.height),
        );
        buf
    }
}

/// Copy `src` rows starting at `src_top` into `dst_area`, clipped to both
fn blit(src: &Buffer, src_top: u16, dst: &mut Buffer, dst_area: Rect) {
    for dy in 0..dst_area.height {
        let sy = src_top.saturating_add(dy);
        if sy >= src.area.bottom() {
            break;
        }
        for dx in 0..dst_area.width.min(src.area.width) {
            if let (Some(cell), Some(target)) = (
                src.cell((dx, sy)),
                dst.cell_mut((dst_area.x + dx, dst_area.y + dy)),
            ) {
                *target = cell.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::dashboard_data;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_chart_rows_pair_narrow_charts() {
        let data = dashboard_data();
        let dashboard = Dashboard::new(&data);
        assert_eq!(dashboard.chart_rows(), vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_canvas_height_matches_sections() {
        let data = dashboard_data();
        let dashboard = Dashboard::new(&data);
        let canvas = dashboard.render_canvas(116);
        assert_eq!(canvas.area.height, dashboard.content_height());
        assert_eq!(canvas.area.width, 116);
        // narrow requests get the full-width canvas, not a squeezed one
        assert_eq!(dashboard.render_canvas(10).area.width, MIN_MAIN_WIDTH);
        assert_eq!(dashboard.render_canvas(80).area.width, MIN_MAIN_WIDTH);
    }

    #[test]
    fn test_draw_scrolls_main_column_only() {
        let data = dashboard_data();
        let mut dashboard = Dashboard::new(&data);
        let mut state = DashboardState::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        terminal.draw(|frame| dashboard.draw(frame, &mut state)).unwrap();
        let top = crate::snapshot::buffer_lines(terminal.backend().buffer());
        assert!(top[0].contains("Dashboard / Reports"));
        assert_eq!(state.viewport_height, 30 - KeyHints::HEIGHT);
        assert_eq!(state.content_height, dashboard.content_height());

        state.end();
        terminal.draw(|frame| dashboard.draw(frame, &mut state)).unwrap();
        let bottom = crate::snapshot::buffer_lines(terminal.backend().buffer());
        assert!(!bottom[0].contains("Dashboard / Reports"));
        assert!(bottom.iter().any(|row| row.contains("All rights reserved.")));
        // sidebar does not move
        assert!(bottom[1].contains("ComplianceIQ"));
        assert!(bottom.last().is_some_and(|row| row.contains("[Q]")));
    }

    #[test]
    fn test_blit_clips_to_source() {
        let src = Buffer::with_lines(["ab", "cd"]);
        let mut dst = Buffer::empty(Rect::new(0, 0, 4, 4));
        blit(&src, 1, &mut dst, Rect::new(1, 1, 3, 3));
        assert_eq!(dst, Buffer::with_lines(["    ", " cd ", "    ", "    "]));
    }
}
