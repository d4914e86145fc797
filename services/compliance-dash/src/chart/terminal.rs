// services/compliance-dash/src/chart/terminal.rs
//
// Terminal backend for ChartSpec. Line charts go through ratatui's Chart
// widget; bar charts are drawn cell by cell because ratatui has no stacked
// bars.
//

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Widget};

use dashkit::DashResult;

use super::{ChartKind, ChartRenderer, ChartSpec, LegendPlacement};
use crate::theme;

const BAR_SYMBOL: &str = "█";
const MAX_BAR_WIDTH: u16 = 6;
const MAX_TICKS: usize = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalCharts;

impl ChartRenderer for TerminalCharts {
    type Output = ChartView;

    fn render_chart(&self, spec: &ChartSpec) -> DashResult<ChartView> {
        spec.validate()?;
        Ok(ChartView { spec: spec.clone() })
    }
}

/// A validated chart ready to draw into any area
#[derive(Debug, Clone)]
pub struct ChartView {
    spec: ChartSpec,
}

impl Widget for ChartView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 4 {
            return;
        }
        match self.spec.kind {
            ChartKind::Bar => render_bars(&self.spec, area, buf),
            ChartKind::Line => render_line(&self.spec, area, buf),
        }
    }
}

fn legend_line(spec: &ChartSpec) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, dataset) in spec.datasets.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled("■ ", Style::default().fg(dataset.color.rgb())));
        spans.push(Span::styled(
            dataset.label.clone(),
            Style::default().fg(theme::TEXT_SECONDARY.rgb()),
        ));
    }
    Line::from(spans)
}

/// Upper bound of the value axis: configured max, else the tallest stack
/// rounded up to the tick step.
fn value_ceiling(spec: &ChartSpec) -> f64 {
    if let Some(max) = spec.options.y.max {
        return max;
    }
    let tallest = stack_totals(spec)
        .into_iter()
        .flatten()
        .fold(0.0_f64, f64::max);
    let ceiling = match spec.options.y.step {
        Some(step) => (tallest / step).ceil() * step,
        None => tallest,
    };
    if ceiling > 0.0 {
        ceiling
    } else {
        1.0
    }
}

/// totals[group][label]
fn stack_totals(spec: &ChartSpec) -> Vec<Vec<f64>> {
    let groups = spec.stack_groups();
    let mut totals = vec![vec![0.0; spec.labels.len()]; groups.len()];
    for (idx, dataset) in spec.datasets.iter().enumerate() {
        let Some(group) = spec.group_of(idx) else {
            continue;
        };
        let Some(g) = groups.iter().position(|k| *k == group) else {
            continue;
        };
        for (label_idx, value) in dataset.values.iter().enumerate() {
            totals[g][label_idx] += value.max(0.0);
        }
    }
    totals
}

fn rows_for(value: f64, floor: f64, ceiling: f64, plot_height: u16) -> u16 {
    let span = ceiling - floor;
    if span <= 0.0 {
        return 0;
    }
    let ratio = ((value - floor) / span).clamp(0.0, 1.0);
    (ratio * plot_height as f64).round() as u16
}

/// Ticks every `step` from floor to ceiling; a step too fine for
/// `MAX_TICKS` falls back to floor, midpoint and ceiling.
fn tick_values(spec: &ChartSpec, floor: f64, ceiling: f64) -> Vec<f64> {
    let fallback = vec![floor, (floor + ceiling) / 2.0, ceiling];
    let Some(step) = spec.options.y.step.filter(|s| *s > 0.0) else {
        return fallback;
    };
    let intervals = ((ceiling - floor) / step + 1e-9).floor();
    if !(0.0..MAX_TICKS as f64).contains(&intervals) {
        return fallback;
    }
    (0..=intervals as usize)
        .map(|i| floor + step * i as f64)
        .collect()
}

fn render_bars(spec: &ChartSpec, area: Rect, buf: &mut Buffer) {
    let opts = &spec.options;
    let title_rows = u16::from(opts.y.title.is_some());
    let legend_rows = u16::from(opts.legend == LegendPlacement::Bottom);
    let x_title_rows = u16::from(opts.x.title.is_some());
    // axis line + x labels
    let reserved = title_rows + 2 + x_title_rows + legend_rows;
    if area.height <= reserved + 1 {
        return;
    }
    let plot_height = area.height - reserved;
    let plot_top = area.y + title_rows;
    let axis_row = plot_top + plot_height;

    if let Some(title) = &opts.y.title {
        buf.set_string(area.x, area.y, title, theme::subtitle());
    }

    let floor = opts.y.min.unwrap_or(0.0);
    let ceiling = value_ceiling(spec);
    let ticks = tick_values(spec, floor, ceiling);
    let gutter = ticks
        .iter()
        .map(|t| opts.y.tick_label(*t).chars().count() as u16)
        .max()
        .unwrap_or(1)
        + 1;
    if area.width <= gutter + 2 {
        return;
    }
    let plot_left = area.x + gutter;
    let plot_width = area.width - gutter;
    let axis_style = theme::border();
    let tick_style = Style::default().fg(theme::TEXT_MUTED.rgb());

    // y axis with labels; ticks that would land on an already-labelled row are skipped
    for row in plot_top..axis_row {
        buf.set_string(plot_left - 1, row, "│", axis_style);
    }
    let mut labelled: Vec<u16> = Vec::new();
    for tick in &ticks {
        let height = rows_for(*tick, floor, ceiling, plot_height);
        let row = axis_row.saturating_sub(height).max(plot_top);
        if labelled.contains(&row) {
            continue;
        }
        labelled.push(row);
        let label = opts.y.tick_label(*tick);
        let x = plot_left - 1 - label.chars().count() as u16;
        buf.set_string(x, row, &label, tick_style);
        if row < axis_row {
            buf.set_string(plot_left - 1, row, "┤", axis_style);
        }
    }
    buf.set_string(plot_left - 1, axis_row, "└", axis_style);
    buf.set_string(plot_left, axis_row, "─".repeat(plot_width as usize), axis_style);

    // bars
    let labels = spec.labels.len().max(1) as u16;
    let slot = (plot_width / labels).max(1);
    let groups = spec.stack_groups();
    let group_count = groups.len().max(1) as u16;
    let bar_width = (slot.saturating_sub(2) / group_count).clamp(1, MAX_BAR_WIDTH);
    let cluster = bar_width * group_count;

    for label_idx in 0..spec.labels.len() {
        let slot_left = plot_left + slot * label_idx as u16;
        let cluster_left = slot_left + slot.saturating_sub(cluster) / 2;

        for (g, group) in groups.iter().enumerate() {
            let bar_left = cluster_left + bar_width * g as u16;
            // stacks grow from zero; rows_for clips the part below the floor
            let mut cumulative = 0.0;
            for (idx, dataset) in spec.datasets.iter().enumerate() {
                if spec.group_of(idx).as_ref() != Some(group) {
                    continue;
                }
                let bottom = rows_for(cumulative, floor, ceiling, plot_height);
                cumulative += dataset.values[label_idx].max(0.0);
                let top = rows_for(cumulative, floor, ceiling, plot_height);
                for level in bottom..top {
                    let y = axis_row - 1 - level;
                    for x in bar_left..bar_left + bar_width {
                        if x >= area.right() {
                            break;
                        }
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.set_symbol(BAR_SYMBOL).set_fg(dataset.color.rgb());
                        }
                    }
                }
            }
        }

        let label: String = spec.labels[label_idx].chars().take(slot as usize).collect();
        let offset = slot.saturating_sub(label.chars().count() as u16) / 2;
        buf.set_string(slot_left + offset, axis_row + 1, &label, tick_style);
    }

    let mut next_row = axis_row + 2;
    if let Some(title) = &opts.x.title {
        let offset = plot_width.saturating_sub(title.chars().count() as u16) / 2;
        buf.set_string(plot_left + offset, next_row, title, theme::subtitle());
        next_row += 1;
    }
    if legend_rows == 1 {
        let legend = legend_line(spec);
        let offset = area.width.saturating_sub(legend.width() as u16) / 2;
        buf.set_line(area.x + offset, next_row, &legend, area.width);
    }
}

fn render_line(spec: &ChartSpec, area: Rect, buf: &mut Buffer) {
    let opts = &spec.options;
    let series: Vec<Vec<(f64, f64)>> = spec
        .datasets
        .iter()
        .map(|d| {
            d.values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect();

    let data_min = spec
        .datasets
        .iter()
        .flat_map(|d| d.values.iter().copied())
        .fold(f64::INFINITY, f64::min);
    let data_max = spec
        .datasets
        .iter()
        .flat_map(|d| d.values.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    let floor = opts.y.min.unwrap_or(if opts.y.begin_at_zero { 0.0 } else { data_min });
    let mut ceiling = opts.y.max.unwrap_or(data_max);
    if ceiling <= floor {
        ceiling = floor + 1.0;
    }

    let datasets: Vec<Dataset> = spec
        .datasets
        .iter()
        .zip(series.iter())
        .map(|(d, points)| {
            Dataset::default()
                .name(d.label.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(d.color.rgb()))
                .data(points)
        })
        .collect();

    let tick_style = Style::default().fg(theme::TEXT_MUTED.rgb());
    let label_count = spec.labels.len();
    let x_labels: Vec<Span> = if label_count > 2 && area.width as usize >= label_count * 5 {
        spec.labels
            .iter()
            .map(|l| Span::styled(l.clone(), tick_style))
            .collect()
    } else {
        spec.labels
            .first()
            .into_iter()
            .chain(spec.labels.last())
            .map(|l| Span::styled(l.clone(), tick_style))
            .collect()
    };
    let y_labels: Vec<Span> = [floor, (floor + ceiling) / 2.0, ceiling]
        .iter()
        .map(|v| Span::styled(opts.y.tick_label(*v), tick_style))
        .collect();

    let mut x_axis = Axis::default()
        .style(theme::border())
        .bounds([0.0, label_count.saturating_sub(1).max(1) as f64])
        .labels(x_labels);
    if let Some(title) = &opts.x.title {
        x_axis = x_axis.title(Span::styled(title.clone(), theme::subtitle()));
    }
    let mut y_axis = Axis::default()
        .style(theme::border())
        .bounds([floor, ceiling])
        .labels(y_labels);
    if let Some(title) = &opts.y.title {
        y_axis = y_axis.title(Span::styled(
            title.clone(),
            theme::subtitle().add_modifier(Modifier::ITALIC),
        ));
    }

    let legend = match opts.legend {
        LegendPlacement::Bottom => Some(LegendPosition::Bottom),
        LegendPlacement::Hidden => None,
    };

    Chart::new(datasets)
        .style(theme::panel())
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend)
        .render(area, buf);
}
