// services/compliance-dash/src/chart/mod.rs
//
// Chart definitions and the charting seam. Views build a `ChartSpec` from
// fixture data and hand it to a `ChartRenderer` untouched; everything about
// drawing lives behind the trait.
//

pub mod chartjs;
pub mod terminal;

use serde::Serialize;

use dashkit::{DashError, DashResult};

use crate::theme::HexColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub fill: bool,
    pub tension: f64,
    pub point_radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub values: Vec<f64>,
    pub color: HexColor,
    /// Datasets sharing a stack group are drawn on top of each other
    pub stack: Option<String>,
    pub line: Option<LineStyle>,
}

impl ChartDataset {
    pub fn new(label: &str, values: &[f64], color: HexColor) -> Self {
        Self {
            label: label.to_string(),
            values: values.to_vec(),
            color,
            stack: None,
            line: None,
        }
    }

    pub fn stacked(mut self, group: &str) -> Self {
        self.stack = Some(group.to_string());
        self
    }

    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line = Some(style);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPlacement {
    Bottom,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    Index,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverOptions {
    pub mode: HoverMode,
    pub intersect: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisOptions {
    pub title: Option<String>,
    pub begin_at_zero: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub stacked: bool,
    /// Appended to every tick label, e.g. "%"
    pub tick_suffix: Option<String>,
}

impl AxisOptions {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn tick_label(&self, value: f64) -> String {
        let suffix = self.tick_suffix.as_deref().unwrap_or("");
        if value.fract() == 0.0 {
            format!("{:.0}{}", value, suffix)
        } else {
            format!("{:.1}{}", value, suffix)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub legend: LegendPlacement,
    pub tooltip: HoverOptions,
    pub interaction: Option<HoverOptions>,
    pub x: AxisOptions,
    pub y: AxisOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            legend: LegendPlacement::Bottom,
            tooltip: HoverOptions {
                mode: HoverMode::Index,
                intersect: false,
            },
            interaction: None,
            x: AxisOptions::default(),
            y: AxisOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, labels: &[&str]) -> Self {
        Self {
            kind,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            datasets: Vec::new(),
            options: ChartOptions::default(),
        }
    }

    pub fn dataset(mut self, dataset: ChartDataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Check the spec is drawable: every series lines up with the labels and
    /// the axis bounds are ordered.
    pub fn validate(&self) -> DashResult<()> {
        if self.datasets.is_empty() {
            return Err(DashError::ChartError("chart has no datasets".to_string()));
        }
        for dataset in &self.datasets {
            if dataset.values.len() != self.labels.len() {
                return Err(DashError::ChartError(format!(
                    "series '{}' has {} values for {} labels",
                    dataset.label,
                    dataset.values.len(),
                    self.labels.len()
                )));
            }
            if dataset.values.iter().any(|v| !v.is_finite()) {
                return Err(DashError::ChartError(format!(
                    "series '{}' contains a non-finite value",
                    dataset.label
                )));
            }
        }
        for (name, axis) in [("x", &self.options.x), ("y", &self.options.y)] {
            if let (Some(min), Some(max)) = (axis.min, axis.max) {
                if min >= max {
                    return Err(DashError::ChartError(format!(
                        "{} axis min {} is not below max {}",
                        name, min, max
                    )));
                }
            }
            if let Some(step) = axis.step {
                if step <= 0.0 {
                    return Err(DashError::ChartError(format!(
                        "{} axis step must be positive, got {}",
                        name, step
                    )));
                }
            }
        }
        Ok(())
    }

    /// Stack key per dataset: explicit group, else one shared group when the
    /// x axis is stacked, else a group of its own.
    pub fn stack_groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = Vec::new();
        for key in (0..self.datasets.len()).filter_map(|idx| self.group_of(idx)) {
            if !groups.contains(&key) {
                groups.push(key);
            }
        }
        groups
    }

    pub fn group_of(&self, dataset_idx: usize) -> Option<String> {
        let dataset = self.datasets.get(dataset_idx)?;
        Some(match (&dataset.stack, self.options.x.stacked) {
            (Some(group), _) => group.clone(),
            (None, true) => "__stacked".to_string(),
            (None, false) => format!("__dataset{}", dataset_idx),
        })
    }
}

/// A charting capability: submit a chart definition, get back something
/// renderable in the target medium.
pub trait ChartRenderer {
    type Output;

    fn render_chart(&self, spec: &ChartSpec) -> DashResult<Self::Output>;
}
