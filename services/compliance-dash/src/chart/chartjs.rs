// services/compliance-dash/src/chart/chartjs.rs
//
// chart.js backend: turns a ChartSpec into the `{type, data, options}`
// document chart.js consumes, so the same fixtures can drive a web page.
//

use std::io::Write;

use serde_json::{json, Map, Value};

use dashkit::DashResult;

use super::{AxisOptions, ChartKind, ChartRenderer, ChartSpec, HoverOptions, LegendPlacement};

#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsExporter;

impl ChartRenderer for ChartJsExporter {
    type Output = Value;

    fn render_chart(&self, spec: &ChartSpec) -> DashResult<Value> {
        spec.validate()?;
        Ok(json!({
            "type": spec.kind,
            "data": {
                "labels": spec.labels,
                "datasets": datasets(spec),
            },
            "options": options(spec),
        }))
    }
}

/// Export several charts as one JSON object keyed by chart id
pub fn export_document<'a, I>(charts: I) -> DashResult<Value>
where
    I: IntoIterator<Item = (&'a str, &'a ChartSpec)>,
{
    let exporter = ChartJsExporter;
    let mut document = Map::new();
    for (id, spec) in charts {
        document.insert(id.to_string(), exporter.render_chart(spec)?);
    }
    Ok(Value::Object(document))
}

/// Pretty-print the export document followed by a newline
pub fn write_document<'a, W, I>(mut out: W, charts: I) -> DashResult<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a ChartSpec)>,
{
    let document = export_document(charts)?;
    serde_json::to_writer_pretty(&mut out, &document)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    Ok(())
}

fn datasets(spec: &ChartSpec) -> Vec<Value> {
    spec.datasets
        .iter()
        .map(|dataset| {
            let mut out = Map::new();
            out.insert("label".into(), json!(dataset.label));
            out.insert("data".into(), json!(dataset.values));
            match spec.kind {
                ChartKind::Bar => {
                    out.insert("backgroundColor".into(), json!(dataset.color));
                }
                ChartKind::Line => {
                    out.insert("borderColor".into(), json!(dataset.color));
                }
            }
            if let Some(stack) = &dataset.stack {
                out.insert("stack".into(), json!(stack));
            }
            if let Some(line) = &dataset.line {
                out.insert("fill".into(), json!(line.fill));
                out.insert("tension".into(), json!(line.tension));
                out.insert("pointRadius".into(), json!(line.point_radius));
            }
            Value::Object(out)
        })
        .collect()
}

fn hover(options: &HoverOptions) -> Value {
    json!({ "mode": options.mode, "intersect": options.intersect })
}

fn options(spec: &ChartSpec) -> Value {
    let opts = &spec.options;
    let legend = match opts.legend {
        LegendPlacement::Bottom => json!({ "position": "bottom" }),
        LegendPlacement::Hidden => json!({ "display": false }),
    };

    let mut out = Map::new();
    out.insert("responsive".into(), json!(true));
    out.insert(
        "plugins".into(),
        json!({ "legend": legend, "tooltip": hover(&opts.tooltip) }),
    );

    let mut scales = Map::new();
    for (name, axis) in [("x", &opts.x), ("y", &opts.y)] {
        if let Some(value) = scale(axis) {
            scales.insert(name.to_string(), value);
        }
    }
    out.insert("scales".into(), Value::Object(scales));

    if let Some(interaction) = &opts.interaction {
        out.insert("interaction".into(), hover(interaction));
    }
    Value::Object(out)
}

/// `None` for an axis with nothing configured
fn scale(axis: &AxisOptions) -> Option<Value> {
    let mut out = Map::new();
    if axis.begin_at_zero {
        out.insert("beginAtZero".into(), json!(true));
    }
    if let Some(min) = axis.min {
        out.insert("min".into(), json!(min));
    }
    if let Some(max) = axis.max {
        out.insert("max".into(), json!(max));
    }
    if axis.stacked {
        out.insert("stacked".into(), json!(true));
    }

    let mut ticks = Map::new();
    if let Some(step) = axis.step {
        ticks.insert("stepSize".into(), json!(step));
    }
    // chart.js formats ticks through a JS callback; the host page applies the suffix
    if let Some(suffix) = &axis.tick_suffix {
        ticks.insert("suffix".into(), json!(suffix));
    }
    if !ticks.is_empty() {
        out.insert("ticks".into(), Value::Object(ticks));
    }

    if let Some(title) = &axis.title {
        out.insert("title".into(), json!({ "display": true, "text": title }));
    }

    if out.is_empty() {
        None
    } else {
        Some(Value::Object(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartDataset, LineStyle};
    use crate::fixtures::dashboard_data;
    use crate::theme::HexColor;
    use dashkit::DashError;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn fixture_document() -> Value {
        let data = dashboard_data();
        export_document(data.charts.iter().map(|c| (c.id, &c.spec))).unwrap()
    }

    fn line_spec() -> ChartSpec {
        ChartSpec::new(ChartKind::Line, &["Jan", "Feb"]).dataset(
            ChartDataset::new("Progress", &[5.0, 12.0], HexColor(0x1976d2)).line_style(LineStyle {
                fill: false,
                tension: 0.3,
                point_radius: 0.0,
            }),
        )
    }

    #[test]
    fn test_line_dataset_uses_border_color_and_style() {
        let out = ChartJsExporter.render_chart(&line_spec()).unwrap();
        assert_eq!(out["type"], "line");
        let dataset = &out["data"]["datasets"][0];
        assert_eq!(dataset["borderColor"], "#1976d2");
        assert!(dataset.get("backgroundColor").is_none());
        assert_eq!(dataset["tension"], 0.3);
        assert_eq!(dataset["fill"], false);
        assert_eq!(dataset["pointRadius"], 0.0);
    }

    #[test]
    fn test_empty_axes_are_omitted() {
        let out = ChartJsExporter.render_chart(&line_spec()).unwrap();
        assert!(out["options"]["scales"].as_object().unwrap().is_empty());
        assert_eq!(out["options"]["plugins"]["legend"]["position"], "bottom");
        assert!(out["options"].get("interaction").is_none());
    }

    #[test]
    fn test_invalid_spec_is_not_exported() {
        let spec = ChartSpec::new(ChartKind::Bar, &["a", "b"])
            .dataset(ChartDataset::new("bad", &[1.0], HexColor(0)));
        assert!(ChartJsExporter.render_chart(&spec).is_err());
        assert!(export_document([("bad", &spec)]).is_err());
    }

    #[test]
    fn test_inherent_risk_export() {
        let doc = fixture_document();
        let chart = &doc["inherent_risk"];
        assert_eq!(chart["type"], "bar");
        let high = &chart["data"]["datasets"][0];
        assert_eq!(high["label"], "High Risk");
        assert_eq!(high["backgroundColor"], "#dd3333");
        assert_eq!(high["stack"], "Stack 0");

        let scales = &chart["options"]["scales"];
        assert_eq!(scales["y"]["ticks"]["stepSize"], 1.0);
        assert_eq!(scales["y"]["beginAtZero"], true);
        assert_eq!(scales["x"]["stacked"], true);
        assert_eq!(scales["x"]["title"]["text"], "Date");
        assert_eq!(chart["options"]["interaction"]["mode"], "nearest");
        assert_eq!(chart["options"]["interaction"]["intersect"], false);
    }

    #[test]
    fn test_assigned_controls_export() {
        let doc = fixture_document();
        let chart = &doc["assigned_controls"];
        let y = &chart["options"]["scales"]["y"];
        assert_eq!(y["max"], 100.0);
        assert_eq!(y["ticks"]["stepSize"], 25.0);
        assert_eq!(chart["data"]["datasets"][1]["backgroundColor"], "#cfd8dc");
        assert!(chart["data"]["datasets"][0].get("stack").is_none());
    }

    #[test]
    fn test_framework_progress_export() {
        let doc = fixture_document();
        let chart = &doc["framework_progress"];
        assert_eq!(chart["type"], "line");
        assert_eq!(chart["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(chart["options"]["scales"]["y"]["ticks"]["suffix"], "%");
        assert_eq!(chart["options"]["scales"]["y"]["min"], 0.0);
        let progress = &chart["data"]["datasets"][0];
        assert_eq!(progress["tension"], 0.3);
        assert_eq!(progress["data"].as_array().map(Vec::len), Some(12));
    }

    #[test]
    fn test_write_document_appends_newline() {
        let mut out = Vec::new();
        write_document(&mut out, [("progress", &line_spec())]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["progress"]["type"], "line");
    }

    #[test]
    fn test_write_failure_is_export_error() {
        let err = write_document(BrokenPipe, [("progress", &line_spec())]).unwrap_err();
        assert!(matches!(err, DashError::ExportError(_)), "{:?}", err);
    }
}
