// services/compliance-dash/src/fixtures.rs
//
// Hardcoded sample data for the program overview
//

use chrono::NaiveDate;

use crate::chart::{
    AxisOptions, ChartDataset, ChartKind, ChartOptions, ChartSpec, HoverMode, HoverOptions,
    LegendPlacement, LineStyle,
};
use crate::model::{
    ActivityRecord, ActivityStatus, AuditRecord, AuditStatus, BarEmphasis, NavItem,
    OverviewMetric, TaskBar,
};
use crate::theme::HexColor;

pub const PRODUCT_NAME: &str = "ComplianceIQ";
pub const LOGO_ICON: &str = "🛡️";
pub const BREADCRUMBS: &str = "Dashboard / Reports";
pub const SEARCH_PLACEHOLDER: &str = "Search reports, controls...";
pub const AVATAR_INITIALS: &str = "CI";
pub const PAGE_TITLE: &str = "Program Overview";
pub const COPYRIGHT: &str = "© 2023 ComplianceIQ. All rights reserved.";

pub const TASKS_TITLE: &str = "Program task completion rate within SLA over the last 30 days";
pub const TASKS_SUBTITLE: &str = "How often you remediated items within SLA";
pub const TASKS_COMPARISON: &str = "Compared to the previous 30 day period";

const WEEKLY_LABELS: [&str; 5] = ["Aug 13", "Aug 20", "Aug 27", "Sep 03", "Sep 10"];
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A chart plus the card copy around it
#[derive(Debug, Clone)]
pub struct ChartPanel {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub spec: ChartSpec,
    /// Spans the full width of the chart grid
    pub wide: bool,
}

/// Reporting window shown in the page header filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub days: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    pub fn filter_label(&self) -> String {
        format!(
            "Last {} days ({} - {}) ▼",
            self.days,
            self.start.format("%b %d, %Y"),
            self.end.format("%b %d, %Y")
        )
    }
}

/// Everything the dashboard displays
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub nav: Vec<NavItem>,
    pub period: ReportingPeriod,
    pub filters: Vec<String>,
    pub overview: Vec<OverviewMetric>,
    pub task_bars: Vec<TaskBar>,
    pub charts: Vec<ChartPanel>,
    pub audits: Vec<AuditRecord>,
    pub activities: Vec<ActivityRecord>,
}

pub fn dashboard_data() -> DashboardData {
    let period = reporting_period();
    DashboardData {
        nav: sidebar_items(),
        period,
        filters: vec![period.filter_label(), "Framework ▼".to_string()],
        overview: overview_metrics(),
        task_bars: task_bars(),
        charts: vec![inherent_risk(), assigned_controls(), framework_progress()],
        audits: audits(),
        activities: activities(),
    }
}

pub fn sidebar_items() -> Vec<NavItem> {
    let items = [
        ("Home", "🏠", false),
        ("Tests", "🧪", false),
        ("Reports", "📊", true),
        ("Compliance", "✅", false),
        ("Trust Center", "🔒", false),
        ("Risk", "⚠️", false),
        ("Vendor", "🏢", false),
        ("Personnel", "👥", false),
        ("Integrations", "🔌", false),
        ("Settings", "⚙️", false),
    ];
    items
        .into_iter()
        .map(|(name, icon, selected)| NavItem {
            name,
            icon,
            selected,
        })
        .collect()
}

pub fn reporting_period() -> ReportingPeriod {
    // both dates are valid calendar days
    let start = NaiveDate::from_ymd_opt(2024, 8, 11).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap_or_default();
    ReportingPeriod {
        days: 30,
        start,
        end,
    }
}

pub fn overview_metrics() -> Vec<OverviewMetric> {
    vec![
        OverviewMetric {
            title: "Compliance Score",
            value: "92",
            change: "5%",
            change_up: true,
            description: "Compared to the previous month",
        },
        OverviewMetric {
            title: "Open Risks",
            value: "18",
            change: "3",
            change_up: false,
            description: "Decrease from last week",
        },
        OverviewMetric {
            title: "Pending Audits",
            value: "5",
            change: "1",
            change_up: true,
            description: "New audits added this month",
        },
    ]
}

pub fn task_bars() -> Vec<TaskBar> {
    vec![
        TaskBar {
            title: "Remediated by due date",
            percent: 93,
            completed: 483,
            total: 521,
            change: "27%",
            change_up: true,
            emphasis: BarEmphasis::Primary,
        },
        TaskBar {
            title: "Remediated past due date",
            percent: 7,
            completed: 36,
            total: 521,
            change: "18%",
            change_up: false,
            emphasis: BarEmphasis::Secondary,
        },
        TaskBar {
            title: "Remediated without due date",
            percent: 0,
            completed: 2,
            total: 521,
            change: "9%",
            change_up: false,
            emphasis: BarEmphasis::Secondary,
        },
    ]
}

fn nearest_unintersected() -> Option<HoverOptions> {
    Some(HoverOptions {
        mode: HoverMode::Nearest,
        intersect: false,
    })
}

pub fn inherent_risk() -> ChartPanel {
    let level = |label: &str, data: &[f64], color: u32| {
        ChartDataset::new(label, data, HexColor(color)).stacked("Stack 0")
    };
    let spec = ChartSpec::new(ChartKind::Bar, &WEEKLY_LABELS)
        .dataset(level("High Risk", &[4.0, 2.0, 6.0, 5.0, 4.0], 0xdd3333))
        .dataset(level("Medium Risk", &[3.0, 5.0, 3.0, 2.0, 3.0], 0xff7b00))
        .dataset(level("Low Risk", &[2.0, 3.0, 2.0, 3.0, 2.0], 0x1565c0))
        .options(ChartOptions {
            interaction: nearest_unintersected(),
            y: AxisOptions {
                begin_at_zero: true,
                step: Some(1.0),
                ..AxisOptions::titled("Number of Inherent Risks")
            },
            x: AxisOptions {
                stacked: true,
                ..AxisOptions::titled("Date")
            },
            ..ChartOptions::default()
        });
    ChartPanel {
        id: "inherent_risk",
        title: "Inherent risk",
        subtitle: "Risk scenarios over time grouped by risk level",
        spec,
        wide: false,
    }
}

pub fn assigned_controls() -> ChartPanel {
    let assigned = [90.0, 88.0, 92.0, 85.0, 90.0];
    let unassigned = [10.0, 12.0, 8.0, 15.0, 10.0];
    let spec = ChartSpec::new(ChartKind::Bar, &WEEKLY_LABELS)
        .dataset(ChartDataset::new("Assigned", &assigned, HexColor(0x0d47a1)))
        .dataset(ChartDataset::new("Unassigned", &unassigned, HexColor(0xcfd8dc)))
        .options(ChartOptions {
            interaction: nearest_unintersected(),
            y: AxisOptions {
                begin_at_zero: true,
                max: Some(100.0),
                step: Some(25.0),
                ..AxisOptions::titled("Number of controls")
            },
            x: AxisOptions {
                stacked: true,
                ..AxisOptions::default()
            },
            ..ChartOptions::default()
        });
    ChartPanel {
        id: "assigned_controls",
        title: "Assigned controls",
        subtitle: "Control owner assignment status over time",
        spec,
        wide: false,
    }
}

pub fn framework_progress() -> ChartPanel {
    let progress = [5.0, 12.0, 28.0, 45.0, 56.0, 70.0, 82.0, 90.0, 92.0, 95.0, 98.0, 100.0];
    let spec = ChartSpec::new(ChartKind::Line, &MONTH_LABELS)
        .dataset(
            ChartDataset::new("Progress", &progress, HexColor(0x1976d2)).line_style(LineStyle {
                fill: false,
                tension: 0.3,
                point_radius: 0.0,
            }),
        )
        .options(ChartOptions {
            legend: LegendPlacement::Hidden,
            y: AxisOptions {
                min: Some(0.0),
                max: Some(100.0),
                tick_suffix: Some("%".to_string()),
                ..AxisOptions::titled("Completion")
            },
            ..ChartOptions::default()
        });
    ChartPanel {
        id: "framework_progress",
        title: "Framework progress",
        subtitle: "Total progress completion of frameworks over time",
        spec,
        wide: true,
    }
}

pub fn audits() -> Vec<AuditRecord> {
    use AuditStatus::*;
    [
        ("ISO 27001", InAudit, "2024-10-15"),
        ("SOC 2 Type II", AwaitingReport, "2024-09-30"),
        ("HIPAA Compliance", Completed, "2024-08-20"),
        ("GDPR Readiness", InAudit, "2024-11-01"),
        ("PCI DSS", Completed, "2024-07-25"),
        ("NIST CSF", Upcoming, "2024-12-01"),
    ]
    .into_iter()
    .map(|(audit_type, status, due_date)| AuditRecord {
        audit_type,
        status,
        due_date,
    })
    .collect()
}

pub fn activities() -> Vec<ActivityRecord> {
    use ActivityStatus::*;
    [
        ("Implemented data encryption", Completed, "2024-09-28"),
        ("Updated privacy policy", InProgress, "2024-09-25"),
        ("Conducted security awareness training", Completed, "2024-09-20"),
        ("Reviewed vendor contracts", Pending, "2024-09-18"),
        ("Assessed new system for compliance", Completed, "2024-09-15"),
        ("Generated quarterly compliance report", Completed, "2024-09-10"),
    ]
    .into_iter()
    .map(|(activity, status, date)| ActivityRecord {
        activity,
        status,
        date,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chart_validates() {
        let data = dashboard_data();
        assert_eq!(data.charts.len(), 3);
        for panel in &data.charts {
            if let Err(e) = panel.spec.validate() {
                panic!("chart {} failed validation: {}", panel.id, e);
            }
        }
        assert!(data.charts.iter().any(|c| c.id == "framework_progress" && c.wide));
    }

    #[test]
    fn test_sidebar_has_single_selected_entry() {
        let nav = sidebar_items();
        assert_eq!(nav.len(), 10);
        let selected: Vec<&str> = nav.iter().filter(|n| n.selected).map(|n| n.name).collect();
        assert_eq!(selected, vec!["Reports"]);
        assert_eq!(nav[0].name, "Home");
        assert_eq!(nav[9].name, "Settings");
    }

    #[test]
    fn test_filter_label_formats_period() {
        assert_eq!(
            reporting_period().filter_label(),
            "Last 30 days (Aug 11, 2024 - Sep 10, 2024) ▼"
        );
    }

    #[test]
    fn test_audit_fixture_order() {
        let types: Vec<&str> = audits().iter().map(|a| a.audit_type).collect();
        assert_eq!(
            types,
            vec![
                "ISO 27001",
                "SOC 2 Type II",
                "HIPAA Compliance",
                "GDPR Readiness",
                "PCI DSS",
                "NIST CSF"
            ]
        );
    }

    #[test]
    fn test_task_percent_is_literal() {
        let bars = task_bars();
        // 2 of 521 is displayed as 0%, not rounded from the counts
        assert_eq!(bars[2].percent, 0);
        assert_eq!(bars[2].completed, 2);
        assert_eq!(bars.iter().map(|b| b.percent).collect::<Vec<_>>(), vec![93, 7, 0]);
    }
}
