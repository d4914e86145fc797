// services/compliance-dash/src/model.rs
//
// Fixture entity types. Everything here is built once and only read.
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

/// Summary card with a directional delta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub change_up: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarEmphasis {
    Primary,
    Secondary,
}

/// One SLA remediation bar. `percent` is displayed as authored, it is not
/// derived from `completed / total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBar {
    pub title: &'static str,
    pub percent: u16,
    pub completed: u32,
    pub total: u32,
    pub change: &'static str,
    pub change_up: bool,
    pub emphasis: BarEmphasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStatus {
    InAudit,
    AwaitingReport,
    Completed,
    Upcoming,
}

impl AuditStatus {
    pub const ALL: [AuditStatus; 4] = [
        AuditStatus::InAudit,
        AuditStatus::AwaitingReport,
        AuditStatus::Completed,
        AuditStatus::Upcoming,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AuditStatus::InAudit => "In audit",
            AuditStatus::AwaitingReport => "Awaiting report",
            AuditStatus::Completed => "Completed",
            AuditStatus::Upcoming => "Upcoming",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Completed,
    InProgress,
    Pending,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 3] = [
        ActivityStatus::Completed,
        ActivityStatus::InProgress,
        ActivityStatus::Pending,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityStatus::Completed => "Completed",
            ActivityStatus::InProgress => "In Progress",
            ActivityStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub audit_type: &'static str,
    pub status: AuditStatus,
    pub due_date: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub activity: &'static str,
    pub status: ActivityStatus,
    pub date: &'static str,
}
