// services/compliance-dash/src/heatmap.rs
//
// Risk heatmap lookup: likelihood (rows) x impact (columns) -> severity.
// Row and column order carry meaning; do not sort them.
//

use crate::theme::HexColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Severity {
    /// Legend order
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::VeryHigh,
    ];

    pub fn code(self) -> char {
        match self {
            Severity::Low => 'L',
            Severity::Medium => 'M',
            Severity::High => 'H',
            Severity::VeryHigh => 'V',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::VeryHigh => "Very High",
        }
    }

    pub fn color(self) -> HexColor {
        match self {
            Severity::Low => HexColor(0x4caf50),
            Severity::Medium => HexColor(0xffb300),
            Severity::High => HexColor(0xf57c00),
            Severity::VeryHigh => HexColor(0xd32f2f),
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Severity::ALL.into_iter().find(|s| s.code() == code)
    }
}

pub const MATRIX_SIZE: usize = 5;

/// Descending severity
pub const LIKELIHOOD: [&str; MATRIX_SIZE] =
    ["Almost Certain", "Likely", "Possible", "Unlikely", "Rare"];

/// Ascending severity
pub const IMPACT: [&str; MATRIX_SIZE] =
    ["Negligible", "Minor", "Moderate", "Major", "Catastrophic"];

use Severity::{High as H, Low as L, Medium as M, VeryHigh as V};

/// Rows follow `LIKELIHOOD`, columns follow `IMPACT`. The grid is the
/// published page's, so severity peaks at Rare x Catastrophic.
pub const RISK_MATRIX: [[Severity; MATRIX_SIZE]; MATRIX_SIZE] = [
    [L, L, L, L, L],
    [L, L, L, M, M],
    [L, L, M, M, H],
    [L, M, M, H, H],
    [L, M, H, H, V],
];

/// A single matrix position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatCell {
    pub likelihood_row: usize,
    pub impact_column: usize,
    pub severity: Severity,
}

pub fn severity_at(likelihood_row: usize, impact_column: usize) -> Option<Severity> {
    RISK_MATRIX.get(likelihood_row)?.get(impact_column).copied()
}

pub fn lookup(likelihood: &str, impact: &str) -> Option<Severity> {
    let row = LIKELIHOOD.iter().position(|l| *l == likelihood)?;
    let column = IMPACT.iter().position(|i| *i == impact)?;
    severity_at(row, column)
}

/// Cells in row-major order
pub fn cells() -> impl Iterator<Item = HeatCell> {
    RISK_MATRIX.iter().enumerate().flat_map(|(row, severities)| {
        severities
            .iter()
            .enumerate()
            .map(move |(column, severity)| HeatCell {
                likelihood_row: row,
                impact_column: column,
                severity: *severity,
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_five_by_five_with_known_codes() {
        assert_eq!(RISK_MATRIX.len(), 5);
        for row in RISK_MATRIX.iter() {
            assert_eq!(row.len(), 5);
            for severity in row {
                assert!(['L', 'M', 'H', 'V'].contains(&severity.code()));
            }
        }
        assert_eq!(cells().count(), 25);
    }

    #[test]
    fn test_matrix_literal_rows() {
        let rendered: Vec<String> = RISK_MATRIX
            .iter()
            .map(|row| row.iter().map(|s| s.code()).collect())
            .collect();
        assert_eq!(rendered, vec!["LLLLL", "LLLMM", "LLMMH", "LMMHH", "LMHHV"]);
    }

    #[test]
    fn test_axis_order() {
        assert_eq!(LIKELIHOOD, ["Almost Certain", "Likely", "Possible", "Unlikely", "Rare"]);
        assert_eq!(IMPACT, ["Negligible", "Minor", "Moderate", "Major", "Catastrophic"]);
    }

    #[test]
    fn test_lookup_by_label_and_index() {
        // corners as published, not a recomputed likelihood x impact score
        assert_eq!(lookup("Rare", "Catastrophic"), Some(Severity::VeryHigh));
        assert_eq!(lookup("Almost Certain", "Catastrophic"), Some(Severity::Low));
        assert_eq!(lookup("Possible", "Moderate"), Some(Severity::Medium));
        assert_eq!(lookup("Unlikely", "Major"), Some(Severity::High));
        assert_eq!(lookup("Certain", "Major"), None);
        assert_eq!(lookup("Rare", "Huge"), None);
        assert_eq!(severity_at(4, 4), Some(Severity::VeryHigh));
        assert_eq!(severity_at(5, 0), None);
        assert_eq!(severity_at(0, 5), None);
    }

    #[test]
    fn test_severity_codes_and_colors() {
        assert_eq!(Severity::from_code('V'), Some(Severity::VeryHigh));
        assert_eq!(Severity::from_code('X'), None);
        let colors: Vec<u32> = Severity::ALL.iter().map(|s| s.color().0).collect();
        assert_eq!(colors, vec![0x4caf50, 0xffb300, 0xf57c00, 0xd32f2f]);
        let labels: Vec<&str> = Severity::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Low", "Medium", "High", "Very High"]);
    }
}
