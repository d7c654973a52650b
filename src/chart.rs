use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::currency::format_currency;
use crate::errors::Result;

pub const PRINCIPAL_COLOR: &str = "#2563eb";
pub const INTEREST_COLOR: &str = "#dc2626";

/// where the renderer places the legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// one pie slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// principal vs interest split of a loan, the only input a chart needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub slices: [Slice; 2],
    pub legend: LegendPosition,
}

impl PaymentBreakdown {
    pub fn new(principal: f64, total_interest: f64) -> Self {
        Self {
            slices: [
                Slice {
                    label: "Principal".to_string(),
                    value: principal,
                    color: PRINCIPAL_COLOR.to_string(),
                },
                Slice {
                    label: "Interest".to_string(),
                    value: total_interest,
                    color: INTEREST_COLOR.to_string(),
                },
            ],
            legend: LegendPosition::Bottom,
        }
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value.max(0.0)).sum()
    }

    /// fraction of the pie taken by a slice, negative values count as empty
    pub fn share(&self, index: usize) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        self.slices
            .get(index)
            .map(|s| s.value.max(0.0) / total)
            .unwrap_or(0.0)
    }
}

/// draws a breakdown into a chart resource owned by the caller
///
/// the caller keeps at most one chart alive and drops the old one before
/// asking for a new one.
pub trait ChartRenderer {
    type Chart;

    fn render(&mut self, breakdown: &PaymentBreakdown) -> Result<Self::Chart>;
}

/// terminal pie chart: one bar per slice with a legend underneath
#[derive(Debug, Clone)]
pub struct TextPieRenderer {
    width: usize,
    rendered: u64,
}

impl TextPieRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(10),
            rendered: 0,
        }
    }
}

impl Default for TextPieRenderer {
    fn default() -> Self {
        Self::new(40)
    }
}

impl ChartRenderer for TextPieRenderer {
    type Chart = TextChart;

    fn render(&mut self, breakdown: &PaymentBreakdown) -> Result<TextChart> {
        self.rendered += 1;

        let mut lines = Vec::new();
        let mut legend = Vec::new();
        for (i, slice) in breakdown.slices.iter().enumerate() {
            let share = breakdown.share(i);
            let filled = (share * self.width as f64).round() as usize;
            lines.push(format!(
                "{:<9} |{}{}| {:>5.1}%",
                slice.label,
                "#".repeat(filled),
                " ".repeat(self.width.saturating_sub(filled)),
                share * 100.0,
            ));
            legend.push(format!("{} {}", slice.label, format_currency(slice.value)));
        }

        let legend = legend.join("  ");
        match breakdown.legend {
            LegendPosition::Bottom => lines.push(legend),
            LegendPosition::Top => lines.insert(0, legend),
        }

        debug!(chart = self.rendered, "chart created");
        Ok(TextChart {
            id: self.rendered,
            lines,
        })
    }
}

/// rendered text chart, released when dropped
#[derive(Debug)]
pub struct TextChart {
    id: u64,
    lines: Vec<String>,
}

impl TextChart {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for TextChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

impl Drop for TextChart {
    fn drop(&mut self) {
        debug!(chart = self.id, "chart destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_shares() {
        let breakdown = PaymentBreakdown::new(300.0, 100.0);
        assert_eq!(breakdown.slices[0].label, "Principal");
        assert_eq!(breakdown.slices[1].value, 100.0);
        assert!((breakdown.share(0) - 0.75).abs() < 1e-12);
        assert!((breakdown.share(1) - 0.25).abs() < 1e-12);
        assert_eq!(breakdown.share(2), 0.0);
    }

    #[test]
    fn test_zero_interest_fills_principal() {
        let breakdown = PaymentBreakdown::new(100_000.0, 0.0);
        assert_eq!(breakdown.share(0), 1.0);
        assert_eq!(breakdown.share(1), 0.0);
    }

    #[test]
    fn test_text_chart_layout() {
        let mut renderer = TextPieRenderer::new(20);
        let chart = renderer.render(&PaymentBreakdown::new(150.0, 50.0)).unwrap();

        let text = chart.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(chart.id(), 1);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Principal |###############     |"));
        assert!(lines[1].ends_with("25.0%"));
        assert_eq!(lines[2], "Principal $150.00  Interest $50.00");
    }

    #[test]
    fn test_breakdown_json_shape() {
        let json = serde_json::to_value(PaymentBreakdown::new(1.0, 2.0)).unwrap();
        assert_eq!(json["legend"], "bottom");
        assert_eq!(json["slices"][1]["color"], INTEREST_COLOR);
    }
}
