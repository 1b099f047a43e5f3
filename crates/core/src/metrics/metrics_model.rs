//! Derived financial metrics for a manual asset.

use serde::{Deserialize, Serialize};

/// Risk bucket of an asset. Assigned per category, never estimated from
/// price volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Translation key for the risk badge.
    pub fn label_key(&self) -> String {
        format!("report.risk.{}", self.as_str())
    }
}

/// Normalized metrics for one asset.
///
/// Immutable once computed. `None` means the value is unknown, and it stays
/// unknown through every formula that depends on it. Unknown fields are
/// omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub currency: String,
    /// Capital put into the asset, acquisition expenses included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invested: Option<f64>,
    /// Capital put into the asset before expenses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_invested: Option<f64>,
    /// Sum of all initial expenses (0 when there are none)
    pub expenses_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    /// `current_value - invested`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain_loss: Option<f64>,
    /// `gain_loss / invested * 100`, unknown when invested is zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_cashflow: Option<f64>,
    /// Annual inflation rate as a fraction (0.035 = 3.5%)
    pub inflation_rate: f64,
    /// Holding horizon in years
    pub years: f64,
    /// What `invested` would be worth growing exactly at inflation over `years`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_target: Option<f64>,
    /// Relative distance between current value and the inflation target, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_gap_percent: Option<f64>,
    pub risk_level: RiskLevel,
}

impl Metrics {
    /// True when the current value reaches the inflation target.
    /// Unknown values never count as beating inflation.
    pub fn beats_inflation(&self) -> bool {
        matches!(
            (self.current_value, self.inflation_target),
            (Some(current), Some(target)) if current >= target
        )
    }
}
