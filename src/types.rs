//! View-model types for the four backend endpoints
//!
//! Each type mirrors the fields the dashboard consumes; unknown payload
//! fields are ignored during decode. Instances are transient: decoded from
//! one response, rendered once, then dropped. A new fetch fully replaces
//! whatever was rendered before.

use serde::{Deserialize, Serialize};

/// Alert severity, classified from the raw `level` string
///
/// Anything that is not EMERGENCY or WARNING (any letter-casing) falls
/// through to Info. That catch-all is deliberate, not an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Emergency,
    Warning,
    Info,
}

impl AlertLevel {
    /// Classify a raw level label, case-insensitively
    pub fn classify(label: &str) -> Self {
        match label.to_uppercase().as_str() {
            "EMERGENCY" => AlertLevel::Emergency,
            "WARNING" => AlertLevel::Warning,
            _ => AlertLevel::Info,
        }
    }

    /// CSS class for the alert item
    pub fn css_class(self) -> &'static str {
        match self {
            AlertLevel::Emergency => "alert-emergency",
            AlertLevel::Warning => "alert-warning",
            AlertLevel::Info => "alert-info",
        }
    }

    /// Icon glyph shown next to the message
    pub fn icon(self) -> &'static str {
        match self {
            AlertLevel::Emergency => "🚨",
            AlertLevel::Warning => "⚠️",
            AlertLevel::Info => "ℹ️",
        }
    }
}

/// A single alert from `/api/alerts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: String,
    pub message: String,
    pub timestamp: String,
}

impl Alert {
    /// Classified severity of this alert
    pub fn severity(&self) -> AlertLevel {
        AlertLevel::classify(&self.level)
    }
}

/// A freelance opportunity from `/api/opportunities`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub name: String,
    pub description: String,
    pub platform: String,
}

/// One predicted month of cash flow
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_balance: f64,
}

/// Tax estimation block of the finance summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxEstimation {
    pub estimated_tax: f64,
}

/// Finance summary from `/api/finance/summary`
///
/// The backend sends more (per-prediction month and confidence, taxable
/// income, effective rate); only the rendered fields are decoded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub current_balance: f64,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    #[serde(default)]
    pub tax_estimation: TaxEstimation,
}

impl FinanceSummary {
    /// First predicted balance, if the backend sent any predictions
    pub fn first_predicted_balance(&self) -> Option<f64> {
        self.predictions.first().map(|p| p.predicted_balance)
    }
}

/// Client report counters from `/api/clients`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSummary {
    pub total_clients: u64,
    pub active_projects: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_levels_any_casing() {
        for label in ["EMERGENCY", "emergency", "Emergency", "eMeRgEnCy"] {
            assert_eq!(AlertLevel::classify(label), AlertLevel::Emergency);
        }
        for label in ["WARNING", "warning", "Warning"] {
            assert_eq!(AlertLevel::classify(label), AlertLevel::Warning);
        }
    }

    #[test]
    fn test_classify_falls_through_to_info() {
        for label in ["INFO", "info", "", "critical", "notice", "警告"] {
            assert_eq!(AlertLevel::classify(label), AlertLevel::Info);
        }
    }

    #[test]
    fn test_level_class_and_icon_are_fixed() {
        assert_eq!(AlertLevel::Emergency.css_class(), "alert-emergency");
        assert_eq!(AlertLevel::Warning.css_class(), "alert-warning");
        assert_eq!(AlertLevel::Info.css_class(), "alert-info");
        assert_eq!(AlertLevel::Emergency.icon(), "🚨");
        assert_eq!(AlertLevel::Warning.icon(), "⚠️");
        assert_eq!(AlertLevel::Info.icon(), "ℹ️");
    }

    #[test]
    fn test_decode_alerts_list() {
        let json = r#"[
            {"level": "EMERGENCY", "message": "余额低于紧急阈值！当前余额: 3200", "timestamp": "2026-08-07T09:15:00"},
            {"level": "warning", "message": "low balance", "timestamp": "2026-08-07T10:00:00"}
        ]"#;
        let alerts: Vec<Alert> = serde_json::from_str(json).unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].severity(), AlertLevel::Emergency);
        assert_eq!(alerts[1].severity(), AlertLevel::Warning);
    }

    #[test]
    fn test_decode_finance_summary() {
        let json = r#"{
            "current_balance": 5000.5,
            "predictions": [{"month": "2026-09", "predicted_balance": 6200, "confidence": 0.9}],
            "tax_estimation": {"taxable_income": 9000, "estimated_tax": 820.25, "effective_rate": 0.09}
        }"#;
        let summary: FinanceSummary = serde_json::from_str(json).unwrap();
        assert!((summary.current_balance - 5000.5).abs() < f64::EPSILON);
        assert_eq!(summary.first_predicted_balance(), Some(6200.0));
        assert!((summary.tax_estimation.estimated_tax - 820.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decode_finance_summary_without_predictions() {
        let json = r#"{"current_balance": 120.0, "tax_estimation": {"estimated_tax": 0}}"#;
        let summary: FinanceSummary = serde_json::from_str(json).unwrap();
        assert!(summary.predictions.is_empty());
        assert_eq!(summary.first_predicted_balance(), None);
    }

    #[test]
    fn test_decode_client_summary_ignores_extra_fields() {
        let json = r#"{"total_clients": 12, "active_projects": 5, "client_sources": {"github": 7}}"#;
        let summary: ClientSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_clients, 12);
        assert_eq!(summary.active_projects, 5);
    }
}
