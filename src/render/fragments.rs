//! Fragment builders, one per endpoint
//!
//! Pure functions from a decoded view-model to an HTML fragment. List
//! payloads keep the server's ordering; object payloads become a single
//! metric block. All payload text is escaped.

use crate::format;
use crate::types::{Alert, ClientSummary, FinanceSummary, Opportunity};

/// Render the alerts list, one item per alert in input order
pub fn alerts(alerts: &[Alert]) -> String {
    let mut out = String::new();
    for alert in alerts {
        let level = alert.severity();
        out.push_str(&format!(
            r#"<div class="alert {class}">
    <span class="alert-icon">{icon}</span>
    <div class="alert-body">
        <p class="alert-message">{message}</p>
        <p class="alert-time">{time}</p>
    </div>
</div>
"#,
            class = level.css_class(),
            icon = level.icon(),
            message = format::escape(&alert.message),
            time = format::timestamp(&alert.timestamp),
        ));
    }
    out
}

/// Render the opportunities list in input order
pub fn opportunities(opportunities: &[Opportunity]) -> String {
    let mut out = String::new();
    for opportunity in opportunities {
        out.push_str(&format!(
            r#"<div class="opportunity">
    <div class="opportunity-info">
        <h3 class="opportunity-name">{name}</h3>
        <p class="opportunity-description">{description}</p>
    </div>
    <span class="platform-badge">{platform}</span>
</div>
"#,
            name = format::escape(&opportunity.name),
            description = format::escape(&opportunity.description),
            platform = format::escape(&opportunity.platform),
        ));
    }
    out
}

/// Render the finance summary metric block
///
/// Shows the current balance, the first predicted balance and the estimated
/// tax. With no predictions the middle slot shows a placeholder.
pub fn finance(summary: &FinanceSummary) -> String {
    let predicted = summary
        .first_predicted_balance()
        .map(format::yuan)
        .unwrap_or_else(|| format::PLACEHOLDER.to_string());

    format!(
        r#"<div class="metric-grid">
    <div class="metric metric-balance">
        <div class="metric-label">当前余额</div>
        <div class="metric-value">{balance}</div>
    </div>
    <div class="metric metric-predicted">
        <div class="metric-label">预计收入</div>
        <div class="metric-value">{predicted}</div>
    </div>
    <div class="metric metric-tax">
        <div class="metric-label">预计税费</div>
        <div class="metric-value">{tax}</div>
    </div>
</div>
"#,
        balance = format::yuan(summary.current_balance),
        predicted = predicted,
        tax = format::yuan(summary.tax_estimation.estimated_tax),
    )
}

/// Render the client counters metric block
pub fn clients(summary: &ClientSummary) -> String {
    format!(
        r#"<div class="metric-grid">
    <div class="metric metric-clients">
        <div class="metric-label">总客户数</div>
        <div class="metric-value">{total}</div>
    </div>
    <div class="metric metric-projects">
        <div class="metric-label">活跃项目</div>
        <div class="metric-value">{active}</div>
    </div>
</div>
"#,
        total = summary.total_clients,
        active = summary.active_projects,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Prediction, TaxEstimation};

    fn alert(level: &str, message: &str, timestamp: &str) -> Alert {
        Alert {
            level: level.to_string(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_alerts_one_item_per_input_in_order() {
        let input = vec![
            alert("EMERGENCY", "first", "2026-08-07T09:00:00"),
            alert("warning", "second", "2026-08-07T10:00:00"),
            alert("whatever", "third", "2026-08-07T11:00:00"),
        ];
        let html = alerts(&input);

        assert_eq!(html.matches("class=\"alert ").count(), 3);
        assert!(html.contains("alert-emergency"));
        assert!(html.contains("alert-warning"));
        assert!(html.contains("alert-info"));

        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        let third = html.find("third").unwrap();
        assert!(first < second && second < third);

        assert!(html.contains("2026/08/07 09:00:00"));
    }

    #[test]
    fn test_alerts_empty_input_renders_nothing() {
        assert_eq!(alerts(&[]), "");
    }

    #[test]
    fn test_alerts_escape_payload_text() {
        let input = vec![alert("INFO", "<img src=x onerror=alert(1)>", "n/a")];
        let html = alerts(&input);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
        // unparseable timestamp passes through verbatim
        assert!(html.contains("n/a"));
    }

    #[test]
    fn test_opportunities_order_and_badge() {
        let input = vec![
            Opportunity {
                name: "AI automation bot".into(),
                description: "trending repo".into(),
                platform: "github".into(),
            },
            Opportunity {
                name: "Data pipeline gig".into(),
                description: "3 month contract".into(),
                platform: "upwork".into(),
            },
        ];
        let html = opportunities(&input);

        assert_eq!(html.matches("class=\"opportunity\"").count(), 2);
        assert!(html.find("AI automation bot").unwrap() < html.find("Data pipeline gig").unwrap());
        assert!(html.contains(r#"<span class="platform-badge">github</span>"#));
    }

    #[test]
    fn test_opportunities_empty_input_renders_nothing() {
        assert_eq!(opportunities(&[]), "");
    }

    #[test]
    fn test_finance_slots() {
        let summary = FinanceSummary {
            current_balance: 5000.5,
            predictions: vec![Prediction {
                predicted_balance: 6200.0,
            }],
            tax_estimation: TaxEstimation {
                estimated_tax: 820.25,
            },
        };
        let html = finance(&summary);

        assert!(html.contains("¥5,000.50"));
        assert!(html.contains("¥6,200.00"));
        assert!(html.contains("¥820.25"));
        assert!(html.contains("当前余额"));
        assert!(html.contains("预计收入"));
        assert!(html.contains("预计税费"));
    }

    #[test]
    fn test_finance_without_predictions_shows_placeholder() {
        let summary = FinanceSummary {
            current_balance: 100.0,
            predictions: vec![],
            tax_estimation: TaxEstimation::default(),
        };
        let html = finance(&summary);
        assert!(html.contains("--"));
        assert!(html.contains("¥100.00"));
    }

    #[test]
    fn test_clients_counters() {
        let summary = ClientSummary {
            total_clients: 12,
            active_projects: 5,
        };
        let html = clients(&summary);
        assert!(html.contains("总客户数"));
        assert!(html.contains("12"));
        assert!(html.contains("活跃项目"));
        assert!(html.contains("5"));
    }
}
