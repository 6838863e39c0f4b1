//! Page shell and full-page assembly
//!
//! Assembles the four regions, the last-refresh stamp and the styles into a
//! single static page. Regions that have never been filled show a loading
//! placeholder.

use super::{MemoryRegions, css, region};

const LOADING: &str = r#"<p class="placeholder">加载中...</p>"#;

/// Assemble the complete dashboard page from the current region contents
pub fn dashboard_html(regions: &MemoryRegions) -> String {
    let updated = regions
        .last_updated()
        .map(|t| format!("更新于 {} UTC", t.format("%Y/%m/%d %H:%M:%S")))
        .unwrap_or_else(|| "加载中...".to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>自由职业生存面板</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>📋 自由职业生存面板</h1>
            <span class="refresh-time">{updated}</span>
        </header>

        <div class="grid">
            <div class="card wide">
                <div class="card-header"><span class="card-title">🚨 预警信息</span></div>
                <div id="{alerts_region}">{alerts}</div>
            </div>

            <div class="card wide">
                <div class="card-header"><span class="card-title">💼 最新机会</span></div>
                <div id="{opportunities_region}">{opportunities}</div>
            </div>

            <div class="card wide">
                <div class="card-header"><span class="card-title">💰 财务摘要</span></div>
                <div id="{finance_region}">{finance}</div>
            </div>

            <div class="card wide">
                <div class="card-header"><span class="card-title">👥 客户概况</span></div>
                <div id="{clients_region}">{clients}</div>
            </div>
        </div>
    </div>
</body>
</html>"#,
        css = css::STYLES,
        updated = updated,
        alerts_region = region::ALERTS,
        alerts = regions.get(region::ALERTS).unwrap_or(LOADING),
        opportunities_region = region::OPPORTUNITIES,
        opportunities = regions.get(region::OPPORTUNITIES).unwrap_or(LOADING),
        finance_region = region::FINANCE,
        finance = regions.get(region::FINANCE).unwrap_or(LOADING),
        clients_region = region::CLIENTS,
        clients = regions.get(region::CLIENTS).unwrap_or(LOADING),
    )
}
