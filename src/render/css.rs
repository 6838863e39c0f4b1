//! Dashboard CSS styles
//!
//! Uses CSS custom properties (variables) for theming.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0d1117;
    --card: #161b22;
    --border: #30363d;
    --text: #c9d1d9;
    --text-dim: #8b949e;
    --red: #f85149;
    --yellow: #d29922;
    --blue: #58a6ff;
    --green: #3fb950;
    --purple: #a371f7;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'PingFang SC', 'Microsoft YaHei', sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1200px; margin: 0 auto; }

/* Header */
header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }

.refresh-time { font-size: 12px; color: var(--text-dim); }

/* Grid Layout */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 16px;
}

.wide { grid-column: 1 / -1; }

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 16px;
}

.card-header { margin-bottom: 12px; }
.card-title { font-size: 14px; font-weight: 600; color: var(--text-dim); }

.placeholder { color: var(--text-dim); font-size: 13px; }

/* Alerts */
.alert {
    display: flex;
    align-items: flex-start;
    gap: 10px;
    padding: 12px;
    border-radius: 6px;
    margin-bottom: 8px;
}

.alert-emergency { background: rgba(248, 81, 73, 0.15); color: var(--red); }
.alert-warning { background: rgba(210, 153, 34, 0.15); color: var(--yellow); }
.alert-info { background: rgba(88, 166, 255, 0.15); color: var(--blue); }

.alert-message { font-size: 13px; }
.alert-time { font-size: 11px; color: var(--text-dim); margin-top: 4px; }

/* Opportunities */
.opportunity {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 12px 0;
    border-bottom: 1px solid var(--border);
}

.opportunity:last-child { border-bottom: none; }
.opportunity-name { font-size: 15px; font-weight: 500; }
.opportunity-description { font-size: 12px; color: var(--text-dim); margin-top: 2px; }

.platform-badge {
    padding: 4px 12px;
    border-radius: 20px;
    font-size: 12px;
    font-weight: 600;
    background: rgba(63, 185, 80, 0.2);
    color: var(--green);
    white-space: nowrap;
}

/* Metric blocks */
.metric-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
    gap: 12px;
}

.metric {
    padding: 12px;
    border-radius: 6px;
    background: rgba(88, 166, 255, 0.08);
}

.metric-label { font-size: 12px; color: var(--text-dim); }
.metric-value { font-size: 22px; font-weight: 700; margin-top: 4px; }

.metric-balance .metric-value { color: var(--blue); }
.metric-predicted .metric-value { color: var(--green); }
.metric-tax .metric-value { color: var(--yellow); }
.metric-clients .metric-value { color: var(--purple); }
.metric-projects .metric-value { color: var(--blue); }
";
