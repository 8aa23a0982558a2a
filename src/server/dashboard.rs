// src/server/dashboard.rs

//! Dashboard page handler.

use axum::extract::State;
use axum::response::Html;

use crate::error::Result;
use crate::models::SentimentSummary;
use crate::server::AppState;

/// Display template for the dashboard page.
///
/// Supported placeholders:
/// - `{positive_count}`, `{negative_count}`, `{neutral_count}`
/// - `{last_update}`
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Sentiment Dashboard</title>
</head>
<body>
<h1>Sentiment Dashboard</h1>
<ul>
  <li class="card positive">Positive: {positive_count}</li>
  <li class="card negative">Negative: {negative_count}</li>
  <li class="card neutral">Neutral: {neutral_count}</li>
</ul>
<p>Last update: {last_update}</p>
</body>
</html>
"#;

/// `GET /` — render the aggregated counts.
pub async fn show(State(state): State<AppState>) -> Result<Html<String>> {
    let summary = state.summary.summary().await?;
    Ok(Html(render(&summary)))
}

/// Fill the page template from a summary.
fn render(summary: &SentimentSummary) -> String {
    PAGE_TEMPLATE
        .replace("{positive_count}", &summary.positive_count.to_string())
        .replace("{negative_count}", &summary.negative_count.to_string())
        .replace("{neutral_count}", &summary.neutral_count.to_string())
        .replace("{last_update}", &summary.last_update_display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_all_placeholders() {
        let summary = SentimentSummary::new(3, 2, 1, None);
        let page = render(&summary);
        assert!(page.contains("Positive: 3"));
        assert!(page.contains("Negative: 2"));
        assert!(page.contains("Neutral: 1"));
        assert!(page.contains("Last update: N/A"));
        assert!(!page.contains('{'));
    }
}
