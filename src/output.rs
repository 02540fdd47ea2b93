use std::path::Path;

use anyhow::{Context, Result};
use charts::Figure;
use tracing::info;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Keeps `</script>` inside embedded JSON from closing the script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Standalone HTML page drawing `figure` with plotly.js, with an optional
/// paragraph of narrative text under the chart.
pub fn render_page(title: &str, figure: &Figure, narrative: Option<&str>) -> Result<String> {
    let data = serde_json::to_string(&figure.data).context("Failed to serialize chart data")?;
    let layout = serde_json::to_string(&figure.layout).context("Failed to serialize chart layout")?;
    let config = serde_json::to_string(&figure.config).context("Failed to serialize chart config")?;

    let narrative = narrative
        .map(|text| format!("  <p class=\"insight\">{}</p>\n", escape_html(text)))
        .unwrap_or_default();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="{cdn}"></script>
</head>
<body>
  <h1>{title}</h1>
  <div id="chart"></div>
{narrative}  <script>
    Plotly.newPlot("chart", {data}, {layout}, {config});
  </script>
</body>
</html>
"#,
        title = escape_html(title),
        cdn = PLOTLY_CDN,
        narrative = narrative,
        data = script_safe(&data),
        layout = script_safe(&layout),
        config = script_safe(&config),
    ))
}

pub fn write_page(path: &Path, title: &str, figure: &Figure, narrative: Option<&str>) -> Result<()> {
    let page = render_page(title, figure, narrative)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, page).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Chart written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts::ChartDispatcher;
    use common::{ChartKind, Dataset, FieldSelection, Row};

    fn figure() -> Figure {
        let dataset = Dataset::new(vec![Row::new().with("name", "</script>").with("profit", 1)]);
        let selection = FieldSelection::new("name", vec!["profit".to_string()]).unwrap();
        let chart = ChartDispatcher::default()
            .render(ChartKind::Bar, &dataset, &selection)
            .unwrap();
        Figure::from_chart(&chart, Some("Profit"))
    }

    #[test]
    fn test_page_embeds_figure_and_escapes_text() {
        let page = render_page("Profit <by> country", &figure(), Some("Up & to the right")).unwrap();
        assert!(page.contains("Plotly.newPlot(\"chart\""));
        assert!(page.contains("<title>Profit &lt;by&gt; country</title>"));
        assert!(page.contains("Up &amp; to the right"));
        assert!(page.contains("<\\/script>"));
        assert_eq!(page.matches("</script>").count(), 2);
    }

    #[test]
    fn test_page_without_narrative() {
        let page = render_page("Profit", &figure(), None).unwrap();
        assert!(!page.contains("class=\"insight\""));
    }
}
