//! Embedded Dashboard Route

use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Sensor Node</title>
  <style>
    body { font-family: sans-serif; text-align: center; margin-top: 4em; color: #222; }
    #value { font-size: 4em; font-variant-numeric: tabular-nums; }
    .unit { font-size: 1em; color: #888; }
  </style>
</head>
<body>
  <h1>Live Reading</h1>
  <div id="value">&ndash;</div>
  <div class="unit">raw counts</div>
  <script>
    async function refresh() {
      try {
        const res = await fetch('/data');
        const body = await res.json();
        document.getElementById('value').textContent = body.adcValue;
      } catch (e) {
        // keep showing the last value
      }
    }
    setInterval(refresh, 500);
    refresh();
  </script>
</body>
</html>
"#;

/// Serve the dashboard page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
