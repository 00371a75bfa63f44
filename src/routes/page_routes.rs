//! The catch-all demo page.

use axum::extract::{OriginalUri, State};
use axum::http::{header, HeaderMap};
use axum::response::Html;
use axum::{routing::get, Router};
use tracing::debug;

use crate::models::{Claims, DemoToken};
use crate::state::AppState;
use crate::utils::html::json_to_html;
use crate::utils::http_helpers::HTTPError;

/// Text shown in place of the job title when `/get-job` cannot be read.
pub const JOB_FETCH_ERROR: &str = "Error fetching job title";

/// Registers the page handler on every GET path.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(show_page))
        .route("/{*path}", get(show_page))
}

/// Values interpolated into the page.
struct PageContext<'a> {
    host: &'a str,
    uri_path: &'a str,
    token: &'a str,
    decoded: &'a Claims,
}

/// Mints the demo token, reads it straight back and echoes the request.
async fn show_page(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<Html<String>, HTTPError> {
    let host = headers
        .get(header::HOST)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default();
    let uri_path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let token = DemoToken::default().mint(&state.config.jwt)?;
    let decoded = DemoToken::decode(&token, &state.config.jwt)?;

    debug!(host = %host, uri_path = %uri_path, "Serving demo page");

    Ok(Html(render_page(&PageContext {
        host: &host,
        uri_path,
        token: &token,
        decoded: &decoded,
    })))
}

/// Render the full HTML document. Nothing is escaped.
fn render_page(ctx: &PageContext<'_>) -> String {
    format!(
        r#"
    <html>
    <head>
        <style>
            body {{ font-family: Arial, sans-serif; background-color: white; color: black; }}
            .banner {{ background-color: green; color: white; padding: 10px; }}
            .main {{ text-align: center; }}
            .main h1 {{ font-size: 48px; font-weight: bold; }}
            .jwt {{ background-color: lightgrey; color: black; padding: 10px; margin: 20px; }}
            .key {{ color: blue; font-weight: bold; }}
            .value {{ color: darkgreen; }}
        </style>
    </head>
    <body>
        <div class="banner">
            Host header: {host}<br>
            URI Path: {uri_path}<br>
            Authorization: Bearer {token}
        </div>
        <div class="jwt">
            <strong>Decoded JWT:</strong><br>
            {{<br>
            {decoded}<br>
            }}
        </div>
        <div class="main">
            <h1 id="jobTitle">Loading...</h1>
        </div>
        <script>
            fetch('/get-job')
                .then(response => response.json())
                .then(data => {{
                    document.getElementById('jobTitle').innerText = data.job;
                }})
                .catch(error => {{
                    console.error('{error}:', error);
                    document.getElementById('jobTitle').innerText = '{error}';
                }});
        </script>
    </body>
    </html>"#,
        host = ctx.host,
        uri_path = ctx.uri_path,
        token = ctx.token,
        decoded = json_to_html(ctx.decoded),
        error = JOB_FETCH_ERROR,
    )
}
