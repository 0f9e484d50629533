//! Status board served over HTTP
//!
//! - `GET /`: HTML table of the current snapshot
//! - `GET /api/tools`: the current snapshot as JSON

use std::fmt::Write;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::monitor::snapshot::Snapshot;
use crate::monitor::types::Batch;

/// Build the board router reading from `snapshot`
pub fn router(snapshot: Snapshot) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/api/tools", get(list_tools))
        .with_state(snapshot)
}

/// Serve the board on `listener` until `shutdown` is cancelled
pub async fn serve(
    listener: TcpListener,
    snapshot: Snapshot,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    info!("Status board listening on {}", listener.local_addr()?);

    axum::serve(listener, router(snapshot))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}

async fn home_page(State(snapshot): State<Snapshot>) -> impl IntoResponse {
    Html(render_home_page(&snapshot.read()))
}

async fn list_tools(State(snapshot): State<Snapshot>) -> Json<Batch> {
    Json(Batch::clone(&snapshot.read()))
}

fn render_home_page(batch: &Batch) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Tool Versions</title>\n<style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         table { border-collapse: collapse; }\n\
         th, td { border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }\n\
         tr.up-to-date td.status { color: #1a7f37; }\n\
         tr.outdated td.status { color: #cf222e; }\n\
         tr.unknown td.status { color: #9a6700; }\n\
         </style>\n</head>\n<body>\n<h1>Tool Versions</h1>\n",
    );

    match batch.fetched_at {
        Some(at) => {
            let _ = writeln!(
                html,
                "<p>Last updated {}</p>",
                at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        None => html.push_str("<p>Waiting for the first check to complete.</p>\n"),
    }

    html.push_str(
        "<table>\n<tr><th>Tool</th><th>Latest</th><th>Current</th>\
         <th>Status</th><th>Comment</th></tr>\n",
    );

    for tool in &batch.tools {
        let _ = writeln!(
            html,
            "<tr class=\"{status}\"><td>{}</td><td>{}</td><td>{}</td>\
             <td class=\"status\">{status}</td><td>{}</td></tr>",
            escape_html(&tool.name),
            escape_html(&tool.latest_version),
            escape_html(&tool.remote_version),
            escape_html(&tool.comment),
            status = tool.status.as_str(),
        );
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
