//! Diagnostic echo page for the development listener.
//!
//! Answers every path with a plain HTML page showing the request path and the
//! server's local time. Used to check that a port is reachable without going
//! through templates.

use axum::{http::Uri, response::Html};
use chrono::Local;

pub async fn echo(uri: Uri) -> Html<String> {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S %:z");
    tracing::debug!(path = %uri.path(), "Diagnostic echo");

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Sapunoa diagnostic</title>
</head>
<body>
    <h1>Diagnostic server is running</h1>
    <p>Path: <code>{}</code></p>
    <p>Local time: {}</p>
</body>
</html>"#,
        tera::escape_html(uri.path()),
        now
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echoes_path() {
        let Html(body) = echo(Uri::from_static("/some/where?x=1")).await;
        let expected = format!("<code>{}</code>", tera::escape_html("/some/where"));
        assert!(body.contains(&expected));
        assert!(body.contains("Local time:"));
    }

    #[tokio::test]
    async fn test_escapes_path() {
        let Html(body) = echo(Uri::from_static("/%3Cscript%3E")).await;
        assert!(body.contains("%3Cscript%3E"));
        assert!(!body.contains("<script>"));
    }
}
