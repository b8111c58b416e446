//! Local preview server

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::commands::generate;
use crate::Site;

/// Router serving the generated output
pub fn router(public_dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

/// Start the preview server, rebuilding on content changes when `watch` is set
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let app = router(&site.public_dir);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let site = site.clone();
        tokio::task::spawn_blocking(move || {
            let rebuilt = || println!("Regenerated, refresh the browser to see changes.");
            if let Err(e) = generate::watch_and_rebuild(&site, rebuilt) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_serves_index_html() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();

        let response = router(dir.path())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let missing = router(dir.path())
            .oneshot(Request::builder().uri("/nope.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
