//! The fetch, transform, render pipeline.
//!
//! ```text
//! FeedClient::fetch_summary --> build_markers --> render --> mount
//! ```
//!
//! [`build_document`] performs the network step and the two pure steps and
//! returns the owned map handle; [`mount_document`] writes it to the
//! configured output. A fetch failure stops the run before anything is
//! rendered.

use std::fs::File;
use std::io::{self, BufWriter};

use quakemap_feed::FeedClient;
use quakemap_map::{MapDocument, build_markers, render};
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;

/// Fetch the feed and build the map document for it.
pub async fn build_document(config: &AppConfig) -> Result<MapDocument, AppError> {
    let client = FeedClient::new(config.feed_url.as_str(), config.request_timeout())?;
    let summary = client.fetch_summary().await?;

    let markers = build_markers(&summary.events);
    info!(markers = markers.len(), "markers built");

    let generated_at = summary
        .metadata
        .as_ref()
        .and_then(quakemap_feed::FeedMetadata::generated_at);

    Ok(render(markers)
        .with_title(config.title.as_str())
        .with_generated_at(generated_at))
}

/// Write the rendered page to the configured output.
pub fn mount_document(document: &MapDocument, config: &AppConfig) -> Result<(), AppError> {
    if config.writes_to_stdout() {
        document.mount(&mut io::stdout().lock())?;
    } else {
        let file = File::create(&config.output).map_err(|source| AppError::Output {
            path: config.output.clone(),
            source,
        })?;
        document.mount(&mut BufWriter::new(file))?;
    }

    info!(
        output = config.output,
        markers = document.marker_count(),
        "map page written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use axum::Router;
    use axum::http::StatusCode;
    use axum::http::header::CONTENT_TYPE;
    use axum::routing::get;
    use quakemap_feed::FetchError;
    use quakemap_types::DepthColor;
    use tokio::net::TcpListener;

    use super::*;

    const FEED_PATH: &str = "/all_week.geojson";

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });
        format!("http://{addr}{FEED_PATH}")
    }

    fn feed(body: &'static str) -> Router {
        Router::new().route(
            FEED_PATH,
            get(move || async move { ([(CONTENT_TYPE, "application/json")], body) }),
        )
    }

    fn config_for(feed_url: String, output: String) -> AppConfig {
        AppConfig {
            feed_url,
            output,
            request_timeout_secs: Some(5),
            title: String::from("Test quakes"),
        }
    }

    #[tokio::test]
    async fn single_feature_end_to_end() {
        let url = serve(feed(
            r#"{"type":"FeatureCollection","features":[{"type":"Feature",
                "properties":{"mag":2.5,"place":"Test City"},
                "geometry":{"type":"Point","coordinates":[-122.4,37.8,12]}}]}"#,
        ))
        .await;
        let config = config_for(url, String::from("-"));

        let document = build_document(&config).await.unwrap();

        assert_eq!(document.marker_count(), 1);
        let marker = document.overlay.markers.first().unwrap();
        assert!((marker.radius - 25_000.0).abs() < f64::EPSILON);
        assert_eq!(marker.fill_color, DepthColor::Orange);
        assert_eq!(
            marker.popup_text,
            "Magnitude: 2.5<br>Depth: 12 km<br>Location: Test City"
        );
        assert_eq!(document.title, "Test quakes");
    }

    #[tokio::test]
    async fn empty_feed_still_mounts() {
        let url = serve(feed(r#"{"type":"FeatureCollection","features":[]}"#)).await;
        let output = std::env::temp_dir().join(format!("quakemap-empty-{}.html", std::process::id()));
        let config = config_for(url, output.to_string_lossy().into_owned());

        let document = build_document(&config).await.unwrap();
        assert_eq!(document.marker_count(), 0);
        mount_document(&document, &config).unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        std::fs::remove_file(&output).ok();
        assert!(page.contains("\"markers\":[]"));
        assert!(page.contains("<title>Test quakes</title>"));
    }

    #[tokio::test]
    async fn server_error_renders_nothing() {
        let router = Router::new().route(
            FEED_PATH,
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "internal error") }),
        );
        let url = serve(router).await;
        let config = config_for(url, String::from("-"));

        let result = build_document(&config).await;

        match result {
            Err(AppError::Fetch {
                source: FetchError::Status { status, .. },
            }) => assert_eq!(status, 500),
            other => panic!("expected fetch status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn metadata_timestamp_reaches_document() {
        let url = serve(feed(
            r#"{"type":"FeatureCollection","metadata":{"generated":1700000000000,"count":0},"features":[]}"#,
        ))
        .await;
        let config = config_for(url, String::from("-"));

        let document = build_document(&config).await.unwrap();

        assert!(document.generated_at.is_some());
    }

    #[test]
    fn unwritable_output_is_output_error() {
        let document = render(Vec::new());
        let missing_dir = std::env::temp_dir()
            .join(format!("quakemap-missing-{}", std::process::id()))
            .join("page.html");
        let config = config_for(String::new(), missing_dir.to_string_lossy().into_owned());

        let result = mount_document(&document, &config);

        assert!(matches!(result, Err(AppError::Output { .. })));
    }
}
