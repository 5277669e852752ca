//! End-to-end host tests: TOML config on disk, credentials from a lookup,
//! and a full search against mock provider endpoints.

use pictor::{PictorConfig, PictorError};
use pictor_search::{ImageSource, SearchError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(dir: &tempfile::TempDir, server: &MockServer) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    let body = format!(
        r#"
[search]
timeout_seconds = 5

[search.pixabay]
base_url = "{uri}"

[search.unsplash]
enabled = false

[search.pexels]
base_url = "{uri}"
"#,
        uri = server.uri()
    );
    std::fs::write(&path, body).expect("write config");
    path
}

#[tokio::test]
async fn search_uses_file_endpoints_and_overlaid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("key", "env-pixabay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [{
                "id": 1,
                "tags": "cat",
                "previewURL": "https://cdn.example/1_150.jpg",
                "webformatURL": "https://cdn.example/1_640.jpg"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(header("Authorization", "env-pexels"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = write_config(&dir, &mock_server);

    let mut config = PictorConfig::from_file(&config_path).expect("load");
    config.apply_credentials(|name| match name {
        "PIXABAY_API_KEY" => Some("env-pixabay".to_string()),
        "PEXELS_API_KEY" => Some("env-pexels".to_string()),
        _ => None,
    });

    let result = pictor::run_search(&config, "cat").await.expect("partial success");
    assert_eq!(result.images.len(), 1);
    assert_eq!(result.images[0].source, ImageSource::Pixabay);
    assert_eq!(result.errors, vec!["Pexels API failed."]);

    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["images"][0]["thumbnailUrl"], "https://cdn.example/1_150.jpg");
    assert_eq!(json["errors"][0], "Pexels API failed.");
}

#[tokio::test]
async fn search_fails_when_every_provider_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = write_config(&dir, &mock_server);

    let mut config = PictorConfig::from_file(&config_path).expect("load");
    config.apply_credentials(|_| Some("k".to_string()));

    let err = pictor::run_search(&config, "cat").await.unwrap_err();
    assert!(matches!(
        err,
        PictorError::Search(SearchError::AllSourcesUnavailable(_))
    ));
    assert_eq!(
        err.to_string(),
        "failed to fetch images from all sources: Pixabay API failed. Pexels API failed."
    );
}
