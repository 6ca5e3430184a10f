use httpmock::prelude::*;
use review_etl::config::{ApiConfig, LoggingConfig};
use review_etl::utils::logger;
use review_etl::{EtlEngine, LocalStorage, ReviewPipeline, RunConfig, RunOutcome, SerpApiClient};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn engine_for(
    server: &MockServer,
    output_dir: &Path,
) -> EtlEngine<ReviewPipeline<LocalStorage, SerpApiClient>> {
    let config = RunConfig {
        output_dir: output_dir.to_path_buf(),
        request_delay: Duration::ZERO,
        ..RunConfig::for_city("Ahmehdabad")
    };
    let api = SerpApiClient::new(ApiConfig {
        base_url: server.url("/search"),
        api_key: Some("test-key".to_string()),
        ..ApiConfig::default()
    })
    .unwrap();
    let storage = LocalStorage::new(config.output_dir.clone());

    EtlEngine::new(ReviewPipeline::new(storage, api, config))
}

/// Runs `engine` with the CLI subscriber writing to `log_path` on this thread.
async fn run_logged(
    engine: EtlEngine<ReviewPipeline<LocalStorage, SerpApiClient>>,
    log_path: &Path,
) -> (RunOutcome, String) {
    let logging = LoggingConfig {
        file: Some(log_path.to_path_buf()),
        json: false,
    };
    let subscriber = logger::cli_subscriber(false, &logging).unwrap();

    let outcome = {
        let _guard = tracing::subscriber::set_default(subscriber);
        engine.run().await
    };

    (outcome, std::fs::read_to_string(log_path).unwrap())
}

fn error_lines(log: &str) -> Vec<&str> {
    log.lines().filter(|line| line.contains("ERROR")).collect()
}

#[tokio::test]
async fn test_resolution_failure_is_logged_as_error() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("scrap.log");
    std::fs::write(&log_path, "line from an earlier run\n").unwrap();
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("engine", "google_maps");
            then.status(500);
        })
        .await;

    let engine = engine_for(&server, &temp_dir.path().join("out"));
    let (outcome, log) = run_logged(engine, &log_path).await;

    assert_eq!(outcome, RunOutcome::NoCompanies);
    assert!(log.starts_with("line from an earlier run\n"));

    let errors = error_lines(&log);
    assert!(errors
        .iter()
        .any(|line| line.contains("Error fetching company place IDs")));
    assert!(errors
        .iter()
        .any(|line| line.contains("No companies found. Exiting...")));
    assert!(log.contains("Starting review scraping"));
}

#[tokio::test]
async fn test_write_failure_is_logged_as_error() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("scrap.log");
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"a file where the output directory should be").unwrap();
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("engine", "google_maps");
            then.status(200).json_body(serde_json::json!({
                "local_results": [{"title": "Acme Infotech", "place_id": "place-acme"}]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("engine", "google_maps_reviews");
            then.status(200)
                .json_body(serde_json::json!({"reviews": [{"rating": 5}]}));
        })
        .await;

    let engine = engine_for(&server, &blocker.join("reviews"));
    let (outcome, log) = run_logged(engine, &log_path).await;

    assert!(matches!(outcome, RunOutcome::WriteFailed { rows: 1, .. }));
    assert!(log.contains("Scraping reviews for Acme Infotech..."));
    assert!(error_lines(&log)
        .iter()
        .any(|line| line.contains("Error saving data to CSV")));
    assert!(!log.contains("Scraping completed!"));
}
