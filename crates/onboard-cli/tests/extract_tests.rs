//! End-to-end tests for the extract command against a stub endpoint

use onboard_cli::cli::ExtractArgs;
use onboard_cli::commands::execute_extract;
use onboard_cli::config::OutputFormat;
use onboard_cli::{CliError, Config, Formatter};
use onboard_domain::ClientProfile;
use onboard_sdk::FallbackPolicy;
use serde_json::json;
use std::fs;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn args(file: std::path::PathBuf, endpoint: String) -> ExtractArgs {
    ExtractArgs {
        file,
        endpoint: Some(endpoint),
        fallback: false,
        merge_into: None,
        quiet: true,
    }
}

#[tokio::test]
async fn test_extract_merges_into_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documentType": "National ID",
            "firstName": "Maria",
            "lastName": "Lopez",
            "idNumber": "4455667788",
            "address": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let document = dir.path().join("front.png");
    fs::write(&document, b"png-bytes").unwrap();
    let profile_path = dir.path().join("profile.json");
    fs::write(&profile_path, r#"{"address":"7 Harbour Road","email":"m@example.com"}"#).unwrap();

    let mut extract = args(document, format!("{}/extract", server.uri()));
    extract.merge_into = Some(profile_path.clone());

    execute_extract(extract, &Config::default(), &Formatter::new(OutputFormat::Json, false))
        .await
        .unwrap();

    let profile: ClientProfile =
        serde_json::from_str(&fs::read_to_string(&profile_path).unwrap()).unwrap();
    assert_eq!(profile.first_name, "Maria");
    assert_eq!(profile.document_type, "National ID");
    assert_eq!(profile.address, "7 Harbour Road");
    assert_eq!(profile.email, "m@example.com");
}

#[tokio::test]
async fn test_extract_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let document = dir.path().join("front.png");
    fs::write(&document, b"png-bytes").unwrap();

    let result = execute_extract(
        args(document, format!("{}/extract", server.uri())),
        &Config::default(),
        &Formatter::new(OutputFormat::Table, false),
    )
    .await;

    match result {
        Err(CliError::ExtractionFailed { message, cause }) => {
            assert_eq!(message, "Failed to process document. Please try again.");
            assert!(cause.contains("500"));
        }
        other => panic!("expected extraction failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_extract_fallback_from_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let document = dir.path().join("my_passport.jpg");
    fs::write(&document, b"jpeg-bytes").unwrap();
    let profile_path = dir.path().join("profile.json");
    fs::write(&profile_path, r#"{"email":"j@example.com"}"#).unwrap();

    let config = Config {
        fallback: FallbackPolicy::MockRecord,
        ..Default::default()
    };
    let mut extract = args(document, format!("{}/extract", server.uri()));
    extract.merge_into = Some(profile_path.clone());
    extract.quiet = false;

    execute_extract(extract, &config, &Formatter::new(OutputFormat::Table, false))
        .await
        .unwrap();

    // The mock record was substituted and merged, keeping existing contact details
    let profile: ClientProfile =
        serde_json::from_str(&fs::read_to_string(&profile_path).unwrap()).unwrap();
    assert_eq!(profile.document_type, "Passport");
    assert_eq!(profile.first_name, "John");
    assert_eq!(profile.email, "j@example.com");
}

#[tokio::test]
async fn test_extract_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = execute_extract(
        args(dir.path().join("absent.png"), "http://127.0.0.1:9/extract".to_string()),
        &Config::default(),
        &Formatter::new(OutputFormat::Table, false),
    )
    .await;
    assert!(matches!(result, Err(CliError::Sdk(_))));
}
