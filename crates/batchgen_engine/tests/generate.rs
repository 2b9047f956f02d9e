use std::time::Duration;

use batchgen_engine::{
    FailureKind, GenerateRequest, GenerateResult, GenerateSettings, Generator, ReqwestGenerator,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(lines: &[&str]) -> GenerateRequest {
    GenerateRequest {
        system_prompt: "extract".to_string(),
        user_inputs: lines.iter().map(|line| line.to_string()).collect(),
    }
}

fn generator_for(server: &MockServer) -> ReqwestGenerator {
    ReqwestGenerator::new(GenerateSettings {
        base_url: server.uri(),
        ..GenerateSettings::default()
    })
}

#[tokio::test]
async fn posts_batch_and_returns_results_in_order() {
    batchgen_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "system_prompt": "extract",
            "user_inputs": ["The.Matrix.1999", "Dune.2021"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "input": "The.Matrix.1999", "output": "{\"title\":\"The Matrix\"}" },
                { "input": "Dune.2021", "output": "not json" },
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = generator_for(&server)
        .generate(1, &request(&["The.Matrix.1999", "Dune.2021"]))
        .await
        .expect("generate ok");

    assert_eq!(
        results,
        vec![
            GenerateResult {
                input: "The.Matrix.1999".to_string(),
                output: "{\"title\":\"The Matrix\"}".to_string(),
            },
            GenerateResult {
                input: "Dune.2021".to_string(),
                output: "not json".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn json_detail_becomes_status_prefixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "X" })))
        .mount(&server)
        .await;

    let err = generator_for(&server)
        .generate(2, &request(&["a"]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "500: X");
}

#[tokio::test]
async fn unstructured_body_is_passed_through_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(502).set_body_raw("<html>boom</html>", "text/html"))
        .mount(&server)
        .await;

    let err = generator_for(&server)
        .generate(3, &request(&["a"]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert_eq!(err.message, "502: <html>boom</html>");
}

#[tokio::test]
async fn empty_error_body_leaves_message_after_status_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = generator_for(&server)
        .generate(11, &request(&["a"]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert_eq!(err.message, "502: ");
}

#[tokio::test]
async fn multiline_diagnostics_keep_their_newlines() {
    let server = MockServer::start().await;
    let trace = "Traceback (most recent call last):\n  File \"main.py\", line 1\nRuntimeError: <bad>";
    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string(trace))
        .mount(&server)
        .await;

    let err = generator_for(&server)
        .generate(4, &request(&["a"]))
        .await
        .unwrap_err();

    assert_eq!(err.message, format!("500: {trace}"));
}

#[tokio::test]
async fn malformed_success_body_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "outputs": [] })))
        .mount(&server)
        .await;

    let err = generator_for(&server)
        .generate(5, &request(&["a"]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedResponse);
    assert!(
        err.message.starts_with("200: malformed response body: "),
        "{}",
        err.message
    );
    assert!(err.message.contains("results"), "{}", err.message);
}

#[tokio::test]
async fn empty_results_are_a_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let results = generator_for(&server)
        .generate(6, &request(&["a"]))
        .await
        .expect("generate ok");
    assert!(results.is_empty());
}

#[tokio::test]
async fn base_url_prefix_and_trailing_slash_are_respected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proxy/api/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = ReqwestGenerator::new(GenerateSettings {
        base_url: format!("{}/proxy/", server.uri()),
        ..GenerateSettings::default()
    });
    generator
        .generate(7, &request(&["a"]))
        .await
        .expect("generate ok");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let generator = ReqwestGenerator::new(GenerateSettings {
        base_url: format!("http://127.0.0.1:{port}"),
        connect_timeout: Duration::from_secs(2),
        ..GenerateSettings::default()
    });
    let err = generator.generate(8, &request(&["a"])).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Transport);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn slow_server_hits_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({ "results": [] })),
        )
        .mount(&server)
        .await;

    let generator = ReqwestGenerator::new(GenerateSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..GenerateSettings::default()
    });
    let err = generator.generate(9, &request(&["a"])).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn invalid_base_url_fails_before_any_call() {
    let generator = ReqwestGenerator::new(GenerateSettings {
        base_url: "not a url".to_string(),
        ..GenerateSettings::default()
    });
    let err = generator.generate(10, &request(&["a"])).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}
