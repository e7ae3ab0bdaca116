//! Integration tests for the generation client against a stub backend.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use missive_client::AssistantClient;
use missive_core::{ClientConfig, EncodedResult, GenerationMode, GenerationModel};
use missive_error::ClientError;
use serde_json::json;

/// Binds the stub app to an ephemeral port and returns its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> AssistantClient {
    AssistantClient::new(ClientConfig::new(base_url)).expect("build client")
}

#[tokio::test]
async fn ask_text_round_trips_against_stub() {
    let app = Router::new().route(
        "/ask",
        post(|Json(body): Json<serde_json::Value>| async move {
            assert_eq!(body["question"], "What is 2+2?");
            assert_eq!(body["model"], "claude");
            assert_eq!(body["userId"], "user-1");
            Json(json!({
                "text": "4",
                "citations": [],
                "model": "claude",
                "timestamp": 1_700_000_000,
            }))
        }),
    );
    let base = serve(app).await;

    let result = client_for(&base)
        .ask_text("What is 2+2?", GenerationModel::Claude, Some("user-1"))
        .await
        .expect("ask succeeds");

    assert_eq!(result.text, "4");
    assert!(result.citations.is_empty());
    assert_eq!(result.model, GenerationModel::Claude);
    assert_eq!(result.timestamp, 1_700_000_000.0);

    // The freshly generated result survives the send/open wire trip intact.
    let url = missive_codec::encode_text(&result);
    match missive_codec::decode(&url).expect("wire decode succeeds") {
        missive_core::EncodedResult::Text(reopened) => {
            assert_eq!(reopened.text, result.text);
            assert_eq!(reopened.model, result.model);
            assert_eq!(reopened.citations, result.citations);
        }
        other => panic!("expected text result, got {:?}", other),
    }
}

#[tokio::test]
async fn http_500_maps_to_api_error() {
    let app = Router::new().route(
        "/ask",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded") }),
    );
    let base = serve(app).await;

    let err = client_for(&base)
        .ask_text("hello", GenerationModel::Gpt4, None)
        .await
        .expect_err("500 must fail");

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "backend exploded");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn shape_mismatch_maps_to_decoding_error() {
    // Valid JSON, but no `text` field.
    let app = Router::new().route(
        "/ask",
        post(|| async {
            Json(json!({
                "citations": [],
                "model": "claude",
                "timestamp": 1_700_000_000,
            }))
        }),
    );
    let base = serve(app).await;

    let err = client_for(&base)
        .ask_text("hello", GenerationModel::Claude, None)
        .await
        .expect_err("shape mismatch must fail");

    assert!(matches!(err, ClientError::Decoding(_)), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_host_maps_to_transport_error() {
    // Nothing listens on the discard port.
    let client = client_for("http://127.0.0.1:9");

    let err = client
        .ask_text("hello", GenerationModel::Claude, None)
        .await
        .expect_err("unreachable host must fail");

    assert!(
        matches!(err, ClientError::Transport { .. }),
        "expected Transport, got {:?}",
        err
    );
}

#[tokio::test]
async fn generate_image_supports_inline_data_uri() {
    let app = Router::new().route(
        "/generate-image",
        post(|Json(body): Json<serde_json::Value>| async move {
            assert_eq!(body["prompt"], "a lighthouse at dusk");
            Json(json!({
                "imageUrl": "data:image/png;base64,aGVsbG8=",
                "prompt": "a lighthouse at dusk",
                "model": "dalle",
                "timestamp": 1_700_000_000,
            }))
        }),
    );
    let base = serve(app).await;
    let client = client_for(&base);

    let result = client
        .generate_image("a lighthouse at dusk", None)
        .await
        .expect("generation succeeds");

    // Inline payload decodes locally, no second round trip.
    let bytes = client
        .download_image(&result.image_url)
        .await
        .expect("inline decode succeeds");
    assert_eq!(bytes, b"hello");
}

#[tokio::test]
async fn generate_dispatches_on_mode() {
    let app = Router::new()
        .route(
            "/ask",
            post(|| async {
                Json(json!({
                    "text": "4",
                    "citations": [],
                    "model": "claude",
                    "timestamp": 1_700_000_000,
                }))
            }),
        )
        .route(
            "/generate-image",
            post(|| async {
                Json(json!({
                    "imageUrl": "https://cdn.example.com/a.png",
                    "prompt": "a cat",
                    "model": "dalle",
                    "timestamp": 1_700_000_000,
                }))
            }),
        );
    let base = serve(app).await;
    let client = client_for(&base);

    let text = client
        .generate(GenerationMode::Text, "What is 2+2?", GenerationModel::Claude, None)
        .await
        .expect("text generation succeeds");
    assert!(matches!(text, EncodedResult::Text(_)));

    let image = client
        .generate(GenerationMode::Image, "a cat", GenerationModel::Claude, None)
        .await
        .expect("image generation succeeds");
    assert!(matches!(image, EncodedResult::Image(_)));
}

#[tokio::test]
async fn download_image_fetches_plain_urls() {
    let app = Router::new().route("/image.png", get(|| async { vec![0xFF_u8, 0xD8, 0xFF] }));
    let base = serve(app).await;
    let client = client_for(&base);

    let bytes = client
        .download_image(&format!("{}/image.png", base))
        .await
        .expect("download succeeds");
    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn download_image_surfaces_http_failures() {
    let app = Router::new();
    let base = serve(app).await;
    let client = client_for(&base);

    let err = client
        .download_image(&format!("{}/missing.png", base))
        .await
        .expect_err("404 must fail");

    assert!(
        matches!(err, ClientError::Api { status: 404, .. }),
        "expected 404 Api error, got {:?}",
        err
    );
}

#[tokio::test]
async fn invalid_inline_payload_is_a_decoding_error() {
    let client = client_for("http://127.0.0.1:9");

    let err = client
        .download_image("data:image/png;base64,@@not-base64@@")
        .await
        .expect_err("bad payload must fail");

    assert!(matches!(err, ClientError::Decoding(_)), "got {:?}", err);
}
