use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use scribe::application::ports::{FileStager, StagingError};
use scribe::infrastructure::storage::HttpFileStager;

const AUDIO_BODY: &[u8] = b"OggS-fake-voice-message";

async fn start_mock_file_server() -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new()
        .route(
            "/file/bot123:SECRET/voice/file_1.oga",
            get(|| async { AUDIO_BODY }),
        )
        .route(
            "/file/bot123:SECRET/voice/forbidden.oga",
            get(|| async { (StatusCode::FORBIDDEN, "nope") }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_source_serves_file_when_staging_then_bytes_land_in_nested_destination() {
    let (base_url, _shutdown) = start_mock_file_server().await;
    let dir = tempfile::TempDir::new().unwrap();
    let destination = dir.path().join("texts").join("42").join("job");

    let stager = HttpFileStager::new();
    let bytes = stager
        .stage(
            &format!("{}/file/bot123:SECRET/voice/file_1.oga", base_url),
            &destination,
        )
        .await
        .unwrap();

    assert_eq!(bytes, AUDIO_BODY.len() as u64);
    assert_eq!(std::fs::read(&destination).unwrap(), AUDIO_BODY);
}

#[tokio::test]
async fn given_source_returns_404_when_staging_then_rejected_and_no_file_written() {
    let (base_url, _shutdown) = start_mock_file_server().await;
    let dir = tempfile::TempDir::new().unwrap();
    let destination = dir.path().join("texts").join("42").join("job");

    let err = HttpFileStager::new()
        .stage(&format!("{}/file/missing.oga", base_url), &destination)
        .await
        .unwrap_err();

    match err {
        StagingError::Rejected { status } => assert!(status.starts_with("404")),
        other => panic!("expected rejection, got {:?}", other),
    }
    assert!(!destination.exists());
    assert!(destination.parent().unwrap().exists());
}

#[tokio::test]
async fn given_source_returns_403_when_staging_then_rejected() {
    let (base_url, _shutdown) = start_mock_file_server().await;
    let dir = tempfile::TempDir::new().unwrap();

    let err = HttpFileStager::new()
        .stage(
            &format!("{}/file/bot123:SECRET/voice/forbidden.oga", base_url),
            &dir.path().join("job"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StagingError::Rejected { .. }));
}

#[tokio::test]
async fn given_unreachable_host_when_staging_then_network_error_hides_credentials() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let dir = tempfile::TempDir::new().unwrap();

    let err = HttpFileStager::new()
        .stage(
            &format!("http://{}/file/bot123:SECRET/voice/file_1.oga", addr),
            &dir.path().join("job"),
        )
        .await
        .unwrap_err();

    match err {
        StagingError::Network(message) => assert!(!message.contains("SECRET")),
        other => panic!("expected network error, got {:?}", other),
    }
}
