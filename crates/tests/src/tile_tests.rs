use crate::common::*;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, MetricOutcome, Session};

/// The public list returns every tile in backend order.
#[tokio::test]
async fn list_tiles_returns_all_tiles() {
    let (client, _state) = stub_backend(StubState {
        tiles: vec![
            sample_tile("t-1", "acme-holdings", "Acme Holdings"),
            sample_tile("t-2", "globex-corp", "Globex Corp"),
        ],
        ..StubState::default()
    })
    .await;

    let tiles = client.list_tiles().await.expect("list succeeds");
    let slugs: Vec<&str> = tiles.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["acme-holdings", "globex-corp"]);
}

/// Detail lookup goes by slug; metrics evaluate on the client.
#[tokio::test]
async fn get_tile_by_slug() {
    let (client, _state) = stub_backend(StubState {
        tiles: vec![sample_tile("t-1", "acme-holdings", "Acme Holdings")],
        ..StubState::default()
    })
    .await;

    let tile = client.get_tile("acme-holdings").await.expect("tile exists");
    assert_eq!(tile.title, "Acme Holdings");

    let outcomes: Vec<MetricOutcome> = tile.compliance_metrics.iter().map(MetricOutcome::of).collect();
    assert_eq!(outcomes, vec![MetricOutcome::Pass, MetricOutcome::Fail]);
    assert_eq!(tile.passing_metrics(), 1);
}

/// Unknown slugs come back as NotFound so the page can show its own message.
#[tokio::test]
async fn unknown_slug_is_not_found() {
    let (client, _state) = stub_backend(StubState::default()).await;

    let err = client.get_tile("no-such-company").await.expect_err("missing");
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Tile not found");
}

/// Signed-out visitors see the tile but the premium content is locked.
#[tokio::test]
async fn signed_out_visitor_gets_locked_tile() {
    let (client, _state) = stub_backend(StubState {
        tiles: vec![sample_tile("t-1", "acme-holdings", "Acme Holdings")],
        ..StubState::default()
    })
    .await;

    let user = client.current_user().await.expect("me");
    assert_eq!(user, None);
    let tile = client.get_tile("acme-holdings").await.expect("tile exists");
    assert!(!tile.locked_title.is_empty());
    assert!(Session::anonymous().tile_access().is_locked());
}

/// Requests to a closed port are reported as network failures.
#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let config = shared_types::ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        ..shared_types::ApiConfig::default()
    };
    let client = api_client::ApiClient::new(config);

    let err = client.list_tiles().await.expect_err("nothing listens on port 9");
    assert_eq!(err.kind, AppErrorKind::Network);
}
