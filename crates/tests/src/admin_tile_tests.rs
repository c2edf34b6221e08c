use crate::common::*;
use pretty_assertions::assert_eq;
use shared_types::tile_form::fields;
use shared_types::{validate_tile_form, AppErrorKind, MetricDraft, TileForm};

fn acme_form() -> TileForm {
    TileForm {
        title: "Acme Holdings".to_string(),
        category: "Technology".to_string(),
        description: "Diversified technology holding company.".to_string(),
        footer_left: "NASDAQ: ACME".to_string(),
        footer_right: "2026-09-30".to_string(),
        analyst_notes: "Interest income remains well below the screening limit.".to_string(),
        compliance_points: vec!["No alcohol or gambling revenue".to_string()],
        compliance_metrics: vec![MetricDraft {
            criteria: "Debt to market cap".to_string(),
            threshold: "33%".to_string(),
            actual: "12%".to_string(),
            comparison_type: "less_than".to_string(),
            custom_status: String::new(),
        }],
    }
}

/// Admin routes reject clients without the admin bearer token.
#[tokio::test]
async fn admin_routes_require_token() {
    let (client, _state) = stub_backend(StubState::default()).await;

    let err = client.admin_list_tiles().await.expect_err("no token");
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(err.is_unauthorized());
}

/// Form → payload → create, then the tile shows up in both lists.
#[tokio::test]
async fn create_tile_from_validated_form() {
    let (client, state) = stub_backend(StubState::default()).await;
    let admin = client.with_bearer_token(ADMIN_TOKEN);

    let payload = validate_tile_form(&acme_form(), &[], None).expect("form is valid");
    assert_eq!(payload.slug, "acme-holdings");
    assert_eq!(payload.detail_path, "/shariah/acme-holdings");

    let created = admin.admin_create_tile(&payload).await.expect("create succeeds");
    assert_eq!(created.id, "tile-1");
    assert_eq!(created.cta_label, "View Analysis");

    let admin_list = admin.admin_list_tiles().await.expect("admin list");
    assert_eq!(admin_list.len(), 1);

    let public = admin.get_tile("acme-holdings").await.expect("public detail");
    assert_eq!(public.id, created.id);
    assert_eq!(state.lock().await.tiles.len(), 1);
}

/// The client-side scan catches a duplicate slug before any request; the
/// backend's 409 is the fallback.
#[tokio::test]
async fn duplicate_slug_is_caught_client_side_and_server_side() {
    let existing = sample_tile("t-1", "acme-holdings", "Acme Holdings");
    let (client, _state) = stub_backend(StubState {
        tiles: vec![existing.clone()],
        ..StubState::default()
    })
    .await;
    let admin = client.with_bearer_token(ADMIN_TOKEN);

    let errors = validate_tile_form(&acme_form(), &[existing.clone()], None)
        .expect_err("slug collides");
    assert!(errors.contains_key(fields::TITLE));

    // Skipping the scan, the backend still refuses.
    let payload = validate_tile_form(&acme_form(), &[], None).expect("valid without scan");
    let err = admin.admin_create_tile(&payload).await.expect_err("conflict");
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "A tile with this slug already exists");
}

/// Editing keeps the slug check from tripping over the tile being edited.
#[tokio::test]
async fn update_tile_keeps_its_own_slug() {
    let existing = sample_tile("t-1", "acme-holdings", "Acme Holdings");
    let (client, _state) = stub_backend(StubState {
        tiles: vec![existing.clone()],
        ..StubState::default()
    })
    .await;
    let admin = client.with_bearer_token(ADMIN_TOKEN);

    let mut form = TileForm::from_tile(&existing);
    form.category = "Industrials".to_string();
    let payload = validate_tile_form(&form, &[existing.clone()], Some("t-1"))
        .expect("own slug is not a collision");

    let updated = admin
        .admin_update_tile("t-1", &payload)
        .await
        .expect("update succeeds");
    assert_eq!(updated.category, "Industrials");
    assert_eq!(updated.slug, "acme-holdings");
    assert!(updated.updated_at.is_some());
}

/// Delete returns the backend's message and removes the tile.
#[tokio::test]
async fn delete_tile() {
    let (client, state) = stub_backend(StubState {
        tiles: vec![
            sample_tile("t-1", "acme-holdings", "Acme Holdings"),
            sample_tile("t-2", "globex-corp", "Globex Corp"),
        ],
        ..StubState::default()
    })
    .await;
    let admin = client.with_bearer_token(ADMIN_TOKEN);

    let res = admin.admin_delete_tile("t-1").await.expect("delete succeeds");
    assert_eq!(res.message, "Tile deleted");

    let remaining: Vec<String> = state.lock().await.tiles.iter().map(|t| t.id.clone()).collect();
    assert_eq!(remaining, vec!["t-2".to_string()]);

    let err = admin.admin_delete_tile("t-1").await.expect_err("already gone");
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
