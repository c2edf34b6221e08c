use api_client::ApiClient;
use axum::{
    extract::{Multipart, Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use shared_types::{
    ApiConfig, AuthUser, BillingInterval, ComparisonType, ComplianceMetric, Invoice,
    InvoiceStatus, PaymentMethod, ShariahTile, ShariahTilePayload, Subscription,
    SubscriptionStatus, UpdateProfileRequest, UserRole,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Bearer token the stub accepts on admin routes.
pub const ADMIN_TOKEN: &str = "admin-token";

/// Email address the stub refuses on profile updates.
pub const TAKEN_EMAIL: &str = "taken@example.com";

#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

/// In-memory backend the stub server reads and mutates.
#[derive(Debug, Default)]
pub struct StubState {
    pub user: Option<AuthUser>,
    pub subscription: Option<Subscription>,
    pub payment_method: Option<PaymentMethod>,
    pub invoices: Vec<Invoice>,
    pub tiles: Vec<ShariahTile>,
    pub next_id: u32,
    /// Forced failure for `POST /api/subscription/cancel`.
    pub cancel_error: Option<(StatusCode, String)>,
    /// Forced failure for `GET /api/payment-method/current`.
    pub payment_error: Option<(StatusCode, String)>,
    pub cancel_reasons: Vec<String>,
    pub profile_updates: Vec<UpdateProfileRequest>,
    pub uploads: Vec<Upload>,
}

pub type Shared = Arc<Mutex<StubState>>;

type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn fail(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

fn require_admin(headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
    let expected = format!("Bearer {ADMIN_TOKEN}");
    match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(fail(StatusCode::UNAUTHORIZED, "Admin access required")),
    }
}

fn tile_from_payload(id: String, payload: ShariahTilePayload) -> ShariahTile {
    ShariahTile {
        id,
        slug: payload.slug,
        title: payload.title,
        category: payload.category,
        description: payload.description,
        footer_left: payload.footer_left,
        footer_right: payload.footer_right,
        analyst_notes: payload.analyst_notes,
        compliance_points: payload.compliance_points,
        compliance_metrics: payload.compliance_metrics,
        cta_label: payload.cta_label,
        detail_path: payload.detail_path,
        locked_title: payload.locked_title,
        locked_description: payload.locked_description,
        created_at: Some("2026-01-01T00:00:00Z".to_string()),
        updated_at: Some("2026-01-01T00:00:00Z".to_string()),
    }
}

// ── Handlers ──────────────────────────────────────────────

async fn me(State(state): State<Shared>) -> Reply {
    let s = state.lock().await;
    match &s.user {
        Some(user) => Ok(Json(json!({ "user": user }))),
        None => Err(fail(StatusCode::UNAUTHORIZED, "Not authenticated")),
    }
}

async fn current_subscription(State(state): State<Shared>) -> Reply {
    let s = state.lock().await;
    Ok(Json(json!({ "subscription": s.subscription })))
}

async fn cancel_subscription(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut s = state.lock().await;
    if let Some((status, message)) = &s.cancel_error {
        return Err(fail(*status, message));
    }
    let reason = body["reason"].as_str().unwrap_or_default().to_string();
    let Some(sub) = s.subscription.as_mut() else {
        return Err(fail(StatusCode::BAD_REQUEST, "No active subscription"));
    };
    sub.cancel_at_period_end = true;
    let sub = sub.clone();
    s.cancel_reasons.push(reason);
    Ok(Json(json!({
        "message": "Your subscription will end at the close of the billing period",
        "subscription": sub,
    })))
}

async fn payment_method(State(state): State<Shared>) -> Reply {
    let s = state.lock().await;
    if let Some((status, message)) = &s.payment_error {
        return Err(fail(*status, message));
    }
    Ok(Json(json!({ "paymentMethod": s.payment_method })))
}

async fn billing_history(State(state): State<Shared>) -> Reply {
    let s = state.lock().await;
    Ok(Json(json!({ "invoices": s.invoices })))
}

async fn update_profile(
    State(state): State<Shared>,
    Json(body): Json<UpdateProfileRequest>,
) -> Reply {
    let mut s = state.lock().await;
    if body.email == TAKEN_EMAIL {
        return Err(fail(StatusCode::CONFLICT, "Email is already in use"));
    }
    let Some(user) = s.user.as_mut() else {
        return Err(fail(StatusCode::UNAUTHORIZED, "Not authenticated"));
    };
    user.name = body.name.clone();
    user.email = body.email.clone();
    let user = user.clone();
    s.profile_updates.push(body);
    Ok(Json(json!({ "user": user })))
}

async fn upload_profile_picture(State(state): State<Shared>, mut multipart: Multipart) -> Reply {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| fail(StatusCode::BAD_REQUEST, "Malformed upload"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| fail(StatusCode::BAD_REQUEST, "Malformed upload"))?;
        upload = Some(Upload {
            field: name,
            file_name,
            content_type,
            size: bytes.len(),
        });
    }
    let Some(upload) = upload.filter(|u| u.field == "profilePicture") else {
        return Err(fail(StatusCode::BAD_REQUEST, "No file uploaded"));
    };

    let mut s = state.lock().await;
    let Some(user) = s.user.as_mut() else {
        return Err(fail(StatusCode::UNAUTHORIZED, "Not authenticated"));
    };
    user.profile_picture = Some(format!("https://cdn.example.com/avatars/{}", upload.file_name));
    let user = user.clone();
    s.uploads.push(upload);
    Ok(Json(json!({ "user": user })))
}

async fn list_tiles(State(state): State<Shared>) -> Reply {
    let s = state.lock().await;
    Ok(Json(json!({ "tiles": s.tiles })))
}

async fn get_tile(State(state): State<Shared>, Path(slug): Path<String>) -> Reply {
    let s = state.lock().await;
    match s.tiles.iter().find(|t| t.slug == slug) {
        Some(tile) => Ok(Json(json!({ "tile": tile }))),
        None => Err(fail(StatusCode::NOT_FOUND, "Tile not found")),
    }
}

async fn admin_list_tiles(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    require_admin(&headers)?;
    list_tiles(State(state)).await
}

async fn admin_create_tile(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(payload): Json<ShariahTilePayload>,
) -> Reply {
    require_admin(&headers)?;
    let mut s = state.lock().await;
    if s.tiles.iter().any(|t| t.slug == payload.slug) {
        return Err(fail(
            StatusCode::CONFLICT,
            "A tile with this slug already exists",
        ));
    }
    s.next_id += 1;
    let tile = tile_from_payload(format!("tile-{}", s.next_id), payload);
    s.tiles.push(tile.clone());
    Ok(Json(json!({ "tile": tile })))
}

async fn admin_update_tile(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<ShariahTilePayload>,
) -> Reply {
    require_admin(&headers)?;
    let mut s = state.lock().await;
    let Some(existing) = s.tiles.iter_mut().find(|t| t.id == id) else {
        return Err(fail(StatusCode::NOT_FOUND, "Tile not found"));
    };
    let created_at = existing.created_at.clone();
    *existing = ShariahTile {
        created_at,
        updated_at: Some("2026-02-01T00:00:00Z".to_string()),
        ..tile_from_payload(id, payload)
    };
    Ok(Json(json!({ "tile": existing.clone() })))
}

async fn admin_delete_tile(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Reply {
    require_admin(&headers)?;
    let mut s = state.lock().await;
    let before = s.tiles.len();
    s.tiles.retain(|t| t.id != id);
    if s.tiles.len() == before {
        return Err(fail(StatusCode::NOT_FOUND, "Tile not found"));
    }
    Ok(Json(json!({ "message": "Tile deleted" })))
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/subscription/current", get(current_subscription))
        .route("/api/subscription/cancel", post(cancel_subscription))
        .route("/api/payment-method/current", get(payment_method))
        .route("/api/billing-history", get(billing_history))
        .route("/api/user/profile", put(update_profile))
        .route("/api/user/profile-picture", post(upload_profile_picture))
        .route("/api/shariah-tiles", get(list_tiles))
        .route("/api/shariah-tiles/{slug}", get(get_tile))
        .route(
            "/admin/api/shariah-tiles",
            get(admin_list_tiles).post(admin_create_tile),
        )
        .route(
            "/admin/api/shariah-tiles/{id}",
            put(admin_update_tile).delete(admin_delete_tile),
        )
        .with_state(state)
}

/// Start a stub backend on an ephemeral port and return a client pointed
/// at it together with the shared state, for seeding and inspection.
pub async fn stub_backend(state: StubState) -> (ApiClient, Shared) {
    let shared: Shared = Arc::new(Mutex::new(state));
    let app = router(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });

    let config = ApiConfig {
        base_url: format!("http://{addr}"),
        ..ApiConfig::default()
    };
    (ApiClient::new(config), shared)
}

// ── Fixtures ──────────────────────────────────────────────

pub fn sample_user() -> AuthUser {
    AuthUser {
        id: "u-1".to_string(),
        name: "Amina Yusuf".to_string(),
        email: "amina@example.com".to_string(),
        role: UserRole::User,
        profile_picture: None,
        subscription_status: Some(SubscriptionStatus::Active),
    }
}

pub fn sample_subscription(status: SubscriptionStatus) -> Subscription {
    Subscription {
        id: "sub_123".to_string(),
        status,
        plan_name: "Research Pro".to_string(),
        interval: Some(BillingInterval::Month),
        amount: 1900,
        currency: "usd".to_string(),
        current_period_end: Some("2026-11-01T00:00:00Z".to_string()),
        trial_end: None,
        cancel_at_period_end: false,
    }
}

pub fn sample_payment_method() -> PaymentMethod {
    PaymentMethod {
        brand: "visa".to_string(),
        last4: "4242".to_string(),
        exp_month: 4,
        exp_year: 2027,
    }
}

pub fn sample_invoice(id: &str, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.to_string(),
        number: Some(format!("INV-{id}")),
        date: "2026-09-01".to_string(),
        amount: 1900,
        currency: "usd".to_string(),
        status,
        description: Some("Research Pro (monthly)".to_string()),
        invoice_url: None,
    }
}

pub fn sample_tile(id: &str, slug: &str, title: &str) -> ShariahTile {
    ShariahTile {
        id: id.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        category: "Technology".to_string(),
        description: "Diversified technology holding company.".to_string(),
        footer_left: "NASDAQ: ACME".to_string(),
        footer_right: "2026-09-30".to_string(),
        analyst_notes: "Interest income remains well below the screening limit.".to_string(),
        compliance_points: vec!["No alcohol or gambling revenue".to_string()],
        compliance_metrics: vec![
            ComplianceMetric {
                criteria: "Debt to market cap".to_string(),
                threshold: "33%".to_string(),
                actual: "12%".to_string(),
                comparison_type: ComparisonType::LessThan,
                custom_status: None,
            },
            ComplianceMetric {
                criteria: "Cash and receivables".to_string(),
                threshold: "33%".to_string(),
                actual: "48%".to_string(),
                comparison_type: ComparisonType::LessThan,
                custom_status: None,
            },
        ],
        cta_label: "View Analysis".to_string(),
        detail_path: format!("/shariah/{slug}"),
        locked_title: "Unlock the full Shariah analysis".to_string(),
        locked_description: "Subscribe to see every compliance metric.".to_string(),
        created_at: None,
        updated_at: None,
    }
}
