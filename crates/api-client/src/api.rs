//! Endpoint calls through the process-wide client.
//!
//! Pages call these directly (`api_client::api::get_current_subscription()`)
//! instead of threading an `ApiClient` through props.

use crate::client::{AccountOverview, ApiClient};
use crate::config::app_config;
use shared_types::{
    AppError, AuthUser, CancelSubscriptionRequest, CancelSubscriptionResponse, Invoice,
    MessageResponse, PaymentMethod, ShariahTile, ShariahTilePayload, Subscription,
    UpdateProfileRequest,
};
use std::sync::OnceLock;

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// The shared client, built from the loaded config on first use.
pub fn client() -> &'static ApiClient {
    CLIENT.get_or_init(|| ApiClient::new(app_config().api.clone()))
}

/// Install a specific client. Returns `false` if one was already in use.
pub fn install_client(client: ApiClient) -> bool {
    CLIENT.set(client).is_ok()
}

pub async fn get_current_user() -> Result<Option<AuthUser>, AppError> {
    client().current_user().await
}

pub async fn get_current_subscription() -> Result<Option<Subscription>, AppError> {
    client().current_subscription().await
}

pub async fn get_payment_method() -> Result<Option<PaymentMethod>, AppError> {
    client().payment_method().await
}

pub async fn get_billing_history() -> Result<Vec<Invoice>, AppError> {
    client().billing_history().await
}

pub async fn get_account_overview() -> AccountOverview {
    client().account_overview().await
}

pub async fn cancel_subscription(
    request: CancelSubscriptionRequest,
) -> Result<CancelSubscriptionResponse, AppError> {
    client().cancel_subscription(&request).await
}

pub async fn update_profile(request: UpdateProfileRequest) -> Result<AuthUser, AppError> {
    client().update_profile(&request).await
}

pub async fn upload_profile_picture(
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
) -> Result<AuthUser, AppError> {
    client()
        .upload_profile_picture(file_name, content_type, bytes)
        .await
}

pub async fn list_tiles() -> Result<Vec<ShariahTile>, AppError> {
    client().list_tiles().await
}

pub async fn get_tile(slug: String) -> Result<ShariahTile, AppError> {
    client().get_tile(&slug).await
}

pub async fn admin_list_tiles() -> Result<Vec<ShariahTile>, AppError> {
    client().admin_list_tiles().await
}

pub async fn admin_create_tile(payload: ShariahTilePayload) -> Result<ShariahTile, AppError> {
    client().admin_create_tile(&payload).await
}

pub async fn admin_update_tile(
    id: String,
    payload: ShariahTilePayload,
) -> Result<ShariahTile, AppError> {
    client().admin_update_tile(&id, &payload).await
}

pub async fn admin_delete_tile(id: String) -> Result<MessageResponse, AppError> {
    client().admin_delete_tile(&id).await
}
