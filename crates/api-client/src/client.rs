use crate::endpoints;
use crate::error_convert::{json_to_app_error, ReqwestErrorExt};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shared_types::{
    ApiConfig, AppError, AuthUser, CancelSubscriptionRequest, CancelSubscriptionResponse,
    Invoice, InvoicesEnvelope, MessageResponse, PaymentMethod, PaymentMethodEnvelope,
    ShariahTile, ShariahTilePayload, Subscription, SubscriptionEnvelope, TileEnvelope,
    TilesEnvelope, UpdateProfileRequest, UserEnvelope,
};

/// Client for the research backend.
///
/// Cheap to clone; clones share the underlying connection pool. In the
/// browser the session cookie rides along on every request; native callers
/// can attach a bearer token instead.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    bearer_token: Option<String>,
}

/// The three account-page fetches, each with its own outcome so one failing
/// section does not blank the others.
#[derive(Debug)]
pub struct AccountOverview {
    pub subscription: Result<Option<Subscription>, AppError>,
    pub payment_method: Result<Option<PaymentMethod>, AppError>,
    pub invoices: Result<Vec<Invoice>, AppError>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            bearer_token: None,
        }
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.config.url(path));
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }
        builder
    }

    /// Send a request and decode a JSON body, turning non-2xx responses into
    /// an `AppError` carrying the server's `{error}` text.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let response = builder.send().await.map_err(ReqwestErrorExt::into_app_error)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;

        if !status.is_success() {
            let err = AppError::from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), error = %err.message, "API request failed");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(json_to_app_error)
    }

    // ── Session ────────────────────────────────────────────

    /// The signed-in user, or `None` when the session is missing or expired.
    pub async fn current_user(&self) -> Result<Option<AuthUser>, AppError> {
        match self
            .send::<UserEnvelope>(self.request(Method::GET, endpoints::AUTH_ME))
            .await
        {
            Ok(env) => Ok(env.user),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }

    // ── Billing ────────────────────────────────────────────

    pub async fn current_subscription(&self) -> Result<Option<Subscription>, AppError> {
        let env: SubscriptionEnvelope = self
            .send(self.request(Method::GET, endpoints::SUBSCRIPTION_CURRENT))
            .await?;
        Ok(env.subscription)
    }

    pub async fn payment_method(&self) -> Result<Option<PaymentMethod>, AppError> {
        let env: PaymentMethodEnvelope = self
            .send(self.request(Method::GET, endpoints::PAYMENT_METHOD_CURRENT))
            .await?;
        Ok(env.payment_method)
    }

    pub async fn billing_history(&self) -> Result<Vec<Invoice>, AppError> {
        let env: InvoicesEnvelope = self
            .send(self.request(Method::GET, endpoints::BILLING_HISTORY))
            .await?;
        Ok(env.invoices)
    }

    /// Subscription, payment method and billing history, fetched concurrently.
    pub async fn account_overview(&self) -> AccountOverview {
        let (subscription, payment_method, invoices) = futures::join!(
            self.current_subscription(),
            self.payment_method(),
            self.billing_history(),
        );
        AccountOverview {
            subscription,
            payment_method,
            invoices,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn cancel_subscription(
        &self,
        request: &CancelSubscriptionRequest,
    ) -> Result<CancelSubscriptionResponse, AppError> {
        let response: CancelSubscriptionResponse = self
            .send(
                self.request(Method::POST, endpoints::SUBSCRIPTION_CANCEL)
                    .json(request),
            )
            .await?;
        tracing::info!(reason = request.reason.as_str(), "Subscription cancelled");
        Ok(response)
    }

    // ── Profile ────────────────────────────────────────────

    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<AuthUser, AppError> {
        let env: UserEnvelope = self
            .send(self.request(Method::PUT, endpoints::USER_PROFILE).json(request))
            .await?;
        env.user
            .ok_or_else(|| AppError::decode("Profile response did not include the user"))
    }

    /// Upload a new avatar as multipart field `profilePicture`.
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_profile_picture(
        &self,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<AuthUser, AppError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&content_type)
            .map_err(|_| AppError::bad_request(format!("Invalid content type: {content_type}")))?;
        let form = reqwest::multipart::Form::new().part(endpoints::PROFILE_PICTURE_FIELD, part);

        let env: UserEnvelope = self
            .send(
                self.request(Method::POST, endpoints::USER_PROFILE_PICTURE)
                    .multipart(form),
            )
            .await?;
        env.user
            .ok_or_else(|| AppError::decode("Upload response did not include the user"))
    }

    // ── Public tiles ───────────────────────────────────────

    pub async fn list_tiles(&self) -> Result<Vec<ShariahTile>, AppError> {
        let env: TilesEnvelope = self.send(self.request(Method::GET, endpoints::TILES)).await?;
        Ok(env.tiles)
    }

    /// Fetch one tile by its public id (the slug).
    pub async fn get_tile(&self, slug: &str) -> Result<ShariahTile, AppError> {
        let env: TileEnvelope = self
            .send(self.request(Method::GET, &endpoints::tile(slug)))
            .await?;
        Ok(env.tile)
    }

    // ── Admin tiles ────────────────────────────────────────

    pub async fn admin_list_tiles(&self) -> Result<Vec<ShariahTile>, AppError> {
        let env: TilesEnvelope = self
            .send(self.request(Method::GET, endpoints::ADMIN_TILES))
            .await?;
        Ok(env.tiles)
    }

    #[tracing::instrument(skip(self, payload), fields(slug = %payload.slug))]
    pub async fn admin_create_tile(&self, payload: &ShariahTilePayload) -> Result<ShariahTile, AppError> {
        let env: TileEnvelope = self
            .send(self.request(Method::POST, endpoints::ADMIN_TILES).json(payload))
            .await?;
        tracing::info!(id = %env.tile.id, "Tile created");
        Ok(env.tile)
    }

    #[tracing::instrument(skip(self, payload), fields(slug = %payload.slug))]
    pub async fn admin_update_tile(
        &self,
        id: &str,
        payload: &ShariahTilePayload,
    ) -> Result<ShariahTile, AppError> {
        let env: TileEnvelope = self
            .send(
                self.request(Method::PUT, &endpoints::admin_tile(id))
                    .json(payload),
            )
            .await?;
        tracing::info!("Tile updated");
        Ok(env.tile)
    }

    #[tracing::instrument(skip(self))]
    pub async fn admin_delete_tile(&self, id: &str) -> Result<MessageResponse, AppError> {
        let response: MessageResponse = self
            .send(self.request(Method::DELETE, &endpoints::admin_tile(id)))
            .await?;
        tracing::info!("Tile deleted");
        Ok(response)
    }
}
