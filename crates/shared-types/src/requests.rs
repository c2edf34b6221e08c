//! Request bodies and response envelopes of the REST endpoints.

use crate::cancellation::CancellationReason;
use crate::models::{AuthUser, Invoice, PaymentMethod, Subscription};
use crate::shariah::ShariahTile;
use serde::{Deserialize, Serialize};

/// Body of `PUT /api/user/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// Body of `POST /api/subscription/cancel`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CancelSubscriptionRequest {
    pub reason: CancellationReason,
}

/// `{"user": ...}` from `/api/auth/me` and the profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserEnvelope {
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionEnvelope {
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodEnvelope {
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoicesEnvelope {
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TilesEnvelope {
    #[serde(default)]
    pub tiles: Vec<ShariahTile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TileEnvelope {
    pub tile: ShariahTile,
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Response of `POST /api/subscription/cancel`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CancelSubscriptionResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
}
