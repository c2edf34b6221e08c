//! Endpoint paths, relative to the configured base URL.

pub const AUTH_ME: &str = "/api/auth/me";

pub const SUBSCRIPTION_CURRENT: &str = "/api/subscription/current";
pub const SUBSCRIPTION_CANCEL: &str = "/api/subscription/cancel";
pub const PAYMENT_METHOD_CURRENT: &str = "/api/payment-method/current";
pub const BILLING_HISTORY: &str = "/api/billing-history";

pub const USER_PROFILE: &str = "/api/user/profile";
pub const USER_PROFILE_PICTURE: &str = "/api/user/profile-picture";

/// Multipart field name of the avatar upload.
pub const PROFILE_PICTURE_FIELD: &str = "profilePicture";

pub const TILES: &str = "/api/shariah-tiles";
pub const ADMIN_TILES: &str = "/admin/api/shariah-tiles";

pub fn tile(id: &str) -> String {
    format!("{TILES}/{}", urlencoding::encode(id))
}

pub fn admin_tile(id: &str) -> String {
    format!("{ADMIN_TILES}/{}", urlencoding::encode(id))
}
