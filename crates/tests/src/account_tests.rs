use crate::common::*;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, InvoiceStatus, Session, SubscriptionStatus};

/// `/api/auth/me` with a live session returns the user record.
#[tokio::test]
async fn current_user_returns_signed_in_user() {
    let (client, _state) = stub_backend(StubState {
        user: Some(sample_user()),
        ..StubState::default()
    })
    .await;

    let user = client.current_user().await.expect("request should succeed");
    assert_eq!(user, Some(sample_user()));
}

/// A 401 from `/api/auth/me` means "signed out", not an error.
#[tokio::test]
async fn current_user_is_none_without_session() {
    let (client, _state) = stub_backend(StubState::default()).await;

    let user = client.current_user().await.expect("401 should map to Ok(None)");
    assert_eq!(user, None);
}

/// All three billing sections come back from one overview call.
#[tokio::test]
async fn account_overview_fetches_every_section() {
    let (client, _state) = stub_backend(StubState {
        user: Some(sample_user()),
        subscription: Some(sample_subscription(SubscriptionStatus::Active)),
        payment_method: Some(sample_payment_method()),
        invoices: vec![
            sample_invoice("in_1", InvoiceStatus::Paid),
            sample_invoice("in_2", InvoiceStatus::Open),
        ],
        ..StubState::default()
    })
    .await;

    let overview = client.account_overview().await;

    let sub = overview.subscription.expect("subscription").expect("present");
    assert_eq!(sub.plan_name, "Research Pro");
    assert_eq!(sub.status, SubscriptionStatus::Active);

    let pm = overview.payment_method.expect("payment method").expect("present");
    assert_eq!(pm.last4, "4242");

    let invoices = overview.invoices.expect("invoices");
    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[1].status, InvoiceStatus::Open);
}

/// One failing endpoint does not take the other sections down with it.
#[tokio::test]
async fn account_overview_sections_fail_independently() {
    let (client, _state) = stub_backend(StubState {
        user: Some(sample_user()),
        subscription: Some(sample_subscription(SubscriptionStatus::Trialing)),
        payment_error: Some((
            StatusCode::BAD_GATEWAY,
            "Payment provider unavailable".to_string(),
        )),
        ..StubState::default()
    })
    .await;

    let overview = client.account_overview().await;

    assert!(overview.subscription.is_ok());
    assert!(overview.invoices.expect("invoices").is_empty());

    let err = overview.payment_method.expect_err("payment method should fail");
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.friendly_message(), "Payment provider unavailable");
}

/// No subscription on file is a normal answer, and the session built from
/// it offers neither premium access nor cancellation.
#[tokio::test]
async fn missing_subscription_locks_premium_content() {
    let mut user = sample_user();
    user.subscription_status = None;
    let (client, _state) = stub_backend(StubState {
        user: Some(user.clone()),
        ..StubState::default()
    })
    .await;

    let sub = client.current_subscription().await.expect("request should succeed");
    assert_eq!(sub, None);

    let session = Session::for_user(user).with_subscription(sub.as_ref());
    assert!(!session.has_premium_access());
    assert!(!session.can_cancel());
}

/// The live subscription status wins over the one cached on the user.
#[tokio::test]
async fn live_subscription_status_overrides_cached_status() {
    let (client, _state) = stub_backend(StubState {
        user: Some(sample_user()),
        subscription: Some(sample_subscription(SubscriptionStatus::PastDue)),
        ..StubState::default()
    })
    .await;

    let user = client.current_user().await.expect("me").expect("signed in");
    let sub = client.current_subscription().await.expect("subscription");

    let session = Session::for_user(user).with_subscription(sub.as_ref());
    assert!(!session.has_premium_access());
    assert!(session.can_cancel());
}
