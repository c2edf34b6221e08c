use crate::common::*;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::cancellation::{entry_for, WizardEntry};
use shared_types::{
    AppErrorKind, CancelSubscriptionRequest, CancellationReason, CancellationWizard,
    SubscriptionStatus, WizardStep,
};

/// Walk the wizard to the confirm step with `reason` selected.
fn wizard_at_confirm(reason: CancellationReason) -> CancellationWizard {
    let mut wizard = CancellationWizard::new();
    wizard.select_reason(reason);
    wizard.advance().expect("reason -> options");
    wizard.advance().expect("options -> confirm");
    wizard
}

/// The reason goes over the wire in kebab-case.
#[tokio::test]
async fn cancel_sends_reason() {
    let (client, state) = stub_backend(StubState {
        user: Some(sample_user()),
        subscription: Some(sample_subscription(SubscriptionStatus::Active)),
        ..StubState::default()
    })
    .await;

    let request = CancelSubscriptionRequest {
        reason: CancellationReason::NotUsingEnough,
    };
    let response = client
        .cancel_subscription(&request)
        .await
        .expect("cancel should succeed");

    let sub = response.subscription.expect("subscription in response");
    assert!(sub.cancel_at_period_end);
    assert_eq!(state.lock().await.cancel_reasons, vec!["not-using-enough"]);
}

/// Full flow: the wizard builds the request and is marked complete.
#[tokio::test]
async fn wizard_submits_from_confirm_step() {
    let (client, state) = stub_backend(StubState {
        user: Some(sample_user()),
        subscription: Some(sample_subscription(SubscriptionStatus::Trialing)),
        ..StubState::default()
    })
    .await;

    let sub = client.current_subscription().await.expect("subscription");
    assert_eq!(
        entry_for(sub.as_ref().map(|s| &s.status)),
        WizardEntry::Allowed
    );

    let mut wizard = wizard_at_confirm(CancellationReason::TooExpensive);
    let request = wizard.begin_submit().expect("confirm step submits");
    assert!(wizard.is_submitting());

    client
        .cancel_subscription(&request)
        .await
        .expect("cancel should succeed");
    wizard.submit_succeeded();

    assert!(wizard.is_completed());
    assert!(!wizard.is_submitting());
    assert_eq!(state.lock().await.cancel_reasons, vec!["too-expensive"]);
}

/// A rejected cancel keeps the wizard on the confirm step with the server's
/// message, and a second attempt is possible.
#[tokio::test]
async fn failed_cancel_stays_on_confirm_with_server_message() {
    let (client, state) = stub_backend(StubState {
        user: Some(sample_user()),
        subscription: Some(sample_subscription(SubscriptionStatus::Active)),
        cancel_error: Some((
            StatusCode::BAD_REQUEST,
            "Subscription is already scheduled for cancellation".to_string(),
        )),
        ..StubState::default()
    })
    .await;

    let mut wizard = wizard_at_confirm(CancellationReason::TechnicalIssues);
    let request = wizard.begin_submit().expect("confirm step submits");

    let err = client
        .cancel_subscription(&request)
        .await
        .expect_err("stub rejects the cancel");
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    wizard.submit_failed(err.friendly_message());

    assert_eq!(wizard.step(), WizardStep::Confirm);
    assert_eq!(
        wizard.error(),
        Some("Subscription is already scheduled for cancellation")
    );
    assert!(!wizard.is_submitting());
    assert!(!wizard.is_completed());

    state.lock().await.cancel_error = None;
    let retry = wizard.begin_submit().expect("retry allowed");
    client
        .cancel_subscription(&retry)
        .await
        .expect("second attempt succeeds");
}

/// Without a subscription the stub answers 400 and the wizard would not
/// have been entered at all.
#[tokio::test]
async fn cancel_without_subscription_is_rejected() {
    let (client, _state) = stub_backend(StubState {
        user: Some(sample_user()),
        ..StubState::default()
    })
    .await;

    assert_eq!(entry_for(None), WizardEntry::RedirectToPricing);

    let err = client
        .cancel_subscription(&CancelSubscriptionRequest {
            reason: CancellationReason::Other,
        })
        .await
        .expect_err("no subscription");
    assert_eq!(err.message, "No active subscription");
}
