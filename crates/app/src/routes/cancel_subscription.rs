use crate::auth::{redirect_to_pricing, use_auth};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::cancellation::{entry_for, OfferOutcome, RetentionOffer, WizardEntry};
use shared_types::{
    AppError, CancellationReason, CancellationWizard, Subscription, SubscriptionStatus, WizardStep,
};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, Notice,
    NoticeTone, StepIndicator,
};

/// Entry decision from the fetched subscription, or from the status cached
/// on the session user when the fetch failed.
fn resolve_entry(
    fetched: &Result<Option<Subscription>, AppError>,
    cached: Option<&SubscriptionStatus>,
) -> WizardEntry {
    match fetched {
        Ok(sub) => entry_for(sub.as_ref().map(|s| &s.status)),
        Err(_) => entry_for(cached),
    }
}

/// Three-step cancellation flow. Only reachable with a cancellable
/// subscription; everyone else is sent to the pricing page.
#[component]
pub fn CancelSubscription() -> Element {
    let auth = use_auth();
    let subscription = use_resource(|| async move {
        let result = api_client::api::get_current_subscription().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Falling back to cached subscription status");
        }
        result
    });

    let entry = subscription
        .read()
        .as_ref()
        .map(|fetched| resolve_entry(fetched, auth.session().subscription_status.as_ref()));

    match entry {
        None => rsx! { super::PageLoading { message: "Loading..." } },
        Some(WizardEntry::RedirectToPricing) => {
            redirect_to_pricing();
            rsx! { super::PageLoading { message: "Redirecting..." } }
        }
        Some(WizardEntry::Allowed) => rsx! { CancellationFlow {} },
    }
}

#[component]
fn CancellationFlow() -> Element {
    let mut auth = use_auth();
    let mut wizard = use_signal(CancellationWizard::new);
    let mut offer_message = use_signal(|| Option::<String>::None);

    let step = wizard.read().step();
    let labels: Vec<String> = ["Reason", "Options", "Confirm"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let handle_submit = move |_: MouseEvent| {
        let request = match wizard.write().begin_submit() {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Cancellation submit ignored");
                return;
            }
        };
        spawn(async move {
            match api_client::api::cancel_subscription(request).await {
                Ok(_) => {
                    wizard.write().submit_succeeded();
                    auth.refresh().await;
                    navigator().push(Route::Account {});
                }
                Err(e) => wizard.write().submit_failed(e.friendly_message()),
            }
        });
    };

    let body = match step {
        WizardStep::Reason => {
            let selected = wizard.read().reason();
            rsx! {
                fieldset { class: "cancel-reasons",
                    legend { class: "sr-only", "Reason for cancelling" }
                    for reason in CancellationReason::ALL {
                        label {
                            key: "{reason.as_str()}",
                            class: if selected == Some(reason) { "cancel-reason selected" } else { "cancel-reason" },
                            input {
                                r#type: "radio",
                                name: "cancel-reason",
                                value: reason.as_str(),
                                checked: selected == Some(reason),
                                onchange: move |_| wizard.write().select_reason(reason),
                            }
                            span { "{reason.label()}" }
                        }
                    }
                }
            }
        }
        WizardStep::Options => rsx! {
            div { class: "cancel-offers",
                div { class: "cancel-offer",
                    h3 { "Pause instead" }
                    p { "Keep your account and pick up where you left off later." }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            if let OfferOutcome::Unavailable(msg) =
                                wizard.read().choose_offer(RetentionOffer::Pause)
                            {
                                offer_message.set(Some(msg));
                            }
                        },
                        "Pause subscription"
                    }
                }
                div { class: "cancel-offer",
                    h3 { "Switch to annual" }
                    p { "Pay yearly and save compared to the monthly plan." }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            if wizard.read().choose_offer(RetentionOffer::SwitchToAnnual)
                                == OfferOutcome::GoToPricing
                            {
                                redirect_to_pricing();
                            }
                        },
                        "See annual plans"
                    }
                }
                if let Some(msg) = offer_message() {
                    Notice {
                        tone: NoticeTone::Info,
                        on_dismiss: move |_| offer_message.set(None),
                        "{msg}"
                    }
                }
            }
        },
        WizardStep::Confirm => {
            let reason = wizard
                .read()
                .reason()
                .map(|r| r.label())
                .unwrap_or_default();
            let error = wizard.read().error().map(str::to_string);
            rsx! {
                div { class: "cancel-confirm",
                    p {
                        "Your subscription will be cancelled. You will lose access to "
                        "premium research at the end of the current billing period."
                    }
                    p { class: "cancel-confirm-reason", "Reason: {reason}" }
                    if let Some(err) = error {
                        Notice { tone: NoticeTone::Error, "{err}" }
                    }
                }
            }
        }
    };

    let submitting = wizard.read().is_submitting();
    let can_continue = wizard.read().can_continue();
    let can_go_back = wizard.read().can_go_back();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cancel_subscription.css") }
        div { class: "cancel-page",
            StepIndicator { labels, current: step.number() }

            Card {
                CardHeader {
                    CardTitle { "{step.title()}" }
                }
                CardContent { {body} }
                CardFooter { class: "cancel-actions",
                    if can_go_back {
                        Button {
                            variant: ButtonVariant::Ghost,
                            disabled: submitting,
                            onclick: move |_| {
                                offer_message.set(None);
                                let _ = wizard.write().back();
                            },
                            "Back"
                        }
                    } else {
                        Link { to: Route::Account {}, class: "cancel-keep-link", "Keep my subscription" }
                    }

                    if step == WizardStep::Confirm {
                        Button {
                            variant: ButtonVariant::Destructive,
                            loading: submitting,
                            onclick: handle_submit,
                            if submitting { "Cancelling..." } else { "Cancel subscription" }
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: !can_continue,
                            onclick: move |_| {
                                offer_message.set(None);
                                let _ = wizard.write().advance();
                            },
                            "Continue"
                        }
                    }
                }
            }
        }
    }
}
