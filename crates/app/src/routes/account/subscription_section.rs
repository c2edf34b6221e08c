use crate::components::SubscriptionStatusBadge;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::format::{format_date, format_price};
use shared_types::{AppError, Subscription, SubscriptionStatus};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Notice, NoticeTone,
};

/// One-line period summary under the plan name.
fn period_text(sub: &Subscription) -> Option<String> {
    if sub.status == SubscriptionStatus::Trialing {
        if let Some(end) = &sub.trial_end {
            return Some(format!("Trial ends {}", format_date(end)));
        }
    }
    let end = sub.current_period_end.as_deref()?;
    if sub.cancel_at_period_end {
        Some(format!("Cancels on {}. You keep access until then.", format_date(end)))
    } else if sub.status.grants_access() {
        Some(format!("Renews on {}", format_date(end)))
    } else {
        None
    }
}

#[component]
pub fn SubscriptionSection(
    subscription: Result<Option<Subscription>, AppError>,
    can_cancel: bool,
) -> Element {
    let pricing = move |_: MouseEvent| crate::auth::redirect_to_pricing();

    let body = match subscription {
        Err(e) => rsx! {
            Notice { tone: NoticeTone::Error, "{e.friendly_message()}" }
        },
        Ok(None) => rsx! {
            p { class: "account-empty", "You do not have a subscription." }
            Button { variant: ButtonVariant::Primary, onclick: pricing, "View plans" }
        },
        Ok(Some(sub)) => {
            let price = format_price(sub.amount, &sub.currency, sub.interval.as_ref());
            let period = period_text(&sub);
            rsx! {
                div { class: "account-plan-row",
                    div {
                        p { class: "account-plan-name", "{sub.plan_name}" }
                        p { class: "account-plan-price", "{price}" }
                    }
                    SubscriptionStatusBadge { status: sub.status.clone() }
                }
                if let Some(period) = period {
                    p { class: "account-hint", "{period}" }
                }
            }
        }
    };

    rsx! {
        Card { class: "account-card",
            CardHeader {
                CardTitle { "Subscription" }
                CardDescription { "Your plan and renewal date." }
            }
            CardContent { {body} }
            if can_cancel {
                CardFooter {
                    Link { to: Route::CancelSubscription {}, class: "account-cancel-link",
                        "Cancel subscription"
                    }
                }
            }
        }
    }
}
