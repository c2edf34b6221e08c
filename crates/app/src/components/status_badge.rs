use dioxus::prelude::*;
use shared_types::format::title_case;
use shared_types::{InvoiceStatus, MetricOutcome, SubscriptionStatus};
use shared_ui::{Badge, BadgeVariant};

/// Pass/Fail pill for one compliance metric.
#[component]
pub fn ComplianceBadge(outcome: MetricOutcome) -> Element {
    let variant = if outcome.is_pass() {
        BadgeVariant::Success
    } else {
        BadgeVariant::Destructive
    };
    rsx! {
        Badge { variant, "{outcome.label()}" }
    }
}

pub fn subscription_badge_variant(status: &SubscriptionStatus) -> BadgeVariant {
    match status {
        SubscriptionStatus::Active => BadgeVariant::Success,
        SubscriptionStatus::Trialing => BadgeVariant::Primary,
        SubscriptionStatus::PastDue | SubscriptionStatus::Unpaid | SubscriptionStatus::Incomplete => {
            BadgeVariant::Warning
        }
        SubscriptionStatus::Canceled | SubscriptionStatus::IncompleteExpired => {
            BadgeVariant::Destructive
        }
        SubscriptionStatus::Paused | SubscriptionStatus::Unknown(_) => BadgeVariant::Secondary,
    }
}

#[component]
pub fn SubscriptionStatusBadge(status: SubscriptionStatus) -> Element {
    rsx! {
        Badge { variant: subscription_badge_variant(&status), "{title_case(status.as_str())}" }
    }
}

pub fn invoice_badge_variant(status: &InvoiceStatus) -> BadgeVariant {
    match status {
        InvoiceStatus::Paid => BadgeVariant::Success,
        InvoiceStatus::Open | InvoiceStatus::Draft => BadgeVariant::Warning,
        InvoiceStatus::Void | InvoiceStatus::Uncollectible => BadgeVariant::Destructive,
        InvoiceStatus::Other(_) => BadgeVariant::Secondary,
    }
}

#[component]
pub fn InvoiceStatusBadge(status: InvoiceStatus) -> Element {
    rsx! {
        Badge { variant: invoice_badge_variant(&status), "{title_case(status.as_str())}" }
    }
}
