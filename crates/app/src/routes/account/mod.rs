mod billing_history_section;
mod payment_section;
mod profile_section;
mod subscription_section;

use crate::auth::use_session;
use dioxus::prelude::*;
use shared_ui::{PageHeader, PageTitle, Skeleton};

use billing_history_section::BillingHistorySection;
use payment_section::PaymentSection;
use profile_section::ProfileSection;
use subscription_section::SubscriptionSection;

/// Account dashboard: profile, subscription, payment method and invoices.
///
/// The three billing fetches run concurrently and each section renders its
/// own outcome, so a failing endpoint only blanks its own card.
#[component]
pub fn Account() -> Element {
    let session = use_session();
    let overview = use_resource(|| async move { api_client::api::get_account_overview().await });

    let billing = match &*overview.read() {
        None => rsx! {
            div { class: "account-loading",
                for i in 0..3 {
                    Skeleton { key: "{i}", class: "account-skeleton" }
                }
            }
        },
        Some(overview) => {
            let live = overview.subscription.as_ref().ok().and_then(|s| s.as_ref());
            let can_cancel = session.clone().with_subscription(live).can_cancel();
            rsx! {
                SubscriptionSection { subscription: overview.subscription.clone(), can_cancel }
                PaymentSection { payment_method: overview.payment_method.clone() }
                BillingHistorySection { invoices: overview.invoices.clone() }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./account.css") }
        div { class: "account-page",
            PageHeader {
                PageTitle { "Account" }
            }
            ProfileSection {}
            {billing}
        }
    }
}
