use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCreditCard;
use dioxus_free_icons::Icon;
use shared_types::format::{card_expiry, card_label};
use shared_types::{AppError, PaymentMethod};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Notice, NoticeTone};

#[component]
pub fn PaymentSection(payment_method: Result<Option<PaymentMethod>, AppError>) -> Element {
    let body = match payment_method {
        Err(e) => rsx! {
            Notice { tone: NoticeTone::Error, "{e.friendly_message()}" }
        },
        Ok(None) => rsx! {
            p { class: "account-empty", "No payment method on file." }
        },
        Ok(Some(pm)) => rsx! {
            div { class: "account-card-row",
                Icon::<LdCreditCard> { icon: LdCreditCard, width: 20, height: 20 }
                span { class: "account-card-label", {card_label(&pm.brand, &pm.last4)} }
                span { class: "account-hint", "Expires {card_expiry(pm.exp_month, pm.exp_year)}" }
            }
        },
    };

    rsx! {
        Card { class: "account-card",
            CardHeader {
                CardTitle { "Payment method" }
            }
            CardContent { {body} }
        }
    }
}
