use crate::components::InvoiceStatusBadge;
use dioxus::prelude::*;
use shared_types::format::{format_date, format_money};
use shared_types::{AppError, Invoice};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Notice, NoticeTone};

#[component]
pub fn BillingHistorySection(invoices: Result<Vec<Invoice>, AppError>) -> Element {
    let body = match invoices {
        Err(e) => rsx! {
            Notice { tone: NoticeTone::Error, "{e.friendly_message()}" }
        },
        Ok(list) if list.is_empty() => rsx! {
            p { class: "account-empty", "No invoices yet." }
        },
        Ok(list) => rsx! {
            table { class: "account-invoices",
                thead {
                    tr {
                        th { "Date" }
                        th { "Description" }
                        th { "Amount" }
                        th { "Status" }
                        th { "" }
                    }
                }
                tbody {
                    for invoice in list {
                        tr { key: "{invoice.id}",
                            td { {format_date(&invoice.date)} }
                            td {
                                {invoice.description.clone().or(invoice.number.clone()).unwrap_or_default()}
                            }
                            td { {format_money(invoice.amount, &invoice.currency)} }
                            td { InvoiceStatusBadge { status: invoice.status.clone() } }
                            td {
                                if let Some(url) = invoice.invoice_url.clone() {
                                    a { href: url, target: "_blank", rel: "noopener noreferrer", "View" }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        Card { class: "account-card",
            CardHeader {
                CardTitle { "Billing history" }
            }
            CardContent { {body} }
        }
    }
}
