use super::status_badge::ComplianceBadge;
use dioxus::prelude::*;
use shared_types::{ComplianceMetric, MetricOutcome};

/// Criteria / threshold / actual / status table of a tile's metrics.
#[component]
pub fn MetricsTable(metrics: Vec<ComplianceMetric>) -> Element {
    if metrics.is_empty() {
        return rsx! {
            p { class: "metrics-empty", "No compliance metrics recorded." }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./metrics_table.css") }
        table { class: "metrics-table",
            thead {
                tr {
                    th { "Criteria" }
                    th { "Threshold" }
                    th { "Actual" }
                    th { "Status" }
                }
            }
            tbody {
                for (i, metric) in metrics.iter().enumerate() {
                    tr { key: "{i}",
                        td { class: "metrics-criteria", "{metric.criteria}" }
                        td { "{metric.threshold}" }
                        td { "{metric.actual}" }
                        td { ComplianceBadge { outcome: MetricOutcome::of(metric) } }
                    }
                }
            }
        }
    }
}
