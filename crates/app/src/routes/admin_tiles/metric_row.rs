use crate::components::ComplianceBadge;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdTrash2;
use dioxus_free_icons::Icon;
use shared_types::shariah::ComparisonType;
use shared_types::{MetricDraft, MetricOutcome};
use shared_ui::{Button, ButtonVariant, FieldError, FormSelect, Input};

/// One editable metric with its live Pass/Fail preview.
#[component]
pub fn MetricRow(
    index: usize,
    draft: MetricDraft,
    #[props(default)] error: Option<String>,
    on_change: EventHandler<MetricDraft>,
    on_remove: EventHandler<()>,
) -> Element {
    let outcome = MetricOutcome::of(&draft.preview());
    let is_custom =
        ComparisonType::from_form_value(&draft.comparison_type) == Some(ComparisonType::Custom);

    let d = draft.clone();
    let set_criteria = move |evt: FormEvent| {
        on_change.call(MetricDraft { criteria: evt.value(), ..d.clone() })
    };
    let d = draft.clone();
    let set_threshold = move |evt: FormEvent| {
        on_change.call(MetricDraft { threshold: evt.value(), ..d.clone() })
    };
    let d = draft.clone();
    let set_actual = move |evt: FormEvent| {
        on_change.call(MetricDraft { actual: evt.value(), ..d.clone() })
    };
    let d = draft.clone();
    let set_comparison = move |evt: FormEvent| {
        on_change.call(MetricDraft { comparison_type: evt.value(), ..d.clone() })
    };
    let d = draft.clone();
    let set_status = move |evt: FormEvent| {
        on_change.call(MetricDraft { custom_status: evt.value(), ..d.clone() })
    };

    rsx! {
        div { class: if error.is_some() { "metric-row invalid" } else { "metric-row" },
            div { class: "metric-row-header",
                span { class: "metric-row-number", "Metric {index + 1}" }
                ComplianceBadge { outcome }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Remove metric",
                    onclick: move |_| on_remove.call(()),
                    Icon::<LdTrash2> { icon: LdTrash2, width: 14, height: 14 }
                }
            }
            div { class: "metric-row-fields",
                Input {
                    label: "Criteria",
                    value: draft.criteria.clone(),
                    on_input: set_criteria,
                }
                FormSelect {
                    label: "Comparison",
                    value: draft.comparison_type.clone(),
                    onchange: set_comparison,
                    option { value: "", disabled: true, "Choose..." }
                    for comparison in ComparisonType::SELECTABLE {
                        option {
                            key: "{comparison.as_str()}",
                            value: comparison.as_str(),
                            selected: draft.comparison_type == comparison.as_str(),
                            "{comparison.label()}"
                        }
                    }
                }
                Input {
                    label: "Threshold",
                    placeholder: "33%",
                    value: draft.threshold.clone(),
                    on_input: set_threshold,
                }
                Input {
                    label: "Actual",
                    placeholder: "12.5%",
                    value: draft.actual.clone(),
                    on_input: set_actual,
                }
                if is_custom {
                    FormSelect {
                        label: "Result",
                        value: draft.custom_status.to_lowercase(),
                        onchange: set_status,
                        option { value: "", disabled: true, "Choose..." }
                        option { value: "pass", selected: draft.custom_status.eq_ignore_ascii_case("pass"), "Pass" }
                        option { value: "fail", selected: draft.custom_status.eq_ignore_ascii_case("fail"), "Fail" }
                    }
                }
            }
            if let Some(message) = error {
                FieldError { message }
            }
        }
    }
}
