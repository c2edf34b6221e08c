use dioxus::prelude::*;

/// Where a step sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Complete,
    Current,
    Upcoming,
}

impl StepState {
    /// `current` is 1-based.
    pub fn of(step: usize, current: usize) -> Self {
        match step.cmp(&current) {
            std::cmp::Ordering::Less => StepState::Complete,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Upcoming,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            StepState::Complete => "complete",
            StepState::Current => "current",
            StepState::Upcoming => "upcoming",
        }
    }
}

/// Numbered progress header for multi-step flows.
#[component]
pub fn StepIndicator(labels: Vec<String>, current: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ol { class: "step-indicator",
            for (i, label) in labels.iter().enumerate() {
                {
                    let state = StepState::of(i + 1, current);
                    rsx! {
                        li {
                            key: "{i}",
                            class: "step",
                            "data-state": state.class(),
                            "aria-current": if state == StepState::Current { "step" } else { "false" },
                            span { class: "step-number", "{i + 1}" }
                            span { class: "step-label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
