use dioxus::prelude::*;

/// Form wrapper that prevents the browser's default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Validation message shown under a field.
#[component]
pub fn FieldError(message: String) -> Element {
    rsx! {
        p { class: "field-error", role: "alert", "{message}" }
    }
}

/// Labelled group of controls that are not a single input (row lists).
#[component]
pub fn Fieldset(
    legend: String,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        fieldset { class: "form-fieldset",
            legend { class: "form-legend", "{legend}" }
            {children}
            if let Some(message) = error {
                FieldError { message }
            }
        }
    }
}
