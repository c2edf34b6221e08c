use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NoticeTone {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeTone {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeTone::Info => "info",
            NoticeTone::Success => "success",
            NoticeTone::Error => "error",
        }
    }

    fn role(&self) -> &'static str {
        match self {
            NoticeTone::Error => "alert",
            _ => "status",
        }
    }
}

/// Inline banner for request results on a page or section.
#[component]
pub fn Notice(
    #[props(default)] tone: NoticeTone,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "notice",
            "data-tone": tone.class(),
            role: tone.role(),
            div { class: "notice-body", {children} }
            if let Some(handler) = on_dismiss {
                button {
                    r#type: "button",
                    class: "notice-dismiss",
                    "aria-label": "Dismiss",
                    onclick: move |_| handler.call(()),
                    "×"
                }
            }
        }
    }
}
