use crate::components::TileCard;
use dioxus::prelude::*;
use shared_ui::{Notice, NoticeTone, Skeleton};

/// Marketing home: hero plus the grid of published tiles.
#[component]
pub fn Home() -> Element {
    let tiles = use_resource(|| async move { api_client::api::list_tiles().await });

    let grid = match &*tiles.read() {
        None => rsx! {
            div { class: "tile-grid",
                for i in 0..6 {
                    Skeleton { key: "{i}", class: "tile-skeleton" }
                }
            }
        },
        Some(Err(e)) => rsx! {
            Notice { tone: NoticeTone::Error, "{e.friendly_message()}" }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "home-empty", "No research has been published yet." }
        },
        Some(Ok(list)) => rsx! {
            div { class: "tile-grid",
                for tile in list.iter() {
                    TileCard { key: "{tile.id}", tile: tile.clone() }
                }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "home-hero",
            h1 { "Shariah compliance research" }
            p {
                "Screening results for listed companies: financial ratios, business "
                "activity checks and analyst notes, reviewed by our research team."
            }
        }

        {grid}
    }
}
