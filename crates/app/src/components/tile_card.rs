use crate::access_gate::use_tile_access;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::format::format_date;
use shared_types::{ShariahTile, TileAccess};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

/// Screen results are premium content, so locked visitors only see the
/// count of screens.
fn screen_summary(tile: &ShariahTile, access: TileAccess) -> Option<String> {
    let total = tile.compliance_metrics.len();
    if total == 0 {
        return None;
    }
    Some(match access {
        TileAccess::Full => format!("{} of {total} screens passed", tile.passing_metrics()),
        TileAccess::Locked(_) => format!("{total} screens analysed"),
    })
}

/// Marketing card for one tile on the home grid.
#[component]
pub fn TileCard(tile: ShariahTile) -> Element {
    let summary = screen_summary(&tile, use_tile_access());
    let reviewed = format_date(&tile.footer_right);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tile_card.css") }
        Card { class: "tile-card",
            CardHeader {
                Badge { variant: BadgeVariant::Outline, "{tile.category}" }
                CardTitle { "{tile.title}" }
                CardDescription { "{tile.description}" }
            }
            CardContent {
                if let Some(summary) = summary {
                    p { class: "tile-card-summary", "{summary}" }
                }
                Link {
                    class: "tile-card-cta",
                    to: Route::TileDetail { slug: tile.slug.clone() },
                    "{tile.cta_label}"
                }
            }
            CardFooter {
                span { "{tile.footer_left}" }
                span { "Reviewed {reviewed}" }
            }
        }
    }
}
