use crate::access_gate::{use_tile_access, PremiumGate};
use crate::components::MetricsTable;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdCircleCheck};
use dioxus_free_icons::Icon;
use shared_types::format::format_date;
use shared_types::{AppErrorKind, ShariahTile};
use shared_ui::{Badge, BadgeVariant, Notice, NoticeTone, Skeleton};

#[component]
pub fn TileDetail(slug: String) -> Element {
    let tile = use_resource(use_reactive((&slug,), |(slug,)| async move {
        api_client::api::get_tile(slug).await
    }));

    let access = use_tile_access();
    let return_to = Route::TileDetail { slug: slug.clone() }.to_string();

    let body = match &*tile.read() {
        None => rsx! {
            div { class: "tile-detail-loading",
                Skeleton { class: "tile-detail-skeleton-title" }
                Skeleton { class: "tile-detail-skeleton-body" }
            }
        },
        Some(Err(e)) if e.kind == AppErrorKind::NotFound => rsx! {
            div { class: "tile-detail-missing",
                h1 { "Research not found" }
                p { "This analysis may have been unpublished or moved." }
                Link { to: Route::Home {}, "Browse all research" }
            }
        },
        Some(Err(e)) => rsx! {
            Notice { tone: NoticeTone::Error, "{e.friendly_message()}" }
        },
        Some(Ok(tile)) => rsx! {
            TileDetailBody { tile: tile.clone(), access, return_to }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tile_detail.css") }
        div { class: "tile-detail",
            Link { to: Route::Home {}, class: "tile-detail-back",
                Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                "All research"
            }
            {body}
        }
    }
}

#[component]
fn TileDetailBody(
    tile: ShariahTile,
    access: shared_types::TileAccess,
    return_to: String,
) -> Element {
    let passing = tile.passing_metrics();
    let total = tile.compliance_metrics.len();
    let updated = format_date(&tile.footer_right);

    rsx! {
        header { class: "tile-detail-header",
            Badge { variant: BadgeVariant::Secondary, "{tile.category}" }
            h1 { "{tile.title}" }
            p { class: "tile-detail-description", "{tile.description}" }
            div { class: "tile-detail-meta",
                span { "{tile.footer_left}" }
                span { "Updated {updated}" }
            }
        }

        PremiumGate {
            access,
            title: tile.locked_title.clone(),
            description: tile.locked_description.clone(),
            return_to,

            section { class: "tile-detail-section",
                h2 { "Compliance metrics" }
                if total > 0 {
                    p { class: "tile-detail-summary", "{passing} of {total} metrics pass" }
                }
                MetricsTable { metrics: tile.compliance_metrics.clone() }
            }

            if !tile.compliance_points.is_empty() {
                section { class: "tile-detail-section",
                    h2 { "Screening points" }
                    ul { class: "tile-detail-points",
                        for (i, point) in tile.compliance_points.iter().enumerate() {
                            li { key: "{i}",
                                Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 16, height: 16 }
                                span { "{point}" }
                            }
                        }
                    }
                }
            }

            section { class: "tile-detail-section",
                h2 { "Analyst notes" }
                p { class: "tile-detail-notes", "{tile.analyst_notes}" }
            }
        }
    }
}
