mod editor;
mod metric_row;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdPlus, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::format::format_date;
use shared_types::ShariahTile;
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, Notice, NoticeTone, PageActions, PageHeader, PageTitle,
    Skeleton,
};

use editor::{EditorMode, TileEditor};

/// Admin console for the Shariah tiles: list, create, edit and delete.
#[component]
pub fn AdminTiles() -> Element {
    let mut tiles = use_resource(|| async move { api_client::api::admin_list_tiles().await });

    let mut editor = use_signal(|| Option::<EditorMode>::None);
    let mut delete_target = use_signal(|| Option::<ShariahTile>::None);
    let mut confirm_open = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut notice = use_signal(|| Option::<(NoticeTone, String)>::None);

    let loaded: Vec<ShariahTile> = match &*tiles.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    let handle_delete = move |_: ()| {
        let Some(tile) = delete_target() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match api_client::api::admin_delete_tile(tile.id.clone()).await {
                Ok(res) => {
                    let msg = if res.message.is_empty() {
                        format!("Deleted \"{}\".", tile.title)
                    } else {
                        res.message
                    };
                    notice.set(Some((NoticeTone::Success, msg)));
                    if editor().is_some_and(|m| m.editing_id() == Some(tile.id.as_str())) {
                        editor.set(None);
                    }
                    tiles.restart();
                }
                Err(e) => notice.set(Some((NoticeTone::Error, e.friendly_message()))),
            }
            deleting.set(false);
            confirm_open.set(false);
            delete_target.set(None);
        });
    };

    let list = match &*tiles.read() {
        None => rsx! {
            for i in 0..4 {
                Skeleton { key: "{i}", class: "admin-row-skeleton" }
            }
        },
        Some(Err(e)) => rsx! {
            Notice { tone: NoticeTone::Error, "{e.friendly_message()}" }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "admin-empty", "No tiles yet. Create the first one." }
        },
        Some(Ok(list)) => rsx! {
            table { class: "admin-tiles-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Category" }
                        th { "Slug" }
                        th { "Date" }
                        th { "Metrics" }
                        th { "" }
                    }
                }
                tbody {
                    for tile in list.iter().cloned() {
                        {
                            let passing = tile.passing_metrics();
                            let total = tile.compliance_metrics.len();
                            let edit_tile = tile.clone();
                            let delete_tile = tile.clone();
                            rsx! {
                                tr { key: "{tile.id}",
                                    td { class: "admin-tile-title", "{tile.title}" }
                                    td { "{tile.category}" }
                                    td { code { "{tile.slug}" } }
                                    td { {format_date(&tile.footer_right)} }
                                    td { "{passing}/{total} pass" }
                                    td { class: "admin-row-actions",
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| {
                                                notice.set(None);
                                                editor.set(Some(EditorMode::Edit(edit_tile.clone())));
                                            },
                                            Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| {
                                                delete_target.set(Some(delete_tile.clone()));
                                                confirm_open.set(true);
                                            },
                                            Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    let dialog_description = match delete_target() {
        Some(tile) => format!(
            "\"{}\" will be removed from the public site. This cannot be undone.",
            tile.title
        ),
        None => String::new(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin_tiles.css") }
        div { class: "admin-page",
            PageHeader {
                PageTitle { "Shariah tiles" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            notice.set(None);
                            editor.set(Some(EditorMode::Create));
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "New tile"
                    }
                }
            }

            if let Some((tone, msg)) = notice() {
                Notice { tone, on_dismiss: move |_| notice.set(None), "{msg}" }
            }

            if let Some(mode) = editor() {
                TileEditor {
                    key: "{mode.key()}",
                    mode: mode.clone(),
                    existing: loaded.clone(),
                    on_close: move |_| editor.set(None),
                    on_saved: move |msg: String| {
                        editor.set(None);
                        notice.set(Some((NoticeTone::Success, msg)));
                        tiles.restart();
                    },
                }
            }

            section { class: "admin-tiles-list", {list} }

            ConfirmDialog {
                open: confirm_open(),
                on_open_change: move |open: bool| confirm_open.set(open || deleting()),
                title: "Delete tile",
                description: dialog_description,
                confirm_label: if deleting() { "Deleting...".to_string() } else { "Delete".to_string() },
                on_confirm: handle_delete,
            }
        }
    }
}
