use super::metric_row::MetricRow;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPlus, LdX};
use dioxus_free_icons::Icon;
use shared_types::tile_form::fields;
use shared_types::{validate_tile_form, FieldErrors, MetricDraft, ShariahTile, TileForm};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, Fieldset, Form,
    Input, Notice, NoticeTone, Textarea,
};

/// Whether the editor creates a new tile or edits a loaded one.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Create,
    Edit(ShariahTile),
}

impl EditorMode {
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(tile) => Some(tile.id.as_str()),
        }
    }

    /// Remount key, so switching targets resets the form.
    pub fn key(&self) -> String {
        match self {
            EditorMode::Create => "new".to_string(),
            EditorMode::Edit(tile) => tile.id.clone(),
        }
    }

    fn initial_form(&self) -> TileForm {
        match self {
            EditorMode::Create => TileForm::blank(),
            EditorMode::Edit(tile) => TileForm::from_tile(tile),
        }
    }
}

/// Create/edit form for one tile.
///
/// Validation runs against `existing` so slug collisions are caught before
/// the request; server-side rejections are shown above the form.
#[component]
pub fn TileEditor(
    mode: EditorMode,
    existing: Vec<ShariahTile>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<String>,
) -> Element {
    let initial = mode.initial_form();
    let mut form = use_signal(move || initial);
    let mut errors = use_signal(FieldErrors::new);
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let heading = match &mode {
        EditorMode::Create => "New tile".to_string(),
        EditorMode::Edit(tile) => format!("Edit \"{}\"", tile.title),
    };
    let submit_mode = mode.clone();

    let current = form();
    let errs = errors();
    let slug = current.slug();
    let err = move |key: &str| errs.get(key).cloned();

    rsx! {
        Card { class: "tile-editor",
            CardHeader {
                CardTitle { "{heading}" }
            }
            Form {
                onsubmit: move |_evt| {
                    let existing = existing.clone();
                    let mode = submit_mode.clone();
                    async move {
                        if saving() {
                            return;
                        }
                        server_error.set(None);
                        let payload = match validate_tile_form(&form.read(), &existing, mode.editing_id()) {
                            Ok(payload) => payload,
                            Err(field_errors) => {
                                errors.set(field_errors);
                                return;
                            }
                        };
                        errors.set(FieldErrors::new());

                        saving.set(true);
                        let result = match &mode {
                            EditorMode::Create => api_client::api::admin_create_tile(payload)
                                .await
                                .map(|t| format!("Created \"{}\".", t.title)),
                            EditorMode::Edit(tile) => {
                                api_client::api::admin_update_tile(tile.id.clone(), payload)
                                    .await
                                    .map(|t| format!("Saved \"{}\".", t.title))
                            }
                        };
                        saving.set(false);

                        match result {
                            Ok(message) => on_saved.call(message),
                            Err(e) if !e.field_errors.is_empty() => errors.set(e.field_errors),
                            Err(e) => server_error.set(Some(e.friendly_message())),
                        }
                    }
                },

                CardContent { class: "tile-editor-body",
                    if let Some(msg) = server_error() {
                        Notice { tone: NoticeTone::Error, "{msg}" }
                    }

                    div { class: "tile-editor-grid",
                        div {
                            Input {
                                label: "Title",
                                value: current.title.clone(),
                                on_input: move |evt: FormEvent| form.write().title = evt.value(),
                                error: err(fields::TITLE),
                            }
                            if !slug.is_empty() {
                                p { class: "tile-editor-slug", "Slug: " code { "{slug}" } }
                            }
                        }
                        Input {
                            label: "Category",
                            value: current.category.clone(),
                            on_input: move |evt: FormEvent| form.write().category = evt.value(),
                            error: err(fields::CATEGORY),
                        }
                        Input {
                            label: "Footer text",
                            placeholder: "NASDAQ: ACME",
                            value: current.footer_left.clone(),
                            on_input: move |evt: FormEvent| form.write().footer_left = evt.value(),
                            error: err(fields::FOOTER_LEFT),
                        }
                        Input {
                            label: "Date",
                            input_type: "date",
                            value: current.footer_right.clone(),
                            on_input: move |evt: FormEvent| form.write().footer_right = evt.value(),
                            error: err(fields::FOOTER_RIGHT),
                        }
                    }

                    Textarea {
                        label: "Description",
                        rows: 3,
                        value: current.description.clone(),
                        on_input: move |evt: FormEvent| form.write().description = evt.value(),
                        error: err(fields::DESCRIPTION),
                    }
                    Textarea {
                        label: "Analyst notes",
                        rows: 5,
                        value: current.analyst_notes.clone(),
                        on_input: move |evt: FormEvent| form.write().analyst_notes = evt.value(),
                        error: err(fields::ANALYST_NOTES),
                    }

                    Fieldset {
                        legend: "Compliance points",
                        error: err(fields::COMPLIANCE_POINTS),
                        for (i, point) in current.compliance_points.iter().enumerate() {
                            div { key: "point-{i}", class: "tile-editor-point",
                                Input {
                                    value: point.clone(),
                                    placeholder: "No revenue from prohibited activities",
                                    error: err(&fields::row(fields::COMPLIANCE_POINTS, i)),
                                    on_input: move |evt: FormEvent| {
                                        if let Some(p) = form.write().compliance_points.get_mut(i) {
                                            *p = evt.value();
                                        }
                                    },
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Remove point",
                                    onclick: move |_| {
                                        let mut f = form.write();
                                        if i < f.compliance_points.len() {
                                            f.compliance_points.remove(i);
                                        }
                                    },
                                    Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                                }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| form.write().compliance_points.push(String::new()),
                            Icon::<LdPlus> { icon: LdPlus, width: 14, height: 14 }
                            "Add point"
                        }
                    }

                    Fieldset {
                        legend: "Compliance metrics",
                        error: err(fields::COMPLIANCE_METRICS),
                        for (i, draft) in current.compliance_metrics.iter().enumerate() {
                            MetricRow {
                                key: "metric-{i}",
                                index: i,
                                draft: draft.clone(),
                                error: err(&fields::row(fields::COMPLIANCE_METRICS, i)),
                                on_change: move |updated: MetricDraft| {
                                    if let Some(d) = form.write().compliance_metrics.get_mut(i) {
                                        *d = updated;
                                    }
                                },
                                on_remove: move |_| {
                                    let mut f = form.write();
                                    if i < f.compliance_metrics.len() {
                                        f.compliance_metrics.remove(i);
                                    }
                                },
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| form.write().add_metric(),
                            Icon::<LdPlus> { icon: LdPlus, width: 14, height: 14 }
                            "Add metric"
                        }
                    }
                }

                CardFooter { class: "tile-editor-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: saving(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        submit: true,
                        loading: saving(),
                        if saving() { "Saving..." } else { "Save tile" }
                    }
                }
            }
        }
    }
}
