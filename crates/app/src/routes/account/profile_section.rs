use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::{check_avatar, FeatureFlags, ProfileForm};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Form, Input, Notice, NoticeTone,
};
use std::collections::HashMap;

/// Profile card: avatar upload and the name/email/password form.
#[component]
pub fn ProfileSection() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();

    let (initial_name, initial_email) = match auth.current_user.read().as_ref() {
        Some(u) => (u.name.clone(), u.email.clone()),
        None => (String::new(), String::new()),
    };

    let mut name = use_signal(move || initial_name);
    let mut email = use_signal(move || initial_email);
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let mut saving = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| false);

    let mut uploading = use_signal(|| false);
    let mut avatar_error = use_signal(|| Option::<String>::None);

    let user = auth.current_user.read().clone();
    let errors = field_errors();

    rsx! {
        Card { class: "account-card",
            CardHeader {
                CardTitle { "Profile" }
                CardDescription { "Your name, email and password." }
            }
            CardContent {
                if let Some(user) = user {
                    div { class: "account-avatar-row",
                        div { class: "account-avatar",
                            Avatar {
                                if let Some(url) = user.profile_picture.clone() {
                                    AvatarImage { src: url }
                                }
                                AvatarFallback { "{user.initials()}" }
                            }
                        }
                        if flags.avatar_upload {
                            div { class: "account-avatar-upload",
                                label {
                                    class: if uploading() { "button avatar-upload-label disabled" } else { "button avatar-upload-label" },
                                    "data-style": "outline",
                                    input {
                                        r#type: "file",
                                        accept: "image/jpeg,image/png,image/webp",
                                        class: "avatar-upload-input",
                                        disabled: uploading(),
                                        onchange: move |evt: FormEvent| async move {
                                            if uploading() {
                                                return;
                                            }
                                            let files = evt.files();
                                            let Some(file) = files.first() else {
                                                return;
                                            };
                                            let content_type = file.content_type().unwrap_or_default();
                                            if let Err(rejection) = check_avatar(file.size(), &content_type) {
                                                avatar_error.set(Some(rejection.message()));
                                                return;
                                            }

                                            uploading.set(true);
                                            avatar_error.set(None);
                                            match file.read_bytes().await {
                                                Ok(bytes) => {
                                                    match api_client::api::upload_profile_picture(
                                                        file.name(),
                                                        content_type,
                                                        bytes.to_vec(),
                                                    )
                                                    .await
                                                    {
                                                        Ok(updated) => auth.set_user(updated),
                                                        Err(e) => avatar_error.set(Some(e.friendly_message())),
                                                    }
                                                }
                                                Err(_) => avatar_error.set(Some("Failed to read file".to_string())),
                                            }
                                            uploading.set(false);
                                        },
                                    }
                                    if uploading() { "Uploading..." } else { "Change picture" }
                                }
                                p { class: "account-hint", "JPEG, PNG or WebP, up to 2 MB." }
                                if let Some(err) = avatar_error() {
                                    p { class: "field-error", role: "alert", "{err}" }
                                }
                            }
                        }
                    }
                }

                Form {
                    onsubmit: move |_evt| async move {
                        saved.set(false);
                        form_error.set(None);
                        field_errors.set(HashMap::new());

                        let form = ProfileForm {
                            name: name(),
                            email: email(),
                            current_password: current_password(),
                            new_password: Some(new_password()),
                            confirm_password: confirm_password(),
                        };
                        let request = match form.into_request() {
                            Ok(req) => req,
                            Err(e) => {
                                field_errors.set(e.field_errors);
                                return;
                            }
                        };

                        saving.set(true);
                        match api_client::api::update_profile(request).await {
                            Ok(updated) => {
                                auth.set_user(updated);
                                current_password.set(String::new());
                                new_password.set(String::new());
                                confirm_password.set(String::new());
                                saved.set(true);
                            }
                            Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                            Err(e) => form_error.set(Some(e.friendly_message())),
                        }
                        saving.set(false);
                    },

                    div { class: "account-form",
                        if saved() {
                            Notice {
                                tone: NoticeTone::Success,
                                on_dismiss: move |_| saved.set(false),
                                "Profile updated."
                            }
                        }
                        if let Some(err) = form_error() {
                            Notice { tone: NoticeTone::Error, "{err}" }
                        }

                        Input {
                            label: "Name",
                            value: name(),
                            on_input: move |evt: FormEvent| name.set(evt.value()),
                            error: errors.get("name").cloned(),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                            error: errors.get("email").cloned(),
                        }

                        fieldset { class: "account-password",
                            legend { "Change password" }
                            Input {
                                label: "Current password",
                                input_type: "password",
                                value: current_password(),
                                on_input: move |evt: FormEvent| current_password.set(evt.value()),
                                error: errors.get("current_password").cloned(),
                            }
                            Input {
                                label: "New password",
                                input_type: "password",
                                value: new_password(),
                                on_input: move |evt: FormEvent| new_password.set(evt.value()),
                                error: errors.get("new_password").cloned(),
                            }
                            Input {
                                label: "Confirm new password",
                                input_type: "password",
                                value: confirm_password(),
                                on_input: move |evt: FormEvent| confirm_password.set(evt.value()),
                                error: errors.get("confirm_password").cloned(),
                            }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            submit: true,
                            loading: saving(),
                            if saving() { "Saving..." } else { "Save profile" }
                        }
                    }
                }
            }
        }
    }
}
