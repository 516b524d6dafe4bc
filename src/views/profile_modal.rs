use crate::profile;
use crate::types::UserProfile;
use crate::ui::STORAGE_NAMESPACE;
use dioxus::prelude::*;
use tracing::warn;

/// Edit dialog for the persisted profile. Changes apply only on Save;
/// Cancel discards the draft.
#[component]
pub fn ProfileModal(profile: Signal<UserProfile>, open: Signal<bool>) -> Element {
    let mut profile = profile;
    let mut open = open;
    let mut name = use_signal(|| profile().name);
    let mut role = use_signal(|| profile().role);
    let mut avatar = use_signal(|| profile().avatar);

    let on_avatar_pick = move |ev: Event<FormData>| {
        if let Some(engine) = ev.files() {
            spawn(async move {
                if let Some(file_name) = engine.files().first().cloned() {
                    if let Some(bytes) = engine.read_file(&file_name).await {
                        avatar.set(Some(profile::avatar_data_uri(&file_name, &bytes)));
                    }
                }
            });
        }
    };

    let on_save = move |_| {
        let draft = UserProfile {
            name: name(),
            role: role(),
            avatar: avatar(),
        };
        if let Err(err) = profile::save(STORAGE_NAMESPACE, &draft) {
            warn!("failed to save profile: {err}");
        }
        // Reload so the in-memory copy matches what normalization stored.
        profile.set(profile::load(STORAGE_NAMESPACE));
        open.set(false);
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal profile-modal",
                h3 { "Your profile" }
                div { class: "avatar profile-preview",
                    if let Some(data_uri) = avatar() {
                        img { src: "{data_uri}", alt: "Avatar preview" }
                    } else {
                        "?"
                    }
                }
                label { class: "field-label", "Avatar"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_avatar_pick,
                    }
                }
                label { class: "field-label", "Name"
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |ev| name.set(ev.value()),
                    }
                }
                label { class: "field-label", "Role"
                    input {
                        r#type: "text",
                        value: "{role}",
                        oninput: move |ev| role.set(ev.value()),
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| open.set(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: on_save,
                        "Save"
                    }
                }
            }
        }
    }
}
