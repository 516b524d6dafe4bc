use crate::history::ChatStore;
use crate::types::{Model, UserProfile};
use crate::views::{ChatView, ProfileModal};
use crate::{birthday, format, profile, share};
use dioxus::prelude::*;
use tracing::warn;

const APP_CSS: Asset = asset!("/assets/dimple.css");
const CONFETTI_CDN: &str =
    "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";

/// Storage namespace shared by the profile and the transcript.
pub const STORAGE_NAMESPACE: &str = "dimple";

/// Public page link used by the share menu.
pub const APP_URL: &str = "https://dimple-ai.vercel.app";

#[component]
pub fn App() -> Element {
    let profile = use_signal(|| profile::load(STORAGE_NAMESPACE));
    let chat = use_signal(|| ChatStore::open(STORAGE_NAMESPACE));
    let model = use_signal(Model::default);
    let sidebar_open = use_signal(|| true);
    let show_profile_modal = use_signal(|| false);
    let show_birthday = use_signal(birthday::today_is_birthday);

    use_effect(move || {
        let _ = document::eval(format::COPY_CODE_SCRIPT);
        if show_birthday() {
            let _ = document::eval(&birthday::confetti_script());
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        document::Script { src: CONFETTI_CDN }
        div { class: "app-shell",
            Sidebar {
                chat,
                model,
                profile,
                sidebar_open,
                show_profile_modal,
            }
            div { class: "main-column",
                AppHeader { sidebar_open, profile }
                ChatView { chat, profile, model }
            }
        }
        if show_profile_modal() {
            ProfileModal { profile, open: show_profile_modal }
        }
        if show_birthday() {
            BirthdayOverlay { profile, open: show_birthday }
        }
    }
}

#[component]
fn AppHeader(sidebar_open: Signal<bool>, profile: Signal<UserProfile>) -> Element {
    let mut sidebar_open = sidebar_open;
    rsx! {
        div { class: "header",
            button {
                class: "icon-btn menu-btn",
                r#type: "button",
                onclick: move |_| sidebar_open.set(!sidebar_open()),
                "☰"
            }
            span { class: "header-title", "Dimple AI" }
            div { class: "header-profile",
                UserAvatar { profile, size_class: "avatar-small" }
            }
        }
    }
}

#[component]
fn Sidebar(
    chat: Signal<ChatStore>,
    model: Signal<Model>,
    profile: Signal<UserProfile>,
    sidebar_open: Signal<bool>,
    show_profile_modal: Signal<bool>,
) -> Element {
    let mut chat = chat;
    let mut sidebar_open = sidebar_open;
    let mut show_profile_modal = show_profile_modal;
    let class = if sidebar_open() {
        "sidebar open"
    } else {
        "sidebar closed"
    };
    rsx! {
        div { class: class,
            div { class: "sidebar-top",
                button {
                    class: "icon-btn close-sidebar-btn",
                    r#type: "button",
                    onclick: move |_| sidebar_open.set(false),
                    "×"
                }
            }
            button {
                class: "btn new-chat-btn",
                r#type: "button",
                onclick: move |_| chat.with_mut(|store| store.clear()),
                "+ New chat"
            }
            ModelSwitcher { model }
            ShareMenu {}
            div { class: "sidebar-footer",
                div { class: "profile-badge",
                    UserAvatar { profile, size_class: "avatar-small" }
                    div { class: "profile-badge-text",
                        span { class: "display-name", "{profile().name}" }
                        span { class: "user-role", "{profile().role}" }
                    }
                }
                button {
                    class: "icon-btn settings-btn",
                    r#type: "button",
                    onclick: move |_| show_profile_modal.set(true),
                    "⚙"
                }
            }
        }
    }
}

#[component]
fn ModelSwitcher(model: Signal<Model>) -> Element {
    let mut model = model;
    rsx! {
        div { class: "model-switcher",
            for choice in [Model::Groq, Model::Gemini] {
                button {
                    class: if model() == choice { "model-btn active" } else { "model-btn" },
                    r#type: "button",
                    onclick: move |_| model.set(choice),
                    "{choice.label()}"
                }
            }
        }
    }
}

#[component]
fn ShareMenu() -> Element {
    let mut copied = use_signal(|| false);
    let on_copy = move |_| {
        match share::copy_link(APP_URL) {
            Ok(()) => copied.set(true),
            Err(err) => warn!("clipboard copy failed: {err}"),
        }
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            copied.set(false);
        });
    };
    rsx! {
        div { class: "share-menu",
            span { class: "share-title", "Share" }
            for platform in share::SharePlatform::ALL {
                button {
                    class: "share-btn",
                    r#type: "button",
                    onclick: move |_| open_external(&share::share_url(platform, APP_URL)),
                    "{platform.label()}"
                }
            }
            button {
                class: "share-btn copy",
                r#type: "button",
                onclick: on_copy,
                if copied() { "Copied!" } else { "Copy link" }
            }
        }
    }
}

#[component]
fn BirthdayOverlay(profile: Signal<UserProfile>, open: Signal<bool>) -> Element {
    let mut open = open;
    rsx! {
        div { class: "birthday-overlay",
            div { class: "birthday-card",
                h2 { "Happy Birthday, {profile().name}! 🎂" }
                p { "Wishing you a wonderful day from your AI assistant." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| open.set(false),
                    "Thank you!"
                }
            }
        }
    }
}

/// Avatar slot: the stored image when one was picked, else the name initial.
#[component]
pub fn UserAvatar(profile: Signal<UserProfile>, size_class: &'static str) -> Element {
    let current = profile();
    rsx! {
        div { class: "avatar user-avatar {size_class}",
            if let Some(data_uri) = current.avatar {
                img { src: "{data_uri}", alt: "{current.name}" }
            } else {
                "{initial(&current.name)}"
            }
        }
    }
}

fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn open_external(url: &str) {
    let encoded = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
    let _ = document::eval(&format!("window.open({encoded}, '_blank');"));
}
