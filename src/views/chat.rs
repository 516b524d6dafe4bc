use crate::api::AssistantClient;
use crate::format::render_message_html;
use crate::history::ChatStore;
use crate::intent::{self, Intent};
use crate::types::{ChatRecord, Model, Sender, UserProfile};
use crate::ui::UserAvatar;
use crate::voice::{self, VoicePhase};
use dioxus::events::Key;
use dioxus::prelude::*;

const DEFAULT_IMAGE_CAPTION: &str = "Here is your creation:";

const SUGGESTIONS: [&str; 3] = [
    "What's on my plate today?",
    "Draft a follow-up email to the team",
    "Generate an image of a sunrise over the city",
];

fn loading_label(intent: Intent) -> &'static str {
    match intent {
        Intent::Text => "Thinking...",
        Intent::Image => "Creating your masterpiece...",
        Intent::Video => "Rendering video clip...",
    }
}

#[component]
pub fn ChatView(
    chat: Signal<ChatStore>,
    profile: Signal<UserProfile>,
    model: Signal<Model>,
) -> Element {
    let mut input = use_signal(String::new);
    let sending = use_signal(|| false);
    let pending = use_signal(|| Option::<Intent>::None);
    let voice_phase = use_signal(VoicePhase::default);

    let send_message = {
        let mut chat = chat;
        let mut sending_signal = sending;
        let mut pending_signal = pending;
        let mut input_signal = input;
        let model = model;
        move |text: String, speak_reply: bool| {
            let trimmed = text.trim().to_string();
            if trimmed.is_empty() || sending_signal() {
                return;
            }

            chat.with_mut(|store| store.append(ChatRecord::user_text(trimmed.clone())));
            input_signal.set(String::new());

            let intent = intent::classify(&trimmed);
            let chosen_model = model();
            sending_signal.set(true);
            pending_signal.set(Some(intent));

            spawn(async move {
                let client = AssistantClient::from_env();
                let reply = client.dispatch(intent, &trimmed, chosen_model).await;
                chat.with_mut(|store| store.append(reply.record));
                if speak_reply {
                    if let Some(spoken) = reply.spoken {
                        let _ = document::eval(&voice::speak_script(&spoken));
                    }
                }
                pending_signal.set(None);
                sending_signal.set(false);
            });
        }
    };

    let toggle_voice = {
        let mut voice_signal = voice_phase;
        let mut input_signal = input;
        move |_| {
            if voice_signal().is_listening() {
                let _ = document::eval(&voice::recognition_stop_script());
                voice_signal.set(VoicePhase::Idle);
            } else {
                voice_signal.set(VoicePhase::Listening);
                spawn(async move {
                    let mut eval = document::eval(&voice::recognition_start_script());
                    let transcript = eval.recv::<String>().await.unwrap_or_default();
                    voice_signal.set(VoicePhase::Idle);
                    if !transcript.trim().is_empty() {
                        input_signal.set(transcript.clone());
                        // Spoken input gets a spoken reply.
                        let mut send = send_message;
                        send(transcript, true);
                    }
                });
            }
        }
    };

    let records = chat.with(|store| store.records().to_vec());
    let show_welcome = records.is_empty() && pending().is_none();

    rsx! {
        div { class: "main-container",
            div { class: "chat-wrap",
                if show_welcome {
                    WelcomeScreen { profile, on_suggestion: move |text: String| { let mut send = send_message; send(text, false) } }
                }
                div { class: "chat-list",
                    for record in records.iter() {
                        MessageRow { record: record.clone(), profile }
                    }
                    if let Some(active) = pending() {
                        div { class: "message-row assistant",
                            div { class: "avatar assistant", "D" }
                            div { class: "bubble assistant loading",
                                span { class: "shimmer-text", "{loading_label(active)}" }
                            }
                        }
                    }
                }
            }

            form { class: "composer",
                div { class: "composer-inner",
                    textarea {
                        rows: "1",
                        placeholder: "Ask me anything...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                let mut send = send_message;
                                send(text, false);
                            }
                        },
                        disabled: sending(),
                        autofocus: true,
                    }
                    button {
                        class: if voice_phase().is_listening() { "icon-btn voice-btn listening" } else { "icon-btn voice-btn" },
                        r#type: "button",
                        title: "Voice input",
                        onclick: toggle_voice,
                        "🎤"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: sending() || input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            let mut send = send_message;
                            send(text, false);
                        },
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn WelcomeScreen(profile: Signal<UserProfile>, on_suggestion: EventHandler<String>) -> Element {
    rsx! {
        div { class: "welcome-container",
            h2 { "Hello, {profile().name} 👋" }
            p { class: "text-muted", "How can I help you today?" }
            div { class: "suggestions",
                for suggestion in SUGGESTIONS {
                    button {
                        class: "suggestion-chip",
                        r#type: "button",
                        onclick: move |_| on_suggestion.call(suggestion.to_string()),
                        "{suggestion}"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(record: ChatRecord, profile: Signal<UserProfile>) -> Element {
    let sender = record.sender();
    let row_class = match sender {
        Sender::User => "message-row user",
        Sender::Assistant => "message-row assistant",
    };
    let bubble = match &record {
        ChatRecord::Text { text, .. } => {
            let bubble_class = match sender {
                Sender::User => "bubble user",
                Sender::Assistant => "bubble assistant",
            };
            rsx! {
                div { class: bubble_class,
                    div { class: "md", dangerous_inner_html: "{render_message_html(text)}" }
                }
            }
        }
        ChatRecord::Image { url, caption, .. } => {
            let caption = caption
                .clone()
                .unwrap_or_else(|| DEFAULT_IMAGE_CAPTION.to_string());
            rsx! {
                div { class: "bubble assistant",
                    p { "{caption}" }
                    img { class: "generated-image", src: "{url}", alt: "Generated" }
                }
            }
        }
    };
    rsx! {
        div { class: row_class,
            if matches!(sender, Sender::Assistant) {
                div { class: "avatar assistant", "D" }
            } else {
                UserAvatar { profile, size_class: "avatar-small" }
            }
            {bubble}
        }
    }
}
