//! HTTP client for the assistant backend and the per-message dispatcher.
//!
//! One request per message, no retries: any transport or decode failure
//! collapses into the single fixed fallback reply.

use crate::intent::Intent;
use crate::types::{ChatRecord, Model, Sender};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// The one user-facing failure message; timeouts, 4xx/5xx, and malformed
/// bodies are deliberately indistinguishable.
pub const FALLBACK_MESSAGE: &str =
    "I'm having trouble connecting to my brain. Is the server running? 🧠";

const MISSING_RESPONSE_MESSAGE: &str = "No response received.";
const IMAGE_FAILED_MESSAGE: &str = "Sorry, I couldn't generate the image.";
const VIDEO_PENDING_MESSAGE: &str = "Video processing started...";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    model: &'a str,
}

#[derive(Serialize)]
struct PromptRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoResponse {
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

/// What a dispatch produced: the assistant record to append, and the text to
/// speak aloud when the message came in by voice (text replies only).
pub struct DispatchReply {
    pub record: ChatRecord,
    pub spoken: Option<String>,
}

pub struct AssistantClient {
    client: reqwest::Client,
    base_url: String,
}

impl AssistantClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL from `DIMPLE_API_BASE`, defaulting to the local dev server.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("DIMPLE_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub async fn chat(&self, message: &str, model: Model) -> Result<ChatResponse, ApiError> {
        let url = format!("{}/chat", self.base_url);
        let body = ChatRequest {
            message,
            model: model.as_str(),
        };
        Ok(self.client.post(url).json(&body).send().await?.json().await?)
    }

    pub async fn generate_image(&self, prompt: &str) -> Result<ImageResponse, ApiError> {
        let url = format!("{}/generate_image", self.base_url);
        let body = PromptRequest { prompt };
        Ok(self.client.post(url).json(&body).send().await?.json().await?)
    }

    pub async fn generate_video(&self, prompt: &str) -> Result<VideoResponse, ApiError> {
        let url = format!("{}/generate_video", self.base_url);
        let body = PromptRequest { prompt };
        Ok(self.client.post(url).json(&body).send().await?.json().await?)
    }

    /// Issue exactly one request for the classified message and fold the
    /// outcome, success or failure, into an assistant record.
    pub async fn dispatch(&self, intent: Intent, text: &str, model: Model) -> DispatchReply {
        debug!(?intent, model = model.as_str(), "dispatching message");
        let result: Result<DispatchReply, ApiError> = match intent {
            Intent::Text => self.chat(text, model).await.map(text_reply),
            Intent::Image => self.generate_image(text).await.map(image_reply),
            Intent::Video => self.generate_video(text).await.map(video_reply),
        };
        result.unwrap_or_else(|err| {
            warn!("assistant request failed: {err}");
            DispatchReply {
                record: ChatRecord::assistant_text(FALLBACK_MESSAGE),
                spoken: None,
            }
        })
    }
}

fn text_reply(response: ChatResponse) -> DispatchReply {
    let spoken = response.response.clone().filter(|s| !s.is_empty());
    let text = response
        .response
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| MISSING_RESPONSE_MESSAGE.to_string());
    DispatchReply {
        record: ChatRecord::assistant_text(text),
        spoken,
    }
}

fn image_reply(response: ImageResponse) -> DispatchReply {
    let record = match response.image_url {
        Some(url) => ChatRecord::Image {
            url,
            sender: Sender::Assistant,
            caption: response.response,
        },
        None => ChatRecord::assistant_text(IMAGE_FAILED_MESSAGE),
    };
    DispatchReply {
        record,
        spoken: None,
    }
}

fn video_reply(response: VideoResponse) -> DispatchReply {
    let record = match response.video_url {
        Some(url) => {
            let lead = response.response.unwrap_or_default();
            ChatRecord::assistant_text(format!(
                r#"{lead}<div class="video-wrap"><video controls autoplay loop muted src="{url}"></video></div>"#
            ))
        }
        None => ChatRecord::assistant_text(
            response
                .response
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| VIDEO_PENDING_MESSAGE.to_string()),
        ),
    };
    DispatchReply {
        record,
        spoken: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::classify;

    fn endpoint_for(input: &str) -> &'static str {
        match classify(input) {
            Intent::Text => "/chat",
            Intent::Image => "/generate_image",
            Intent::Video => "/generate_video",
        }
    }

    #[test]
    fn phrases_route_to_endpoints() {
        let table = [
            ("generate an image of a cat", "/generate_image"),
            ("draw a picture of the sea", "/generate_image"),
            ("make some art please", "/generate_image"),
            ("create a video of the city", "/generate_video"),
            ("make a clip of a rocket launch", "/generate_video"),
            ("what's on my schedule today", "/chat"),
            ("explain borrowing in rust", "/chat"),
        ];
        for (phrase, endpoint) in table {
            assert_eq!(endpoint_for(phrase), endpoint, "{phrase}");
        }
    }

    #[test]
    fn text_reply_speaks_the_response() {
        let reply = text_reply(ChatResponse {
            response: Some("hello!".to_string()),
        });
        assert_eq!(reply.record, ChatRecord::assistant_text("hello!"));
        assert_eq!(reply.spoken.as_deref(), Some("hello!"));
    }

    #[test]
    fn empty_text_reply_uses_placeholder() {
        let reply = text_reply(ChatResponse { response: None });
        assert_eq!(
            reply.record,
            ChatRecord::assistant_text("No response received.")
        );
        assert!(reply.spoken.is_none());
    }

    #[test]
    fn image_reply_carries_url_and_caption() {
        let reply = image_reply(ImageResponse {
            image_url: Some("https://img.example/x.png".to_string()),
            response: Some("here you go".to_string()),
        });
        assert_eq!(
            reply.record,
            ChatRecord::Image {
                url: "https://img.example/x.png".to_string(),
                sender: Sender::Assistant,
                caption: Some("here you go".to_string()),
            }
        );
        assert!(reply.spoken.is_none());
    }

    #[test]
    fn image_reply_without_url_apologizes() {
        let reply = image_reply(ImageResponse {
            image_url: None,
            response: Some("ignored".to_string()),
        });
        assert_eq!(
            reply.record,
            ChatRecord::assistant_text("Sorry, I couldn't generate the image.")
        );
    }

    #[test]
    fn video_reply_embeds_player() {
        let reply = video_reply(VideoResponse {
            video_url: Some("https://vid.example/v.mp4".to_string()),
            response: Some("Your video:".to_string()),
        });
        match reply.record {
            ChatRecord::Text { text, sender } => {
                assert_eq!(sender, Sender::Assistant);
                assert!(text.starts_with("Your video:"));
                assert!(text.contains(r#"src="https://vid.example/v.mp4""#));
            }
            other => panic!("expected text record, got {other:?}"),
        }
    }

    #[test]
    fn video_reply_without_url_falls_back() {
        let reply = video_reply(VideoResponse {
            video_url: None,
            response: None,
        });
        assert_eq!(
            reply.record,
            ChatRecord::assistant_text("Video processing started...")
        );
    }

    #[tokio::test]
    async fn failed_request_yields_the_fixed_fallback() {
        // Nothing listens on this port; the single attempt fails fast.
        let client = AssistantClient::new("http://127.0.0.1:1");
        let reply = client.dispatch(Intent::Text, "hello", Model::Groq).await;
        assert_eq!(reply.record, ChatRecord::assistant_text(FALLBACK_MESSAGE));
        assert!(reply.spoken.is_none());
    }
}
