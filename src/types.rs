use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One transcript entry. Serialized with a `type` tag so stored history stays
/// readable and forward-compatible with new record kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatRecord {
    Text {
        text: String,
        sender: Sender,
    },
    Image {
        url: String,
        sender: Sender,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

impl ChatRecord {
    pub fn sender(&self) -> Sender {
        match self {
            ChatRecord::Text { sender, .. } | ChatRecord::Image { sender, .. } => *sender,
        }
    }

    pub fn user_text(text: impl Into<String>) -> Self {
        ChatRecord::Text {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn assistant_text(text: impl Into<String>) -> Self {
        ChatRecord::Text {
            text: text.into(),
            sender: Sender::Assistant,
        }
    }
}

/// Singleton display profile. Saved wholesale, never deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    /// Data URI when the user picked an avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Dimple".to_string(),
            role: "CEO & FOUNDER".to_string(),
            avatar: None,
        }
    }
}

/// Backend model choice carried on every `/chat` request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Model {
    #[default]
    Groq,
    Gemini,
}

impl Model {
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Groq => "groq",
            Model::Gemini => "gemini",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Model::Groq => "Groq",
            Model::Gemini => "Gemini",
        }
    }
}
