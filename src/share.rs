//! Share links for the supported platforms, plus copy-link.

pub const SHARE_TEXT: &str = "Check out Dimple AI - Your Executive Assistant! 🚀";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SharePlatform {
    WhatsApp,
    Telegram,
    Twitter,
    LinkedIn,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 4] = [
        SharePlatform::WhatsApp,
        SharePlatform::Telegram,
        SharePlatform::Twitter,
        SharePlatform::LinkedIn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SharePlatform::WhatsApp => "WhatsApp",
            SharePlatform::Telegram => "Telegram",
            SharePlatform::Twitter => "Twitter",
            SharePlatform::LinkedIn => "LinkedIn",
        }
    }
}

/// Build the provider share URL for the app page.
pub fn share_url(platform: SharePlatform, page_url: &str) -> String {
    let text = urlencoding::encode(SHARE_TEXT);
    let url = urlencoding::encode(page_url);
    match platform {
        SharePlatform::WhatsApp => {
            let message = format!("{SHARE_TEXT} {page_url}");
            let combined = urlencoding::encode(&message);
            format!("https://wa.me/?text={combined}")
        }
        SharePlatform::Telegram => {
            format!("https://t.me/share/url?url={url}&text={text}")
        }
        SharePlatform::Twitter => {
            format!("https://twitter.com/intent/tweet?url={url}&text={text}")
        }
        SharePlatform::LinkedIn => {
            format!("https://www.linkedin.com/sharing/share-offsite/?url={url}")
        }
    }
}

/// Copy the page link to the system clipboard.
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_link(page_url: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard
        .set_text(page_url.to_string())
        .map_err(|e| e.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn copy_link(_page_url: &str) -> Result<(), String> {
    // The web build copies through navigator.clipboard in the view layer.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://dimple.example/app?ref=1";

    #[test]
    fn whatsapp_combines_text_and_url() {
        let url = share_url(SharePlatform::WhatsApp, PAGE);
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(url.contains("Check%20out%20Dimple%20AI"));
        assert!(url.contains("https%3A%2F%2Fdimple.example%2Fapp%3Fref%3D1"));
    }

    #[test]
    fn telegram_has_separate_url_and_text() {
        let url = share_url(SharePlatform::Telegram, PAGE);
        assert!(url.starts_with("https://t.me/share/url?url="));
        assert!(url.contains("&text=Check%20out"));
    }

    #[test]
    fn twitter_intent_url() {
        let url = share_url(SharePlatform::Twitter, PAGE);
        assert!(url.starts_with("https://twitter.com/intent/tweet?url="));
        assert!(url.contains("&text="));
    }

    #[test]
    fn linkedin_carries_only_the_url() {
        let url = share_url(SharePlatform::LinkedIn, PAGE);
        assert!(url.starts_with("https://www.linkedin.com/sharing/share-offsite/?url="));
        assert!(!url.contains("text="));
    }

    #[test]
    fn share_text_is_encoded_not_raw() {
        for platform in SharePlatform::ALL {
            let url = share_url(platform, PAGE);
            assert!(!url.contains(' '), "{url}");
            assert!(!url.contains("🚀"), "{url}");
        }
    }
}
