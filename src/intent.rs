//! Intent classification: routes free text to one of three backend actions.

use once_cell::sync::Lazy;
use regex::Regex;

/// Where a message gets dispatched. Image wins when a phrase matches both
/// generation vocabularies, matching the endpoint selection of the backend
/// this client was built against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Text,
    Image,
    Video,
}

static IMAGE_REQUEST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(generate|create|draw|make|imagine|magine).*(image|picture|drawing|photo|art)")
        .expect("image intent pattern")
});

static VIDEO_REQUEST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(generate|create|make|imagine|magine).*(video|movie|clip)")
        .expect("video intent pattern")
});

pub fn classify(input: &str) -> Intent {
    if IMAGE_REQUEST.is_match(input) {
        Intent::Image
    } else if VIDEO_REQUEST.is_match(input) {
        Intent::Video
    } else {
        Intent::Text
    }
}
