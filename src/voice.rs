//! Voice input/output over the webview speech APIs.
//!
//! The Rust side owns a small toggle state machine and builds the JS
//! evaluated in the webview; keeping the scripts as pure string builders
//! keeps the escaping testable.

/// Listening toggle: idle → listening → idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoicePhase {
    #[default]
    Idle,
    Listening,
}

impl VoicePhase {
    pub fn is_listening(&self) -> bool {
        matches!(self, VoicePhase::Listening)
    }
}

/// Preferred synthesis voices, tried in order by name substring; the
/// platform default voice is used when none match.
pub const PREFERRED_VOICES: &[&str] = &["Google US English", "David"];

const SPEECH_PITCH: f32 = 0.9;

fn js_string(text: &str) -> String {
    // JSON string encoding is valid JS string syntax.
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

/// Start one-shot speech recognition and send the transcript back to Rust.
/// Sends an empty string on error or no-match so the caller always unblocks.
pub fn recognition_start_script() -> String {
    r#"
(() => {
    const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
    if (!Recognition) { dioxus.send(""); return; }
    const recognition = new Recognition();
    recognition.continuous = false;
    recognition.lang = 'en-US';
    window.__dimpleRecognition = recognition;
    let sent = false;
    const finish = (transcript) => {
        if (sent) return;
        sent = true;
        window.__dimpleRecognition = null;
        dioxus.send(transcript);
    };
    recognition.onresult = (event) => finish(event.results[0][0].transcript);
    recognition.onerror = () => finish("");
    recognition.onend = () => finish("");
    recognition.start();
})();
"#
    .to_string()
}

/// Abort an in-flight recognition, if any.
pub fn recognition_stop_script() -> String {
    r#"
(() => {
    const recognition = window.__dimpleRecognition;
    if (recognition) recognition.stop();
})();
"#
    .to_string()
}

/// Speak a reply, cancelling anything already queued.
pub fn speak_script(text: &str) -> String {
    let preferred = PREFERRED_VOICES
        .iter()
        .map(|name| js_string(name))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"
(() => {{
    if (!('speechSynthesis' in window)) return;
    window.speechSynthesis.cancel();
    const utterance = new SpeechSynthesisUtterance({text});
    const voices = window.speechSynthesis.getVoices();
    const preferred = [{preferred}];
    let voice = null;
    for (const name of preferred) {{
        voice = voices.find(v => v.name.includes(name));
        if (voice) break;
    }}
    if (!voice) voice = voices[0];
    if (voice) utterance.voice = voice;
    utterance.pitch = {pitch};
    window.speechSynthesis.speak(utterance);
}})();
"#,
        text = js_string(text),
        preferred = preferred,
        pitch = SPEECH_PITCH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_toggles() {
        let phase = VoicePhase::default();
        assert!(!phase.is_listening());
        assert!(VoicePhase::Listening.is_listening());
    }

    #[test]
    fn speak_script_escapes_text() {
        let script = speak_script("she said \"hi\"\nthen left");
        assert!(script.contains(r#""she said \"hi\"\nthen left""#));
    }

    #[test]
    fn speak_script_lists_preferred_voices_in_order() {
        let script = speak_script("x");
        let google = script.find("Google US English").expect("first preference");
        let david = script.find("David").expect("second preference");
        assert!(google < david);
        assert!(script.contains("utterance.pitch = 0.9"));
    }

    #[test]
    fn recognition_scripts_reference_the_same_handle() {
        assert!(recognition_start_script().contains("__dimpleRecognition"));
        assert!(recognition_stop_script().contains("__dimpleRecognition"));
    }
}
