//! Assistant message formatting: a minimal inline markup language rendered
//! to HTML for the webview.
//!
//! Substitution order is load-bearing: fenced code blocks are lifted out
//! first so the inline-code, bold, and newline passes never touch code
//! bodies. Escaping is limited to angle brackets inside code blocks; this is
//! not a general sanitizer.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::sync::atomic::{AtomicU64, Ordering};

static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(\w*)\n([\s\S]*?)```").expect("code block pattern"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").expect("inline code pattern"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));

static CODE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_code_id() -> String {
    format!("code-{}", CODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// JS helper backing the copy button inside rendered code blocks. Evaluated
/// once at app start; the generated markup calls `window.dimpleCopyCode`.
pub const COPY_CODE_SCRIPT: &str = r#"
window.dimpleCopyCode = (id, btn) => {
    const codeElement = document.getElementById(id);
    if (!codeElement) return;
    navigator.clipboard.writeText(codeElement.textContent).then(() => {
        const original = btn.innerHTML;
        btn.innerHTML = 'Copied!';
        btn.classList.add('copied');
        setTimeout(() => {
            btn.innerHTML = original;
            btn.classList.remove('copied');
        }, 2000);
    });
};
"#;

fn render_code_block(caps: &Captures) -> String {
    let id = next_code_id();
    let language = match &caps[1] {
        "" => "code",
        tag => tag,
    };
    let escaped = caps[2].replace('<', "&lt;").replace('>', "&gt;");
    format!(
        concat!(
            r#"<div class="code-container">"#,
            r#"<div class="code-header">"#,
            r#"<span class="code-lang">{language}</span>"#,
            r#"<button class="copy-code-btn" onclick="window.dimpleCopyCode('{id}', this)">Copy</button>"#,
            r#"</div>"#,
            r#"<div class="code-content"><pre id="{id}"><code>{body}</code></pre></div>"#,
            r#"</div>"#
        ),
        language = language,
        id = id,
        body = escaped.trim(),
    )
}

/// Render a message body to HTML: fenced code blocks, `inline code`,
/// **bold**, then newlines to line breaks.
///
/// Rendered blocks are swapped for placeholders while the inline passes run,
/// then reinserted, so markup characters inside code stay verbatim.
pub fn render_message_html(text: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let with_placeholders = CODE_BLOCK.replace_all(text, |caps: &Captures| {
        blocks.push(render_code_block(caps));
        format!("\u{fffc}{}\u{fffc}", blocks.len() - 1)
    });
    let with_inline = INLINE_CODE.replace_all(&with_placeholders, "<code>$1</code>");
    let with_bold = BOLD.replace_all(&with_inline, "<strong>$1</strong>");
    let mut html = with_bold.replace('\n', "<br>");
    for (index, block) in blocks.iter().enumerate() {
        html = html.replace(&format!("\u{fffc}{index}\u{fffc}"), block);
    }
    html
}
