//! The February 3rd easter egg: overlay plus confetti.

use time::{Date, Month, OffsetDateTime};
use tracing::warn;

const CONFETTI_DURATION_MS: u32 = 5_000;
const CONFETTI_INTERVAL_MS: u32 = 250;

pub fn is_birthday(date: Date) -> bool {
    date.month() == Month::February && date.day() == 3
}

/// Whether today (local clock where available, UTC otherwise) is the day.
/// Clock problems are logged and treated as "not today".
pub fn today_is_birthday() -> bool {
    let now = match OffsetDateTime::now_local() {
        Ok(now) => now,
        Err(err) => {
            warn!("local offset unavailable, using UTC for birthday check: {err}");
            OffsetDateTime::now_utc()
        }
    };
    is_birthday(now.date())
}

/// Periodic confetti bursts for a few seconds. No-op when the confetti
/// library did not load.
pub fn confetti_script() -> String {
    format!(
        r#"
(() => {{
    if (typeof confetti !== 'function') return;
    const duration = {duration};
    const animationEnd = Date.now() + duration;
    const defaults = {{ startVelocity: 30, spread: 360, ticks: 60, zIndex: 11000 }};
    const interval = setInterval(() => {{
        const timeLeft = animationEnd - Date.now();
        if (timeLeft <= 0) return clearInterval(interval);
        const particleCount = 50 * (timeLeft / duration);
        confetti(Object.assign({{}}, defaults, {{
            particleCount,
            origin: {{ x: Math.random(), y: Math.random() - 0.2 }}
        }}));
    }}, {interval});
}})();
"#,
        duration = CONFETTI_DURATION_MS,
        interval = CONFETTI_INTERVAL_MS,
    )
}
