//! Class composition helpers shared by the wrappers.

use crate::core::ui::Tone;

/// Prefixed tone class (e.g. `btn-success`), if a tone is set.
pub(crate) fn tone_class(prefix: &str, tone: Option<Tone>) -> Option<String> {
    tone.map(|tone| format!("{prefix}-{}", tone.as_str()))
}

/// Text color class for a tone, used by icons.
pub(crate) fn text_tone(tone: Tone) -> String {
    format!("text-{}", tone.as_str())
}
