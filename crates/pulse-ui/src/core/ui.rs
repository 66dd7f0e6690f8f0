//! UI primitives shared across the crate (tones, icons, button behaviour).

/// Label shown in place of a button's children while it is loading.
pub const LOADING_LABEL: &str = "Loading...";

/// Semantic color used by chips, alerts, icons and buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    /// Brand primary.
    #[default]
    Primary,
    /// Brand secondary.
    Secondary,
    /// Positive outcome.
    Success,
    /// Failed outcome.
    Error,
    /// Degraded or incomplete outcome.
    Warning,
    /// In-progress or informational.
    Info,
    /// No particular meaning.
    Neutral,
}

impl Tone {
    /// Class suffix (e.g. `"success"`) used when composing CSS classes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Neutral => "neutral",
        }
    }
}

/// Glyph drawn next to a status label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    /// Check mark.
    Success,
    /// Exclamation mark.
    Error,
    /// Clock face for pending or unknown states.
    Schedule,
    /// Progress spinner.
    Spinner,
}

/// Button surface style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled background.
    Contained,
    /// Border only.
    Outlined,
    /// No border or background.
    #[default]
    Text,
}

impl ButtonVariant {
    /// Extra class for the variant, if any.
    #[must_use]
    pub const fn as_class(self) -> Option<&'static str> {
        match self {
            Self::Contained => None,
            Self::Outlined => Some("btn-outline"),
            Self::Text => Some("btn-ghost"),
        }
    }
}

/// Effective rendering of a button after applying its loading flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    /// Whether the native button is disabled.
    pub disabled: bool,
    /// Whether the start icon is drawn.
    pub show_icon: bool,
    /// Whether [`LOADING_LABEL`] replaces the children.
    pub show_loading_label: bool,
}

impl ButtonState {
    /// Loading always disables the button and swaps its label.
    #[must_use]
    pub const fn resolve(loading: bool, disabled: bool) -> Self {
        Self {
            disabled: disabled || loading,
            show_icon: !loading,
            show_loading_label: loading,
        }
    }
}

/// Which card sections are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLayout {
    /// Header with the title and subtitle.
    pub header: bool,
    /// Body wrapping the children.
    pub body: bool,
    /// Footer holding the actions.
    pub actions: bool,
}

impl CardLayout {
    /// Sections are only emitted when they have content.
    #[must_use]
    pub const fn resolve(
        has_title: bool,
        has_subtitle: bool,
        has_children: bool,
        has_actions: bool,
    ) -> Self {
        Self {
            header: has_title || has_subtitle,
            body: has_children,
            actions: has_actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_disables_and_hides_icon() {
        let state = ButtonState::resolve(true, false);
        assert!(state.disabled);
        assert!(!state.show_icon);
        assert!(state.show_loading_label);
    }

    #[test]
    fn disabled_passes_through_when_idle() {
        let state = ButtonState::resolve(false, true);
        assert!(state.disabled);
        assert!(state.show_icon);
        assert!(!state.show_loading_label);
        assert!(!ButtonState::resolve(false, false).disabled);
    }

    #[test]
    fn variants_map_to_classes() {
        assert_eq!(ButtonVariant::Contained.as_class(), None);
        assert_eq!(ButtonVariant::Outlined.as_class(), Some("btn-outline"));
        assert_eq!(ButtonVariant::Text.as_class(), Some("btn-ghost"));
        assert_eq!(Tone::Warning.as_str(), "warning");
    }

    #[test]
    fn card_without_title_or_subtitle_has_no_header() {
        let layout = CardLayout::resolve(false, false, true, false);
        assert!(!layout.header);
        assert!(layout.body);
    }

    #[test]
    fn card_header_shows_for_title_or_subtitle() {
        assert!(CardLayout::resolve(false, true, true, false).header);
        assert!(CardLayout::resolve(true, false, true, false).header);
        assert!(CardLayout::resolve(true, true, false, false).header);
    }

    #[test]
    fn card_body_is_skipped_without_children() {
        let layout = CardLayout::resolve(true, false, false, false);
        assert!(!layout.body);
        assert!(layout.header);
    }

    #[test]
    fn card_actions_follow_their_presence() {
        assert!(CardLayout::resolve(true, false, true, true).actions);
        assert!(!CardLayout::resolve(true, false, true, false).actions);
    }
}
