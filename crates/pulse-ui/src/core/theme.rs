//! Design tokens and light/dark theme resolution.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// CSS custom property suffix (e.g. `"primary"`).
    pub name: &'static str,
    /// Hex RGB value.
    pub hex: &'static str,
}

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Tokens applied to the document for this mode.
    #[must_use]
    pub const fn tokens(self) -> &'static [ColorToken] {
        match self {
            Self::Light => LIGHT_TOKENS,
            Self::Dark => DARK_TOKENS,
        }
    }
}

const LIGHT_TOKENS: &[ColorToken] = &[
    ColorToken {
        name: "primary",
        hex: "#1976D2",
    },
    ColorToken {
        name: "secondary",
        hex: "#9C27B0",
    },
    ColorToken {
        name: "background",
        hex: "#FAFAFA",
    },
    ColorToken {
        name: "surface",
        hex: "#FFFFFF",
    },
    ColorToken {
        name: "text",
        hex: "#1F2328",
    },
    ColorToken {
        name: "muted",
        hex: "#5F6B7A",
    },
    ColorToken {
        name: "divider",
        hex: "#E0E3E7",
    },
];

const DARK_TOKENS: &[ColorToken] = &[
    ColorToken {
        name: "primary",
        hex: "#90CAF9",
    },
    ColorToken {
        name: "secondary",
        hex: "#CE93D8",
    },
    ColorToken {
        name: "background",
        hex: "#121212",
    },
    ColorToken {
        name: "surface",
        hex: "#1E1E1E",
    },
    ColorToken {
        name: "text",
        hex: "#EDEDED",
    },
    ColorToken {
        name: "muted",
        hex: "#A0A7B1",
    },
    ColorToken {
        name: "divider",
        hex: "#33373D",
    },
];

/// Inline `style` value declaring every token as a CSS custom property.
#[must_use]
pub fn css_variables(mode: ThemeMode) -> String {
    mode.tokens()
        .iter()
        .map(|token| format!("--pulse-{}:{};", token.name, token.hex))
        .collect()
}
