//! Responsive breakpoint definitions for the Web UI.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Name mirrored onto `<body>` as `data-bp`.
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u16,
    /// Inclusive upper bound, `None` for the widest tier.
    pub max_width: Option<u16>,
}

/// Phones.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(599),
};
/// Small tablets.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 600,
    max_width: Some(899),
};
/// Tablets and small laptops.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 900,
    max_width: Some(1199),
};
/// Desktops.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1200,
    max_width: Some(1535),
};
/// Wide desktops.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1536,
    max_width: None,
};

/// Ordered breakpoints used for layout decisions.
pub const BREAKPOINTS: [Breakpoint; 5] = [XS, SM, MD, LG, XL];

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(XL)
}

/// Breakpoint for a raw `window.innerWidth`, falling back to desktop when unknown.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn for_viewport(width_px: Option<f64>) -> Breakpoint {
    match width_px {
        Some(width) if width.is_finite() => {
            for_width(width.clamp(0.0, f64::from(u16::MAX)) as u16)
        }
        _ => LG,
    }
}

/// Whether navigation collapses into the drawer.
#[must_use]
pub fn uses_drawer_nav(bp: Breakpoint) -> bool {
    bp.min_width < SM.min_width
}
