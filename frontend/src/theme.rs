//! App theme: colors, spacing and shared inline styles.

/// Ledger palette. Light/dark selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#0F766E";
    pub const LIGHT_SURFACE: &'static str = "#F8FAFC";
    pub const LIGHT_CARD: &'static str = "rgba(255,255,255,0.96)";
    pub const LIGHT_ON_SURFACE: &'static str = "#0F172A";
    pub const LIGHT_SUCCESS: &'static str = "#15803D";
    pub const LIGHT_ERROR: &'static str = "#B91C1C";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#5EEAD4";
    pub const DARK_SURFACE: &'static str = "#0B1220";
    pub const DARK_CARD: &'static str = "rgba(30,41,59,0.92)";
    pub const DARK_ON_SURFACE: &'static str = "#E2E8F0";
    pub const DARK_SUCCESS: &'static str = "#4ADE80";
    pub const DARK_ERROR: &'static str = "#FCA5A5";

    pub const OUTLINE: &'static str = "#64748B";
    pub const WARNING: &'static str = "#D97706";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn card(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_CARD
        } else {
            Self::LIGHT_CARD
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn success(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SUCCESS
        } else {
            Self::LIGHT_SUCCESS
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }

    /// Badge color for a status label ("Paid", "Overdue", ...).
    pub fn status(label: &str, is_dark: bool) -> &'static str {
        match label {
            "Paid" | "Accepted" | "Delivered" | "Closed" | "Invoiced" | "Active" => Self::success(is_dark),
            "Overdue" | "Declined" => Self::error(is_dark),
            "Open" | "Sent" => Self::WARNING,
            _ => Self::OUTLINE,
        }
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const CARD_PADDING: &str = "16px";
    pub const SIDEBAR_WIDTH: &str = "232px";
}

pub const INPUT_STYLE: &str = "width: 100%; padding: 10px 12px; border-radius: 8px; border: 1px solid #64748B; background: transparent; color: inherit; box-sizing: border-box;";

pub const GHOST_BUTTON: &str = "padding: 8px 14px; border-radius: 8px; border: 1px solid #64748B; background: transparent; color: inherit; cursor: pointer;";
