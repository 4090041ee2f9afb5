//! Slate/amber theme tokens for the realdesk TUI.
//!
//! # Color Palette
//! - **Accent**: Amber (focus, highlights, primary actions)
//! - **Positive**: Green (closed deals, active listings)
//! - **Negative**: Red (errors, sold-out)
//! - **Warning**: Orange (alerts, validation)
//! - **Neutral**: Violet (secondary info)
//! - **Muted**: Slate blue (hints, disabled)

use ratatui::style::{Color, Modifier, Style};

use realdesk_core::{LeadStatus, PropertyStatus};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate_amber()
    }
}

impl Theme {
    pub const fn slate_amber() -> Self {
        Self {
            accent: Color::Rgb(245, 158, 11),
            positive: Color::Rgb(34, 197, 94),
            negative: Color::Rgb(239, 68, 68),
            warning: Color::Rgb(249, 115, 22),
            neutral: Color::Rgb(168, 85, 247),
            muted: Color::Rgb(100, 116, 139),
            text_primary: Color::White,
            text_secondary: Color::Rgb(203, 213, 225),
        }
    }

    /// Column accent per pipeline stage (blue, yellow, purple, orange, green).
    pub fn stage_color(&self, status: LeadStatus) -> Color {
        match status {
            LeadStatus::New => Color::Rgb(59, 130, 246),
            LeadStatus::Contacted => Color::Rgb(234, 179, 8),
            LeadStatus::Viewing => self.neutral,
            LeadStatus::Negotiation => self.warning,
            LeadStatus::Closed => self.positive,
        }
    }

    pub fn listing_color(&self, status: PropertyStatus) -> Color {
        match status {
            PropertyStatus::Active => self.positive,
            PropertyStatus::Pending => self.warning,
            PropertyStatus::Sold => self.negative,
            PropertyStatus::Draft => self.muted,
        }
    }
}

const THEME: Theme = Theme::slate_amber();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn text_secondary() -> Style {
    Style::default().fg(THEME.text_secondary)
}

/// Cursor row / selected chip.
pub fn selected() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

pub fn stage(status: LeadStatus) -> Style {
    Style::default().fg(THEME.stage_color(status))
}

/// Column border while a drag hovers it.
pub fn drop_target(status: LeadStatus) -> Style {
    stage(status).add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn listing(status: PropertyStatus) -> Style {
    Style::default().fg(THEME.listing_color(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(245, 158, 11));
        assert_eq!(theme.muted, Color::Rgb(100, 116, 139));
    }

    #[test]
    fn stage_colors_are_distinct() {
        let theme = Theme::default();
        let colors: std::collections::HashSet<_> = LeadStatus::ALL
            .iter()
            .map(|s| format!("{:?}", theme.stage_color(*s)))
            .collect();
        assert_eq!(colors.len(), 5);
        assert_eq!(theme.stage_color(LeadStatus::Closed), theme.positive);
    }

    #[test]
    fn listing_colors() {
        let theme = Theme::default();
        assert_eq!(theme.listing_color(PropertyStatus::Active), theme.positive);
        assert_eq!(theme.listing_color(PropertyStatus::Draft), theme.muted);
    }

    #[test]
    fn border_follows_focus() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
