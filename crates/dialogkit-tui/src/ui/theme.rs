//! Visual theme and color palette
//!
//! Dialog widgets never pick colors themselves; they ask the theme for the
//! style of a semantic role.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Semantic roles a widget can ask the theme to style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRole {
    Border,
    BorderFocused,
    Accent,
    Title,
    Text,
    TextMuted,
    Danger,
    Success,
    ButtonBackground,
    ButtonFocused,
    Input,
    Disabled,
    Selection,
}

/// Which palette to load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeVariant {
    #[default]
    Dark,
    HighContrast,
}

/// Dialogkit color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub background: Color,

    // Status colors
    pub success: Color,
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Buttons
    pub button_bg: Color,
    pub button_focused_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0, 188, 212),    // #00BCD4
            background: Color::Rgb(33, 33, 33), // #212121

            success: Color::Rgb(76, 175, 80), // #4CAF50
            danger: Color::Rgb(244, 67, 54),  // #F44336
            info: Color::Rgb(33, 150, 243),   // #2196F3

            border: Color::Rgb(66, 66, 66),            // #424242
            border_focused: Color::Rgb(0, 188, 212),   // #00BCD4
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575
            selection: Color::Rgb(55, 55, 55),         // #373737

            button_bg: Color::Rgb(55, 55, 55),
            button_focused_bg: Color::Rgb(0, 151, 167), // #0097A7
        }
    }
}

impl Theme {
    /// Build the palette for a configured variant
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::HighContrast => Self::high_contrast(),
        }
    }

    pub fn dark() -> Self {
        Self::default()
    }

    pub fn high_contrast() -> Self {
        Self {
            accent: Color::Yellow,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            button_bg: Color::Black,
            button_focused_bg: Color::Yellow,
            ..Self::default()
        }
    }

    /// Style for a semantic role
    pub fn style(&self, role: ThemeRole) -> Style {
        match role {
            ThemeRole::Border => Style::default().fg(self.border),
            ThemeRole::BorderFocused => Style::default().fg(self.border_focused),
            ThemeRole::Accent => Style::default().fg(self.accent),
            ThemeRole::Title => Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
            ThemeRole::Text => Style::default().fg(self.text_primary),
            ThemeRole::TextMuted => Style::default().fg(self.text_muted),
            ThemeRole::Danger => Style::default()
                .fg(self.danger)
                .add_modifier(Modifier::BOLD),
            ThemeRole::Success => Style::default().fg(self.success),
            ThemeRole::ButtonBackground => Style::default()
                .fg(self.text_secondary)
                .bg(self.button_bg),
            ThemeRole::ButtonFocused => Style::default()
                .fg(self.background)
                .bg(self.button_focused_bg)
                .add_modifier(Modifier::BOLD),
            ThemeRole::Input => Style::default().fg(self.text_primary).bg(self.background),
            ThemeRole::Disabled => Style::default()
                .fg(self.text_muted)
                .add_modifier(Modifier::DIM),
            ThemeRole::Selection => Style::default()
                .bg(self.selection)
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }
}
