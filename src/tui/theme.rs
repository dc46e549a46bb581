//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

use crate::types::Difficulty;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Difficulty colors
    pub difficulty_easy: Color,
    pub difficulty_medium: Color,
    pub difficulty_hard: Color,
    pub difficulty_other: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub rating: Color,
    pub cuisine: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            difficulty_easy: Color::Green,
            difficulty_medium: Color::Yellow,
            difficulty_hard: Color::Red,
            difficulty_other: Color::White,

            border: Color::Rgb {
                r: 60,
                g: 60,
                b: 70,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 140,
                g: 140,
                b: 150,
            },
            highlight: Color::Cyan,
            rating: Color::Yellow,
            cuisine: Color::Magenta,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Color for a difficulty badge
    pub fn difficulty_color(&self, difficulty: &Difficulty) -> Color {
        match difficulty {
            Difficulty::Easy => self.difficulty_easy,
            Difficulty::Medium => self.difficulty_medium,
            Difficulty::Hard => self.difficulty_hard,
            Difficulty::Other(_) => self.difficulty_other,
        }
    }
}

/// Get the current theme
pub fn theme() -> Theme {
    Theme::default()
}
