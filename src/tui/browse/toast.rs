//! Transient toast notifications for the browse TUI.

use iocraft::prelude::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
        }
    }

    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Error => Color::Red,
        }
    }
}
