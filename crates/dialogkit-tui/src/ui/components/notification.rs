//! Toast notifications
//!
//! Hosts use these to surface what the dialogs deliberately don't: the
//! outcome of a submission, including host-side failures.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::{Theme, ThemeRole};

/// Ticks a toast stays up, at the default 100ms tick rate
const DEFAULT_TTL: u32 = 30;
const ERROR_TTL: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Remaining ticks until dismissal
    pub ttl: u32,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel, ttl: u32) -> Self {
        Self {
            message: message.into(),
            level,
            ttl,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, DEFAULT_TTL)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, DEFAULT_TTL)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, ERROR_TTL)
    }

    pub fn is_expired(&self) -> bool {
        self.ttl == 0
    }

    fn icon(&self) -> &'static str {
        match self.level {
            NotificationLevel::Info => "\u{2139}",
            NotificationLevel::Success => "\u{2713}",
            NotificationLevel::Error => "\u{2717}",
        }
    }

    fn style(&self, theme: &Theme) -> Style {
        match self.level {
            NotificationLevel::Info => theme.info(),
            NotificationLevel::Success => theme.style(ThemeRole::Success),
            NotificationLevel::Error => theme.style(ThemeRole::Danger),
        }
    }

    /// Render at the top-right corner of `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let text = format!("{} {}", self.icon(), self.message);
        let width = ((text.width() + 4) as u16).min(area.width.saturating_sub(2));
        let height = 3.min(area.height);
        if width == 0 || height == 0 {
            return;
        }

        let x = area.x + area.width.saturating_sub(width + 1);
        let toast_area = Rect::new(x, area.y, width, height);
        frame.render_widget(Clear, toast_area);

        let style = self.style(theme);
        let content = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(content, toast_area);
    }
}

/// Stack of active toasts, newest last
#[derive(Debug)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
    max_visible: usize,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            max_visible: 3,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
        if self.notifications.len() > self.max_visible {
            let excess = self.notifications.len() - self.max_visible;
            self.notifications.drain(..excess);
        }
    }

    /// Age every toast by one tick and drop the expired ones
    pub fn tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl = n.ttl.saturating_sub(1);
        }
        self.notifications.retain(|n| !n.is_expired());
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        for (i, notification) in self.notifications.iter().enumerate() {
            let offset_y = (i as u16) * 3;
            if offset_y >= area.height {
                break;
            }
            let slot = Rect::new(
                area.x,
                area.y + offset_y,
                area.width,
                area.height - offset_y,
            );
            notification.render(frame, slot, theme);
        }
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
