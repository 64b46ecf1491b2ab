use super::Component;
use crate::event::AppMsg;
use crate::widgets::theme::get_theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub detail: String,
    pub expires_at: Instant,
}

/// Auto-dismissing corner notifications. Rendered last so they sit above
/// everything, but they intercept no input.
pub struct ToastState {
    toasts: Vec<Toast>,
    lifetime: Duration,
}

impl ToastState {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, level: ToastLevel, title: String, detail: String) {
        self.push_at(level, title, detail, Instant::now());
    }

    pub fn push_at(&mut self, level: ToastLevel, title: String, detail: String, now: Instant) {
        self.toasts.push(Toast {
            level,
            title,
            detail,
            expires_at: now + self.lifetime,
        });
    }

    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }
}

impl Component for ToastState {
    fn update(&mut self, msg: &AppMsg) -> Option<AppMsg> {
        match msg {
            AppMsg::Tick => self.prune(Instant::now()),
            AppMsg::CopyCompleted { snippet, .. } => {
                self.push(
                    ToastLevel::Success,
                    "Copied CSS snippet".to_string(),
                    snippet.clone(),
                );
            }
            AppMsg::CopyFailed { error, .. } => {
                self.push(
                    ToastLevel::Error,
                    "Clipboard error".to_string(),
                    error.clone(),
                );
            }
            _ => {}
        }
        None
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, _is_focused: bool) {
        let theme = get_theme();
        let width = area.width.min(38);
        if width < 12 || area.height < 4 {
            return;
        }

        // Newest at the bottom-right corner, older ones stacked above.
        for (i, toast) in self.toasts.iter().rev().take(3).enumerate() {
            let height = 4;
            let y_offset = (i as u16 + 1) * height;
            if y_offset > area.height {
                break;
            }
            let rect = Rect::new(
                area.right().saturating_sub(width + 1),
                area.bottom().saturating_sub(y_offset),
                width,
                height,
            );

            let accent = match toast.level {
                ToastLevel::Success => theme.toast_success,
                ToastLevel::Error => theme.toast_error,
            };
            let marker = match toast.level {
                ToastLevel::Success => "✔",
                ToastLevel::Error => "✖",
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(theme.card_bg));
            let inner = block.inner(rect);
            block.render(rect, buf);

            let lines = vec![
                Line::from(vec![
                    Span::styled(format!("{} ", marker), Style::default().fg(accent)),
                    Span::styled(
                        toast.title.clone(),
                        Style::default()
                            .fg(theme.text_primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    toast.detail.clone(),
                    Style::default().fg(theme.text_secondary),
                )),
            ];
            Paragraph::new(lines).render(inner, buf);
        }
    }
}
