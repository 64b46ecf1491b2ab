use super::Component;
use crate::event::AppMsg;
use crate::widgets::theme::get_theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

#[derive(Default)]
pub struct HeaderState;

impl Component for HeaderState {
    fn update(&mut self, _msg: &AppMsg) -> Option<AppMsg> {
        None
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, _is_focused: bool) {
        let theme = get_theme();

        let badge = |dot_color, label: &'static str| {
            vec![
                Span::styled("● ", Style::default().fg(dot_color)),
                Span::styled(label, Style::default().fg(theme.text_secondary)),
                Span::raw("   "),
            ]
        };

        let mut badges = Vec::new();
        badges.extend(badge(theme.badge_dots[0], "13 cursor styles"));
        badges.extend(badge(theme.badge_dots[1], "Hotspot preview"));
        badges.extend(badge(theme.badge_dots[2], "Copy CSS snippet"));

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "Mouse Cursor Checker",
                Style::default()
                    .fg(theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Preview the look and hotspot of every standard cursor style.",
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(Span::styled(
                "Hover a card to preview it, click to test, copy the CSS with the ⧉ control.",
                Style::default().fg(theme.text_faint),
            )),
            Line::default(),
            Line::from(badges),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
