use super::Component;
use crate::event::AppMsg;
use crate::widgets::theme::get_theme;
use chrono::{Datelike, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};

#[derive(Default)]
pub struct FooterState;

impl Component for FooterState {
    fn update(&mut self, _msg: &AppMsg) -> Option<AppMsg> {
        None
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, _is_focused: bool) {
        let theme = get_theme();
        let year = Local::now().year();

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(format!(
            "© {} Hato. All rights reserved.  —  q quits, Tab focuses, c copies",
            year
        ))
        .style(Style::default().fg(theme.text_faint))
        .alignment(Alignment::Center)
        .render(inner, buf);
    }
}
