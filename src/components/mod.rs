use crate::event::AppMsg;
use ratatui::{buffer::Buffer, layout::Rect};

pub mod card;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod toast;

pub trait Component {
    fn update(&mut self, msg: &AppMsg) -> Option<AppMsg>;

    fn render(&mut self, area: Rect, buf: &mut Buffer, is_focused: bool);
}
