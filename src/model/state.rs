use crate::components::Component;
use crate::event::AppMsg;
use ratatui::{buffer::Buffer, layout::Rect};

/// Page-level state: the global pointer position driving the ambient
/// spotlight, and the mount flag that gates it.
///
/// Lifecycle is {not-mounted, mounted-and-listening}. Once `unmount` runs,
/// pointer messages no longer change anything.
pub struct ShellState {
    pub pointer: Option<(u16, u16)>,
    pub mounted: bool,
    pub frame_ix: usize,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            pointer: None,
            mounted: true,
            frame_ix: 0,
        }
    }
}

impl ShellState {
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

impl Component for ShellState {
    fn update(&mut self, msg: &AppMsg) -> Option<AppMsg> {
        if !self.mounted {
            return None;
        }
        match msg {
            AppMsg::Tick => {
                self.frame_ix = self.frame_ix.wrapping_add(1);
            }
            AppMsg::Mouse(mouse) => {
                self.pointer = Some((mouse.column, mouse.row));
            }
            _ => {}
        }
        None
    }

    fn render(&mut self, _area: Rect, _buf: &mut Buffer, _is_focused: bool) {
        // The shell itself draws nothing; App paints the background and
        // ambient spotlight from this state before the components render.
    }
}
