use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Clone, Debug)]
pub enum AppMsg {
    Tick,
    Key(KeyEvent),
    Mouse(MouseEvent),
    Quit,

    // Clipboard round trip
    CopyRequested {
        style_id: &'static str,
        snippet: String,
    },
    CopyCompleted {
        style_id: &'static str,
        snippet: String,
    },
    CopyFailed {
        style_id: &'static str,
        error: String,
    },
}
