/// One selectable pointer-appearance option. The catalog below is the whole
/// data model of the app: a fixed ordered list, built once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub css_value: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl CursorStyle {
    /// The exact declaration placed on the clipboard.
    pub fn css_snippet(&self) -> String {
        format!("cursor: {};", self.css_value)
    }
}

pub const CURSOR_STYLES: [CursorStyle; 13] = [
    CursorStyle {
        id: "default",
        name: "Normal Select",
        css_value: "default",
        icon: "➤",
        description: "The standard arrow pointer",
    },
    CursorStyle {
        id: "pointer",
        name: "Link Select",
        css_value: "pointer",
        icon: "☛",
        description: "Indicates a clickable link",
    },
    CursorStyle {
        id: "text",
        name: "Text Select",
        css_value: "text",
        icon: "⌶",
        description: "Indicates selectable text",
    },
    CursorStyle {
        id: "move",
        name: "Move",
        css_value: "move",
        icon: "✥",
        description: "Indicates something can be moved",
    },
    CursorStyle {
        id: "crosshair",
        name: "Precision Select",
        css_value: "crosshair",
        icon: "✛",
        description: "Allows precise area selection",
    },
    CursorStyle {
        id: "help",
        name: "Help Select",
        css_value: "help",
        icon: "?",
        description: "Indicates help is available",
    },
    CursorStyle {
        id: "progress",
        name: "Working in Background",
        css_value: "progress",
        icon: "◐",
        description: "Busy, but still interactive",
    },
    CursorStyle {
        id: "wait",
        name: "Busy",
        css_value: "wait",
        icon: "◷",
        description: "Waiting, interaction unavailable",
    },
    CursorStyle {
        id: "not-allowed",
        name: "Unavailable",
        css_value: "not-allowed",
        icon: "⊘",
        description: "Indicates an action is not allowed",
    },
    CursorStyle {
        id: "ns-resize",
        name: "Vertical Resize",
        css_value: "ns-resize",
        icon: "↕",
        description: "Resize vertically",
    },
    CursorStyle {
        id: "ew-resize",
        name: "Horizontal Resize",
        css_value: "ew-resize",
        icon: "↔",
        description: "Resize horizontally",
    },
    CursorStyle {
        id: "nesw-resize",
        name: "Diagonal Resize 1",
        css_value: "nesw-resize",
        icon: "⤢",
        description: "Resize toward top-right or bottom-left",
    },
    CursorStyle {
        id: "nwse-resize",
        name: "Diagonal Resize 2",
        css_value: "nwse-resize",
        icon: "⤡",
        description: "Resize toward top-left or bottom-right",
    },
];
