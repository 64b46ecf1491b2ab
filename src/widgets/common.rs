use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders},
};

use super::theme::get_theme;

pub fn card_block(is_hot: bool) -> Block<'static> {
    let theme = get_theme();
    let border_color = if is_hot {
        theme.border_hover
    } else {
        theme.border
    };

    let bg = if is_hot {
        theme.card_bg_hover
    } else {
        theme.card_bg
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg))
}

/// Faint dot lattice drawn on the page background behind everything else.
pub fn grid_pattern(area: Rect, buf: &mut Buffer) {
    let theme = get_theme();
    let style = Style::default().fg(theme.text_faint).bg(theme.page_bg);
    for y in area.top()..area.bottom() {
        if y % 3 != 0 {
            continue;
        }
        for x in area.left()..area.right() {
            if x % 6 == 0 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("·").set_style(style);
                }
            }
        }
    }
}
