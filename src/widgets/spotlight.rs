use ratatui::{buffer::Buffer, layout::Rect};

use super::theme::get_theme;

/// Repaint cell backgrounds inside `area` with a two-step radial falloff
/// around `center` (absolute buffer coordinates). Rows count double in the
/// distance metric so the highlight looks round despite 1:2 cell aspect.
pub fn radial_shade(
    area: Rect,
    buf: &mut Buffer,
    center: (u16, u16),
    inner_radius: u16,
    outer_radius: u16,
    inner: ratatui::style::Color,
    outer: ratatui::style::Color,
) {
    let (cx, cy) = (center.0 as i32, center.1 as i32);
    let inner_sq = (inner_radius as i32).pow(2);
    let outer_sq = (outer_radius as i32).pow(2);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let dx = x as i32 - cx;
            let dy = (y as i32 - cy) * 2;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq > outer_sq {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(if dist_sq <= inner_sq { inner } else { outer });
            }
        }
    }
}

/// Page-wide highlight centered under the global pointer.
pub fn ambient(area: Rect, buf: &mut Buffer, pointer: (u16, u16)) {
    let theme = get_theme();
    radial_shade(
        area,
        buf,
        pointer,
        9,
        16,
        theme.ambient_inner,
        theme.ambient_outer,
    );
}

/// Card-local highlight centered on the card's stored pointer position.
pub fn card_glow(area: Rect, buf: &mut Buffer, center: (u16, u16)) {
    let theme = get_theme();
    radial_shade(
        area,
        buf,
        center,
        4,
        8,
        theme.spotlight_inner,
        theme.spotlight_outer,
    );
}
