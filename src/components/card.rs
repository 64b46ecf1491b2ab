use super::Component;
use crate::event::AppMsg;
use crate::model::catalog::CursorStyle;
use crate::widgets::common::card_block;
use crate::widgets::spotlight;
use crate::widgets::theme::get_theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Ripple {
    pub id: u64,
    pub x: u16,
    pub y: u16,
    pub created_at: Instant,
}

/// One interactive gallery card. All transient state (pointer offset, hover,
/// copied indicator, ripples) is owned by the instance; deferred effects are
/// deadlines pruned on tick, so nothing outlives the card.
pub struct CursorCard {
    pub style: CursorStyle,
    hovered: bool,
    pointer: (u16, u16),
    copied_until: Option<Instant>,
    ripples: Vec<Ripple>,
    next_ripple_id: u64,
    ripple_lifetime: Duration,
    copied_lifetime: Duration,
    now: Instant,
    frame_ix: usize,
    copy_btn: Option<Rect>,
}

impl CursorCard {
    pub fn new(style: CursorStyle, ripple_lifetime: Duration, copied_lifetime: Duration) -> Self {
        Self {
            style,
            hovered: false,
            pointer: (0, 0),
            copied_until: None,
            ripples: Vec::new(),
            next_ripple_id: 0,
            ripple_lifetime,
            copied_lifetime,
            now: Instant::now(),
            frame_ix: 0,
            copy_btn: None,
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn pointer(&self) -> (u16, u16) {
        self.pointer
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some_and(|until| self.now < until)
    }

    /// The copy control's screen rect from the last render, present only
    /// while the control is visible.
    pub fn copy_button_area(&self) -> Option<Rect> {
        self.copy_btn
    }

    pub fn on_enter(&mut self) {
        self.hovered = true;
    }

    pub fn on_leave(&mut self) {
        self.hovered = false;
        self.copy_btn = None;
    }

    /// Pointer offset relative to the card region's top-left corner.
    pub fn on_pointer_move(&mut self, x: u16, y: u16) {
        self.pointer = (x, y);
    }

    /// Spawn a ripple at the click's local coordinates. Ids are assigned
    /// monotonically per card, so concurrent ripples never collide.
    pub fn on_click(&mut self, x: u16, y: u16) {
        let ripple = Ripple {
            id: self.next_ripple_id,
            x,
            y,
            created_at: self.now,
        };
        self.next_ripple_id += 1;
        self.ripples.push(ripple);
    }

    pub fn copy_request(&self) -> AppMsg {
        AppMsg::CopyRequested {
            style_id: self.style.id,
            snippet: self.style.css_snippet(),
        }
    }

    /// Advance time: expire ripples past their lifetime and drop the copied
    /// indicator once its deadline passes. Each ripple expires on its own
    /// clock; siblings are untouched.
    pub fn on_tick(&mut self, now: Instant) {
        self.now = now;
        self.frame_ix = self.frame_ix.wrapping_add(1);

        let lifetime = self.ripple_lifetime;
        self.ripples
            .retain(|r| now.duration_since(r.created_at) < lifetime);

        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    fn mark_copied(&mut self) {
        self.copied_until = Some(self.now + self.copied_lifetime);
    }

    fn render_ripples(&self, inner: Rect, buf: &mut Buffer) {
        let theme = get_theme();
        for ripple in &self.ripples {
            let age = self.now.duration_since(ripple.created_at);
            let frac = age.as_secs_f32() / self.ripple_lifetime.as_secs_f32();
            let frac = frac.clamp(0.0, 1.0);
            let radius = 1.0 + frac * 3.0;
            let symbol = if frac < 0.33 {
                "·"
            } else if frac < 0.66 {
                "∘"
            } else {
                "○"
            };
            let style = Style::default().fg(theme.ripple);

            let cx = inner.x as i32 + ripple.x as i32;
            let cy = inner.y as i32 + ripple.y as i32;
            let reach = radius.ceil() as i32;
            for dy in -reach..=reach {
                for dx in -reach..=reach {
                    let dist = ((dx * dx + dy * dy * 4) as f32).sqrt();
                    if (dist - radius).abs() > 0.5 {
                        continue;
                    }
                    let (x, y) = (cx + dx, cy + dy);
                    if x < inner.left() as i32
                        || x >= inner.right() as i32
                        || y < inner.top() as i32
                        || y >= inner.bottom() as i32
                    {
                        continue;
                    }
                    if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                        cell.set_symbol(symbol).set_style(style);
                    }
                }
            }
        }
    }

    fn render_hotspot(&self, area: Rect, inner: Rect, buf: &mut Buffer) {
        let theme = get_theme();
        let x = area.x.saturating_add(self.pointer.0);
        let y = area.y.saturating_add(self.pointer.1);
        if !inner.contains(Position::new(x, y)) {
            return;
        }

        // Center: the cursor glyph itself, anchored on the pointer cell.
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(self.style.icon)
                .set_style(Style::default().fg(theme.accent_bright).add_modifier(Modifier::BOLD));
        }

        // Static ring around the hotspot.
        let ring = Style::default().fg(theme.accent);
        if x > inner.left() {
            if let Some(cell) = buf.cell_mut((x - 1, y)) {
                cell.set_symbol("(").set_style(ring);
            }
        }
        if x + 1 < inner.right() {
            if let Some(cell) = buf.cell_mut((x + 1, y)) {
                cell.set_symbol(")").set_style(ring);
            }
        }

        // Pulsing outer ring, phase driven by the tick counter.
        if self.frame_ix % 4 < 2 {
            let pulse = Style::default().fg(theme.text_faint);
            if x > inner.left() + 1 {
                if let Some(cell) = buf.cell_mut((x - 2, y)) {
                    cell.set_symbol("(").set_style(pulse);
                }
            }
            if x + 2 < inner.right() {
                if let Some(cell) = buf.cell_mut((x + 2, y)) {
                    cell.set_symbol(")").set_style(pulse);
                }
            }
        }
    }
}

impl Component for CursorCard {
    fn update(&mut self, msg: &AppMsg) -> Option<AppMsg> {
        match msg {
            AppMsg::Tick => self.on_tick(Instant::now()),
            AppMsg::CopyCompleted { style_id, .. } if *style_id == self.style.id => {
                self.mark_copied();
            }
            // Failure leaves the indicator alone; the shell surfaces the
            // error through the toast stack.
            _ => {}
        }
        None
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, is_focused: bool) {
        if area.width < 12 || area.height < 4 {
            return;
        }

        let theme = get_theme();
        let hot = self.hovered || is_focused;

        let block = card_block(hot);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.hovered {
            let center = (
                area.x.saturating_add(self.pointer.0),
                area.y.saturating_add(self.pointer.1),
            );
            spotlight::card_glow(inner, buf, center);
        }

        let pad = inner.inner(ratatui::layout::Margin {
            horizontal: 1,
            vertical: 0,
        });
        if pad.width == 0 || pad.height == 0 {
            return;
        }

        // Icon, top-left.
        buf.set_string(
            pad.x,
            pad.y,
            self.style.icon,
            Style::default().fg(theme.accent),
        );

        // Copy control, top-right, only while the card is hot.
        if hot && pad.width >= 6 {
            let btn = Rect::new(pad.right().saturating_sub(3), pad.y, 3, 1);
            let (symbol, style) = if self.is_copied() {
                (" ✔ ", Style::default().fg(theme.toast_success))
            } else {
                (" ⧉ ", Style::default().fg(theme.accent))
            };
            buf.set_string(btn.x, btn.y, symbol, style);
            self.copy_btn = Some(btn);
        } else {
            self.copy_btn = None;
        }

        // Name and wrapped description.
        let mut lines: Vec<Line> = vec![
            Line::default(),
            Line::from(Span::styled(
                self.style.name,
                Style::default()
                    .fg(theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        for wrapped in textwrap::wrap(self.style.description, pad.width as usize)
            .iter()
            .take(2)
        {
            lines.push(Line::from(Span::styled(
                wrapped.to_string(),
                Style::default().fg(theme.text_secondary),
            )));
        }

        let body = Rect::new(
            pad.x,
            pad.y + 1,
            pad.width,
            pad.height.saturating_sub(2).max(1),
        );
        Paragraph::new(lines).render(body, buf);

        // Live CSS snippet on the bottom row while hot.
        if hot && pad.height >= 4 {
            let snippet = Line::from(vec![
                Span::styled("</> ", Style::default().fg(theme.text_faint)),
                Span::styled(
                    self.style.css_snippet(),
                    Style::default().fg(theme.accent_bright),
                ),
            ]);
            buf.set_line(pad.x, pad.bottom().saturating_sub(1), &snippet, pad.width);
        }

        self.render_ripples(inner, buf);

        if self.hovered {
            self.render_hotspot(area, inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::CURSOR_STYLES;

    fn card() -> CursorCard {
        CursorCard::new(
            CURSOR_STYLES[4], // crosshair
            Duration::from_millis(600),
            Duration::from_millis(2000),
        )
    }

    #[test]
    fn pointer_moves_update_local_offset() {
        let mut card = card();
        card.on_enter();
        card.on_pointer_move(3, 2);
        assert_eq!(card.pointer(), (3, 2));
        card.on_pointer_move(7, 1);
        assert_eq!(card.pointer(), (7, 1));
        assert!(card.is_hovered());
        card.on_leave();
        assert!(!card.is_hovered());
    }

    #[test]
    fn clicks_spawn_independent_ripples_with_unique_ids() {
        let mut card = card();
        let t0 = Instant::now();
        card.on_tick(t0);

        card.on_click(1, 1);
        card.on_click(2, 2);
        card.on_click(3, 3);
        assert_eq!(card.ripples().len(), 3);

        let mut ids: Vec<u64> = card.ripples().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3, "ripple ids must be unique");
    }

    #[test]
    fn ripples_expire_on_their_own_clock() {
        let mut card = card();
        let t0 = Instant::now();
        card.on_tick(t0);
        card.on_click(1, 1);

        card.on_tick(t0 + Duration::from_millis(300));
        card.on_click(5, 2);
        assert_eq!(card.ripples().len(), 2);

        // First ripple past 600ms, second still alive.
        card.on_tick(t0 + Duration::from_millis(650));
        assert_eq!(card.ripples().len(), 1);
        assert_eq!(card.ripples()[0].x, 5);

        card.on_tick(t0 + Duration::from_millis(950));
        assert!(card.ripples().is_empty());
    }

    #[test]
    fn ripples_never_expire_early() {
        let mut card = card();
        let t0 = Instant::now();
        card.on_tick(t0);
        card.on_click(1, 1);

        card.on_tick(t0 + Duration::from_millis(599));
        assert_eq!(card.ripples().len(), 1);
    }

    #[test]
    fn copy_request_carries_exact_declaration() {
        let card = card();
        match card.copy_request() {
            AppMsg::CopyRequested { style_id, snippet } => {
                assert_eq!(style_id, "crosshair");
                assert_eq!(snippet, "cursor: crosshair;");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn copied_indicator_resets_after_two_seconds() {
        let mut card = card();
        let t0 = Instant::now();
        card.on_tick(t0);

        card.update(&AppMsg::CopyCompleted {
            style_id: "crosshair",
            snippet: "cursor: crosshair;".to_string(),
        });
        assert!(card.is_copied());

        card.on_tick(t0 + Duration::from_millis(1999));
        assert!(card.is_copied());

        card.on_tick(t0 + Duration::from_millis(2001));
        assert!(!card.is_copied());
    }

    #[test]
    fn completion_for_another_card_is_ignored() {
        let mut card = card();
        card.update(&AppMsg::CopyCompleted {
            style_id: "wait",
            snippet: "cursor: wait;".to_string(),
        });
        assert!(!card.is_copied());
    }

    #[test]
    fn failure_does_not_flip_the_indicator() {
        let mut card = card();
        card.update(&AppMsg::CopyFailed {
            style_id: "crosshair",
            error: "denied".to_string(),
        });
        assert!(!card.is_copied());
    }

    #[test]
    fn overlapping_copies_each_rearm_the_reset() {
        let mut card = card();
        let t0 = Instant::now();
        card.on_tick(t0);
        card.update(&AppMsg::CopyCompleted {
            style_id: "crosshair",
            snippet: "cursor: crosshair;".to_string(),
        });

        card.on_tick(t0 + Duration::from_millis(1500));
        card.update(&AppMsg::CopyCompleted {
            style_id: "crosshair",
            snippet: "cursor: crosshair;".to_string(),
        });

        // Still copied past the first deadline, reset by the second.
        card.on_tick(t0 + Duration::from_millis(2500));
        assert!(card.is_copied());
        card.on_tick(t0 + Duration::from_millis(3501));
        assert!(!card.is_copied());
    }
}
