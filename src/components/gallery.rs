use super::Component;
use super::card::CursorCard;
use crate::config::Config;
use crate::event::AppMsg;
use crate::model::catalog::CURSOR_STYLES;
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

const CARD_HEIGHT: u16 = 9;
const MIN_CARD_WIDTH: u16 = 30;
const MAX_COLUMNS: u16 = 4;

/// The responsive grid of cursor cards. Owns the mapping from screen cells
/// to cards: every mouse message is translated here into enter/leave/move/
/// click calls with card-local coordinates.
pub struct GalleryState {
    cards: Vec<CursorCard>,
    areas: Vec<Rect>,
    hovered: Option<usize>,
    focused: Option<usize>,
    scroll: u16,
    max_scroll: u16,
    cols: usize,
    viewport_height: u16,
    scroll_state: ScrollbarState,
}

impl GalleryState {
    pub fn new(config: &Config) -> Self {
        let cards: Vec<CursorCard> = CURSOR_STYLES
            .iter()
            .map(|style| {
                CursorCard::new(*style, config.ripple_lifetime(), config.copied_lifetime())
            })
            .collect();
        let count = cards.len();

        Self {
            cards,
            areas: vec![Rect::ZERO; count],
            hovered: None,
            focused: None,
            scroll: 0,
            max_scroll: 0,
            cols: 1,
            viewport_height: 0,
            scroll_state: ScrollbarState::default(),
        }
    }

    pub fn cards(&self) -> &[CursorCard] {
        &self.cards
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .position(|area| area.contains(Position::new(x, y)))
    }

    fn route_move(&mut self, x: u16, y: u16) {
        let hit = self.hit_test(x, y);
        if self.hovered != hit {
            if let Some(old) = self.hovered {
                self.cards[old].on_leave();
            }
            if let Some(new) = hit {
                self.cards[new].on_enter();
            }
            self.hovered = hit;
        }
        if let Some(ix) = hit {
            let area = self.areas[ix];
            self.cards[ix].on_pointer_move(x - area.x, y - area.y);
        }
    }

    fn route_click(&mut self, x: u16, y: u16) -> Option<AppMsg> {
        let ix = self.hit_test(x, y)?;
        let card = &mut self.cards[ix];

        // The copy control swallows its click: a copy never spawns a ripple.
        if card
            .copy_button_area()
            .is_some_and(|btn| btn.contains(Position::new(x, y)))
        {
            return Some(card.copy_request());
        }

        let area = self.areas[ix];
        card.on_click(x - area.x, y - area.y);
        None
    }

    fn scroll_by(&mut self, delta: i32) {
        let scrolled = (self.scroll as i32 + delta).clamp(0, self.max_scroll as i32);
        self.scroll = scrolled as u16;
    }

    fn move_focus(&mut self, step: i32) {
        let count = self.cards.len() as i32;
        let next = match self.focused {
            None => {
                if step >= 0 {
                    0
                } else {
                    count - 1
                }
            }
            Some(ix) => (ix as i32 + step).rem_euclid(count),
        };
        self.focused = Some(next as usize);
        self.ensure_visible(next as usize);
    }

    fn ensure_visible(&mut self, ix: usize) {
        if self.viewport_height == 0 {
            return;
        }
        let row_top = (ix / self.cols) as u16 * CARD_HEIGHT;
        if row_top < self.scroll {
            self.scroll = row_top;
        } else if row_top + CARD_HEIGHT > self.scroll + self.viewport_height {
            self.scroll = (row_top + CARD_HEIGHT).saturating_sub(self.viewport_height);
        }
    }
}

impl Component for GalleryState {
    fn update(&mut self, msg: &AppMsg) -> Option<AppMsg> {
        match msg {
            AppMsg::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    self.route_move(mouse.column, mouse.row);
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    return self.route_click(mouse.column, mouse.row);
                }
                MouseEventKind::ScrollDown => self.scroll_by(2),
                MouseEventKind::ScrollUp => self.scroll_by(-2),
                _ => {}
            },
            AppMsg::Key(key) => match key.code {
                KeyCode::Up => self.scroll_by(-1),
                KeyCode::Down => self.scroll_by(1),
                KeyCode::PageUp => self.scroll_by(-(CARD_HEIGHT as i32)),
                KeyCode::PageDown => self.scroll_by(CARD_HEIGHT as i32),
                KeyCode::Tab => self.move_focus(1),
                KeyCode::BackTab => self.move_focus(-1),
                KeyCode::Char('c') | KeyCode::Char('y') | KeyCode::Enter => {
                    if let Some(ix) = self.focused {
                        return Some(self.cards[ix].copy_request());
                    }
                }
                _ => {}
            },
            // Ticks and clipboard outcomes fan out to every card; each one
            // decides by id whether the outcome is its own.
            AppMsg::Tick | AppMsg::CopyCompleted { .. } | AppMsg::CopyFailed { .. } => {
                for card in &mut self.cards {
                    card.update(msg);
                }
            }
            _ => {}
        }
        None
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, is_focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let cols = (area.width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS) as usize;
        let col_w = area.width / cols as u16;
        let rows = self.cards.len().div_ceil(cols);
        let content_h = rows as u16 * CARD_HEIGHT;

        self.cols = cols;
        self.viewport_height = area.height;
        self.max_scroll = content_h.saturating_sub(area.height);
        self.scroll = self.scroll.min(self.max_scroll);

        for (ix, card) in self.cards.iter_mut().enumerate() {
            let row = (ix / cols) as i32;
            let col = (ix % cols) as u16;
            let virt_top = row * CARD_HEIGHT as i32 - self.scroll as i32;
            let top = virt_top.max(0);
            let bottom = (virt_top + CARD_HEIGHT as i32).min(area.height as i32);
            if bottom <= top {
                self.areas[ix] = Rect::ZERO;
                continue;
            }

            // One-column gutter between grid cells.
            let rect = Rect::new(
                area.x + col * col_w,
                area.y + top as u16,
                col_w.saturating_sub(1),
                (bottom - top) as u16,
            );
            self.areas[ix] = rect;
            card.render(rect, buf, self.focused == Some(ix) && is_focused);
        }

        if self.max_scroll > 0 {
            self.scroll_state = self
                .scroll_state
                .content_length(content_h as usize)
                .position(self.scroll as usize);
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));
            StatefulWidget::render(scrollbar, area, buf, &mut self.scroll_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    fn gallery() -> GalleryState {
        GalleryState::new(&Config::default())
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> AppMsg {
        AppMsg::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> AppMsg {
        AppMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn rendered(gallery: &mut GalleryState, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        gallery.render(area, &mut buf, true);
        buf
    }

    #[test]
    fn hit_testing_maps_cells_to_cards_with_local_coords() {
        let mut gallery = gallery();
        rendered(&mut gallery, 121, 40);

        // 121 wide => 4 columns of 30, cards 29 wide, 9 tall.
        gallery.update(&mouse(MouseEventKind::Moved, 5, 3));
        assert_eq!(gallery.hovered(), Some(0));
        assert!(gallery.cards()[0].is_hovered());
        assert_eq!(gallery.cards()[0].pointer(), (5, 3));

        // Second column, second row.
        gallery.update(&mouse(MouseEventKind::Moved, 32, 10));
        assert_eq!(gallery.hovered(), Some(5));
        assert!(!gallery.cards()[0].is_hovered());
        assert_eq!(gallery.cards()[5].pointer(), (2, 1));
    }

    #[test]
    fn gutter_cells_hit_no_card() {
        let mut gallery = gallery();
        rendered(&mut gallery, 121, 40);

        gallery.update(&mouse(MouseEventKind::Moved, 29, 3));
        assert_eq!(gallery.hovered(), None);
    }

    #[test]
    fn clicks_spawn_ripples_at_local_coords() {
        let mut gallery = gallery();
        rendered(&mut gallery, 121, 40);

        gallery.update(&mouse(MouseEventKind::Moved, 5, 5));
        let follow = gallery.update(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            5,
            5,
        ));
        assert!(follow.is_none());
        assert_eq!(gallery.cards()[0].ripples().len(), 1);
        assert_eq!(gallery.cards()[0].ripples()[0].x, 5);
        assert_eq!(gallery.cards()[0].ripples()[0].y, 5);
    }

    #[test]
    fn copy_control_click_requests_copy_without_a_ripple() {
        let mut gallery = gallery();
        rendered(&mut gallery, 121, 40);

        // Hover first so the control renders, then re-render to place it.
        gallery.update(&mouse(MouseEventKind::Moved, 5, 3));
        rendered(&mut gallery, 121, 40);

        let btn = gallery.cards()[0]
            .copy_button_area()
            .expect("copy control visible while hovered");
        let follow = gallery.update(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            btn.x + 1,
            btn.y,
        ));

        match follow {
            Some(AppMsg::CopyRequested { style_id, snippet }) => {
                assert_eq!(style_id, "default");
                assert_eq!(snippet, "cursor: default;");
            }
            other => panic!("expected a copy request, got {:?}", other),
        }
        assert!(gallery.cards()[0].ripples().is_empty());
    }

    #[test]
    fn wheel_scrolls_when_content_overflows() {
        let mut gallery = gallery();
        rendered(&mut gallery, 35, 12);

        assert_eq!(gallery.scroll_offset(), 0);
        gallery.update(&mouse(MouseEventKind::ScrollDown, 10, 5));
        assert_eq!(gallery.scroll_offset(), 2);
        gallery.update(&mouse(MouseEventKind::ScrollUp, 10, 5));
        gallery.update(&mouse(MouseEventKind::ScrollUp, 10, 5));
        assert_eq!(gallery.scroll_offset(), 0);
    }

    #[test]
    fn keyboard_focus_copy_path() {
        let mut gallery = gallery();
        rendered(&mut gallery, 121, 40);

        gallery.update(&key(KeyCode::Tab));
        assert_eq!(gallery.focused(), Some(0));

        let follow = gallery.update(&key(KeyCode::Char('c')));
        match follow {
            Some(AppMsg::CopyRequested { style_id, .. }) => {
                assert_eq!(style_id, "default");
            }
            other => panic!("expected a copy request, got {:?}", other),
        }
    }

    #[test]
    fn copy_outcome_reaches_only_the_matching_card() {
        let mut gallery = gallery();
        gallery.update(&AppMsg::CopyCompleted {
            style_id: "pointer",
            snippet: "cursor: pointer;".to_string(),
        });
        assert!(gallery.cards()[1].is_copied());
        assert!(!gallery.cards()[0].is_copied());
    }
}
