use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};

use crate::content;
use crate::counters::CountUp;
use crate::data::{Boundaries, DataSource};
use crate::donate::DonateState;
use crate::map::{ImpactMap, Viewport};
use crate::page::{self, Section};
use crate::stories::Carousel;

/// Rows moved per wheel tick or arrow key press outside the map.
pub const SCROLL_STEP: u16 = 2;

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Transient confirmation bar shown after a call-to-action fires.
pub struct Toast {
    pub text: String,
    until: Instant,
}

/// Application state: one tall page viewed through a scroll window, plus the
/// interactive widgets embedded in it.
pub struct App {
    /// Page row at the top of the content window.
    pub scroll: u16,
    /// Content rows currently on screen (frame height minus chrome).
    viewport_rows: u16,
    pub menu_open: bool,
    pub carousel: Carousel,
    pub counters: CountUp,
    pub donate: DonateState,
    /// Keystrokes edit the custom amount while set.
    pub amount_focused: bool,
    pub map_view: Viewport,
    pub impact: ImpactMap,
    pub map_source: DataSource,
    /// Index into `impact.countries()` under the cursor.
    pub hovered: Option<usize>,
    /// Visible cell rect of the map canvas from the last draw, plus the
    /// number of canvas rows scrolled off above the window.
    map_area: Option<(Rect, u16)>,
    /// Cursor cell of an in-progress left drag on the map.
    drag_from: Option<(u16, u16)>,
    /// Last reported cursor cell, for re-testing hover after pan or zoom.
    cursor: Option<(u16, u16)>,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    now: Instant,
}

impl App {
    pub fn new(width: u16, height: u16, boundaries: Boundaries, now: Instant) -> Self {
        let mut app = Self {
            scroll: 0,
            viewport_rows: 0,
            menu_open: false,
            carousel: Carousel::new(content::STORIES.len(), now),
            counters: CountUp::default(),
            donate: DonateState::default(),
            amount_focused: false,
            // Nominal size until the first draw reports the real canvas rect.
            map_view: Viewport::southern_africa(160, 96),
            impact: ImpactMap::new(boundaries.countries),
            map_source: boundaries.source,
            hovered: None,
            map_area: None,
            drag_from: None,
            cursor: None,
            toast: None,
            should_quit: false,
            now,
        };
        app.handle_resize(width, height);
        app
    }

    pub fn handle_resize(&mut self, _width: u16, height: u16) {
        self.viewport_rows = height.saturating_sub(page::NAV_ROWS + page::STATUS_ROWS);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Per-frame housekeeping: story rotation, counter arming, toast expiry.
    pub fn update(&mut self, now: Instant) {
        self.now = now;
        self.carousel.tick(now);
        if !self.counters.started() && self.section_visible(Section::Metrics) {
            self.counters.start(now);
        }
        if let Some(toast) = &self.toast {
            if now >= toast.until {
                self.toast = None;
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Timestamp of the most recent `update`, used to sample animations.
    pub fn now(&self) -> Instant {
        self.now
    }

    // --- scrolling ---

    pub fn max_scroll(&self) -> u16 {
        page::page_height().saturating_sub(self.viewport_rows)
    }

    /// Scroll progress for the status bar. A page that fits entirely in the
    /// window counts as fully read.
    pub fn scroll_percent(&self) -> u16 {
        let max = self.max_scroll();
        if max == 0 {
            100
        } else {
            (u32::from(self.scroll) * 100 / u32::from(max)) as u16
        }
    }

    pub fn scroll_by(&mut self, rows: i32) {
        let next = i32::from(self.scroll) + rows;
        self.scroll = next.clamp(0, i32::from(self.max_scroll())) as u16;
    }

    /// Rows a PageUp/PageDown press moves: one window with a little overlap.
    pub fn page_step(&self) -> i32 {
        i32::from(self.viewport_rows.saturating_sub(2)).max(1)
    }

    /// Scroll so a section starts at the top of the window. Also closes the
    /// menu, since every menu action is a jump.
    pub fn jump_to(&mut self, section: Section) {
        self.scroll = page::offset_of(section).min(self.max_scroll());
        self.menu_open = false;
    }

    /// Section the navigation bar should highlight. Probed a quarter of the
    /// way down the window so sections pinned against the bottom of the page
    /// still win after a jump lands short.
    pub fn active_section(&self) -> Section {
        page::section_at(self.scroll + self.viewport_rows / 4)
    }

    fn section_visible(&self, section: Section) -> bool {
        let top = page::offset_of(section);
        let bottom = top + section.height();
        top < self.scroll + self.viewport_rows && bottom > self.scroll
    }

    // --- map ---

    /// Record where the last draw put the map canvas and keep the projection
    /// sized to it. `canvas` is the visible cell rect plus the count of
    /// canvas rows hidden above the scroll window; `None` means the map is
    /// entirely off screen and mouse events cannot reach it.
    pub fn sync_map_canvas(&mut self, canvas: Option<(Rect, u16)>) {
        self.map_area = canvas;
        if let Some((area, _)) = canvas {
            self.map_view.set_size(
                usize::from(area.width) * 2,
                usize::from(page::MAP_CANVAS_ROWS) * 4,
            );
        }
    }

    /// Braille-pixel position of the centre of the cell under the cursor,
    /// if the cursor is on the map canvas.
    fn map_pixel(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let (area, hidden_top) = self.map_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        Some((
            f64::from(column - area.x) * 2.0 + 1.0,
            f64::from(row - area.y + hidden_top) * 4.0 + 2.0,
        ))
    }

    pub fn hover_at(&mut self, column: u16, row: u16) {
        self.cursor = Some((column, row));
        self.hovered = self.map_pixel(column, row).and_then(|(px, py)| {
            let (lon, lat) = self.map_view.unproject(px, py);
            self.impact.hit_test(lon, lat)
        });
    }

    /// Re-test hover after the map moved under a stationary cursor.
    fn refresh_hover(&mut self) {
        if let Some((column, row)) = self.cursor {
            self.hover_at(column, row);
        }
    }

    pub fn begin_drag(&mut self, column: u16, row: u16) {
        if self.map_pixel(column, row).is_some() {
            self.drag_from = Some((column, row));
        }
    }

    /// Pan so the content follows the cursor: one cell of drag is two
    /// braille pixels horizontally and four vertically.
    pub fn drag_to(&mut self, column: u16, row: u16) {
        let Some((from_col, from_row)) = self.drag_from else {
            return;
        };
        let dx = (f64::from(from_col) - f64::from(column)) * 2.0;
        let dy = (f64::from(from_row) - f64::from(row)) * 4.0;
        self.map_view.pan(dx, dy);
        self.drag_from = Some((column, row));
        self.hover_at(column, row);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    pub fn zoom_in_at(&mut self, column: u16, row: u16) {
        if let Some((px, py)) = self.map_pixel(column, row) {
            self.map_view.zoom_in_at(px, py);
            self.refresh_hover();
        }
    }

    pub fn zoom_out_at(&mut self, column: u16, row: u16) {
        if let Some((px, py)) = self.map_pixel(column, row) {
            self.map_view.zoom_out_at(px, py);
            self.refresh_hover();
        }
    }

    pub fn zoom_in(&mut self) {
        self.map_view.zoom_in();
        self.refresh_hover();
    }

    pub fn zoom_out(&mut self) {
        self.map_view.zoom_out();
        self.refresh_hover();
    }

    pub fn reset_view(&mut self) {
        self.map_view.reset();
        self.refresh_hover();
    }

    pub fn tooltip(&self) -> Option<String> {
        self.hovered.map(|idx| self.impact.tooltip(idx))
    }

    // --- widget actions ---

    pub fn focus_amount(&mut self) {
        self.amount_focused = true;
    }

    pub fn blur_amount(&mut self) {
        self.amount_focused = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn story_next(&mut self) {
        self.carousel.next(self.now);
    }

    pub fn story_prev(&mut self) {
        self.carousel.prev(self.now);
    }

    pub fn story_select(&mut self, index: usize) {
        self.carousel.select(index, self.now);
    }

    pub fn submit_donation(&mut self) {
        let summary = self.donate.summary();
        self.show_toast(format!(
            "Thank you! £{} {} pledged. {}",
            summary.formatted, summary.frequency_label, content::DONATE_TOAST
        ));
    }

    pub fn volunteer_clicked(&mut self) {
        self.show_toast(content::VOLUNTEER_TOAST.to_string());
    }

    fn show_toast(&mut self, text: String) {
        self.toast = Some(Toast {
            text,
            until: self.now + TOAST_DURATION,
        });
    }

    // --- keyboard ---

    /// Dispatch a key press. The menu and the amount field capture input
    /// while active, so plain letters keep working as text there.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.menu_open {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => self.menu_open = false,
                _ => {}
            }
            return;
        }
        if self.amount_focused {
            match key.code {
                KeyCode::Char(c) => self.donate.push_char(c),
                KeyCode::Backspace => self.donate.backspace(),
                KeyCode::Esc | KeyCode::Enter => self.amount_focused = false,
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-i32::from(SCROLL_STEP)),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(i32::from(SCROLL_STEP)),
            KeyCode::PageUp => self.scroll_by(-self.page_step()),
            KeyCode::PageDown => self.scroll_by(self.page_step()),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.zoom_in(),
            KeyCode::Char('-') => self.zoom_out(),
            KeyCode::Char('r') => self.reset_view(),
            KeyCode::Char('m') => self.menu_open = true,
            KeyCode::Char('d') => self.jump_to(Section::Donate),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = usize::from(c as u8 - b'1');
                self.jump_to(page::NAV_LINKS[idx].1);
            }
            _ => {}
        }
    }
}
