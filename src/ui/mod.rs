//! Screen composition: a fixed navigation bar, a scroll window over the tall
//! page buffer, a status line, and the overlays (menu, toast). Every draw
//! also produces the hit map the mouse handler dispatches against.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Toast};
use crate::content;
use crate::page::{self, Section};
use crate::theme;

mod sections;

/// Every interactive region on screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Hit {
    NavLink(Section),
    NavDonate,
    MenuToggle,
    MenuLink(Section),
    HeroDonate,
    HeroHow,
    StoryPrev,
    StoryNext,
    StoryDot(usize),
    MapCanvas,
    Frequency(bool),
    Preset(u32),
    AmountInput,
    DonateSubmit,
    InvolvedDonate,
    InvolvedVolunteer,
}

/// Clickable rects recorded during a draw. Later entries sit above earlier
/// ones, so overlays registered last win lookups.
#[derive(Default)]
pub struct HitMap {
    entries: Vec<(Rect, Hit)>,
}

impl HitMap {
    fn push(&mut self, area: Rect, hit: Hit) {
        if area.width > 0 && area.height > 0 {
            self.entries.push((area, hit));
        }
    }

    pub fn hit_at(&self, position: Position) -> Option<Hit> {
        self.entries
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, hit)| hit)
    }

    pub fn rect_of(&self, hit: Hit) -> Option<Rect> {
        self.entries
            .iter()
            .find(|&&(_, h)| h == hit)
            .map(|&(area, _)| area)
    }
}

/// What one draw produced.
#[derive(Default)]
pub struct FrameOutput {
    pub hits: HitMap,
    /// Visible map canvas rect, plus the canvas rows hidden above the
    /// scroll window. `None` while the map is entirely off screen.
    pub map_canvas: Option<(Rect, u16)>,
}

pub fn render(frame: &mut Frame, app: &App) -> FrameOutput {
    let mut output = FrameOutput::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(page::NAV_ROWS),
            Constraint::Min(1),
            Constraint::Length(page::STATUS_ROWS),
        ])
        .split(frame.area());

    render_page(frame, app, chunks[1], &mut output);
    render_nav(frame, app, chunks[0], &mut output.hits);
    render_status(frame, app, chunks[2]);

    if let Some(toast) = &app.toast {
        render_toast(frame, toast, chunks[1]);
    }
    if app.menu_open {
        render_menu(frame, app, &mut output.hits);
    }

    output
}

/// Render the sections intersecting the scroll window into a page-tall
/// buffer, blit the visible rows, and translate hit rects to screen space.
fn render_page(frame: &mut Frame, app: &App, area: Rect, output: &mut FrameOutput) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let page_height = page::page_height();
    let mut page_buf = Buffer::empty(Rect::new(0, 0, area.width, page_height));
    let mut page_hits = HitMap::default();

    let window_top = app.scroll.min(page_height.saturating_sub(1));
    let window_bottom = (window_top + area.height).min(page_height);

    for section in page::SECTIONS {
        let top = page::offset_of(section);
        if top >= window_bottom || top + section.height() <= window_top {
            continue;
        }
        let rect = Rect::new(0, top, area.width, section.height());
        sections::render(section, app, rect, &mut page_buf, &mut page_hits);
    }

    let buf = frame.buffer_mut();
    for row in window_top..window_bottom {
        for col in 0..area.width {
            buf[(area.x + col, area.y + row - window_top)] = page_buf[(col, row)].clone();
        }
    }

    for (rect, hit) in page_hits.entries {
        let top = rect.y.max(window_top);
        let bottom = (rect.y + rect.height).min(window_bottom);
        if top >= bottom {
            continue;
        }
        let screen = Rect::new(
            area.x + rect.x,
            area.y + top - window_top,
            rect.width,
            bottom - top,
        );
        if hit == Hit::MapCanvas {
            output.map_canvas = Some((screen, top - rect.y));
        }
        output.hits.push(screen, hit);
    }
}

fn render_nav(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();
    let active = app.active_section();

    let brand = Line::from(vec![
        Span::styled(" ♥ ", Style::default().fg(theme::rgb(theme::BRAND_RED))),
        Span::styled(
            content::BRAND_NAME,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let brand_width = brand.width() as u16;
    buf.set_line(area.x, area.y, &brand, area.width);
    hits.push(
        Rect::new(area.x, area.y, brand_width.min(area.width), 1),
        Hit::NavLink(Section::Hero),
    );

    let donate = " Donate ";
    let donate_width = donate.len() as u16;
    let donate_x = area.x + area.width.saturating_sub(donate_width + 1);
    buf.set_string(
        donate_x,
        area.y,
        donate,
        Style::default()
            .fg(Color::White)
            .bg(theme::rgb(theme::BRAND_RED))
            .add_modifier(Modifier::BOLD),
    );
    hits.push(Rect::new(donate_x, area.y, donate_width, 1), Hit::NavDonate);

    // Inline links when there is room for all of them, else a menu toggle.
    let links_width: u16 = page::NAV_LINKS
        .iter()
        .map(|(label, _)| label.len() as u16 + 3)
        .sum();
    if brand_width + links_width + donate_width + 4 <= area.width {
        let mut x = donate_x.saturating_sub(links_width + 1);
        for (label, section) in page::NAV_LINKS {
            let width = label.len() as u16;
            let style = if section == active {
                Style::default()
                    .fg(theme::rgb(theme::BRAND_RED))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::rgb(theme::TEXT_MUTED))
            };
            buf.set_string(x, area.y, label, style);
            hits.push(Rect::new(x, area.y, width, 1), Hit::NavLink(section));
            x += width + 3;
        }
    } else {
        let toggle = "≡ Menu";
        let width = toggle.chars().count() as u16;
        let x = donate_x.saturating_sub(width + 2);
        buf.set_string(x, area.y, toggle, Style::default().fg(Color::White));
        hits.push(Rect::new(x, area.y, width, 1), Hit::MenuToggle);
    }

    if area.height >= 2 {
        let divider = "─".repeat(area.width as usize);
        buf.set_string(
            area.x,
            area.y + 1,
            divider,
            Style::default().fg(theme::rgb(theme::BORDER_GREY)),
        );
    }
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let grey = Style::default().fg(Color::DarkGray);
    let view = &app.map_view;
    let status = Line::from(vec![
        Span::styled(" ", grey),
        Span::styled(app.active_section().title(), Style::default().fg(Color::White)),
        Span::styled(format!(" {:>3}%", app.scroll_percent()), grey),
        Span::styled(" │ zoom ", grey),
        Span::styled(
            format!("{:.1}x", view.zoom),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" @ {:.1}°, {:.1}°", view.center_lon, view.center_lat),
            grey,
        ),
        Span::styled(" │ data: ", grey),
        Span::styled(app.map_source.label(), Style::default().fg(Color::Cyan)),
        Span::styled(" │ ↑/↓ scroll  m menu  q quit", grey),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn render_toast(frame: &mut Frame, toast: &Toast, window: Rect) {
    let inner_width = window.width.saturating_sub(8).min(72);
    if inner_width < 10 || window.height < 5 {
        return;
    }
    let text_width = toast.text.chars().count() as u16;
    let lines = text_width.div_ceil(inner_width).clamp(1, 2);
    let width = text_width.min(inner_width) + 4;
    let height = lines + 2;
    let area = Rect::new(
        window.x + (window.width - width) / 2,
        window.y + window.height - height - 1,
        width,
        height,
    );

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::rgb(theme::BRAND_GREEN)));
    let body = Paragraph::new(toast.text.as_str())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(body, area);
}

fn render_menu(frame: &mut Frame, app: &App, hits: &mut HitMap) {
    let screen = frame.area();
    let entries: Vec<(&str, Section)> = page::NAV_LINKS
        .iter()
        .copied()
        .chain([("Donate", Section::Donate)])
        .collect();
    let width = 28u16;
    let height = entries.len() as u16 + 2;
    if screen.width < width + 2 || screen.height < height + 2 {
        return;
    }
    let area = Rect::new(
        (screen.width - width) / 2,
        (screen.height - height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::rgb(theme::BORDER_GREY)))
        .title(Span::styled(
            " Menu ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let active = app.active_section();
    let buf = frame.buffer_mut();
    for (i, (label, section)) in entries.iter().enumerate() {
        let y = inner.y + i as u16;
        let style = if *section == active {
            Style::default()
                .fg(theme::rgb(theme::BRAND_RED))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        buf.set_string(inner.x + 1, y, label, style);
        hits.push(Rect::new(inner.x, y, inner.width, 1), Hit::MenuLink(*section));
    }
}
