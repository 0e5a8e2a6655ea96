//! Per-section rendering into the page buffer. Coordinates are page rows;
//! the parent module decides which sections intersect the scroll window and
//! translates the recorded hit rects to screen space.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::braille::BrailleCanvas;
use crate::content;
use crate::data::DataSource;
use crate::donate::PRESET_AMOUNTS;
use crate::fmt;
use crate::page::{self, Section};
use crate::theme;

use super::{Hit, HitMap};

pub(super) fn render(section: Section, app: &App, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    match section {
        Section::Hero => hero(area, buf, hits),
        Section::Metrics => metrics(app, area, buf),
        Section::About => about(area, buf),
        Section::Stories => stories(app, area, buf, hits),
        Section::ImpactMap => impact_map(app, area, buf, hits),
        Section::HowItWorks => how_it_works(area, buf),
        Section::GetInvolved => get_involved(area, buf, hits),
        Section::Donate => donate(app, area, buf, hits),
        Section::Contact => contact(area, buf),
        Section::Footer => footer(area, buf, hits),
    }
}

// --- shared styling ---

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn muted() -> Style {
    Style::default().fg(theme::rgb(theme::TEXT_MUTED))
}

fn faint() -> Style {
    Style::default().fg(theme::rgb(theme::TEXT_FAINT))
}

fn border() -> Style {
    Style::default().fg(theme::rgb(theme::BORDER_GREY))
}

fn red() -> Style {
    Style::default().fg(theme::rgb(theme::BRAND_RED))
}

/// Content column: centered, inset from the edges, capped for readability.
fn column(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(100);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Write a string if its start lies inside the buffer; the buffer clips the
/// tail on its own.
fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    if x < buf.area.right() && y < buf.area.bottom() {
        buf.set_string(x, y, text, style);
    }
}

fn centered(buf: &mut Buffer, area: Rect, y: u16, line: Line<'_>) {
    if y >= buf.area.bottom() {
        return;
    }
    let width = line.width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let max = buf.area.right().saturating_sub(x);
    buf.set_line(x, y, &line, max);
}

fn heading(buf: &mut Buffer, area: Rect, y: u16, text: &str) {
    centered(buf, area, y, Line::styled(text, bold()));
}

/// Three-row outlined button. Returns the rect it occupied.
fn button(buf: &mut Buffer, hits: &mut HitMap, x: u16, y: u16, label: &str, accent: bool, hit: Hit) -> Rect {
    let width = label.chars().count() as u16 + 4;
    let area = Rect::new(x, y, width, 3);
    let (frame, text) = if accent {
        (red(), red().add_modifier(Modifier::BOLD))
    } else {
        (border(), Style::default().fg(Color::White))
    };
    Block::default().borders(Borders::ALL).border_style(frame).render(area, buf);
    put(buf, x + 2, y + 1, label, text);
    hits.push(area, hit);
    area
}

/// Three-row filled button for the primary calls to action.
fn solid_button(buf: &mut Buffer, hits: &mut HitMap, x: u16, y: u16, label: &str, hit: Hit) -> Rect {
    let width = label.chars().count() as u16 + 4;
    let area = Rect::new(x, y, width, 3);
    let style = Style::default()
        .fg(Color::White)
        .bg(theme::rgb(theme::BRAND_RED))
        .add_modifier(Modifier::BOLD);
    for row in 0..3 {
        put(buf, x, y + row, &" ".repeat(usize::from(width)), style);
    }
    put(buf, x + 2, y + 1, label, style);
    hits.push(area, hit);
    area
}

/// Bordered card with an optional title on the border and wrapped body text.
fn card(buf: &mut Buffer, area: Rect, title: Option<&str>, body: &str, body_style: Style) {
    let mut block = Block::default().borders(Borders::ALL).border_style(border());
    if let Some(title) = title {
        block = block.title(Span::styled(format!(" {title} "), bold()));
    }
    let inner = block.inner(area);
    block.render(area, buf);
    Paragraph::new(body)
        .style(body_style)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

// --- sections ---

fn hero(area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let col = column(area);
    let y = area.y;

    centered(
        buf,
        col,
        y + 1,
        Line::styled(
            format!(
                "{} • {}",
                content::BRAND_NAME.to_uppercase(),
                content::BRAND_TAGLINE.to_uppercase()
            ),
            muted(),
        ),
    );
    centered(buf, col, y + 3, Line::styled(content::HERO_TITLE, bold()));

    let sub_width = col.width.min(72);
    Paragraph::new(content::HERO_SUB)
        .style(muted())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(
            Rect::new(col.x + (col.width - sub_width) / 2, y + 5, sub_width, 2),
            buf,
        );

    let primary = format!("{} →", content::HERO_CTA_PRIMARY);
    let primary_width = primary.chars().count() as u16 + 4;
    let secondary_width = content::HERO_CTA_SECONDARY.chars().count() as u16 + 4;
    let x = col.x + col.width.saturating_sub(primary_width + 2 + secondary_width) / 2;
    let first = solid_button(buf, hits, x, y + 8, &primary, Hit::HeroDonate);
    button(
        buf,
        hits,
        first.x + first.width + 2,
        y + 8,
        content::HERO_CTA_SECONDARY,
        false,
        Hit::HeroHow,
    );
}

fn metrics(app: &App, area: Rect, buf: &mut Buffer) {
    let col = column(area);
    let card_width = col.width.saturating_sub(6) / 4;
    let now = app.now();

    for (i, metric) in content::METRICS.iter().enumerate() {
        let rect = Rect::new(col.x + i as u16 * (card_width + 2), area.y + 1, card_width, 7);
        let block = Block::default().borders(Borders::ALL).border_style(border());
        let inner = block.inner(rect);
        block.render(rect, buf);

        let value = format!(
            "{}{}",
            fmt::metric_value(app.counters.value(metric.target, now), metric.decimals),
            metric.suffix
        );
        centered(buf, inner, inner.y + 1, Line::styled(value, red().add_modifier(Modifier::BOLD)));
        Paragraph::new(metric.label)
            .style(muted())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, inner.y + 3, inner.width, 2), buf);
    }
}

fn about(area: Rect, buf: &mut Buffer) {
    let col = column(area);
    heading(buf, col, area.y + 1, content::ABOUT_HEADING);

    let half = col.width.saturating_sub(2) / 2;
    card(
        buf,
        Rect::new(col.x, area.y + 3, half, 6),
        Some(content::PURPOSE_TITLE),
        content::PURPOSE_BODY,
        muted(),
    );
    card(
        buf,
        Rect::new(col.x + half + 2, area.y + 3, half, 6),
        Some(content::VISION_TITLE),
        content::VISION_BODY,
        muted(),
    );
    card(
        buf,
        Rect::new(col.x, area.y + 10, col.width, 6),
        Some(content::WHY_TITLE),
        content::WHY_BODY,
        Style::default(),
    );
}

fn stories(app: &App, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let col = column(area);
    heading(buf, col, area.y + 1, content::STORIES_HEADING);

    let story = &content::STORIES[app.carousel.index];
    let card_width = col.width.min(72);
    let card_rect = Rect::new(col.x + (col.width - card_width) / 2, area.y + 3, card_width, 7);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border())
        .title(Span::styled(format!(" {} ", story.title), bold()));
    let inner = block.inner(card_rect);
    block.render(card_rect, buf);
    Paragraph::new(format!("“{}”", story.quote))
        .style(muted().add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(
            Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 3),
            buf,
        );

    // ◀ ● ○ ○ ▶ picker under the card.
    let controls_y = area.y + 10;
    let dots = content::STORIES.len() as u16;
    let width = 3 + 2 + (dots * 2 - 1) + 2 + 3;
    let mut x = col.x + col.width.saturating_sub(width) / 2;
    put(buf, x, controls_y, " ◀ ", Style::default().fg(Color::White));
    hits.push(Rect::new(x, controls_y, 3, 1), Hit::StoryPrev);
    x += 5;
    for i in 0..content::STORIES.len() {
        let (glyph, style) = if i == app.carousel.index {
            ("●", red())
        } else {
            ("○", faint())
        };
        put(buf, x, controls_y, glyph, style);
        hits.push(Rect::new(x, controls_y, 1, 1), Hit::StoryDot(i));
        x += 2;
    }
    x += 1;
    put(buf, x, controls_y, " ▶ ", Style::default().fg(Color::White));
    hits.push(Rect::new(x, controls_y, 3, 1), Hit::StoryNext);
}

fn impact_map(app: &App, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let col = column(area);
    heading(buf, col, area.y + 1, content::MAP_HEADING);
    centered(buf, col, area.y + 2, Line::styled(content::MAP_SUB, muted()));

    let box_rect = Rect::new(col.x, area.y + 3, col.width, page::MAP_CANVAS_ROWS + 2);
    let mut block = Block::default().borders(Borders::ALL).border_style(border());
    if app.map_source == DataSource::Builtin {
        block = block.title_bottom(Line::styled(
            format!(" {} ", content::MAP_OFFLINE_NOTE),
            faint(),
        ));
    }
    let canvas = block.inner(box_rect);
    block.render(box_rect, buf);
    hits.push(canvas, Hit::MapCanvas);

    // Rasterize at the canvas size; the app keeps its own viewport synced to
    // the same rect, so mouse math and pixels agree.
    let mut viewport = app.map_view.clone();
    viewport.set_size(usize::from(canvas.width) * 2, usize::from(canvas.height) * 4);
    let layers = app.impact.rasterize(&viewport, app.hovered);

    for (fill, color) in &layers.fills {
        blit(buf, canvas, fill, *color);
    }
    blit(buf, canvas, &layers.borders, Color::White);
    if let Some((outline, color)) = &layers.highlight {
        blit(buf, canvas, outline, *color);
    }

    if let Some(text) = app.tooltip() {
        let text = format!(" {text} ");
        let width = (text.chars().count() as u16).min(canvas.width);
        if width >= 4 && canvas.height >= 2 {
            let shown: String = text.chars().take(usize::from(width)).collect();
            put(
                buf,
                canvas.x + (canvas.width - width) / 2,
                canvas.y + canvas.height - 2,
                &shown,
                Style::default()
                    .fg(Color::White)
                    .bg(theme::rgb(theme::BRAND_NAVY)),
            );
        }
    }

    legend(buf, col, area.y + 29);
    centered(buf, col, area.y + 30, Line::styled(content::MAP_HINT, faint()));
}

/// Swatch row matching the choropleth: grey for unserved countries, the
/// ramp endpoints for the served extremes.
fn legend(buf: &mut Buffer, col: Rect, y: u16) {
    let (low, high) = content::SUPPLY_RANGE;
    let line = Line::from(vec![
        Span::styled(format!("{} ", content::MAP_LEGEND_LABEL), muted()),
        Span::styled("█", Style::default().fg(theme::rgb(theme::NO_DATA_GREY))),
        Span::styled(" None   ", faint()),
        Span::styled("█", Style::default().fg(theme::supply_color(low))),
        Span::styled(" Fewer   ", faint()),
        Span::styled("█", Style::default().fg(theme::supply_color(high))),
        Span::styled(" More", faint()),
    ]);
    centered(buf, col, y, line);
}

fn blit(buf: &mut Buffer, canvas: Rect, layer: &BrailleCanvas, color: Color) {
    for (cx, cy, glyph) in layer.iter_set_cells() {
        if cx >= usize::from(canvas.width) || cy >= usize::from(canvas.height) {
            continue;
        }
        buf[(canvas.x + cx as u16, canvas.y + cy as u16)]
            .set_char(glyph)
            .set_fg(color);
    }
}

fn how_it_works(area: Rect, buf: &mut Buffer) {
    let col = column(area);
    heading(buf, col, area.y + 1, content::HOW_HEADING);

    let card_width = col.width.saturating_sub(6) / 4;
    for (i, step) in content::HOW_STEPS.iter().enumerate() {
        let rect = Rect::new(col.x + i as u16 * (card_width + 2), area.y + 3, card_width, 7);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border())
            .title(Span::styled(format!(" {} ", i + 1), red().add_modifier(Modifier::BOLD)));
        let inner = block.inner(rect);
        block.render(rect, buf);
        Paragraph::new(step.title)
            .style(bold())
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, inner.y, inner.width, 2), buf);
        Paragraph::new(step.blurb)
            .style(muted())
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, inner.y + 2, inner.width, 3), buf);
    }
}

fn get_involved(area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let col = column(area);
    heading(buf, col, area.y + 1, content::INVOLVED_HEADING);
    Paragraph::new(content::INVOLVED_SUB)
        .style(muted())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(Rect::new(col.x, area.y + 2, col.width, 2), buf);

    let half = col.width.saturating_sub(2) / 2;
    let cards = [
        (
            Rect::new(col.x, area.y + 5, half, 9),
            content::INVOLVED_DONATE_TITLE,
            content::INVOLVED_DONATE_BODY,
            content::HERO_CTA_PRIMARY,
            true,
            Hit::InvolvedDonate,
        ),
        (
            Rect::new(col.x + half + 2, area.y + 5, half, 9),
            content::INVOLVED_VOLUNTEER_TITLE,
            content::INVOLVED_VOLUNTEER_BODY,
            content::INVOLVED_VOLUNTEER_CTA,
            false,
            Hit::InvolvedVolunteer,
        ),
    ];
    for (rect, title, body, cta, primary, hit) in cards {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border())
            .title(Span::styled(format!(" {title} "), bold()));
        let inner = block.inner(rect);
        block.render(rect, buf);
        Paragraph::new(body)
            .style(muted())
            .wrap(Wrap { trim: true })
            .render(
                Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 4),
                buf,
            );
        if primary {
            solid_button(buf, hits, inner.x + 1, inner.y + 4, cta, hit);
        } else {
            button(buf, hits, inner.x + 1, inner.y + 4, cta, true, hit);
        }
    }

    let info = Rect::new(col.x, area.y + 15, col.width, 5);
    let block = Block::default().borders(Borders::ALL).border_style(border());
    let inner = block.inner(info);
    block.render(info, buf);
    for (i, (title, body)) in content::INFO_CARDS.iter().enumerate() {
        let line = Line::from(vec![
            Span::styled(format!("• {title}: "), bold()),
            Span::styled(*body, muted()),
        ]);
        if inner.width > 2 {
            buf.set_line(inner.x + 1, inner.y + i as u16, &line, inner.width - 2);
        }
    }
}

fn donate(app: &App, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let col = column(area);
    heading(buf, col, area.y + 1, content::DONATE_HEADING);
    Paragraph::new(content::DONATE_SUB)
        .style(muted())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(Rect::new(col.x, area.y + 2, col.width, 2), buf);

    let panel_width = col.width.min(78);
    let panel = Rect::new(col.x + (col.width - panel_width) / 2, area.y + 4, panel_width, 17);
    let block = Block::default().borders(Borders::ALL).border_style(border());
    let inner = block.inner(panel);
    block.render(panel, buf);

    let d = &app.donate;

    let monthly = toggle_button(
        buf,
        hits,
        inner.x + 1,
        inner.y,
        content::DONATE_FREQ_MONTHLY,
        d.monthly,
        Hit::Frequency(true),
    );
    toggle_button(
        buf,
        hits,
        monthly.x + monthly.width + 2,
        inner.y,
        content::DONATE_FREQ_ONE_OFF,
        !d.monthly,
        Hit::Frequency(false),
    );

    put(buf, inner.x + 1, inner.y + 3, content::DONATE_AMOUNT_LABEL, bold());
    let mut x = inner.x + 1;
    for amount in PRESET_AMOUNTS {
        let rect = toggle_button(
            buf,
            hits,
            x,
            inner.y + 4,
            &format!("£{amount}"),
            d.is_selected(amount),
            Hit::Preset(amount),
        );
        x += rect.width + 1;
    }

    // Custom amount field.
    let input = Rect::new(inner.x + 1, inner.y + 7, 22.min(inner.width), 3);
    let input_border = if app.amount_focused {
        Style::default().fg(theme::rgb(theme::BRAND_BLUE))
    } else {
        border()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(input_border)
        .title(Span::styled(format!(" {} ", content::DONATE_CUSTOM_LABEL), muted()))
        .render(input, buf);
    let room = usize::from(input.width.saturating_sub(6));
    let typed = d.custom_text.chars().count();
    let shown: String = if typed > room {
        d.custom_text.chars().skip(typed - room).collect()
    } else {
        d.custom_text.clone()
    };
    let field = if app.amount_focused {
        format!("£ {shown}▏")
    } else {
        format!("£ {shown}")
    };
    put(buf, input.x + 2, input.y + 1, &field, Style::default().fg(Color::White));
    hits.push(input, Hit::AmountInput);

    let impact = format!(
        "£{} could help deliver approximately {} stoma bags to those in need",
        d.formatted_amount(),
        fmt::group_thousands(d.bag_count().into())
    );
    centered(
        buf,
        inner,
        inner.y + 10,
        Line::styled(impact, Style::default().fg(theme::rgb(theme::BRAND_GREEN))),
    );

    let submit = format!("Donate £{} {} →", d.formatted_amount(), d.frequency_label());
    let submit_width = submit.chars().count() as u16 + 4;
    solid_button(
        buf,
        hits,
        inner.x + inner.width.saturating_sub(submit_width) / 2,
        inner.y + 11,
        &submit,
        Hit::DonateSubmit,
    );

    centered(
        buf,
        inner,
        inner.y + 14,
        Line::styled(content::PAYMENT_METHODS.join(" · "), faint()),
    );
}

/// Bordered selectable button: red while selected, grey otherwise.
fn toggle_button(
    buf: &mut Buffer,
    hits: &mut HitMap,
    x: u16,
    y: u16,
    label: &str,
    selected: bool,
    hit: Hit,
) -> Rect {
    let width = label.chars().count() as u16 + 4;
    let area = Rect::new(x, y, width, 3);
    let (frame, text) = if selected {
        (red(), red().add_modifier(Modifier::BOLD))
    } else {
        (border(), muted())
    };
    Block::default().borders(Borders::ALL).border_style(frame).render(area, buf);
    put(buf, x + 2, y + 1, label, text);
    hits.push(area, hit);
    area
}

fn contact(area: Rect, buf: &mut Buffer) {
    let col = column(area);
    heading(buf, col, area.y + 1, content::CONTACT_HEADING);

    let card_width = col.width.saturating_sub(4) / 3;
    let entries = [
        ("✉ Email", content::CONTACT_EMAIL),
        ("☎ Phone", content::CONTACT_PHONE),
        ("⚑ Location", content::CONTACT_LOCATION),
    ];
    for (i, (title, value)) in entries.iter().enumerate() {
        let rect = Rect::new(col.x + i as u16 * (card_width + 2), area.y + 3, card_width, 6);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border())
            .title(Span::styled(format!(" {title} "), bold()));
        let inner = block.inner(rect);
        block.render(rect, buf);
        centered(buf, inner, inner.y + 1, Line::styled(*value, Style::default().fg(Color::White)));
    }

    let trust = Rect::new(col.x, area.y + 10, col.width, 7);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border())
        .title(Span::styled(format!(" {} ", content::TRUST_HEADING), bold()));
    let inner = block.inner(trust);
    block.render(trust, buf);
    for (i, (title, body)) in content::TRUST_ITEMS.iter().enumerate() {
        let line = Line::from(vec![
            Span::styled(format!("• {title}: "), Style::default().fg(Color::White)),
            Span::styled(*body, muted()),
        ]);
        if inner.width > 2 {
            buf.set_line(inner.x + 1, inner.y + 1 + i as u16, &line, inner.width - 2);
        }
    }
}

fn footer(area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let col = column(area);
    let col_width = col.width / 4;
    let y = area.y;

    put(buf, col.x, y + 1, content::BRAND_NAME, bold());
    Paragraph::new(content::FOOTER_BLURB)
        .style(faint())
        .wrap(Wrap { trim: true })
        .render(Rect::new(col.x, y + 2, col_width.saturating_sub(2), 4), buf);

    let x1 = col.x + col_width;
    put(buf, x1, y + 1, "Quick Links", bold());
    for (i, (label, section)) in page::NAV_LINKS.iter().take(4).enumerate() {
        let row = y + 2 + i as u16;
        put(buf, x1, row, label, muted());
        hits.push(Rect::new(x1, row, label.len() as u16, 1), Hit::NavLink(*section));
    }

    let x2 = col.x + col_width * 2;
    put(buf, x2, y + 1, "Legal", bold());
    for (i, item) in content::FOOTER_LEGAL.iter().enumerate() {
        put(buf, x2, y + 2 + i as u16, item, faint());
    }

    let x3 = col.x + col_width * 3;
    put(buf, x3, y + 1, "Follow Us", bold());
    for (i, item) in content::FOOTER_SOCIAL.iter().enumerate() {
        put(buf, x3, y + 2 + i as u16, item, faint());
    }

    put(buf, col.x, y + 8, &"─".repeat(usize::from(col.width)), border());
    centered(buf, col, y + 9, Line::styled(content::COPYRIGHT, muted()));
    centered(buf, col, y + 10, Line::styled(content::COPYRIGHT_SUB, faint()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{builtin, Boundaries, DataSource};
    use std::time::{Duration, Instant};

    fn test_app() -> App {
        let boundaries = Boundaries {
            countries: builtin::southern_africa(),
            source: DataSource::Builtin,
        };
        App::new(100, 40, boundaries, Instant::now())
    }

    fn render_section(section: Section, app: &App) -> (Buffer, HitMap) {
        let area = Rect::new(0, 0, 100, section.height());
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();
        render(section, app, area, &mut buf, &mut hits);
        (buf, hits)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn hero_offers_both_calls_to_action() {
        let app = test_app();
        let (buf, hits) = render_section(Section::Hero, &app);
        let donate = hits.rect_of(Hit::HeroDonate).expect("primary button");
        assert!(row_text(&buf, donate.y + 1).contains("Donate Now →"));
        assert!(hits.rect_of(Hit::HeroHow).is_some());
        assert!(row_text(&buf, 3).contains(content::HERO_TITLE));
    }

    #[test]
    fn metrics_reach_their_targets_once_the_count_up_finishes() {
        let mut app = test_app();
        let start = Instant::now();
        // Metrics sit inside the initial window, so the first update arms
        // the counters and the second samples them well past the end.
        app.update(start);
        app.update(start + Duration::from_secs(3));
        let (buf, _) = render_section(Section::Metrics, &app);
        let values = row_text(&buf, 3);
        assert!(values.contains("31,752"));
        assert!(values.contains("921.5kg"));
        assert!(values.contains("100%"));
    }

    #[test]
    fn story_card_tracks_the_carousel() {
        let mut app = test_app();
        app.story_next();
        let (buf, hits) = render_section(Section::Stories, &app);
        assert!(row_text(&buf, 3).contains("Asanda's Story"));

        let active = hits.rect_of(Hit::StoryDot(1)).expect("active dot");
        assert_eq!(buf[(active.x, active.y)].symbol(), "●");
        let idle = hits.rect_of(Hit::StoryDot(0)).expect("idle dot");
        assert_eq!(buf[(idle.x, idle.y)].symbol(), "○");
        assert!(hits.rect_of(Hit::StoryPrev).is_some());
        assert!(hits.rect_of(Hit::StoryNext).is_some());
    }

    #[test]
    fn map_box_carries_the_offline_note_for_builtin_data() {
        let app = test_app();
        let (buf, hits) = render_section(Section::ImpactMap, &app);
        let canvas = hits.rect_of(Hit::MapCanvas).expect("canvas");
        assert_eq!(canvas.height, page::MAP_CANVAS_ROWS);
        // The note sits on the bottom border, one row below the canvas.
        let note_row = row_text(&buf, canvas.y + canvas.height);
        assert!(note_row.contains(content::MAP_OFFLINE_NOTE));
        let legend_row = row_text(&buf, 29);
        assert!(legend_row.contains("None"));
        assert!(legend_row.contains("Fewer"));
        assert!(legend_row.contains("More"));
        assert!(row_text(&buf, 30).contains("Scroll to zoom"));
    }

    #[test]
    fn donate_panel_reflects_the_default_selection() {
        let app = test_app();
        let (buf, hits) = render_section(Section::Donate, &app);
        for amount in PRESET_AMOUNTS {
            assert!(hits.rect_of(Hit::Preset(amount)).is_some());
        }
        assert!(hits.rect_of(Hit::Frequency(true)).is_some());
        assert!(hits.rect_of(Hit::AmountInput).is_some());

        let submit = hits.rect_of(Hit::DonateSubmit).expect("submit button");
        assert!(row_text(&buf, submit.y + 1).contains("Donate £25 today"));

        let input = hits.rect_of(Hit::AmountInput).unwrap();
        assert!(row_text(&buf, input.y + 1).contains("£ 25.00"));
    }

    #[test]
    fn footer_links_jump_back_into_the_page() {
        let app = test_app();
        let (buf, hits) = render_section(Section::Footer, &app);
        assert!(hits.rect_of(Hit::NavLink(Section::About)).is_some());
        assert!(hits.rect_of(Hit::NavLink(Section::GetInvolved)).is_some());
        assert!(row_text(&buf, 9).contains(content::COPYRIGHT));
    }
}
