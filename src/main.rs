use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::execute;
use ratatui::layout::Position;
use ratatui::DefaultTerminal;

use footprints_tui::app::{App, SCROLL_STEP};
use footprints_tui::data::{self, Boundaries};
use footprints_tui::page::Section;
use footprints_tui::ui::{self, FrameOutput, Hit, HitMap};

fn main() -> Result<()> {
    // Resolve boundary data before entering the alternate screen so any
    // fallback warnings stay readable.
    let boundaries = data::load_boundaries();

    let mut terminal = ratatui::init();
    terminal.clear()?;
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(&mut terminal, boundaries);

    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, boundaries: Boundaries) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(size.width, size.height, boundaries, Instant::now());

    loop {
        // Each draw reports the clickable regions and where the map canvas
        // landed, which the next frame's mouse events are resolved against.
        let mut output = FrameOutput::default();
        terminal.draw(|frame| output = ui::render(frame, &app))?;
        app.sync_map_canvas(output.map_canvas);

        // ~60fps target
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => handle_mouse(&mut app, &output.hits, mouse),
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }

        app.update(Instant::now());
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_mouse(app: &mut App, hits: &HitMap, mouse: MouseEvent) {
    let hit = hits.hit_at(Position::new(mouse.column, mouse.row));

    match mouse.kind {
        // The wheel zooms over the map and scrolls the page anywhere else.
        MouseEventKind::ScrollUp => match hit {
            Some(Hit::MapCanvas) => app.zoom_in_at(mouse.column, mouse.row),
            _ => app.scroll_by(-i32::from(SCROLL_STEP)),
        },
        MouseEventKind::ScrollDown => match hit {
            Some(Hit::MapCanvas) => app.zoom_out_at(mouse.column, mouse.row),
            _ => app.scroll_by(i32::from(SCROLL_STEP)),
        },
        MouseEventKind::Down(MouseButton::Left) => {
            if app.menu_open {
                // The modal swallows the click: either a menu entry or a
                // dismissal.
                match hit {
                    Some(Hit::MenuLink(section)) => app.jump_to(section),
                    _ => app.toggle_menu(),
                }
            } else if let Some(hit) = hit {
                activate(app, hit, mouse.column, mouse.row);
            } else {
                app.blur_amount();
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.drag_to(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.end_drag(),
        MouseEventKind::Moved => app.hover_at(mouse.column, mouse.row),
        _ => {}
    }
}

/// A left click landed on a control while the menu was closed.
fn activate(app: &mut App, hit: Hit, column: u16, row: u16) {
    if hit != Hit::AmountInput {
        app.blur_amount();
    }
    match hit {
        Hit::NavLink(section) | Hit::MenuLink(section) => app.jump_to(section),
        Hit::NavDonate | Hit::HeroDonate | Hit::InvolvedDonate => app.jump_to(Section::Donate),
        Hit::HeroHow => app.jump_to(Section::HowItWorks),
        Hit::MenuToggle => app.toggle_menu(),
        Hit::StoryPrev => app.story_prev(),
        Hit::StoryNext => app.story_next(),
        Hit::StoryDot(index) => app.story_select(index),
        Hit::MapCanvas => app.begin_drag(column, row),
        Hit::Frequency(monthly) => app.donate.set_frequency(monthly),
        Hit::Preset(amount) => app.donate.select_preset(amount),
        Hit::AmountInput => app.focus_amount(),
        Hit::DonateSubmit => app.submit_donation(),
        Hit::InvolvedVolunteer => app.volunteer_clicked(),
    }
}
