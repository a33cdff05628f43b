//! Site Demo: all six pages behind a tab bar.
//!
//! Loads the JSON fixtures under `demos/data/` and runs the shell
//! loop: input and ticker actors feed one `select!` loop that routes
//! events to the active page and presents frames.
//!
//! Keys: F1-F6 switch pages, Esc or Ctrl+C quits. Everything else goes
//! to the active page.

use anyhow::{Context, Result};
use crossbeam_channel::{select, unbounded};
use drumroll::data::{load_json, GalleryDoc, KanbanDoc, KbDoc, StatsDoc};
use drumroll::widget::{
    GalleryWidget, KanbanWidget, KbWidget, PickerWidget, SlotWidget, StatsWidget, Widget,
};
use drumroll::{Buffer, Cell, InputActor, InputEvent, KeyCode, Modifiers, Rect, Rgb, Screen, TickerActor};
use std::path::Path;
use std::time::Duration;

const PAGE_TITLES: [&str; 6] = ["Gallery", "Kanban", "Knowledge", "Stats", "Slot", "Picker"];
const TAB_BG: Rgb = Rgb::new(34, 34, 44);

fn main() -> Result<()> {
    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "demos/data".to_string());
    let data_dir = Path::new(&data_dir);

    let gallery: GalleryDoc = load_json(&data_dir.join("gallery.json")).context("gallery fixture")?;
    let kanban: KanbanDoc = load_json(&data_dir.join("kanban.json")).context("kanban fixture")?;
    let kb: KbDoc = load_json(&data_dir.join("kb.json")).context("kb fixture")?;
    let stats: StatsDoc = load_json(&data_dir.join("stats.json")).context("stats fixture")?;

    let mut screen = Screen::new()?;
    let (width, height) = (screen.width(), screen.height());
    let page_area = Rect::new(0, 1, width, height.saturating_sub(1));

    let mut pages: Vec<Box<dyn Widget>> = vec![
        Box::new(GalleryWidget::new(page_area, gallery.items)),
        Box::new(KanbanWidget::new(page_area, kanban)),
        Box::new(KbWidget::new(page_area, kb)),
        Box::new(StatsWidget::new(page_area, stats)),
        Box::new(SlotWidget::new(page_area)),
        Box::new(PickerWidget::new(page_area)),
    ];
    let mut active = 0usize;

    let (input_tx, input_rx) = unbounded();
    let input = InputActor::spawn(input_tx, Duration::from_millis(10));
    let ticker = TickerActor::spawn(Duration::from_millis(16));

    let mut buffer = Buffer::new(width, height);
    draw_frame(&mut buffer, pages[active].as_ref(), active);
    screen.present(&buffer)?;

    let mut running = true;
    while running {
        let mut redraw = false;
        select! {
            recv(input_rx) -> event => {
                let Ok(event) = event else { break };
                match &event {
                    InputEvent::Key { code, modifiers } => {
                        let consumed = pages[active].handle_input(&event);
                        if !consumed {
                            match code {
                                KeyCode::Esc => running = false,
                                KeyCode::Char('c') if modifiers.control => running = false,
                                KeyCode::F(n) => {
                                    let n = *n as usize;
                                    if (1..=pages.len()).contains(&n) {
                                        active = n - 1;
                                        redraw = true;
                                    }
                                }
                                _ => {}
                            }
                        }
                        redraw = redraw || pages[active].needs_redraw();
                    }
                    InputEvent::Resize { width, height } => {
                        screen.handle_resize(*width, *height);
                        buffer.resize(*width, *height);
                        let page_area = Rect::new(0, 1, *width, height.saturating_sub(1));
                        for page in &mut pages {
                            page.set_bounds(page_area);
                        }
                        redraw = true;
                    }
                    InputEvent::Shutdown => running = false,
                    InputEvent::Error(_) => {}
                }
            }
            recv(ticker.receiver()) -> tick => {
                let Ok(tick) = tick else { break };
                pages[active].tick(tick.elapsed);
                redraw = pages[active].needs_redraw();
            }
        }

        if redraw {
            draw_frame(&mut buffer, pages[active].as_ref(), active);
            pages[active].clear_redraw();
            screen.present(&buffer)?;
        }
    }

    ticker.join();
    input.join();
    Ok(())
}

/// Tab bar plus the active page.
fn draw_frame(buffer: &mut Buffer, page: &dyn Widget, active: usize) {
    buffer.clear();
    let width = buffer.width();
    buffer.fill_rect(Rect::new(0, 0, width, 1), Cell::new(' ').with_bg(TAB_BG));
    let mut x = 1;
    for (i, title) in PAGE_TITLES.iter().enumerate() {
        let label = format!(" F{} {title} ", i + 1);
        let (fg, modifiers) = if i == active {
            (Rgb::new(255, 255, 255), Modifiers::BOLD | Modifiers::REVERSED)
        } else {
            (Rgb::new(160, 160, 170), Modifiers::empty())
        };
        x += buffer.draw_str_with(x, 0, &label, fg, TAB_BG, modifiers) + 1;
        if x >= width {
            break;
        }
    }
    page.render(buffer);
}
