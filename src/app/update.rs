use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::{AppState, InputMode};
use crate::ui;

/// Run the event loop: draw, apply finished fetches, handle keys.
///
/// The startup list load is kicked off before the first frame; every later
/// fetch is triggered by a key. Fetch results arrive over the outcome
/// channel and are drained once per tick, so the loop itself never blocks
/// on the network.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut app: AppState,
) -> Result<()> {
    app.load_on_start();

    loop {
        app.drain_outcomes();

        terminal.draw(|f| {
            ui::render(f, &mut app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.input_mode {
                        InputMode::Normal => match key.code {
                            KeyCode::Char('q') => break,
                            KeyCode::Char('/') => {
                                app.search_input.clear();
                                app.input_mode = InputMode::Search;
                            }
                            // Same operation as Enter inside the search input.
                            KeyCode::Enter => app.submit_search(),
                            KeyCode::Up | KeyCode::Char('k') => {
                                if app.selected_index > 0 {
                                    app.selected_index -= 1;
                                }
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                if app.selected_index + 1 < app.view.rows.len() {
                                    app.selected_index += 1;
                                }
                            }
                            KeyCode::Left | KeyCode::Char('h') => {
                                let rpp = app.rows_per_page.max(1);
                                app.selected_index = app.selected_index.saturating_sub(rpp);
                            }
                            KeyCode::Right | KeyCode::Char('l') => {
                                let rpp = app.rows_per_page.max(1);
                                let last = app.view.rows.len().saturating_sub(1);
                                app.selected_index = app.selected_index.saturating_add(rpp).min(last);
                            }
                            _ => {}
                        },
                        InputMode::Search => match key.code {
                            KeyCode::Enter => {
                                app.submit_search();
                                app.input_mode = InputMode::Normal;
                            }
                            KeyCode::Esc => {
                                app.input_mode = InputMode::Normal;
                                app.search_input.clear();
                            }
                            KeyCode::Backspace => {
                                app.search_input.pop();
                            }
                            KeyCode::Char(c) => {
                                app.search_input.push(c);
                            }
                            _ => {}
                        },
                        InputMode::Modal => match key.code {
                            KeyCode::Esc | KeyCode::Enter => app.dismiss_modal(),
                            _ => {}
                        },
                    }
                }
            }
        }
    }

    Ok(())
}
