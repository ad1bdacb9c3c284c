pub mod components;
pub mod table;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)].as_ref())
        .split(root[1]);

    let prompt = match app.input_mode {
        InputMode::Search => format!("  Search: {}_", app.search_input),
        _ if !app.search_input.is_empty() => format!("  Search: {}", app.search_input),
        _ => String::new(),
    };
    let p = Paragraph::new(format!(
        "hr-directory{prompt}  employees:{}  — /: search; Enter: run search; Esc: cancel; q: quit",
        app.view.rows.len()
    ))
    .block(
        Block::default()
            .title("hr-directory")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, root[0]);

    table::render_employee_table(f, body[0], app);
    table::render_employee_details(f, body[1], app);

    components::render_status_bar(f, root[2], app);

    if app.modal.is_some() {
        let area = f.area();
        components::render_error_modal(f, area, app);
    }
}
