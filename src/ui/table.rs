use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::app::AppState;

/// Render the employee table, windowed to the visible height.
///
/// While the table is hidden (empty result set, or nothing loaded yet) only
/// the empty frame is drawn; the status bar carries the message.
pub fn render_employee_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = Block::default()
        .title("Employees")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));

    if !app.view.table_visible {
        f.render_widget(block, area);
        return;
    }

    let body_height = area.height.saturating_sub(3) as usize;
    if body_height > 0 {
        app.rows_per_page = body_height;
    }
    if app.selected_index >= app.view.rows.len() {
        app.selected_index = app.view.rows.len().saturating_sub(1);
    }

    let start = (app.selected_index / app.rows_per_page) * app.rows_per_page;
    let end = (start + app.rows_per_page).min(app.view.rows.len());
    let slice = &app.view.rows[start..end];

    let rows = slice.iter().enumerate().map(|(i, record)| {
        let absolute_index = start + i;
        let style = if absolute_index == app.selected_index {
            Style::default()
                .fg(app.theme.highlight_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        Row::new(record.row_cells().map(Cell::from)).style(style)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Percentage(30),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(6),
    ];

    let header = Row::new(vec![
        "ID", "FIRST", "LAST", "EMAIL", "PHONE", "SALARY", "DEPT",
    ])
    .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

/// Render every field of the selected employee, including the job ID that
/// has no table column.
pub fn render_employee_details(f: &mut Frame, area: Rect, app: &AppState) {
    let record = app
        .view
        .table_visible
        .then(|| app.view.rows.get(app.selected_index))
        .flatten();

    let text = match record {
        Some(r) => {
            let cells = r.row_cells();
            format!(
                "Employee ID: {}\nFirst name: {}\nLast name: {}\nEmail: {}\nPhone: {}\nSalary: {}\nDepartment ID: {}\nJob ID: {}",
                cells[0],
                cells[1],
                cells[2],
                cells[3],
                cells[4],
                cells[5],
                cells[6],
                r.job_id.as_deref().unwrap_or_default(),
            )
        }
        None => String::new(),
    };

    let p = Paragraph::new(text)
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title("Details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}
