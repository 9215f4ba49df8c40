use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::reference::INDICATOR;

use super::app::{App, ConfirmState, Field};

const FORM_WIDTH: u16 = 46;
const LABEL_WIDTH: usize = 16;

pub fn draw(frame: &mut Frame, app: &App) {
    let [main, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    let [form, right] =
        Layout::horizontal([Constraint::Length(FORM_WIDTH), Constraint::Min(0)]).areas(main);
    let [queue, output] =
        Layout::vertical([Constraint::Length(8), Constraint::Min(0)]).areas(right);
    draw_form(frame, form, app);
    draw_queue(frame, queue, app);
    draw_output(frame, output, app);
    draw_status(frame, status, app);
    if let Some(confirm) = &app.confirm {
        draw_confirm(frame, confirm);
    }
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let indicator = app.form.var_type == INDICATOR;
    let sub_topic_enabled =
        indicator && !app.form.sub_topic_options(app.session.reference()).is_empty();

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor: Option<Position> = None;

    let mut push_field = |field: Field, label: &str, value: String, enabled: bool| {
        let focused = app.focus == field && app.confirm.is_none();
        let label_style = if !enabled {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default()
        };
        let shown = if field.is_text() && focused {
            app.editor.value().to_string()
        } else {
            value
        };
        let value_span = if !enabled {
            Span::styled("-", Style::default().fg(Color::DarkGray))
        } else if focused && !field.is_text() {
            Span::styled(format!("< {} >", shown), Style::default().bold())
        } else {
            Span::raw(shown)
        };
        if focused && field.is_text() {
            cursor = Some(Position::new(
                area.x + 1 + LABEL_WIDTH as u16 + app.editor.visual_cursor() as u16,
                area.y + 1 + lines.len() as u16,
            ));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
            value_span,
        ]));
    };

    push_field(Field::Dataset, "Survey Dataset", app.form.dataset.clone(), true);
    push_field(Field::VarCode, "Variable Code", app.form.var_code.clone(), true);
    push_field(Field::VarName, "Variable Name", app.form.var_name.clone(), true);
    push_field(
        Field::Description,
        "Description",
        app.form.description.clone(),
        true,
    );
    push_field(Field::VarType, "Variable Type", app.form.var_type.clone(), true);
    push_field(Field::Topic, "Topic", app.form.topic.clone(), indicator);
    push_field(
        Field::SubTopic,
        "Sub-Topic",
        app.form.sub_topic.clone(),
        sub_topic_enabled,
    );
    push_field(
        Field::NumLevels,
        "Levels (2-6)",
        app.form.num_levels.clone(),
        true,
    );
    for (index, level) in app.form.levels.iter().enumerate() {
        push_field(
            Field::Level(index),
            &format!("Level {} Name", index + 1),
            level.clone(),
            true,
        );
    }

    lines.push(Line::raw(""));
    lines.push(
        Line::from("^A Add   ^L Clear Queue   ^G Generate").fg(Color::DarkGray),
    );
    lines.push(Line::from("Tab Next   Left/Right Change   Esc Quit").fg(Color::DarkGray));

    let block = Block::default().borders(Borders::ALL).title("Variable");
    frame.render_widget(Paragraph::new(lines).block(block), area);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn draw_queue(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.session.queue().summary();
    let lines = if summary.is_empty() {
        vec![Line::from("(empty)").fg(Color::DarkGray)]
    } else {
        summary.into_iter().map(Line::from).collect()
    };
    let title = format!("Queue ({})", app.session.queue().len());
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_output(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Generated SAS Code");
    frame.render_widget(
        Paragraph::new(app.output.as_str()).block(block),
        area,
    );
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = app.session.last_error() {
        Line::from(error).fg(Color::Red)
    } else if let Some(status) = &app.status {
        Line::from(status.as_str()).fg(Color::Green)
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_confirm(frame: &mut Frame, confirm: &ConfirmState) {
    let width = 52u16.min(frame.area().width);
    let height = (confirm.missing.len() as u16 + 7).min(frame.area().height);
    let dialog = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, dialog);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from("The following fields are missing:"));
    for label in &confirm.missing {
        lines.push(Line::from(format!("  - {}", label)).fg(Color::Yellow));
    }
    lines.push(Line::raw(""));

    let selected = Style::default().fg(Color::Black).bg(Color::White).bold();
    let unselected = Style::default().fg(Color::White);
    let add = Span::styled(
        "[ Add Anyway ]",
        if confirm.add_anyway { selected } else { unselected },
    );
    let cancel = Span::styled(
        "[ Cancel ]",
        if confirm.add_anyway { unselected } else { selected },
    );
    lines.push(Line::from(vec![
        Span::raw("   "),
        add,
        Span::raw("   "),
        cancel,
    ]));
    lines.push(Line::from("Left/Right Select   Enter Confirm   Esc Cancel").fg(Color::DarkGray));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add with missing fields?");
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        dialog,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}
