//! TUI rendering for the contact book using ratatui.
//!
//! One screen per [`Route`], plus the validation alert drawn on top of
//! whatever screen raised it.

mod effects;
mod input;
mod theme;

pub use effects::apply_modal_effect;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use contacts_engine::{App, Contact, FormField, Route, ValidationAlert};

/// Width of the label column on the detail screen.
const DETAIL_LABEL_WIDTH: usize = 13;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Screen
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    match app.route() {
        Route::AddContact => draw_add_screen(frame, app, chunks[1], &palette),
        Route::ContactList => draw_list_screen(frame, app, chunks[1], &palette, &glyphs),
        Route::ContactDetail => draw_detail_screen(frame, app, chunks[1], &palette, &glyphs),
    }
    draw_status_bar(frame, app, chunks[2], &palette);

    if let Some(alert) = app.alert().copied() {
        draw_alert(frame, app, &alert, &palette, &glyphs);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let count = app.contacts().len();
    let noun = if count == 1 { "contact" } else { "contacts" };
    let mut spans = vec![
        Span::styled(format!(" {} ", glyphs.contact), styles::title(palette)),
        Span::styled(app.route().title(), styles::title(palette)),
    ];
    if app.can_go_back() {
        spans.push(Span::styled(
            format!("  {} back", glyphs.back),
            styles::key_hint(palette),
        ));
    }
    let left = Paragraph::new(Line::from(spans));
    let right = Paragraph::new(Line::from(Span::styled(
        format!("{count} {noun} "),
        Style::default().fg(palette.text_secondary),
    )))
    .alignment(Alignment::Right);

    frame.render_widget(left, area);
    frame.render_widget(right, area);
}

fn draw_add_screen(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let focused = app.focused_field();
    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        let draft = app.field(*field);
        let is_focused = *field == focused;
        let border_style = if is_focused {
            styles::focused_border(palette)
        } else {
            styles::idle_border(palette)
        };
        let label_style = if is_focused {
            styles::title(palette)
        } else {
            styles::label(palette)
        };
        let mut title = vec![Span::styled(format!(" {} ", field.label()), label_style)];
        if *field == FormField::Name {
            title.push(Span::styled("* ", Style::default().fg(palette.error)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(palette.bg_panel))
            .title(Line::from(title));
        let inner = block.inner(*row);

        // Keep the cursor visible by scrolling long values horizontally.
        let before_width = draft.text_before_cursor().width() as u16;
        let scroll_x = before_width.saturating_sub(inner.width.saturating_sub(1));
        let input = Paragraph::new(draft.text())
            .style(Style::default().fg(palette.text_primary))
            .scroll((0, scroll_x))
            .block(block);
        frame.render_widget(input, *row);

        if is_focused && app.alert().is_none() && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position(Position::new(
                inner.x + before_width.saturating_sub(scroll_x),
                inner.y,
            ));
        }
    }
}

fn draw_list_screen(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let contacts = app.contacts();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::idle_border(palette))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            format!(" Contacts ({}) ", contacts.len()),
            styles::title(palette),
        )));

    if contacts.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No contacts yet.", styles::label(palette))),
            Line::from(vec![
                Span::styled("Press ", styles::key_hint(palette)),
                Span::styled("a", styles::key_highlight(palette)),
                Span::styled(" to add one.", styles::key_hint(palette)),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let inner = block.inner(area);
    let cursor = app.list_cursor();
    let lines: Vec<Line> = contacts
        .iter()
        .enumerate()
        .map(|(i, contact)| contact_row(contact, i == cursor, inner.width, palette, glyphs))
        .collect();

    // Keep the cursor row inside the viewport.
    let visible = usize::from(inner.height.max(1));
    let offset = cursor.saturating_sub(visible - 1) as u16;
    let list = Paragraph::new(lines).scroll((offset, 0)).block(block);
    frame.render_widget(list, area);
}

fn contact_row(
    contact: &Contact,
    selected: bool,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'static> {
    let marker = if selected { glyphs.selected } else { " " };
    let left = format!("{marker} {}", contact.name());
    let right = if contact.email().is_empty() {
        contact.phone_number().to_string()
    } else {
        contact.email().to_string()
    };

    let bg = if selected {
        palette.bg_highlight
    } else {
        palette.bg_panel
    };
    let name_style = if selected {
        Style::default()
            .fg(palette.text_primary)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_secondary).bg(bg)
    };

    let used = left.width() + right.width();
    let filler = usize::from(width).saturating_sub(used).max(2);
    Line::from(vec![
        Span::styled(left, name_style),
        Span::styled(" ".repeat(filler), Style::default().bg(bg)),
        Span::styled(right, Style::default().fg(palette.text_muted).bg(bg)),
    ])
}

/// Label/value lines for a contact's detail view.
#[must_use]
pub fn detail_lines(contact: &Contact, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    FormField::ALL
        .iter()
        .map(|field| {
            let value = contact.field(*field);
            let value_span = if value.is_empty() {
                Span::styled(glyphs.empty_value.to_string(), styles::label(palette))
            } else {
                Span::styled(value.to_string(), Style::default().fg(palette.text_primary))
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", field.label(), width = DETAIL_LABEL_WIDTH),
                    styles::label(palette),
                ),
                value_span,
            ])
        })
        .collect()
}

fn draw_detail_screen(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::focused_border(palette))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1));

    let Some(contact) = app.selected_contact() else {
        let empty = Paragraph::new(Span::styled("No contact selected.", styles::label(palette)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let block = block.title(Line::from(Span::styled(
        format!(" {} ", contact.name()),
        styles::title(palette),
    )));
    let detail = Paragraph::new(detail_lines(contact, palette, glyphs)).block(block);
    frame.render_widget(detail, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints: &[(&str, &str)] = match app.route() {
        Route::AddContact => &[
            ("Enter", "save"),
            ("Tab", "next field"),
            ("Esc", "contacts"),
            ("Ctrl+C", "quit"),
        ],
        Route::ContactList => &[
            ("j/k", "move"),
            ("Enter", "open"),
            ("a", "add"),
            ("q", "quit"),
        ],
        Route::ContactDetail => &[("Esc", "back"), ("a", "add"), ("l", "list"), ("q", "quit")],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if let Some(message) = app.status_message() {
        let status = Paragraph::new(Span::styled(
            message.to_string(),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(status, area);
    }
}

fn draw_alert(
    frame: &mut Frame,
    app: &mut App,
    alert: &ValidationAlert,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = frame.area();
    let message_width = alert.message().width() as u16;
    let alert_width = (message_width + 8).min(area.width.saturating_sub(2)).max(20);
    let alert_height = 7u16.min(area.height);

    let base_area = Rect {
        x: area.x + (area.width.saturating_sub(alert_width) / 2),
        y: area.y + (area.height.saturating_sub(alert_height) / 2),
        width: alert_width,
        height: alert_height,
    };

    let elapsed = app.frame_elapsed();
    let (alert_area, effect_done) = if let Some(effect) = app.modal_effect_mut() {
        effect.advance(elapsed);
        (
            apply_modal_effect(effect, base_area, area),
            effect.is_finished(),
        )
    } else {
        (base_area, false)
    };

    if effect_done {
        app.clear_modal_effect();
    }

    // Clear background
    frame.render_widget(Clear, alert_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.error))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1))
        .title(Line::from(vec![Span::styled(
            format!(" {} {} ", glyphs.alert, alert.title()),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )]));

    let button = Style::default()
        .fg(palette.bg_dark)
        .bg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            alert.message(),
            Style::default().fg(palette.text_primary),
        )),
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", alert.dismiss_label()), button)),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(body, alert_area);
}
