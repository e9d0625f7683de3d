mod generator;
mod help;
mod helpers;
mod saved;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView, TABS};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Swatchr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palette generator",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    frame.render_widget(
        Paragraph::new(Text::from(header_lines))
            .alignment(Alignment::Left)
            .block(framed_block()),
        layout[0],
    );

    let body_block = framed_block();
    let body = body_block.inner(layout[1]);
    frame.render_widget(body_block, layout[1]);
    match app.view {
        AppView::Generator => draw_generator(frame, app, body),
        AppView::Saved => {
            let text = saved::build_saved_text(app);
            draw_listing(frame, app, body, " Saved palettes ", text)
        }
        AppView::Help => draw_listing(frame, app, body, " Help ", help::build_help_text()),
    }

    frame.render_widget(
        Paragraph::new(Text::from(status_line(app)))
            .alignment(Alignment::Left)
            .block(framed_block()),
        layout[2],
    );

    if let Some(popup) = &app.save_popup {
        render_save_popup(frame, popup);
    }
    if let Some(popup) = &app.confirm_popup {
        render_confirm_popup(frame, popup);
    }
}

fn framed_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn title_lines(app: &App, title: &str) -> Vec<Line<'static>> {
    vec![
        tabs_line(app),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

fn draw_generator(frame: &mut Frame, app: &App, area: Rect) {
    let pinned_height = app.library.pinned().len().min(5) as u16 + 1;
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(pinned_height),
            Constraint::Length(3),
        ])
        .split(area);

    let title = format!(" Palette ({}) ", app.mode.label());
    frame.render_widget(Paragraph::new(Text::from(title_lines(app, &title))), sections[0]);
    generator::render_swatches(frame, app, sections[1]);
    frame.render_widget(
        Paragraph::new(generator::build_pinned_text(app)).style(Style::default().fg(Theme::text())),
        sections[2],
    );
    frame.render_widget(Paragraph::new(Text::from(keybinds_lines(app))), sections[3]);
}

fn draw_listing(frame: &mut Frame, app: &App, area: Rect, title: &str, body: Text<'_>) {
    let mut lines: Vec<Line<'_>> = title_lines(app, title);
    lines.push(Line::from(""));
    lines.extend(body.lines);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(Theme::dim()),
    )));
    lines.extend(keybinds_lines(app));
    frame.render_widget(
        Paragraph::new(Text::from(lines)).style(Style::default().fg(Theme::text())),
        area,
    );
}

fn render_save_popup(frame: &mut Frame, popup: &crate::app::SavePalettePopup) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let name_display = if popup.name.is_empty() {
        "Untitled Palette"
    } else {
        popup.name.as_str()
    };
    let name_style = if popup.name.is_empty() {
        Style::default().fg(Theme::dim())
    } else {
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            "Save palette",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Theme::dim())),
            Span::styled(name_display, name_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Type a name. Enter: save. Esc: cancel.",
            Style::default().fg(Theme::dim()),
        )),
    ];

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(framed_block().title(" Save "));
    frame.render_widget(popup_widget, area);
}

fn render_confirm_popup(frame: &mut Frame, popup: &crate::app::ConfirmPopup) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let key_style = Style::default()
        .fg(Theme::highlight())
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            "Confirm Action",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            popup.message.as_str(),
            Style::default().fg(Theme::text()),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Theme::dim())),
            Span::styled("Y", key_style),
            Span::styled(" to confirm or ", Style::default().fg(Theme::dim())),
            Span::styled("N", key_style),
            Span::styled("/", Style::default().fg(Theme::dim())),
            Span::styled("ESC", key_style),
            Span::styled(" to cancel", Style::default().fg(Theme::dim())),
        ]),
    ];

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(framed_block().title(" Confirm "));
    frame.render_widget(popup_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn tabs_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, view) in TABS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let name = match view {
            AppView::Generator => "Generator",
            AppView::Saved => "Saved",
            AppView::Help => "Help",
        };
        let style = if *view == app.view {
            Style::default()
                .fg(Color::Black)
                .bg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        spans.push(Span::styled(format!(" {name} "), style));
    }
    spans.push(Span::styled(
        format!("   {} saved", app.library.palettes.len()),
        Style::default().fg(Theme::dim()),
    ));

    Line::from(spans)
}

fn status_line(app: &App) -> Line<'_> {
    if app.is_generating() {
        return Line::from(Span::styled(
            "⠋ Generating...",
            Style::default()
                .fg(Theme::active())
                .add_modifier(Modifier::BOLD),
        ));
    }
    let locked = app.palette.slots().iter().filter(|slot| slot.locked).count();
    let mut spans = Vec::new();
    if locked > 0 {
        spans.push(Span::styled(
            format!("{locked} locked  "),
            Style::default().fg(Theme::locked()),
        ));
    }
    match &app.status {
        Some(status) => spans.push(Span::styled(
            status.as_str(),
            Style::default().fg(Theme::text()).add_modifier(Modifier::BOLD),
        )),
        None => spans.push(Span::styled(
            "● Press space to generate",
            Style::default().fg(Theme::dim()),
        )),
    }
    Line::from(spans)
}

fn keybinds_lines(app: &App) -> Vec<Line<'static>> {
    let (primary, secondary) = match app.view {
        AppView::Generator => (
            "space: Generate  ←/→: Select  l/1-5: Lock  m: Mode  a: A11y  s: Save  x: Export",
            "c: Copy  ↑/↓ Enter: Load pinned  u: Unpin  v: Saved  ?: Help  q: Quit",
        ),
        AppView::Saved => (
            "Up/Down: Select  Enter: Load  p: Pin  d: Delete",
            "esc: Back  ?: Help  q: Quit",
        ),
        AppView::Help => ("Press ? or ESC to close this help screen", ""),
    };
    vec![
        Line::from(Span::styled(primary, Style::default().fg(Theme::dim()))),
        Line::from(Span::styled(secondary, Style::default().fg(Theme::dim()))),
    ]
}
