use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{clamp_name, hex_to_color};
use super::theme::Theme;
use crate::app::App;
use crate::color::{AccessibilityGrade, accessibility_score, text_color};
use crate::types::{ColorSlot, PALETTE_SIZE};

/// Draws one swatch per slot side by side.
pub fn render_swatches(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, PALETTE_SIZE as u32); PALETTE_SIZE])
        .split(area);

    for (index, slot) in app.palette.slots().iter().enumerate() {
        let selected = index == app.selected_slot;
        let swatch = Paragraph::new(swatch_text(app, index, slot))
            .alignment(Alignment::Center)
            .style(swatch_style(slot))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if selected {
                        BorderType::Thick
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(Style::default().fg(if selected {
                        Theme::highlight()
                    } else {
                        Theme::dim()
                    })),
            );
        frame.render_widget(swatch, columns[index]);
    }
}

fn swatch_style(slot: &ColorSlot) -> Style {
    let mut style = Style::default();
    if let Some(bg) = hex_to_color(&slot.hex) {
        style = style.bg(bg);
    }
    if let Some(fg) = hex_to_color(text_color(&slot.hex)) {
        style = style.fg(fg);
    }
    style
}

fn swatch_text<'a>(app: &App, index: usize, slot: &'a ColorSlot) -> Text<'a> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            slot.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(slot.hex.to_uppercase()),
        Line::from(""),
        Line::from(if slot.locked {
            format!("[{}] locked", index + 1)
        } else {
            format!("[{}]", index + 1)
        }),
    ];
    if app.show_accessibility {
        let background = app.settings.contrast_background.as_str();
        let score = accessibility_score(&slot.hex, background);
        lines.push(Line::from(""));
        lines.push(Line::from(format!("A11y: {score:.2}")));
        lines.push(Line::from(AccessibilityGrade::from_score(score).label()));
    }
    Text::from(lines)
}

/// Pinned palettes listed under the swatches for quick loading.
pub fn build_pinned_text(app: &App) -> Text<'_> {
    let pinned = app.library.pinned();
    if pinned.is_empty() {
        return Text::from(Span::styled(
            "No pinned palettes. Pin one from the saved view (v, then p).",
            Style::default().fg(Theme::dim()),
        ));
    }

    let mut lines = vec![Line::from(Span::styled(
        "Pinned",
        Style::default()
            .fg(Theme::pinned())
            .add_modifier(Modifier::BOLD),
    ))];
    for (index, saved) in pinned.into_iter().enumerate() {
        let selected = index == app.selected_pinned_index;
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let mut spans = vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::styled(clamp_name(&saved.name, 20), Style::default().fg(Theme::text())),
            Span::raw(" "),
        ];
        spans.extend(color_chips(&saved.colors));
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

/// A small block of each color, used wherever a palette is listed.
pub fn color_chips(colors: &[String]) -> Vec<Span<'static>> {
    colors
        .iter()
        .map(|hex| match hex_to_color(hex) {
            Some(color) => Span::styled("███", Style::default().fg(color)),
            None => Span::styled("???", Style::default().fg(Theme::dim())),
        })
        .collect()
}
