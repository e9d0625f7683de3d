use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "Tab: Next view",
        "g/v: Generator / Saved palettes",
        "esc: Back",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Generator"));
    lines.extend(section_lines(&[
        "space: Generate new palette",
        "Left/Right: Select color",
        "l or 1-5: Lock/unlock color",
        "m: Switch random/harmonious mode",
        "a: Toggle accessibility scores",
        "s: Save palette",
        "x: Export palette as CSS",
        "c: Copy selected color",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Pinned"));
    lines.extend(section_lines(&[
        "Up/Down: Select pinned palette",
        "Enter: Load",
        "u: Unpin",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Saved palettes"));
    lines.extend(section_lines(&[
        "Up/Down: Move selection",
        "Enter: Load into generator",
        "p: Pin/unpin",
        "d: Delete",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Popups"));
    lines.extend(section_lines(&[
        "Save: type a name, Enter save, Esc cancel",
        "Delete: y confirm, n/Esc cancel",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
