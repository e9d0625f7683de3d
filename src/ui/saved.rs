use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::generator::color_chips;
use super::helpers::clamp_name;
use super::theme::Theme;
use crate::app::App;

pub fn build_saved_text(app: &App) -> Text<'_> {
    if app.library.palettes.is_empty() {
        return Text::from("No saved palettes yet. Press 's' in the generator to save one.");
    }

    let lines = app
        .library
        .palettes
        .iter()
        .enumerate()
        .map(|(index, saved)| {
            let selected = index == app.selected_saved_index;
            let marker_style = if selected {
                Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::dim())
            };
            let pin = if app.library.is_pinned(&saved.id) {
                Span::styled("★ ", Style::default().fg(Theme::pinned()))
            } else {
                Span::raw("  ")
            };
            let mut name_style = Style::default().fg(Theme::text());
            if selected {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            let mut spans = vec![
                Span::styled(if selected { "> " } else { "  " }, marker_style),
                pin,
                Span::styled(clamp_name(&saved.name, 24), name_style),
                Span::raw(" "),
            ];
            spans.extend(color_chips(&saved.colors));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                saved.created_at.as_str(),
                Style::default().fg(Theme::dim()),
            ));
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}
