use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{LOCKED_GLYPH, UNLOCKED_GLYPH};
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

    lines.push(section_title("Palette"));
    lines.extend(section_lines(&[
        ("g / Enter", "Generate new colors for unlocked slots"),
        ("1-8", "Lock or unlock that slot"),
        ("Space", "Lock or unlock the selected slot"),
        ("←/→ h/l", "Move the selection"),
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        ("?", "Toggle this help"),
        ("q / Esc", "Quit (asks first)"),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {UNLOCKED_GLYPH}: Unlocked, {LOCKED_GLYPH}: Locked. Locked colors survive generation."),
        Style::default().fg(Theme::dim()),
    )));

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

fn section_lines(items: &[(&str, &str)]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {key:<10}"),
                    Style::default()
                        .fg(Theme::highlight())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action.to_string(), Style::default().fg(Theme::text())),
            ])
        })
        .collect()
}
