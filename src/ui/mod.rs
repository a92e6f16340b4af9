mod help;
mod helpers;
mod swatches;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, ConfirmPopup};
use helpers::{LOCKED_GLYPH, UNLOCKED_GLYPH, centered_rect};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    let header_lines = vec![
        Line::from(vec![
            Span::styled(
                "  Palettr  ",
                Style::default().fg(Color::Black).bg(Theme::primary()),
            ),
            Span::raw(" "),
            Span::styled(
                "Your Palette",
                Style::default()
                    .fg(Theme::accent())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{UNLOCKED_GLYPH}: Unlocked, {LOCKED_GLYPH}: Locked"),
            Style::default().fg(Theme::dim()),
        )),
    ];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Center)
        .block(rounded_block());
    frame.render_widget(header, layout[0]);

    swatches::render_swatches(frame, app, layout[1]);

    let footer = Paragraph::new(Text::from(footer_lines(app)))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(footer, layout[2]);

    if app.show_help {
        render_help(frame);
    }
    if let Some(popup) = &app.confirm_quit {
        render_confirm_popup(frame, popup);
    }
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn footer_lines(app: &App) -> Vec<Line<'_>> {
    let selected = app
        .palette
        .slot(app.selected)
        .map(|slot| format!("Slot {} {}  ", app.selected + 1, slot.color))
        .unwrap_or_default();
    let mut status = vec![Span::styled(
        format!(
            "{selected}{} of {} slots locked",
            app.palette.locked_count(),
            app.palette.slots().len()
        ),
        Style::default().fg(Theme::dim()),
    )];
    if let Some(message) = &app.status {
        status.push(Span::styled("  |  ", Style::default().fg(Theme::dim())));
        status.push(Span::styled(
            message.as_str(),
            Style::default().fg(Theme::text()),
        ));
    }
    vec![
        Line::from(vec![
            Span::styled(
                " Generate Palette ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Theme::highlight())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  g: Generate  1-8/Space: Lock  ←/→: Select  ?: Help  q: Quit",
                Style::default().fg(Theme::dim()),
            ),
        ]),
        Line::from(status),
    ]
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let popup_widget = Paragraph::new(help::build_help_text())
        .alignment(Alignment::Left)
        .block(rounded_block().title(" Help "));
    frame.render_widget(popup_widget, area);
}

fn render_confirm_popup(frame: &mut Frame, popup: &ConfirmPopup) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        "Quit",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        popup.message.as_str(),
        Style::default().fg(Theme::text()),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Theme::dim())),
        Span::styled("Y", Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)),
        Span::styled(" to confirm or ", Style::default().fg(Theme::dim())),
        Span::styled("N", Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)),
        Span::styled("/", Style::default().fg(Theme::dim())),
        Span::styled("ESC", Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)),
        Span::styled(" to cancel", Style::default().fg(Theme::dim())),
    ]));

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(rounded_block().title(" Confirm "));
    frame.render_widget(popup_widget, area);
}
