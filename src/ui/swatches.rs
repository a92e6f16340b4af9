use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::lock_glyph;
use super::theme::Theme;
use crate::app::App;
use crate::palette::{SLOT_COUNT, Slot};

const LOCK_ROW_HEIGHT: u16 = 3;

/// Draws one column per slot: the color block on top, its lock button below.
pub fn render_swatches(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, SLOT_COUNT as u32); SLOT_COUNT])
        .split(area);

    for (index, slot) in app.palette.slots().iter().enumerate() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(LOCK_ROW_HEIGHT)])
            .split(columns[index]);

        frame.render_widget(swatch(index, slot), rows[0]);
        frame.render_widget(lock_button(slot, index == app.selected), rows[1]);
    }
}

fn swatch(index: usize, slot: &Slot) -> Paragraph<'static> {
    let label_style = Style::default()
        .fg(Theme::on_swatch())
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("{}", index + 1), label_style)),
        Line::from(Span::styled(slot.color.to_hex(), label_style)),
    ];
    Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::from(slot.color)))
}

fn lock_button(slot: &Slot, selected: bool) -> Paragraph<'static> {
    let glyph_style = if slot.locked {
        Style::default()
            .fg(Theme::locked())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::text())
    };
    let border_style = if selected {
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::dim())
    };
    let border_type = if selected {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    Paragraph::new(Line::from(Span::styled(lock_glyph(slot.locked), glyph_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .style(border_style),
        )
}
