use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::AlertState;
use crate::widgets::popup;

const ALERT_HEIGHT: u16 = 6;
const ALERT_PADDING: u16 = 6;
const MIN_ALERT_WIDTH: u16 = 30;

pub fn render_alert(alert: &AlertState, frame: &mut Frame) {
    let Some(message) = alert.message() else {
        return;
    };

    let width = (message.width().min(u16::MAX as usize) as u16)
        .saturating_add(ALERT_PADDING)
        .max(MIN_ALERT_WIDTH);
    let area = popup::centered_popup(frame.area(), width, ALERT_HEIGHT);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    popup::clear_area(frame, area);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Alert ")
                .border_style(Style::default().fg(Color::Yellow))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(paragraph, area);
}
