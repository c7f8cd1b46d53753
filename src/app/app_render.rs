use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::alert::render_alert;
use crate::autocomplete::autocomplete_render;
use crate::input::render_field;
use crate::password::render_password_group;

const HELP_TEXT: &str =
    " Enter submit · Tab switch field · Ctrl+T show/hide password · double-click clear · Esc quit";

impl App {
    /// Render the form and record where each control landed
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [title_area, ticker_area, password_area, _, help_area] = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Ticker input
            Constraint::Length(3), // Password field
            Constraint::Min(0),    // Room for the suggestions panel
            Constraint::Length(1), // Help line
        ])
        .areas(frame.area());

        self.render_title(frame, title_area);

        render_field(
            &mut self.input.textarea,
            "Ticker",
            self.focus == Focus::Ticker,
            frame,
            ticker_area,
        );
        self.layout_regions.ticker_input = Some(ticker_area);

        let (field_area, toggle_area) = render_password_group(
            &mut self.password,
            self.focus == Focus::Password,
            frame,
            password_area,
        );
        self.layout_regions.password_input = Some(field_area);
        self.layout_regions.password_toggle = Some(toggle_area);

        self.render_help_line(frame, help_area);

        // Panel is drawn over the fields below the ticker input
        self.layout_regions.suggestions_panel = autocomplete_render::render_panel(
            &self.autocomplete,
            frame,
            ticker_area,
            self.max_visible_suggestions,
        );

        render_alert(&self.alert, frame);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            " tickr · ticker analysis",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, area);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.config_warning {
            Some(warning) => Line::from(Span::styled(
                format!(" {}", warning),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
