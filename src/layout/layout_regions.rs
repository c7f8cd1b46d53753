use ratatui::layout::Rect;

/// Clickable parts of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    TickerInput,
    /// A row of the suggestions panel (index into the shown suggestions)
    Suggestion(usize),
    /// Panel border or any other part of the panel that is not a row
    SuggestionsPanel,
    PasswordInput,
    PasswordToggle,
}

/// Areas drawn in the last frame. `None` means the control was not drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub ticker_input: Option<Rect>,
    pub suggestions_panel: Option<Rect>,
    pub password_input: Option<Rect>,
    pub password_toggle: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
