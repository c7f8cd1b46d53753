use serde::Deserialize;

/// Number of spaces between symbol and name when a suggestion fills the input
const SELECTION_SEPARATOR: &str = "    ";

/// A single ticker match returned by the search endpoint
///
/// Any extra fields the server includes (source, asset type, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub symbol: String,
    pub name: String,
}

impl Suggestion {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// True when the symbol and the name are the same text ignoring case
    ///
    /// Indices often come back with their symbol as their name, which tells
    /// the user nothing.
    pub fn is_self_referential(&self) -> bool {
        self.symbol.to_uppercase() == self.name.to_uppercase()
    }

    /// Name as shown to the user
    ///
    /// Upstream data sometimes arrives with apostrophes still escaped (`\'`).
    pub fn display_name(&self) -> String {
        self.name.replace("\\'", "'")
    }

    /// Text written into the ticker input when this suggestion is picked
    pub fn selection_text(&self) -> String {
        format!("{}{}{}", self.symbol, SELECTION_SEPARATOR, self.display_name())
    }
}

/// Drop self-referential entries, keeping endpoint order
pub fn filter_suggestions(suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    suggestions
        .into_iter()
        .filter(|s| !s.is_self_referential())
        .collect()
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
