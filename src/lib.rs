//! tickr: pick a ticker symbol from a terminal form with live search suggestions

pub mod alert;
pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod password;
pub mod search;
pub mod widgets;


pub use app::App;
pub use error::TickrError;
