//! Ratatui front-end: the single list screen, its card rendering, and the
//! terminal event loop that feeds it key and mouse events.

mod app;
mod cards;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
