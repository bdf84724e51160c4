//! Terminal UI: the interactive game view with a paced computer opponent,
//! outcome banner, and a cycling frame accent color.

mod app;
mod game_view;

pub use app::App;
