mod fixed;
mod terminal;
mod tui;

pub use fixed::*;
pub use terminal::*;
pub use tui::*;
