mod action;
mod coverage;
mod credential;
mod editor;
mod error;
mod event;
mod files;
mod language;
mod operation;
mod panel;
mod priority;
mod prompt;
mod requests;
mod requirements;
mod secret_store;

pub use action::*;
pub use coverage::*;
pub use credential::*;
pub use editor::*;
pub use error::*;
pub use event::*;
pub use files::*;
pub use language::*;
pub use operation::*;
pub use panel::*;
pub use priority::*;
pub use prompt::*;
pub use requests::*;
pub use requirements::*;
pub use secret_store::*;
