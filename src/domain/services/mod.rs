mod app_state;
mod applier;
pub mod clipboard;
mod credentials;
pub mod events;
mod form;
mod preview;
mod progress;
mod reports;
mod scroll;
mod sidebar;
mod syntaxes;
mod themes;
mod workspace;

pub use app_state::*;
pub use applier::*;
pub use credentials::*;
pub use form::*;
pub use preview::*;
pub use progress::*;
pub use reports::*;
pub use scroll::*;
pub use sidebar::*;
pub use syntaxes::*;
pub use themes::*;
pub use workspace::*;
