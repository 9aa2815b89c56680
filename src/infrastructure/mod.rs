pub mod backend;
pub mod editors;
pub mod prompters;
pub mod secrets;
