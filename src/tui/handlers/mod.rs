//! Input handler modules for different TUI contexts.

pub mod actions;
pub mod color_input;
pub mod main;

// Re-export handler functions
pub use actions::dispatch_action;
pub use color_input::handle_color_input;
pub use main::handle_main_input;
