mod handler;
mod keymap;

pub use handler::Command;
pub use keymap::handle_key_event;
