pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_global_keydown, wire_overlay_toggle_h, KeyWiring};
pub use pointer::wire_pointer_handlers;
