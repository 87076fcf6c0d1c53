pub mod keyboard;
pub mod pointer;
pub mod resize;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_handlers;
pub use resize::wire_resize;
