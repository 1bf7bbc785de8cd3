pub mod navigation;
pub mod pointer;
pub mod protect;

pub use navigation::{wire_navigation, wire_teardown};
pub use pointer::{wire_pointer, PointerWiring};
pub use protect::wire_page_protection;
