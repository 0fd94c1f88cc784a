pub mod card;
pub mod keybindings;
pub mod preview_loader;
pub mod selection;
pub mod window;

pub use window::PickerWindow;
