pub mod gallery;
pub mod wallpaper_item;

pub use gallery::*;
pub use wallpaper_item::*;
