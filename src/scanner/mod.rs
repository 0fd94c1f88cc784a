//! Background directory scanning.
//!
//! - `scan_backgrounds` - Lists image files in enumeration order
//! - `load_gallery` - Maps the scan result onto what the picker displays

pub mod dir_scanner;

pub use dir_scanner::{load_gallery, scan_backgrounds, GalleryLoad, ScanError};
