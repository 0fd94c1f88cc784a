use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Still,
    Animated,
}

impl ImageKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" => Some(Self::Still),
            "gif" => Some(Self::Animated),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// One selectable wallpaper. Immutable once the gallery is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperItem {
    pub filename: String,
    pub path: PathBuf,
    pub is_animated: bool,
}

impl WallpaperItem {
    /// Build an item from a path, returning `None` for non-image files.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let kind = ImageKind::from_path(&path)?;
        let filename = path.file_name()?.to_str()?.to_string();
        Some(Self {
            filename,
            path,
            is_animated: kind == ImageKind::Animated,
        })
    }
}
