//! Directory scanner for the wallpaper gallery.
//!
//! Lists the top level of the backgrounds directory, keeps files with an image
//! extension, and decodes each one so that broken files never become cards.
//! Order is whatever the directory listing yields. Item paths are absolute.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::image_loader;
use crate::models::{Gallery, WallpaperItem};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read backgrounds directory {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0:?} is not a directory")]
    NotADirectory(PathBuf),
}

/// What the picker shows after scanning.
#[derive(Debug)]
pub enum GalleryLoad {
    Loaded(Gallery),
    /// Directory readable but holds no usable images.
    Empty,
    /// Directory missing or unreadable.
    Unreadable(PathBuf),
}

impl GalleryLoad {
    /// The gallery to drive selection with; empty for the placeholder states.
    pub fn into_gallery(self) -> Gallery {
        match self {
            Self::Loaded(gallery) => gallery,
            Self::Empty | Self::Unreadable(_) => Gallery::default(),
        }
    }

    /// Placeholder text for the non-loaded states.
    pub fn placeholder_text(&self) -> Option<String> {
        match self {
            Self::Loaded(_) => None,
            Self::Empty => Some("No images found".to_string()),
            Self::Unreadable(path) => Some(format!(
                "Could not load images.\nCheck backgrounds_dir: {}",
                path.display()
            )),
        }
    }
}

/// Scans `dir` for wallpapers.
pub fn scan_backgrounds(dir: &Path) -> Result<Gallery, ScanError> {
    let metadata = std::fs::metadata(dir).map_err(|source| ScanError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }
    // The current-background link and the wallpaper command both need absolute paths.
    let dir = std::path::absolute(dir).map_err(|source| ScanError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;
    let dir = dir.as_path();

    let mut items = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(ScanError::Unreadable {
                    path: dir.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(err) => {
                warn!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let Some(item) = WallpaperItem::from_path(entry.path().to_path_buf()) else {
            continue;
        };

        // Skip files that fail to decode rather than failing the listing.
        match image_loader::open_image(&item.path) {
            Ok(img) => {
                debug!(file = %item.filename, w = img.width(), h = img.height(), "Found wallpaper");
                items.push(item);
            }
            Err(err) => {
                warn!(file = %item.filename, error = ?err, "Skipping undecodable image");
            }
        }
    }

    Ok(Gallery::new(items))
}

/// Scans `dir` and folds every failure into a displayable state.
pub fn load_gallery(dir: &Path) -> GalleryLoad {
    match scan_backgrounds(dir) {
        Ok(gallery) if gallery.is_empty() => {
            info!(dir = %dir.display(), "No wallpapers found");
            GalleryLoad::Empty
        }
        Ok(gallery) => {
            info!(dir = %dir.display(), count = gallery.len(), "Loaded wallpapers");
            debug!(files = ?gallery.filenames(), "Gallery order");
            GalleryLoad::Loaded(gallery)
        }
        Err(err) => {
            warn!(error = %err, "Error loading wallpapers");
            GalleryLoad::Unreadable(dir.to_path_buf())
        }
    }
}
