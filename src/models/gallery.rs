use super::WallpaperItem;

/// Ordered wallpaper candidates, in directory enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<WallpaperItem>,
}

impl Gallery {
    pub fn new(items: Vec<WallpaperItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WallpaperItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WallpaperItem> {
        self.items.iter()
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.filename.as_str()).collect()
    }
}

impl FromIterator<WallpaperItem> for Gallery {
    fn from_iter<T: IntoIterator<Item = WallpaperItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
