// Background preview decoding for the card strip
// Worker threads decode; results come back on the GTK main loop by card index

use std::path::PathBuf;

use crate::image_loader::{self, Preview};
use crate::models::Gallery;

const PREVIEW_LOADER_THREADS: usize = 2;

struct PreviewRequest {
    index: usize,
    path: PathBuf,
    animated: bool,
}

pub struct PreviewResult {
    pub index: usize,
    pub preview: Option<Preview>,
}

/// Queue every card of `gallery` for decoding and return the result stream.
///
/// Workers stop once the queue drains or the receiver is dropped.
pub fn spawn_preview_loader(
    gallery: &Gallery,
    width: u32,
    height: u32,
) -> async_channel::Receiver<PreviewResult> {
    let (request_tx, request_rx) = async_channel::unbounded::<PreviewRequest>();
    let (result_tx, result_rx) = async_channel::unbounded::<PreviewResult>();

    for (index, item) in gallery.iter().enumerate() {
        let _ = request_tx.send_blocking(PreviewRequest {
            index,
            path: item.path.clone(),
            animated: item.is_animated,
        });
    }
    request_tx.close();

    for _ in 0..PREVIEW_LOADER_THREADS.min(gallery.len()) {
        let rx = request_rx.clone();
        let tx = result_tx.clone();
        std::thread::spawn(move || {
            while let Ok(req) = rx.recv_blocking() {
                let preview =
                    match image_loader::decode_card_preview(&req.path, req.animated, width, height)
                    {
                        Ok(preview) => Some(preview),
                        Err(err) => {
                            tracing::warn!(path = ?req.path, error = ?err, "Preview decode failed");
                            None
                        }
                    };
                if tx
                    .send_blocking(PreviewResult {
                        index: req.index,
                        preview,
                    })
                    .is_err()
                {
                    break;
                }
            }
        });
    }

    result_rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WallpaperItem;
    use tempfile::tempdir;

    #[test]
    fn test_loader_delivers_every_card() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.png");
        image::RgbImage::new(8, 8).save(&good).unwrap();
        let bad = dir.path().join("bad.jpg");
        std::fs::write(&bad, b"nope").unwrap();

        let gallery: Gallery = [good, bad]
            .into_iter()
            .filter_map(WallpaperItem::from_path)
            .collect();

        let rx = spawn_preview_loader(&gallery, 4, 4);
        let mut results: Vec<PreviewResult> = Vec::new();
        while let Ok(result) = rx.recv_blocking() {
            results.push(result);
        }
        results.sort_by_key(|r| r.index);

        assert_eq!(results.len(), 2);
        let first = results[0].preview.as_ref().unwrap();
        assert_eq!((first.width, first.height), (4, 4));
        assert!(results[1].preview.is_none());
    }

    #[test]
    fn test_loader_empty_gallery_closes() {
        let rx = spawn_preview_loader(&Gallery::default(), 4, 4);
        assert!(rx.recv_blocking().is_err());
    }
}
