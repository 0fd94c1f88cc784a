use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::codecs::gif::GifDecoder;
use image::imageops::FilterType;
use image::AnimationDecoder;
use image::{DynamicImage, ImageFormat};

/// Decoded RGBA preview ready for upload as a texture.
#[derive(Debug, Clone)]
pub struct Preview {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Open an image, taking the first frame of a GIF.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read image: {:?}", path))?;
    let format = image::guess_format(&bytes).ok();

    if format == Some(ImageFormat::Gif) {
        let decoder = GifDecoder::new(Cursor::new(bytes))
            .with_context(|| format!("Failed to decode GIF: {:?}", path))?;
        let mut frames = decoder.into_frames();
        if let Some(frame) = frames.next() {
            let frame = frame.context("Failed to decode GIF frame")?;
            return Ok(DynamicImage::ImageRgba8(frame.into_buffer()));
        }
        return Err(anyhow!("GIF has no frames: {:?}", path));
    }

    match format {
        Some(fmt) => image::load_from_memory_with_format(&bytes, fmt)
            .with_context(|| format!("Failed to decode image: {:?}", path)),
        None => image::load_from_memory(&bytes)
            .with_context(|| format!("Failed to decode image: {:?}", path)),
    }
}

/// Largest size with the source aspect ratio that fits inside the box.
/// Dimensions are floored and never drop below one pixel.
pub fn fit_within(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if src_w == 0 || src_h == 0 {
        return (max_w.max(1), max_h.max(1));
    }
    let scale = (max_w as f64 / src_w as f64).min(max_h as f64 / src_h as f64);
    let w = (src_w as f64 * scale).floor() as u32;
    let h = (src_h as f64 * scale).floor() as u32;
    (w.max(1), h.max(1))
}

/// Decode a card preview.
///
/// Still images fill the card and are centre-cropped. Animated images show
/// their first frame letterboxed inside the card.
pub fn decode_card_preview(path: &Path, animated: bool, width: u32, height: u32) -> Result<Preview> {
    let img = open_image(path)?;

    let scaled = if animated {
        let (w, h) = fit_within(img.width(), img.height(), width, height);
        img.resize_exact(w, h, FilterType::Triangle)
    } else {
        img.resize_to_fill(width, height, FilterType::Triangle)
    };

    let rgba = scaled.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Preview {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fit_within_landscape() {
        // 1920x1080 into 300x169: width-bound
        assert_eq!(fit_within(1920, 1080, 300, 169), (300, 168));
    }

    #[test]
    fn test_fit_within_portrait() {
        assert_eq!(fit_within(100, 200, 300, 100), (50, 100));
    }

    #[test]
    fn test_fit_within_degenerate() {
        assert_eq!(fit_within(0, 10, 300, 169), (300, 169));
        assert_eq!(fit_within(1200, 1, 300, 169), (300, 1));
    }

    #[test]
    fn test_decode_still_fills_card() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbImage::new(64, 16).save(&path).unwrap();

        let preview = decode_card_preview(&path, false, 30, 17).unwrap();
        assert_eq!((preview.width, preview.height), (30, 17));
        assert_eq!(preview.rgba.len(), 30 * 17 * 4);
    }

    #[test]
    fn test_decode_animated_fits_card() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        image::RgbaImage::new(64, 64).save(&path).unwrap();

        let preview = decode_card_preview(&path, true, 32, 16).unwrap();
        assert_eq!((preview.width, preview.height), (16, 16));
    }

    #[test]
    fn test_open_image_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(open_image(&path).is_err());
        assert!(decode_card_preview(&path, false, 30, 17).is_err());
    }
}
