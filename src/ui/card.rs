// Wallpaper card widget
// A fixed-size button holding the preview picture; the tooltip is the filename

use gdk4::Texture;
use gtk4::prelude::*;
use gtk4::{gdk, glib, Align, Box as GtkBox, Button, ContentFit, Picture};

use crate::config::CardGeometry;
use crate::image_loader::Preview;
use crate::models::WallpaperItem;

pub struct WallpaperCard {
    button: Button,
    picture: Picture,
}

impl WallpaperCard {
    pub fn new(item: &WallpaperItem, geometry: &CardGeometry) -> Self {
        let width = geometry.width as i32;
        let height = geometry.height as i32;

        let picture = Picture::new();
        picture.set_can_shrink(true);
        picture.set_halign(Align::Center);
        picture.set_valign(Align::Center);
        picture.set_content_fit(if item.is_animated {
            ContentFit::Contain
        } else {
            ContentFit::Cover
        });

        let frame = GtkBox::new(gtk4::Orientation::Horizontal, 0);
        frame.set_size_request(width, height);
        frame.set_halign(Align::Center);
        frame.set_valign(Align::Center);
        frame.append(&picture);
        picture.set_hexpand(true);
        picture.set_vexpand(true);

        let button = Button::new();
        button.set_tooltip_text(Some(&item.filename));
        button.set_focus_on_click(false);
        button.add_css_class("wallpaper-card");
        if item.is_animated {
            button.add_css_class("gif-card");
        }
        button.set_child(Some(&frame));

        Self { button, picture }
    }

    pub fn widget(&self) -> &Button {
        &self.button
    }

    pub fn set_selected(&self, selected: bool) {
        if selected {
            self.button.add_css_class("selected");
        } else {
            self.button.remove_css_class("selected");
        }
    }

    pub fn connect_clicked<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.button.connect_clicked(move |_| callback());
    }

    /// Show a decoded preview, or mark the card as having none.
    pub fn set_preview(&self, preview: Option<Preview>) {
        match preview.and_then(create_texture_from_preview) {
            Some(texture) => {
                self.picture.set_paintable(Some(&texture));
                self.button.remove_css_class("preview-missing");
            }
            None => {
                self.picture.set_paintable(None::<&Texture>);
                self.button.add_css_class("preview-missing");
            }
        }
    }
}

fn create_texture_from_preview(preview: Preview) -> Option<Texture> {
    let Preview {
        rgba,
        width,
        height,
    } = preview;
    if width == 0 || height == 0 {
        return None;
    }
    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4);
    if rgba.len() < expected {
        tracing::warn!(
            "Skipping texture: data too small ({} bytes for {}x{})",
            rgba.len(),
            width,
            height
        );
        return None;
    }
    let bytes = glib::Bytes::from_owned(rgba);
    let texture = gdk::MemoryTexture::new(
        width as i32,
        height as i32,
        gdk::MemoryFormat::R8g8b8a8,
        &bytes,
        (width * 4) as usize,
    );
    Some(texture.upcast())
}
