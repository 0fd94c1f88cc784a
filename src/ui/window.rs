// Picker window
// A title over a horizontally scrolling strip of wallpaper cards

use gdk4::Display;
use gtk4::prelude::*;
use gtk4::{
    Adjustment, Align, Application, ApplicationWindow, Box as GtkBox, CssProvider, Label,
    Orientation, PolicyType, ScrolledWindow, STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use std::cell::RefCell;
use std::rc::Rc;

use super::card::WallpaperCard;
use super::keybindings::{Keybindings, PickerAction};
use super::preview_loader::spawn_preview_loader;
use super::selection::{GalleryView, SelectionController};
use crate::config::PickerConfig;
use crate::models::{Gallery, WallpaperItem};
use crate::scanner::load_gallery;
use crate::wallpaper;

const MIN_CONTENT_WIDTH: i32 = 800;
const MIN_CONTENT_HEIGHT: i32 = 240;

/// Embedded stylesheet, used when the user has no `style.css`.
const DEFAULT_CSS: &str = include_str!("../style.css");

fn load_css() {
    let provider = CssProvider::new();

    match PickerConfig::user_style_path() {
        Some(path) => {
            provider.load_from_path(&path);
            tracing::info!("Loaded CSS from: {}", path.display());
        }
        None => {
            provider.load_from_string(DEFAULT_CSS);
            tracing::debug!("Loaded embedded CSS");
        }
    }

    if let Some(display) = Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

/// `GalleryView` over the real widgets.
struct GtkGalleryView {
    cards: Rc<Vec<WallpaperCard>>,
    hadjustment: Adjustment,
    app: glib::WeakRef<Application>,
    config: Rc<PickerConfig>,
}

impl GalleryView for GtkGalleryView {
    fn set_card_selected(&self, index: usize, selected: bool) {
        if let Some(card) = self.cards.get(index) {
            card.set_selected(selected);
        }
    }

    fn scroll_to(&self, offset: f64) {
        self.hadjustment.set_value(offset);
    }

    fn wallpaper_chosen(&self, item: &WallpaperItem) {
        wallpaper::apply(&self.config, item);
    }

    fn request_quit(&self) {
        if let Some(app) = self.app.upgrade() {
            app.quit();
        }
    }
}

type Controller = SelectionController<GtkGalleryView>;

pub struct PickerWindow {
    window: ApplicationWindow,
}

impl PickerWindow {
    pub fn new(app: &Application, config: PickerConfig) -> Self {
        load_css();

        let config = Rc::new(config);
        let geometry = config.card;

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Wallpaper Picker")
            .decorated(false)
            .resizable(false)
            .build();
        window.add_css_class("wallpaper-picker");

        let container = GtkBox::new(Orientation::Vertical, geometry.spacing as i32);
        container.add_css_class("picker-container");

        let title = Label::new(Some("Select Wallpaper"));
        title.set_xalign(0.0);
        title.add_css_class("picker-title");

        let scroll = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Always)
            .vscrollbar_policy(PolicyType::Never)
            .min_content_width(MIN_CONTENT_WIDTH)
            .min_content_height(MIN_CONTENT_HEIGHT)
            .build();

        let card_box = GtkBox::new(Orientation::Horizontal, geometry.spacing as i32);
        card_box.set_valign(Align::Center);

        let load = load_gallery(&config.backgrounds_dir);
        if let Some(text) = load.placeholder_text() {
            let placeholder = Label::new(Some(&text));
            placeholder.set_hexpand(true);
            placeholder.add_css_class("picker-placeholder");
            card_box.append(&placeholder);
        }
        let gallery = load.into_gallery();

        let cards: Rc<Vec<WallpaperCard>> = Rc::new(
            gallery
                .iter()
                .map(|item| WallpaperCard::new(item, &geometry))
                .collect(),
        );
        for card in cards.iter() {
            card_box.append(card.widget());
        }

        scroll.set_child(Some(&card_box));
        container.append(&title);
        container.append(&scroll);
        window.set_child(Some(&container));

        Self::load_previews(&gallery, &cards, &config);

        let view = GtkGalleryView {
            cards: cards.clone(),
            hadjustment: scroll.hadjustment(),
            app: app.downgrade(),
            config: config.clone(),
        };
        let controller: Rc<RefCell<Controller>> =
            Rc::new(RefCell::new(SelectionController::new(gallery, geometry, view)));

        for (index, card) in cards.iter().enumerate() {
            let controller = controller.clone();
            card.connect_clicked(move || {
                controller.borrow_mut().activate_at(index);
            });
        }

        let keybindings = Keybindings::new();
        keybindings.attach(&window);
        let app_weak = app.downgrade();
        keybindings.connect_action(move |action| match action {
            PickerAction::MoveLeft => controller.borrow_mut().move_left(),
            PickerAction::MoveRight => controller.borrow_mut().move_right(),
            PickerAction::Activate => controller.borrow_mut().activate(),
            PickerAction::Exit => {
                tracing::info!("Picker dismissed");
                if let Some(app) = app_weak.upgrade() {
                    app.quit();
                }
            }
        });

        Self { window }
    }

    pub fn present(&self) {
        self.window.present();
    }

    fn load_previews(gallery: &Gallery, cards: &Rc<Vec<WallpaperCard>>, config: &PickerConfig) {
        let receiver = spawn_preview_loader(gallery, config.card.width, config.card.height);
        let cards = Rc::downgrade(cards);
        glib::spawn_future_local(async move {
            while let Ok(result) = receiver.recv().await {
                let Some(cards) = cards.upgrade() else {
                    break;
                };
                if let Some(card) = cards.get(result.index) {
                    card.set_preview(result.preview);
                }
            }
        });
    }
}
