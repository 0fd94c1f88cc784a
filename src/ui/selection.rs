// Selection controller for the wallpaper gallery
// Owns the highlighted index and drives the view through `GalleryView`
//
// - move_left / move_right: wrap around at both ends
// - activate: hand the current item to the view, then ask it to quit
// - Empty gallery: every operation is a no-op

use crate::config::CardGeometry;
use crate::models::{Gallery, WallpaperItem};

/// Host side of the controller: card highlighting, scrolling and the
/// selection effects.
pub trait GalleryView {
    fn set_card_selected(&self, index: usize, selected: bool);
    fn scroll_to(&self, offset: f64);
    /// Apply the chosen wallpaper. Best-effort; the controller never learns
    /// the outcome.
    fn wallpaper_chosen(&self, item: &WallpaperItem);
    fn request_quit(&self);
}

/// Horizontal scroll offset that brings card `index` into view.
///
/// May be negative or past the end; the viewport clamps it.
pub fn scroll_offset_for(index: usize, geometry: &CardGeometry) -> f64 {
    let stride = geometry.width as f64 + geometry.spacing as f64;
    index as f64 * stride - geometry.scroll_margin as f64
}

pub struct SelectionController<V: GalleryView> {
    gallery: Gallery,
    geometry: CardGeometry,
    index: Option<usize>,
    view: V,
}

impl<V: GalleryView> SelectionController<V> {
    /// Select the first card, if there is one.
    pub fn new(gallery: Gallery, geometry: CardGeometry, view: V) -> Self {
        let index = if gallery.is_empty() { None } else { Some(0) };
        if let Some(index) = index {
            view.set_card_selected(index, true);
        }
        Self {
            gallery,
            geometry,
            index,
            view,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn current(&self) -> Option<&WallpaperItem> {
        self.index.and_then(|i| self.gallery.get(i))
    }

    pub fn move_left(&mut self) {
        let Some(index) = self.index else {
            return;
        };
        let next = if index == 0 {
            self.gallery.len() - 1
        } else {
            index - 1
        };
        self.select(next);
    }

    pub fn move_right(&mut self) {
        let Some(index) = self.index else {
            return;
        };
        let next = if index + 1 >= self.gallery.len() {
            0
        } else {
            index + 1
        };
        self.select(next);
    }

    pub fn activate(&mut self) {
        let Some(item) = self.current() else {
            return;
        };
        tracing::info!(file = %item.filename, "Wallpaper selected");
        self.view.wallpaper_chosen(item);
        self.view.request_quit();
    }

    /// Click path: highlight `index`, then activate it. Out-of-range indices
    /// are ignored.
    pub fn activate_at(&mut self, index: usize) {
        if index >= self.gallery.len() {
            return;
        }
        if self.index != Some(index) {
            self.select(index);
        }
        self.activate();
    }

    fn select(&mut self, next: usize) {
        if let Some(prev) = self.index {
            self.view.set_card_selected(prev, false);
        }
        self.index = Some(next);
        self.view.set_card_selected(next, true);

        let offset = scroll_offset_for(next, &self.geometry);
        tracing::debug!(index = next, offset, "Selection moved");
        self.view.scroll_to(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Selected(usize, bool),
        Scroll(f64),
        Chosen(String),
        Quit,
    }

    #[derive(Clone, Default)]
    struct RecordingView {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl RecordingView {
        fn take(&self) -> Vec<Event> {
            std::mem::take(&mut *self.events.borrow_mut())
        }
    }

    impl GalleryView for RecordingView {
        fn set_card_selected(&self, index: usize, selected: bool) {
            self.events.borrow_mut().push(Event::Selected(index, selected));
        }

        fn scroll_to(&self, offset: f64) {
            self.events.borrow_mut().push(Event::Scroll(offset));
        }

        fn wallpaper_chosen(&self, item: &WallpaperItem) {
            self.events
                .borrow_mut()
                .push(Event::Chosen(item.filename.clone()));
        }

        fn request_quit(&self) {
            self.events.borrow_mut().push(Event::Quit);
        }
    }

    fn gallery(names: &[&str]) -> Gallery {
        names
            .iter()
            .filter_map(|n| WallpaperItem::from_path(PathBuf::from("/walls").join(n)))
            .collect()
    }

    fn controller(names: &[&str]) -> (SelectionController<RecordingView>, RecordingView) {
        let view = RecordingView::default();
        let ctrl = SelectionController::new(gallery(names), CardGeometry::default(), view.clone());
        (ctrl, view)
    }

    #[test]
    fn test_initialize_selects_first_card() {
        let (ctrl, view) = controller(&["a.png", "b.gif"]);
        assert_eq!(ctrl.index(), Some(0));
        assert_eq!(view.take(), vec![Event::Selected(0, true)]);
    }

    #[test]
    fn test_initialize_empty_gallery() {
        let (ctrl, view) = controller(&[]);
        assert_eq!(ctrl.index(), None);
        assert!(ctrl.current().is_none());
        assert!(view.take().is_empty());
    }

    #[test]
    fn test_move_right_cycles_back_to_start() {
        let names = ["1.png", "2.png", "3.png", "4.png", "5.png"];
        let (mut ctrl, _) = controller(&names);
        for _ in 0..names.len() {
            ctrl.move_right();
        }
        assert_eq!(ctrl.index(), Some(0));
    }

    #[test]
    fn test_wraparound_boundaries() {
        let (mut ctrl, _) = controller(&["a.png", "b.png", "c.png", "d.png"]);
        ctrl.move_left();
        assert_eq!(ctrl.index(), Some(3));
        ctrl.move_right();
        assert_eq!(ctrl.index(), Some(0));
    }

    #[test]
    fn test_single_item_gallery_stays_put() {
        let (mut ctrl, _) = controller(&["only.jpg"]);
        ctrl.move_left();
        assert_eq!(ctrl.index(), Some(0));
        ctrl.move_right();
        assert_eq!(ctrl.index(), Some(0));
    }

    #[test]
    fn test_move_updates_highlight_and_scroll() {
        let (mut ctrl, view) = controller(&["a.png", "b.png", "c.png"]);
        view.take();

        ctrl.move_right();
        assert_eq!(
            view.take(),
            vec![
                Event::Selected(0, false),
                Event::Selected(1, true),
                Event::Scroll(215.0),
            ]
        );

        ctrl.move_left();
        ctrl.move_left();
        let events = view.take();
        assert_eq!(events.last(), Some(&Event::Scroll(530.0)));
        assert!(events.contains(&Event::Selected(2, true)));
    }

    #[test]
    fn test_empty_gallery_operations_are_noops() {
        let (mut ctrl, view) = controller(&[]);
        ctrl.move_left();
        ctrl.move_right();
        ctrl.activate();
        ctrl.activate_at(0);
        assert_eq!(ctrl.index(), None);
        assert!(view.take().is_empty());
    }

    #[test]
    fn test_activate_reports_current_item_once() {
        let (mut ctrl, view) = controller(&["a.png", "b.gif", "c.jpg"]);
        ctrl.move_right();
        view.take();

        ctrl.activate();
        assert_eq!(
            view.take(),
            vec![Event::Chosen("b.gif".to_string()), Event::Quit]
        );
    }

    #[test]
    fn test_navigation_scenario() {
        let (mut ctrl, _) = controller(&["a.png", "b.gif", "c.jpg"]);
        assert_eq!(ctrl.index(), Some(0));
        ctrl.move_right();
        assert_eq!(ctrl.index(), Some(1));
        ctrl.move_right();
        assert_eq!(ctrl.index(), Some(2));
        ctrl.move_right();
        assert_eq!(ctrl.index(), Some(0));
        assert_eq!(ctrl.current().unwrap().filename, "a.png");
    }

    #[test]
    fn test_activate_at_moves_then_activates() {
        let (mut ctrl, view) = controller(&["a.png", "b.gif", "c.jpg"]);
        view.take();

        ctrl.activate_at(2);
        assert_eq!(ctrl.index(), Some(2));
        assert_eq!(
            view.take(),
            vec![
                Event::Selected(0, false),
                Event::Selected(2, true),
                Event::Scroll(530.0),
                Event::Chosen("c.jpg".to_string()),
                Event::Quit,
            ]
        );
    }

    #[test]
    fn test_activate_at_out_of_range_is_ignored() {
        let (mut ctrl, view) = controller(&["a.png"]);
        view.take();
        ctrl.activate_at(5);
        assert_eq!(ctrl.index(), Some(0));
        assert!(view.take().is_empty());
    }

    #[test]
    fn test_scroll_offset_policy() {
        let geometry = CardGeometry::default();
        for i in 0..10 {
            assert_eq!(scroll_offset_for(i, &geometry), i as f64 * 315.0 - 100.0);
        }
        assert_eq!(scroll_offset_for(0, &geometry), -100.0);
    }
}
