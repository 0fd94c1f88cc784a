// Keybindings for the wallpaper picker
//
// Keybindings:
// - Left / h: Previous card
// - Right / l: Next card
// - Enter: Apply the selected wallpaper
// - Escape / q: Quit without changing anything

use gdk4::Key;
use gtk4::prelude::*;
use gtk4::{EventControllerKey, PropagationPhase, Widget};
use std::cell::RefCell;
use std::rc::Rc;

/// Logical picker input, independent of the physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    MoveLeft,
    MoveRight,
    Activate,
    Exit,
}

/// Map a key to its picker action.
pub fn action_for_key(keyval: Key) -> Option<PickerAction> {
    match keyval {
        Key::Left | Key::h => Some(PickerAction::MoveLeft),
        Key::Right | Key::l => Some(PickerAction::MoveRight),
        Key::Return | Key::KP_Enter => Some(PickerAction::Activate),
        Key::Escape | Key::q => Some(PickerAction::Exit),
        _ => None,
    }
}

/// Callback type for picker actions
pub type ActionCallback = Box<dyn Fn(PickerAction)>;

/// Keybinding manager for the picker window
pub struct Keybindings {
    controller: EventControllerKey,
    on_action: Rc<RefCell<Option<ActionCallback>>>,
}

impl Keybindings {
    pub fn new() -> Self {
        let controller = EventControllerKey::new();
        controller.set_propagation_phase(PropagationPhase::Capture);

        let on_action: Rc<RefCell<Option<ActionCallback>>> = Rc::new(RefCell::new(None));

        let on_action_clone = on_action.clone();
        controller.connect_key_pressed(move |_controller, keyval, _keycode, _state| {
            let Some(action) = action_for_key(keyval) else {
                return glib::Propagation::Proceed;
            };

            match *on_action_clone.borrow() {
                Some(ref callback) => {
                    callback(action);
                    glib::Propagation::Stop
                }
                None => glib::Propagation::Proceed,
            }
        });

        Self {
            controller,
            on_action,
        }
    }

    /// Attach keybindings to a widget (typically the main window)
    pub fn attach(&self, widget: &impl IsA<Widget>) {
        widget.add_controller(self.controller.clone());
    }

    pub fn connect_action<F>(&self, callback: F)
    where
        F: Fn(PickerAction) + 'static,
    {
        *self.on_action.borrow_mut() = Some(Box::new(callback));
    }
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(action_for_key(Key::Left), Some(PickerAction::MoveLeft));
        assert_eq!(action_for_key(Key::Right), Some(PickerAction::MoveRight));
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(action_for_key(Key::h), Some(PickerAction::MoveLeft));
        assert_eq!(action_for_key(Key::l), Some(PickerAction::MoveRight));
    }

    #[test]
    fn test_activate_and_exit() {
        assert_eq!(action_for_key(Key::Return), Some(PickerAction::Activate));
        assert_eq!(action_for_key(Key::KP_Enter), Some(PickerAction::Activate));
        assert_eq!(action_for_key(Key::Escape), Some(PickerAction::Exit));
        assert_eq!(action_for_key(Key::q), Some(PickerAction::Exit));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(action_for_key(Key::Up), None);
        assert_eq!(action_for_key(Key::space), None);
        assert_eq!(action_for_key(Key::a), None);
    }
}
