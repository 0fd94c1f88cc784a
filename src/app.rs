use gtk4::prelude::*;
use gtk4::Application;

use crate::config::PickerConfig;
use crate::ui::PickerWindow;

const APP_ID: &str = "io.wallpick.Picker";

pub struct PickerApp {
    app: Application,
}

impl PickerApp {
    pub fn new() -> Self {
        let app = Application::builder()
            .application_id(APP_ID)
            .flags(gio::ApplicationFlags::HANDLES_OPEN)
            .build();

        app.connect_activate(Self::on_activate);
        app.connect_open(Self::on_open);

        Self { app }
    }

    pub fn run(&self) -> i32 {
        self.app.run().into()
    }

    fn on_activate(app: &Application) {
        Self::show(app, PickerConfig::load());
    }

    /// A directory given on the command line replaces `backgrounds_dir`.
    fn on_open(app: &Application, files: &[gio::File], _hint: &str) {
        let mut config = PickerConfig::load();
        if let Some(path) = files.first().and_then(|f| f.path()) {
            config.backgrounds_dir = path;
        }
        Self::show(app, config);
    }

    fn show(app: &Application, config: PickerConfig) {
        // A second launch re-presents the running picker.
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }
        tracing::info!(dir = %config.backgrounds_dir.display(), "Opening picker");
        let window = PickerWindow::new(app, config);
        window.present();
    }
}

impl Default for PickerApp {
    fn default() -> Self {
        Self::new()
    }
}
