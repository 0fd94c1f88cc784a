mod app;
mod config;
mod image_loader;
mod models;
mod scanner;
mod ui;
mod wallpaper;

use app::PickerApp;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = match "wallpick=info".parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = PickerApp::new();
    std::process::exit(app.run());
}
