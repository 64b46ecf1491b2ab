mod app;
mod clipboard;
mod components;
mod config;
mod copy_worker;
mod event;
mod model;
mod widgets;

fn main() {
    let config = config::Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config ({:#}), using defaults", e);
        config::Config::default()
    });

    let mut app = app::App::new(config);
    if let Err(e) = app.run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
