//! Scrub demo player - a playback console driving a simulated clip
//!
//! This is the main entry point for the GUI application. It:
//! 1. Loads configuration and theme from the user's config directory
//! 2. Launches the iced GUI application with the playback console
//! 3. Simulates a playback engine so the console has something to control

mod config;
mod engine;
mod ui;

use iced::{Size, Task};

use ui::{app::Message, theme, PlayerApp};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("scrub-player starting up");

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    // Write the defaults on first run so there is a file to edit
    if !config_path.exists() {
        if let Err(e) = config::save_config(&config, &config_path) {
            log::warn!("Could not write default config: {:#}", e);
        }
    }

    // Initialize palette from ~/.config/scrub-player/theme.yaml
    theme::init_theme();

    let window_size = Size::new(config.display.window_width, config.display.window_height);

    // Wrap the config in a cell so the boot closure can be Fn (required by
    // iced); the boot function is only called once
    let config_cell = std::cell::RefCell::new(Some(config));

    iced::application(
        move || {
            let config = config_cell
                .borrow_mut()
                .take()
                .expect("config already taken");
            (PlayerApp::new(config), Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Scrub Player")
    .window_size(window_size)
    .run()
}

/// Update function for iced
fn update(app: &mut PlayerApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &PlayerApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &PlayerApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &PlayerApp) -> iced::Theme {
    app.theme()
}
