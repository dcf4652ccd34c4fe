#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]
use app::App;
use calendar::CalendarDate;
use clap::Parser;

mod app;
pub mod calendar;
mod cli;
pub mod config;
pub mod views;

fn main() -> iced::Result {
    env_logger::builder().init();

    let cli = cli::Cli::parse();
    let config = match config::init(cli.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Could not load the configuration file: {e}");
            std::process::exit(1);
        }
    };
    let anchor = match config.calendar.anchor(CalendarDate::today()) {
        Ok(anchor) => anchor,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    iced::application::application("Calendar", App::update, App::view)
        .subscription(App::subscription)
        .theme(|_| iced::Theme::TokyoNightLight)
        .run_with(move || App::new(config.api, anchor))
}
