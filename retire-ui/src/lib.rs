pub mod cli;
pub mod config;
pub mod gui;
pub mod logging;
pub mod presenter;
pub mod state;
pub mod utils;
pub mod views;

pub use cli::{CalcArgs, Cli, Command, run_calc};
pub use config::AppConfig;
pub use gui::run_form;
pub use state::{AppState, Notification, NotificationKind};
