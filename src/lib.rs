#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod app;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod content;
pub mod conversation;
pub mod error;
pub mod onboard;
pub mod router;
pub mod session;
pub mod ui;
pub mod voice;

pub use app::AppState;
pub use config::Config;
pub use error::{IqraError, Result};
