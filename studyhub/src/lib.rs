#![allow(dead_code)]

pub mod config;
pub mod i18n;
pub mod models;
pub mod services;
pub mod shell;

pub use config::Config;
pub use services::AppState;
