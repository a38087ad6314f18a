pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

pub use config::Config;
pub use database::ActivityStore;
pub use error::{ConfigError, SignupError};
