pub mod config;
pub mod dir;
pub mod form;
pub mod logger;
pub mod notification;
pub mod route;
pub mod services;
pub mod session;
pub mod state;
pub mod views;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
