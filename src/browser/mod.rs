//! Chrome/Chromium session management and the CDP-backed page adapter

pub mod chrome;
pub mod config;
pub mod session;

pub use chrome::{ChromeElement, ChromePage};
pub use config::{ConnectionOptions, LaunchOptions};
pub use session::BrowserSession;
