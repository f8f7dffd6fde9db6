//! Browser session management
//!
//! Wraps the Chrome DevTools Protocol runtime behind the primitive set the page
//! layer is written against: navigate, locate with timeout, forced click,
//! clear-and-type, select option, assertion predicates, screenshot.

pub mod config;
pub mod session;

pub use config::LaunchOptions;
pub use session::{Session, join_url};
